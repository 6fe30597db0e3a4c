use jambox_identity::clients::{ActorClient, UserClient};
use jambox_identity::model::{ReducedUserDto, Role, User, UserDto, UserId};
use jambox_identity::user_actor::{UserActionResult, UserError};
use resource_actor::mock::MockClient;
use resource_actor::FrameworkError;

fn stored_user(id: u32, username: &str) -> User {
    let mut user = User::from_dto(UserDto::new(username, "pw", [Role::User]));
    user.id = Some(UserId(id));
    user
}

/// Client logic in isolation: answers come from the mock, no actor is running.
#[tokio::test]
async fn test_register_maps_conflict_to_already_exists() {
    let mut mock = MockClient::<User>::new();
    mock.expect_create().return_ok(UserId(1));
    mock.expect_create()
        .return_err(FrameworkError::Conflict("alice".to_string()));

    let client = UserClient::new(mock.client());
    let dto = UserDto::new("alice", "pw", [Role::User]);
    assert_eq!(client.register(dto.clone()).await, Ok(UserId(1)));
    assert_eq!(
        client.register(dto).await,
        Err(UserError::AlreadyExists("alice".to_string()))
    );
    mock.verify();
}

#[tokio::test]
async fn test_entity_errors_come_back_typed() {
    let mut mock = MockClient::<User>::new();
    mock.expect_create()
        .return_err(FrameworkError::EntityError(Box::new(
            UserError::ValidationError("username must not be empty".to_string()),
        )));

    let client = UserClient::new(mock.client());
    assert_eq!(
        client.register(UserDto::new("", "pw", [])).await,
        Err(UserError::ValidationError(
            "username must not be empty".to_string()
        ))
    );
    mock.verify();
}

#[tokio::test]
async fn test_channel_failures_become_communication_errors() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get(UserId(1))
        .return_err(FrameworkError::ActorClosed);

    let client = UserClient::new(mock.client());
    assert!(matches!(
        client.get(UserId(1)).await,
        Err(UserError::ActorCommunicationError(_))
    ));
    mock.verify();
}

#[tokio::test]
async fn test_role_actions_unwrap_results() {
    let mut mock = MockClient::<User>::new();
    mock.expect_action(UserId(1))
        .return_ok(UserActionResult::GrantRole(true));
    mock.expect_action(UserId(1))
        .return_ok(UserActionResult::RevokeRole(false));
    mock.expect_action(UserId(1))
        .return_ok(UserActionResult::Reduce(ReducedUserDto::new(
            UserId(1),
            "alice",
        )));

    let client = UserClient::new(mock.client());
    assert_eq!(client.grant_role(UserId(1), Role::Admin).await, Ok(true));
    assert_eq!(client.revoke_role(UserId(1), Role::Admin).await, Ok(false));
    assert_eq!(
        client.reduced(UserId(1)).await,
        Ok(ReducedUserDto::new(UserId(1), "alice"))
    );
    mock.verify();
}

#[tokio::test]
async fn test_mismatched_action_result_is_an_error() {
    let mut mock = MockClient::<User>::new();
    mock.expect_action(UserId(1))
        .return_ok(UserActionResult::RevokeRole(true));

    let client = UserClient::new(mock.client());
    assert!(matches!(
        client.grant_role(UserId(1), Role::User).await,
        Err(UserError::ActorCommunicationError(_))
    ));
    mock.verify();
}

#[tokio::test]
async fn test_resolve_checks_username() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get(UserId(3))
        .return_ok(Some(stored_user(3, "alice")));
    mock.expect_get(UserId(3))
        .return_ok(Some(stored_user(3, "bob")));
    mock.expect_get(UserId(4)).return_ok(None);

    let client = UserClient::new(mock.client());
    let reference = ReducedUserDto::new(UserId(3), "alice");

    let resolved = client.resolve(reference.clone()).await.unwrap().unwrap();
    assert_eq!(resolved, stored_user(3, "alice"));

    assert!(matches!(
        client.resolve(reference).await,
        Err(UserError::StaleReference { .. })
    ));
    assert_eq!(
        client
            .resolve(ReducedUserDto::new(UserId(4), "carol"))
            .await,
        Ok(None)
    );
    mock.verify();
}

#[tokio::test]
async fn test_list_users_sorted_by_id() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_ok(vec![
        stored_user(3, "carol"),
        stored_user(1, "alice"),
        stored_user(2, "bob"),
    ]);

    let client = UserClient::new(mock.client());
    let names: Vec<_> = client
        .list_users()
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.username)
        .collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
    mock.verify();
}
