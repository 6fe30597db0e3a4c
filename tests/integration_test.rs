use jambox_identity::clients::{ActorClient, UserClient};
use jambox_identity::config::IdentityConfig;
use jambox_identity::lifecycle::IdentitySystem;
use jambox_identity::model::{ReducedUserDto, Role, User, UserDto, UserId, UserUpdate};
use jambox_identity::user_actor::{self, UserError, UserRules};
use resource_actor::ResourceActor;
use std::collections::BTreeSet;

/// Full end-to-end test through the running store.
#[tokio::test]
async fn test_full_identity_system_integration() {
    let system = IdentitySystem::new(&IdentityConfig::default());
    let users = &system.user_client;

    let alice_id = users
        .register(UserDto::new("alice", "p@ss", [Role::User]))
        .await
        .expect("Failed to register alice");
    assert_eq!(alice_id, UserId(1));

    let alice = users
        .get(alice_id)
        .await
        .expect("Failed to get user")
        .expect("User not found");
    assert_eq!(alice.id, Some(alice_id));
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.password.as_deref(), Some("p@ss"));
    assert_eq!(alice.roles, Some(BTreeSet::from([Role::User])));
    assert!(!alice.is_reference());

    // Outbound projection carries identity only
    let reduced = users.reduced(alice_id).await.expect("Failed to reduce");
    assert_eq!(reduced, ReducedUserDto::new(alice_id, "alice"));
    let json = serde_json::to_value(&reduced).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "username": "alice"}));

    // A stub rebuilt from the projection resolves back to the full record
    let resolved = users
        .resolve(reduced)
        .await
        .expect("Failed to resolve")
        .expect("Reference did not resolve");
    assert_eq!(resolved, alice);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_ids_start_at_configured_value() {
    let (actor, users) = user_actor::with_first_id(8, 7);
    tokio::spawn(actor.run(UserRules::default()));

    let id = users
        .register(UserDto::new("carol", "pw", [Role::Admin]))
        .await
        .unwrap();
    assert_eq!(id, UserId(7));

    let next = users
        .register(UserDto::new("dave", "pw", []))
        .await
        .unwrap();
    assert_eq!(next, UserId(8));

    let stored = users.get(next).await.unwrap().unwrap();
    assert_eq!(stored.to_reduced(), Some(ReducedUserDto::new(UserId(8), "dave")));
    // An empty requested role set is still a loaded set
    assert_eq!(stored.roles, Some(BTreeSet::new()));
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    let first = users
        .register(UserDto::new("alice", "one", [Role::User]))
        .await
        .unwrap();
    let second = users
        .register(UserDto::new("alice", "two", [Role::Admin]))
        .await;
    assert_eq!(second, Err(UserError::AlreadyExists("alice".to_string())));

    // The original record is untouched and still the only one
    let all = users.list_users().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(first));
    assert_eq!(all[0].password.as_deref(), Some("one"));
    assert_eq!(all[0].roles, Some(BTreeSet::from([Role::User])));
}

#[tokio::test]
async fn test_rename_onto_taken_username_rejected() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    users.register(UserDto::new("alice", "pw", [])).await.unwrap();
    let bob = users.register(UserDto::new("bob", "pw", [])).await.unwrap();

    let rename = UserUpdate {
        username: Some("alice".to_string()),
        ..UserUpdate::default()
    };
    assert_eq!(
        users.update_user(bob, rename).await,
        Err(UserError::AlreadyExists("alice".to_string()))
    );
    assert_eq!(users.get(bob).await.unwrap().unwrap().username, "bob");

    let rename = UserUpdate {
        username: Some("robert".to_string()),
        ..UserUpdate::default()
    };
    let renamed = users.update_user(bob, rename).await.unwrap();
    assert_eq!(renamed.username, "robert");
    assert!(users.find_by_username("bob").await.unwrap().is_none());
    assert_eq!(
        users.find_by_username("robert").await.unwrap().unwrap().id,
        Some(bob)
    );
}

#[tokio::test]
async fn test_delete_frees_username() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    let first = users.register(UserDto::new("alice", "pw", [])).await.unwrap();
    users.delete(first).await.unwrap();
    assert!(users.get(first).await.unwrap().is_none());

    let second = users.register(UserDto::new("alice", "pw", [])).await.unwrap();
    assert_ne!(first, second);

    assert_eq!(
        users.delete(first).await,
        Err(UserError::NotFound(first.to_string()))
    );
}

#[tokio::test]
async fn test_username_rules_enforced() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules {
        max_username_len: 5,
    }));

    assert!(matches!(
        users.register(UserDto::new("", "pw", [])).await,
        Err(UserError::ValidationError(_))
    ));
    assert!(matches!(
        users.register(UserDto::new("charlotte", "pw", [])).await,
        Err(UserError::ValidationError(_))
    ));
    assert!(users.register(UserDto::new("chloe", "pw", [])).await.is_ok());
}

#[tokio::test]
async fn test_role_changes_persist() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    let id = users
        .register(UserDto::new("alice", "pw", [Role::User]))
        .await
        .unwrap();

    assert!(users.grant_role(id, Role::Admin).await.unwrap());
    assert!(!users.grant_role(id, Role::Admin).await.unwrap());
    assert!(users.revoke_role(id, Role::User).await.unwrap());
    assert!(!users.revoke_role(id, Role::User).await.unwrap());

    let stored = users.get(id).await.unwrap().unwrap();
    assert_eq!(stored.roles, Some(BTreeSet::from([Role::Admin])));

    assert_eq!(
        users.grant_role(UserId(99), Role::User).await,
        Err(UserError::NotFound("user_99".to_string()))
    );
}

#[tokio::test]
async fn test_resolve_reference_outcomes() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    let id = users.register(UserDto::new("alice", "pw", [])).await.unwrap();

    let unknown = ReducedUserDto::new(UserId(42), "nobody");
    assert_eq!(users.resolve(unknown).await, Ok(None));

    let stale = ReducedUserDto::new(id, "alicia");
    assert_eq!(
        users.resolve(stale).await,
        Err(UserError::StaleReference {
            id,
            expected: "alicia".to_string(),
            found: "alice".to_string(),
        })
    );

    // A stub is never a valid thing to store
    let stub = User::from_reduced(ReducedUserDto::new(id, "alice"));
    assert!(stub.is_reference());
}

#[tokio::test]
async fn test_last_id_then_allocation_error() {
    let mut config = IdentityConfig::default();
    config.store.first_id = u32::MAX;
    let system = IdentitySystem::new(&config);
    let users = &system.user_client;

    let last = users
        .register(UserDto::new("alice", "pw", [Role::User]))
        .await
        .unwrap();
    assert_eq!(last, UserId(u32::MAX));

    assert!(matches!(
        users.register(UserDto::new("bob", "pw", [])).await,
        Err(UserError::IdAllocation(_))
    ));

    // the store is still alive and alice untouched
    let alice = users.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(alice.id, Some(last));
    assert_eq!(users.list_users().await.unwrap().len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_repeating_allocator_never_overwrites_a_user() {
    let (actor, generic_client) = ResourceActor::<User>::with_allocator(8, || UserId(1));
    let users = UserClient::new(generic_client);
    tokio::spawn(actor.run(UserRules::default()));

    let alice = users.register(UserDto::new("alice", "pw", [])).await;
    let bob = users.register(UserDto::new("bob", "pw", [])).await;
    assert_eq!(alice, Ok(UserId(1)));
    assert!(matches!(bob, Err(UserError::IdAllocation(_))));

    assert_eq!(
        users.find_by_username("alice").await.unwrap().unwrap().id,
        Some(UserId(1))
    );
    assert!(users.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_zero_buffer_config_still_runs() {
    let mut config = IdentityConfig::default();
    config.store.buffer_size = 0;
    let system = IdentitySystem::new(&config);

    let id = system
        .user_client
        .register(UserDto::new("alice", "pw", []))
        .await
        .unwrap();
    assert_eq!(id, UserId(1));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_reduced_leaves_record_untouched() {
    let (actor, users) = user_actor::new(8);
    tokio::spawn(actor.run(UserRules::default()));

    let id = users
        .register(UserDto::new("alice", "pw", [Role::User]))
        .await
        .unwrap();
    let before = users.get(id).await.unwrap().unwrap();

    users.reduced(id).await.unwrap();
    users.reduced(id).await.unwrap();

    assert_eq!(users.get(id).await.unwrap().unwrap(), before);
    assert_eq!(
        users.find_by_username("alice").await.unwrap().unwrap().id,
        Some(id)
    );
}

#[tokio::test]
async fn test_shutdown_closes_store() {
    let system = IdentitySystem::new(&IdentityConfig::default());
    let leftover = system.user_client.clone();
    drop(leftover);
    system.shutdown().await.expect("Shutdown failed");
}
