//! [`ActorEntity`] implementation for [`User`].
//!
//! This is where the store-side rules live: the record is built from a [`UserDto`], the
//! username is checked against [`UserRules`] on every create and update, and the username is
//! the unique key the actor indexes by.

use super::actions::{UserAction, UserActionResult};
use super::error::UserError;
use super::rules::UserRules;
use crate::model::{User, UserDto, UserId, UserUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

impl User {
    /// Checks the invariants a persisted record must satisfy.
    fn validate(&self, rules: &UserRules) -> Result<(), UserError> {
        rules
            .check_username(&self.username)
            .map_err(UserError::ValidationError)?;
        if self.roles.is_none() {
            return Err(UserError::ValidationError(
                "role set must be loaded before the user is stored".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserDto;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Context = UserRules;
    type Error = UserError;

    /// Builds the full record from the DTO and stamps the newly assigned id on it.
    fn from_create_params(id: UserId, params: UserDto) -> Result<Self, Self::Error> {
        let mut user = User::from_dto(params);
        user.id = Some(id);
        Ok(user)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.username.clone())
    }

    fn is_read_only(action: &UserAction) -> bool {
        matches!(action, UserAction::Reduce)
    }

    async fn on_create(&mut self, rules: &UserRules) -> Result<(), Self::Error> {
        self.validate(rules)
    }

    /// Applies every field present in the update, then re-validates the result.
    async fn on_update(&mut self, update: UserUpdate, rules: &UserRules) -> Result<(), Self::Error> {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = Some(password);
        }
        if let Some(band_name) = update.band_name {
            self.band_name = Some(band_name);
        }
        if let Some(roles) = update.roles {
            self.roles = Some(roles);
        }
        self.validate(rules)
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _rules: &UserRules,
    ) -> Result<UserActionResult, Self::Error> {
        match action {
            UserAction::GrantRole(role) => {
                let changed = self.roles.get_or_insert_with(Default::default).insert(role);
                Ok(UserActionResult::GrantRole(changed))
            }
            UserAction::RevokeRole(role) => {
                let changed = self
                    .roles
                    .as_mut()
                    .map(|roles| roles.remove(&role))
                    .unwrap_or(false);
                Ok(UserActionResult::RevokeRole(changed))
            }
            UserAction::Reduce => self
                .to_reduced()
                .map(UserActionResult::Reduce)
                .ok_or_else(|| UserError::NotFound(self.username.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReducedUserDto, Role};
    use std::collections::BTreeSet;

    fn stored(username: &str) -> User {
        User::from_create_params(UserId(1), UserDto::new(username, "pw", [Role::User])).unwrap()
    }

    #[test]
    fn test_from_create_params_assigns_id() {
        let user = stored("alice");
        assert_eq!(user.id, Some(UserId(1)));
        assert_eq!(user.band_name, None);
        assert_eq!(user.unique_key().as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_on_create_rejects_bad_usernames() {
        let rules = UserRules::default();
        assert!(stored("alice").on_create(&rules).await.is_ok());
        assert!(matches!(
            stored("").on_create(&rules).await,
            Err(UserError::ValidationError(_))
        ));
        assert!(matches!(
            stored(&"a".repeat(51)).on_create(&rules).await,
            Err(UserError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_on_create_rejects_unloaded_roles() {
        let mut stub = User::from_reduced(ReducedUserDto::new(UserId(1), "ghost"));
        assert!(stub.on_create(&UserRules::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_on_update_applies_present_fields() {
        let rules = UserRules::default();
        let mut user = stored("alice");
        let update = UserUpdate {
            band_name: Some("Alice & the Absurd".into()),
            roles: Some(BTreeSet::from([Role::Admin, Role::User])),
            ..UserUpdate::default()
        };
        user.on_update(update, &rules).await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.password.as_deref(), Some("pw"));
        assert_eq!(user.band_name.as_deref(), Some("Alice & the Absurd"));
        assert_eq!(user.roles.as_ref().map(BTreeSet::len), Some(2));
    }

    #[tokio::test]
    async fn test_on_update_validates_new_username() {
        let mut user = stored("alice");
        let update = UserUpdate {
            username: Some(String::new()),
            ..UserUpdate::default()
        };
        assert!(user.on_update(update, &UserRules::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_role_actions_report_changes() {
        let rules = UserRules::default();
        let mut user = stored("alice");

        let granted = user
            .handle_action(UserAction::GrantRole(Role::Admin), &rules)
            .await
            .unwrap();
        assert_eq!(granted, UserActionResult::GrantRole(true));
        let again = user
            .handle_action(UserAction::GrantRole(Role::Admin), &rules)
            .await
            .unwrap();
        assert_eq!(again, UserActionResult::GrantRole(false));

        let revoked = user
            .handle_action(UserAction::RevokeRole(Role::User), &rules)
            .await
            .unwrap();
        assert_eq!(revoked, UserActionResult::RevokeRole(true));
        assert_eq!(user.roles, Some(BTreeSet::from([Role::Admin])));
    }

    #[test]
    fn test_only_reduce_is_read_only() {
        assert!(User::is_read_only(&UserAction::Reduce));
        assert!(!User::is_read_only(&UserAction::GrantRole(Role::Admin)));
        assert!(!User::is_read_only(&UserAction::RevokeRole(Role::User)));
    }

    #[tokio::test]
    async fn test_reduce_action() {
        let mut user = stored("alice");
        let reduced = user
            .handle_action(UserAction::Reduce, &UserRules::default())
            .await
            .unwrap();
        assert_eq!(
            reduced,
            UserActionResult::Reduce(ReducedUserDto::new(UserId(1), "alice"))
        );
    }
}
