//! Boundary projections of [`User`](crate::model::User).

use crate::model::{Role, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inbound projection: everything needed to create a user.
///
/// `username` and `password` are taken as already validated and are copied verbatim; no
/// trimming and no hashing happens on the way in.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl UserDto {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: roles.into_iter().collect(),
        }
    }
}

impl fmt::Debug for UserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDto")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}

/// Outbound, identity-only projection: id and username, never the credential or roles.
///
/// Safe to hand to consumers that must not see secrets or authorization data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducedUserDto {
    pub id: UserId,
    pub username: String,
}

impl ReducedUserDto {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_dto_json_shape() {
        let dto: UserDto = serde_json::from_value(json!({
            "username": "alice",
            "password": "p@ss",
            "roles": ["USER"]
        }))
        .unwrap();
        assert_eq!(dto, UserDto::new("alice", "p@ss", [Role::User]));
    }

    #[test]
    fn test_user_dto_roles_default_to_empty() {
        let dto: UserDto =
            serde_json::from_value(json!({ "username": "bob", "password": "x" })).unwrap();
        assert!(dto.roles.is_empty());
    }

    #[test]
    fn test_user_dto_rejects_unknown_role() {
        let result = serde_json::from_value::<UserDto>(json!({
            "username": "bob",
            "password": "x",
            "roles": ["SUPERUSER"]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_dto_debug_hides_password() {
        let dto = UserDto::new("alice", "hunter2", [Role::Admin]);
        let printed = format!("{dto:?}");
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_reduced_dto_json_shape() {
        let reduced = ReducedUserDto::new(UserId(7), "alice");
        assert_eq!(
            serde_json::to_value(&reduced).unwrap(),
            json!({ "id": 7, "username": "alice" })
        );
        let back: ReducedUserDto =
            serde_json::from_str(r#"{"id":7,"username":"alice"}"#).unwrap();
        assert_eq!(back, reduced);
    }

    #[test]
    fn test_reduced_dto_ignores_credential_fields() {
        // extra fields sent by a careless producer never make it into the projection
        let reduced: ReducedUserDto = serde_json::from_value(json!({
            "id": 3,
            "username": "carol",
            "password": "leaked"
        }))
        .unwrap();
        assert_eq!(reduced, ReducedUserDto::new(UserId(3), "carol"));
    }
}
