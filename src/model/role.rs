use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Authorization capability tag attached to a user.
///
/// The set is closed: a role either is one of these variants or does not exist. The core
/// only carries roles around; deciding what a role permits is up to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Every member of the enumeration.
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// The token used in configuration and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token that names no [`Role`].
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == token)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
