use crate::model::{ReducedUserDto, Role, UserDto};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

/// Type-safe identifier for Users, assigned by the store on first persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A user account: the identity record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](resource_actor::ResourceActor).
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for the create payload
/// ([`UserDto`]), the update payload ([`UserUpdate`]) and the custom actions.
///
/// # Loaded vs. not loaded
/// `password` and `roles` are `None` when they were not loaded, which is the case for a
/// reference stub built by [`User::from_reduced`]. `None` roles never means "has no roles";
/// a user without roles has `Some` of an empty set. Every record handed out by the store has
/// its roles loaded.
#[derive(Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<UserId>,
    pub username: String,
    pub password: Option<String>,
    pub band_name: Option<String>,
    pub roles: Option<BTreeSet<Role>>,
}

impl User {
    /// Creates an unpersisted user with a credential and an empty, loaded role set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: Some(password.into()),
            band_name: None,
            roles: Some(BTreeSet::new()),
        }
    }

    /// Full construction from the inbound projection.
    ///
    /// `username`, `password` and `roles` are copied verbatim. `id` stays unset until the
    /// store persists the record; `band_name` stays unset.
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: None,
            username: dto.username,
            password: Some(dto.password),
            band_name: None,
            roles: Some(dto.roles),
        }
    }

    /// Partial construction from the identity-only projection.
    ///
    /// The result is a reference stub: only `id` and `username` are set. Its credential and
    /// roles are *not loaded*, so it must not be used to answer credential or authorization
    /// questions. [`UserClient::resolve`](crate::clients::UserClient::resolve) trades a stub
    /// for the full stored record.
    pub fn from_reduced(dto: ReducedUserDto) -> Self {
        Self {
            id: Some(dto.id),
            username: dto.username,
            ..Self::default()
        }
    }

    /// Narrows the record to its identity-only projection.
    ///
    /// `None` until the record has an id.
    pub fn to_reduced(&self) -> Option<ReducedUserDto> {
        self.id.map(|id| ReducedUserDto::new(id, self.username.clone()))
    }

    /// True for a record carrying neither a credential nor a loaded role set.
    pub fn is_reference(&self) -> bool {
        self.password.is_none() && self.roles.is_none()
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self::from_dto(dto)
    }
}

impl From<ReducedUserDto> for User {
    fn from(dto: ReducedUserDto) -> Self {
        Self::from_reduced(dto)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("band_name", &self.band_name)
            .field("roles", &self.roles)
            .finish()
    }
}

/// Payload for updating an existing user. `None` fields are left as they are.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub band_name: Option<String>,
    pub roles: Option<BTreeSet<Role>>,
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("band_name", &self.band_name)
            .field("roles", &self.roles)
            .finish()
    }
}
