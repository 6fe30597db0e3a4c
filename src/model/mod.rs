//! The identity record and its boundary projections.
//!
//! Pure data: no I/O, no validation, no shared state. Persistence, id assignment and
//! username uniqueness belong to the store in [`crate::user_actor`].

pub mod dto;
pub mod role;
pub mod user;

pub use dto::*;
pub use role::*;
pub use user::*;
