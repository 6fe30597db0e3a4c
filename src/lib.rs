//! # Jambox Identity
//!
//! The identity record of the jambox service: who a user is, what they may do, and the two
//! narrowed views of that record handed across system boundaries.
//!
//! ## Module Tour
//!
//! ### 1. The Record ([`model`])
//! Plain data with no I/O: [`Role`](model::Role), [`User`](model::User), the inbound
//! [`UserDto`](model::UserDto) and the identity-only
//! [`ReducedUserDto`](model::ReducedUserDto). A `User` built from a `ReducedUserDto` is a
//! reference stub: id and username only, credential and roles not loaded.
//!
//! ### 2. The Store ([`user_actor`])
//! A [`ResourceActor<User>`](resource_actor::ResourceActor) running in its own Tokio task. It
//! assigns ids, keeps usernames unique and checks [`UserRules`](user_actor::UserRules) on
//! every write.
//!
//! ### 3. The Interface ([`clients`])
//! [`UserClient`](clients::UserClient) wraps the generic `ResourceClient` with registration,
//! lookups by username, role changes and projection.
//!
//! ### 4. The Orchestrator ([`lifecycle`]) and [`config`]
//! [`IdentitySystem`](lifecycle::IdentitySystem) spawns the store from an
//! [`IdentityConfig`](config::IdentityConfig) and shuts it down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! JAMBOX_IDENTITY_CONFIG=identity.toml cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
