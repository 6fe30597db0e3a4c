//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the binary. Log lines use the compact
//! format without module paths; the resource actor tags its events with `entity_type` instead.
//!
//! `RUST_LOG` wins over the configured default level:
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info cargo run
//!
//! # Every request with its id and payload
//! RUST_LOG=debug cargo run
//!
//! # Only the store
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a registration shows up as:
//!
//! ```text
//! DEBUG register: Sending request dto=UserDto { username: "alice", password: "<redacted>", roles: {User} }
//! DEBUG Create entity_type="User" params=UserDto { username: "alice", password: "<redacted>", roles: {User} }
//! INFO Created entity_type="User" id=user_1 size=1
//! ```
//!
//! Passwords are redacted by the `Debug` impls of the model types, so they never reach logs.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `default_level` applies when `RUST_LOG` is unset or invalid.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
