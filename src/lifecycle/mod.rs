//! # Lifecycle
//!
//! Starting and stopping the identity store, and the logging setup the binary installs first.

pub mod identity_system;
pub mod tracing;

pub use identity_system::*;
pub use self::tracing::setup_tracing;
