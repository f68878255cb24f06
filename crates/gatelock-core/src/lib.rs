//! Gatelock Core - Attempt-counting login guard with terminal lockout
//!
//! This crate provides the [`LoginGuard`] state machine: a single-account
//! password verifier that permanently refuses further checks once a
//! configured number of failed attempts has been reached.

pub mod audit;
pub mod credential;
pub mod error;
pub mod guard;
pub mod outcome;
pub mod shared;

pub use audit::{AttemptLog, AttemptRecord};
pub use credential::Credential;
pub use error::{Error, Result};
pub use guard::{GuardState, LoginGuard};
pub use outcome::Outcome;
pub use shared::SharedLoginGuard;

/// Default maximum number of failed attempts before lockout
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default sentinel value a host loop treats as "stop"
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";
