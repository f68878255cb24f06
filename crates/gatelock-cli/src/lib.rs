//! Gatelock CLI - Interactive host loop for the login guard
//!
//! This crate provides the collaborators around [`gatelock_core::LoginGuard`]:
//! a line-oriented session loop, a presenter seam for displaying outcomes,
//! and host configuration.

pub mod config;
pub mod presenter;
pub mod session;

pub use config::{HostConfig, HostError};
pub use presenter::{ConsolePresenter, Presenter};
pub use session::{Session, SessionReport};
