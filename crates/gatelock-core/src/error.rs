//! Error types for the Gatelock library

use thiserror::Error;

/// Result type alias for guard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or instrumenting a guard
///
/// Note that [`crate::LoginGuard::attempt`] itself never fails: wrong
/// credentials and lockout are ordinary [`crate::Outcome`] values, not
/// errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The attempt ceiling must be at least 1
    #[error("Invalid max attempts: {0} (must be >= 1)")]
    InvalidMaxAttempts(u32),

    /// The audit log has reached its entry cap
    #[error("Audit log full")]
    AuditLogFull,

    /// The audit log failed an integrity check
    #[error("Audit log anomaly: {0}")]
    AuditLogAnomaly(String),
}
