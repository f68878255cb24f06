//! Attempt outcome type

use serde::{Deserialize, Serialize};

/// Result of a single [`crate::LoginGuard::attempt`] call
///
/// Authentication failure is ordinary control flow, so all three cases
/// are values rather than errors. Hosts must not conflate `Failure`
/// (retryable) with `Locked` (terminal) when presenting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The candidate matched the reference credential
    Success,

    /// The candidate did not match
    Failure {
        /// Attempts left before the guard locks
        remaining: u32,
    },

    /// The guard was already locked; the candidate was not compared
    Locked,
}

impl Outcome {
    /// Check if the attempt authenticated
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Check if another attempt may still be evaluated
    ///
    /// A `Failure` with `remaining == 0` consumed the last slot; the
    /// guard is locked from here on.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Outcome::Failure { remaining } if *remaining > 0)
    }

    /// Check if the guard refused to evaluate the candidate
    pub fn is_locked(&self) -> bool {
        matches!(self, Outcome::Locked)
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Success => write!(f, "login successful"),
            Outcome::Failure { remaining } => {
                write!(f, "wrong password ({} attempts remaining)", remaining)
            }
            Outcome::Locked => write!(f, "account locked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Success.is_locked());
        assert!(Outcome::Failure { remaining: 3 }.is_retryable());
        assert!(!Outcome::Failure { remaining: 0 }.is_retryable());
        assert!(Outcome::Locked.is_locked());
        assert!(!Outcome::Locked.is_retryable());
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = serde_json::to_string(&Outcome::Failure { remaining: 2 }).unwrap();
        assert_eq!(json, r#"{"outcome":"failure","remaining":2}"#);

        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Failure { remaining: 2 });
    }

    #[test]
    fn test_display_distinguishes_failure_from_locked() {
        let failure = format!("{}", Outcome::Failure { remaining: 1 });
        let locked = format!("{}", Outcome::Locked);
        assert_ne!(failure, locked);
        assert!(failure.contains("1 attempts remaining"));
    }
}
