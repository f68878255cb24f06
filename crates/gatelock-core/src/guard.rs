//! Login guard state machine

use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::DEFAULT_MAX_ATTEMPTS;

/// Coarse state of a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardState {
    /// Attempts are still evaluated
    Unlocked,

    /// Terminal: no future attempt is compared or counted
    Locked,
}

/// Attempt-counting password guard for one account
///
/// Holds the reference credential, counts failed attempts, and refuses
/// all further evaluation once `failed_attempts` reaches `max_attempts`.
/// The locked state is absorbing; no reset is provided.
///
/// Invariants:
/// - `failed_attempts <= max_attempts` at all times
/// - `reference` and `max_attempts` never change after construction
#[derive(Debug)]
pub struct LoginGuard {
    /// Reference credential candidates are compared against
    reference: Credential,

    /// Failed attempts so far, monotonically non-decreasing
    failed_attempts: u32,

    /// Ceiling at which the guard locks, >= 1
    max_attempts: u32,

    /// Whether the most recent evaluated attempt matched
    ///
    /// Reflects the last attempt that was actually compared. A `Locked`
    /// outcome leaves it stale on purpose, mirroring the behavior of
    /// the system this guard is compatible with.
    authenticated: bool,
}

impl LoginGuard {
    /// Create a guard with the default attempt ceiling
    pub fn new(reference: impl Into<Credential>) -> Self {
        Self {
            reference: reference.into(),
            failed_attempts: 0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            authenticated: false,
        }
    }

    /// Create a guard with a custom attempt ceiling
    pub fn with_max_attempts(reference: impl Into<Credential>, max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::InvalidMaxAttempts(max_attempts));
        }
        Ok(Self {
            reference: reference.into(),
            failed_attempts: 0,
            max_attempts,
            authenticated: false,
        })
    }

    /// Evaluate one candidate password
    ///
    /// The lock check happens strictly before the comparison and before
    /// any increment, so the counter can reach but never exceed
    /// `max_attempts`, and the attempt that brings it to the ceiling is
    /// still evaluated normally. Only subsequent attempts see `Locked`.
    ///
    /// This never fails; see [`Outcome`] for the three cases.
    pub fn attempt(&mut self, candidate: Option<&str>) -> Outcome {
        if self.failed_attempts >= self.max_attempts {
            // Absorbing state: no comparison, no state change
            return Outcome::Locked;
        }

        if self.reference.matches(candidate) {
            self.authenticated = true;
            Outcome::Success
        } else {
            self.authenticated = false;
            self.failed_attempts += 1;
            Outcome::Failure {
                remaining: self.max_attempts - self.failed_attempts,
            }
        }
    }

    /// Number of failed attempts evaluated so far
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// The configured attempt ceiling
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Attempts left before the guard locks
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts - self.failed_attempts
    }

    /// Whether the most recent evaluated attempt matched
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Current coarse state
    pub fn state(&self) -> GuardState {
        if self.failed_attempts >= self.max_attempts {
            GuardState::Locked
        } else {
            GuardState::Unlocked
        }
    }
}
