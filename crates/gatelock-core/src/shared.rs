//! Thread-safe guard handle

use std::sync::{Arc, Mutex};

use crate::guard::{GuardState, LoginGuard};
use crate::outcome::Outcome;

/// Cloneable handle to a guard shared between callers
///
/// The check-then-increment sequence inside [`LoginGuard::attempt`] must
/// be a critical section when several callers authenticate against the
/// same account, otherwise two concurrent failing attempts could both
/// pass the "not yet locked" check and overshoot the ceiling. Each
/// method here takes the lock for the whole operation.
#[derive(Debug, Clone)]
pub struct SharedLoginGuard {
    inner: Arc<Mutex<LoginGuard>>,
}

impl SharedLoginGuard {
    /// Wrap a guard for shared use
    pub fn new(guard: LoginGuard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(guard)),
        }
    }

    /// Evaluate one candidate password atomically
    pub fn attempt(&self, candidate: Option<&str>) -> Outcome {
        self.lock().attempt(candidate)
    }

    /// Failed attempts evaluated so far
    pub fn failed_attempts(&self) -> u32 {
        self.lock().failed_attempts()
    }

    /// Attempts left before the guard locks
    pub fn remaining_attempts(&self) -> u32 {
        self.lock().remaining_attempts()
    }

    /// Whether the most recent evaluated attempt matched
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    /// Current coarse state
    pub fn state(&self) -> GuardState {
        self.lock().state()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LoginGuard> {
        // A poisoned lock means a panic mid-attempt; the guard mutates
        // nothing before its single write sequence, so the state is
        // still consistent and the session may continue.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
