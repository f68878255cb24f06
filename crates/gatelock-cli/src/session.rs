//! Interactive session loop
//!
//! The read/attempt/present loop around a guard. The loop is ordinary
//! glue: it owns exit control and timestamps, while every decision
//! about the candidate belongs to the guard.

use std::io::BufRead;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use gatelock_core::{AttemptLog, AttemptRecord, GuardState, LoginGuard};

use crate::presenter::Presenter;

/// Summary of a completed session
#[derive(Debug)]
pub struct SessionReport {
    /// Attempts submitted, including the exit keyword if it was one
    pub attempts: u32,

    /// Guard state when the session ended
    pub final_state: GuardState,

    /// Whether the last evaluated attempt matched
    pub authenticated: bool,

    /// Per-attempt audit trail
    pub log: AttemptLog,
}

/// One interactive run against a single guard
pub struct Session {
    guard: LoginGuard,
    exit_keyword: String,
}

impl Session {
    /// Create a session around a guard
    pub fn new(guard: LoginGuard, exit_keyword: impl Into<String>) -> Self {
        Self {
            guard,
            exit_keyword: exit_keyword.into(),
        }
    }

    /// Run the loop until the exit keyword or end of input
    ///
    /// Each iteration reads one line, submits it to the guard, and hands
    /// the outcome to the presenter. The exit keyword is itself submitted
    /// as a candidate before the loop terminates. End of input means "no
    /// more attempts", not a candidate.
    pub fn run<R: BufRead, P: Presenter>(
        mut self,
        mut reader: R,
        presenter: &mut P,
    ) -> std::io::Result<SessionReport> {
        presenter.announce(&self.exit_keyword);

        let mut log = AttemptLog::new();
        let mut sequence = 0u32;
        let mut buf = String::new();

        loop {
            presenter.prompt();
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                // End of input: no more attempts, not a candidate
                break;
            }
            let input = buf.trim_end_matches(['\r', '\n']);
            let is_exit = input == self.exit_keyword;

            let outcome = self.guard.attempt(Some(input));
            debug!(sequence, ?outcome, "attempt evaluated");

            if let Err(e) = log.push(AttemptRecord::new(sequence, unix_now(), outcome)) {
                warn!("attempt not recorded: {}", e);
            }
            sequence = sequence.saturating_add(1);

            presenter.show(&outcome);

            if is_exit {
                break;
            }
        }

        presenter.finished();

        Ok(SessionReport {
            attempts: sequence,
            final_state: self.guard.state(),
            authenticated: self.guard.is_authenticated(),
            log,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
