//! Presenter seam for displaying attempt outcomes

use gatelock_core::Outcome;

/// Receives session events and renders them for a human
///
/// The guard itself emits no output; everything a user sees goes
/// through this trait. `Failure` and `Locked` must be presented
/// distinctly: the first invites a retry, the second is terminal.
pub trait Presenter {
    /// Called once at session start with the configured exit keyword
    fn announce(&mut self, exit_keyword: &str);

    /// Called before each read
    fn prompt(&mut self);

    /// Called with the outcome of each attempt
    fn show(&mut self, outcome: &Outcome);

    /// Called once when the session ends
    fn finished(&mut self);
}

/// Presenter that writes to stdout
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn announce(&mut self, exit_keyword: &str) {
        println!("To exit, type: {}", exit_keyword);
    }

    fn prompt(&mut self) {
        println!("Enter password:");
    }

    fn show(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => println!("✓ {}", outcome),
            Outcome::Failure { .. } => println!("✗ {}", outcome),
            Outcome::Locked => println!("✗ {} - no further attempts accepted", outcome),
        }
    }

    fn finished(&mut self) {
        println!("Session ended");
    }
}
