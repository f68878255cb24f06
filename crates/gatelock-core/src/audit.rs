//! Attempt log types for tracking login attempts
//!
//! Records each evaluated attempt for audit purposes. The guard itself
//! never writes here; the host pushes a record per outcome, stamping
//! the time itself so the core stays clock-free.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::outcome::Outcome;

/// One entry in the attempt log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Position of this attempt in the session, starting at 0
    pub sequence: u32,

    /// Unix timestamp of the attempt
    pub timestamp: u64,

    /// What the guard decided
    pub outcome: Outcome,
}

impl AttemptRecord {
    /// Create a new record
    pub fn new(sequence: u32, timestamp: u64, outcome: Outcome) -> Self {
        Self {
            sequence,
            timestamp,
            outcome,
        }
    }
}

/// Bounded in-memory collection of attempt records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttemptLog {
    /// All records, oldest first
    pub records: Vec<AttemptRecord>,
}

impl AttemptLog {
    /// Maximum number of records retained
    pub const MAX_ENTRIES: usize = 4096;

    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: AttemptRecord) -> Result<(), Error> {
        if self.records.len() >= Self::MAX_ENTRIES {
            return Err(Error::AuditLogFull);
        }
        self.records.push(record);
        Ok(())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the most recent record
    pub fn last(&self) -> Option<&AttemptRecord> {
        self.records.last()
    }

    /// Count of records that were evaluated failures
    pub fn failure_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failure { .. }))
            .count()
    }

    /// Validate log integrity
    ///
    /// Sequence numbers must be strictly increasing; a repeated or
    /// out-of-order sequence means records were replayed or dropped.
    pub fn validate(&self) -> Result<(), Error> {
        let mut last_sequence: Option<u32> = None;

        for record in &self.records {
            if let Some(prev) = last_sequence {
                if record.sequence <= prev {
                    return Err(Error::AuditLogAnomaly(format!(
                        "Non-monotonic sequence: {} after {}",
                        record.sequence, prev
                    )));
                }
            }
            last_sequence = Some(record.sequence);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_query() {
        let mut log = AttemptLog::new();
        assert!(log.is_empty());

        log.push(AttemptRecord::new(0, 1000, Outcome::Failure { remaining: 2 }))
            .unwrap();
        log.push(AttemptRecord::new(1, 1005, Outcome::Success))
            .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.failure_count(), 1);
        assert_eq!(log.last().unwrap().outcome, Outcome::Success);
    }

    #[test]
    fn test_validate_detects_replayed_sequence() {
        let mut log = AttemptLog::new();
        log.push(AttemptRecord::new(3, 1000, Outcome::Success))
            .unwrap();
        log.push(AttemptRecord::new(3, 1001, Outcome::Locked))
            .unwrap();

        assert!(matches!(log.validate(), Err(Error::AuditLogAnomaly(_))));
    }

    #[test]
    fn test_validate_accepts_ordered_log() {
        let mut log = AttemptLog::new();
        for i in 0..5 {
            log.push(AttemptRecord::new(i, 1000 + i as u64, Outcome::Locked))
                .unwrap();
        }
        assert!(log.validate().is_ok());
    }

    #[test]
    fn test_cap_enforced() {
        let mut log = AttemptLog::new();
        for i in 0..AttemptLog::MAX_ENTRIES {
            log.push(AttemptRecord::new(i as u32, 0, Outcome::Locked))
                .unwrap();
        }
        assert!(matches!(
            log.push(AttemptRecord::new(u32::MAX, 0, Outcome::Locked)),
            Err(Error::AuditLogFull)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut log = AttemptLog::new();
        log.push(AttemptRecord::new(0, 1700000000, Outcome::Failure { remaining: 9 }))
            .unwrap();

        let json = serde_json::to_string(&log).unwrap();
        let back: AttemptLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.records, log.records);
    }
}
