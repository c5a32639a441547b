//! Transition journal.
//!
//! Append-only record of the phase transitions the coordinator has applied,
//! kept in memory for reporting and diagnostics. The journal is immutable:
//! `record` returns a new journal with the entry added.

use super::phase::Phase;
use crate::manuscript::SerialNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied phase transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Serial number of the manuscript that moved.
    pub serial: SerialNumber,
    /// The phase being transitioned from.
    pub from: Phase,
    /// The phase being transitioned to.
    pub to: Phase,
    /// When the transition was applied.
    pub at: DateTime<Utc>,
}

/// Ordered journal of applied transitions.
///
/// # Example
///
/// ```rust
/// use galleypress::manuscript::SerialNumber;
/// use galleypress::workflow::{Phase, TransitionJournal, TransitionRecord};
/// use chrono::Utc;
///
/// let journal = TransitionJournal::new();
/// let journal = journal.record(TransitionRecord {
///     serial: SerialNumber::new(1),
///     from: Phase::InReview,
///     to: Phase::InEditing,
///     at: Utc::now(),
/// });
///
/// assert_eq!(journal.records().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionJournal {
    records: Vec<TransitionRecord>,
}

impl TransitionJournal {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new journal.
    ///
    /// The existing journal is left unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions, in application order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The path of phases one manuscript has traversed.
    ///
    /// Returns the `from` phase of the manuscript's first recorded
    /// transition followed by each `to` phase, in order. Empty if the
    /// manuscript has no recorded transitions.
    pub fn path_for(&self, serial: SerialNumber) -> Vec<Phase> {
        let mut path = Vec::new();
        for record in self.records.iter().filter(|r| r.serial == serial) {
            if path.is_empty() {
                path.push(record.from);
            }
            path.push(record.to);
        }
        path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: u64, from: Phase, to: Phase) -> TransitionRecord {
        TransitionRecord {
            serial: SerialNumber::new(serial),
            from,
            to,
            at: Utc::now(),
        }
    }

    #[test]
    fn new_journal_is_empty() {
        let journal = TransitionJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.path_for(SerialNumber::new(1)).is_empty());
    }

    #[test]
    fn record_is_immutable() {
        let journal = TransitionJournal::new();
        let updated = journal.record(record(1, Phase::InReview, Phase::InEditing));

        assert_eq!(journal.len(), 0);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn path_follows_recorded_order() {
        let journal = TransitionJournal::new()
            .record(record(1, Phase::InReview, Phase::InEditing))
            .record(record(1, Phase::InEditing, Phase::InApproval))
            .record(record(1, Phase::InApproval, Phase::Published));

        let path = journal.path_for(SerialNumber::new(1));
        assert_eq!(
            path,
            vec![
                Phase::InReview,
                Phase::InEditing,
                Phase::InApproval,
                Phase::Published
            ]
        );
    }

    #[test]
    fn path_is_scoped_to_one_serial() {
        let journal = TransitionJournal::new()
            .record(record(1, Phase::InReview, Phase::InEditing))
            .record(record(2, Phase::InReview, Phase::InEditing))
            .record(record(1, Phase::InEditing, Phase::InApproval));

        assert_eq!(
            journal.path_for(SerialNumber::new(1)),
            vec![Phase::InReview, Phase::InEditing, Phase::InApproval]
        );
        assert_eq!(
            journal.path_for(SerialNumber::new(2)),
            vec![Phase::InReview, Phase::InEditing]
        );
    }

    #[test]
    fn journal_serializes_correctly() {
        let journal = TransitionJournal::new().record(record(1, Phase::InReview, Phase::InEditing));

        let json = serde_json::to_string(&journal).unwrap();
        let deserialized: TransitionJournal = serde_json::from_str(&json).unwrap();
        assert_eq!(journal.records().len(), deserialized.records().len());
    }
}
