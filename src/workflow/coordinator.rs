//! Workflow coordinator.
//!
//! The coordinator is the only component that moves a manuscript between
//! stages. It is a strict linear machine: a completed Review stage is
//! replaced by a fresh Editing stage, a completed Editing stage by a fresh
//! Approval stage, and a completed Approval stage publishes the manuscript.
//! No branching, no skipping, no re-entry.

use super::journal::{TransitionJournal, TransitionRecord};
use super::phase::Phase;
use super::stage::{Stage, StageKind};
use crate::manuscript::{Manuscript, Status};
use chrono::Utc;

/// Result of a single advance attempt.
///
/// Every variant is a normal control-flow outcome; none is an error. The
/// shell turns these into messages and retries where appropriate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The manuscript moved to the next phase.
    Advanced { from: Phase, to: Phase },
    /// The current stage has not completed; nothing changed.
    Incomplete { stage: StageKind },
    /// No stage has been attached yet; nothing changed.
    Unstarted,
    /// The manuscript is already published; nothing changed.
    AlreadyPublished,
}

impl AdvanceOutcome {
    /// Whether this outcome applied a transition.
    pub fn advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// Decides stage-to-stage transitions based on completion.
///
/// # Example
///
/// ```rust
/// use galleypress::manuscript::{Manuscript, SerialNumber, Status};
/// use galleypress::workflow::{Coordinator, Stage};
///
/// let mut coordinator = Coordinator::new();
/// let mut manuscript = Manuscript::new("Title", "Genre", "Author", SerialNumber::new(1));
/// manuscript.set_stage(Stage::review(1));
///
/// manuscript.stage_mut().unwrap().add_approval();
/// coordinator.advance(&mut manuscript);
/// manuscript.stage_mut().unwrap().approve();
/// coordinator.advance(&mut manuscript);
/// manuscript.stage_mut().unwrap().approve();
/// coordinator.advance(&mut manuscript);
///
/// assert_eq!(manuscript.status(), Status::Published);
/// assert_eq!(coordinator.journal().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Coordinator {
    journal: TransitionJournal,
}

impl Coordinator {
    /// Create a coordinator with an empty journal.
    pub fn new() -> Self {
        Self {
            journal: TransitionJournal::new(),
        }
    }

    /// Advance the manuscript past its current stage if that stage is
    /// complete.
    ///
    /// On an incomplete stage, a stage-less manuscript, or an already
    /// published one, this reports the situation and leaves the manuscript
    /// untouched. An applied transition is appended to the journal.
    pub fn advance(&mut self, manuscript: &mut Manuscript) -> AdvanceOutcome {
        if manuscript.status() == Status::Published {
            return AdvanceOutcome::AlreadyPublished;
        }

        let (kind, complete) = match manuscript.stage() {
            None => return AdvanceOutcome::Unstarted,
            Some(stage) => (stage.kind(), stage.is_complete()),
        };

        if !complete {
            return AdvanceOutcome::Incomplete { stage: kind };
        }

        let from = manuscript.phase();
        match kind {
            StageKind::Review => manuscript.set_stage(Stage::editing()),
            StageKind::Editing => manuscript.set_stage(Stage::approval()),
            // The completed Approval stage stays attached; Published has no
            // stage of its own.
            StageKind::Approval => manuscript.update_status(Status::Published),
        }
        let to = manuscript.phase();

        self.journal = self.journal.record(TransitionRecord {
            serial: manuscript.serial(),
            from,
            to,
            at: Utc::now(),
        });

        AdvanceOutcome::Advanced { from, to }
    }

    /// Journal of every transition this coordinator has applied.
    pub fn journal(&self) -> &TransitionJournal {
        &self.journal
    }
}
