//! Workflow stages and their completion rules.
//!
//! Each stage of the pipeline tracks its own completion condition. Completion
//! is monotonic: once a stage reports complete, no operation reverts it.
//! Every operation here is total; there are no error conditions in this
//! module.

use serde::{Deserialize, Serialize};

/// Tag identifying a stage variant without its counters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StageKind {
    Review,
    Editing,
    Approval,
}

impl StageKind {
    /// Display name of the stage, as printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Review => "Review Stage",
            Self::Editing => "Editing Stage",
            Self::Approval => "Approval Stage",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One stage of the publishing pipeline.
///
/// Fields are private so completion can only be reached through the variant's
/// own approval operation:
///
/// - `Review` completes once it has collected the required number of
///   approvals via [`Stage::add_approval`].
/// - `Editing` and `Approval` complete through a single, idempotent
///   [`Stage::approve`].
///
/// # Example
///
/// ```rust
/// use galleypress::workflow::Stage;
///
/// let mut stage = Stage::review(2);
/// assert!(!stage.is_complete());
///
/// stage.add_approval();
/// assert!(!stage.is_complete());
///
/// stage.add_approval();
/// assert!(stage.is_complete());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Stage {
    Review { required: u32, approvals: u32 },
    Editing { approved: bool },
    Approval { approved: bool },
}

impl Stage {
    /// Create a fresh, incomplete Review stage.
    ///
    /// `required` is the number of reviewer approvals needed and must be
    /// positive; the console enforces this at the argument boundary.
    pub fn review(required: u32) -> Self {
        Self::Review {
            required,
            approvals: 0,
        }
    }

    /// Create a fresh, incomplete Editing stage.
    pub fn editing() -> Self {
        Self::Editing { approved: false }
    }

    /// Create a fresh, incomplete Approval stage.
    pub fn approval() -> Self {
        Self::Approval { approved: false }
    }

    /// The variant tag of this stage.
    pub fn kind(&self) -> StageKind {
        match self {
            Self::Review { .. } => StageKind::Review,
            Self::Editing { .. } => StageKind::Editing,
            Self::Approval { .. } => StageKind::Approval,
        }
    }

    /// Display name of this stage.
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Current completion flag.
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Review {
                required,
                approvals,
            } => approvals >= required,
            Self::Editing { approved } | Self::Approval { approved } => *approved,
        }
    }

    /// Record one reviewer approval on a Review stage.
    ///
    /// Calls past the required count are permitted and keep counting; the
    /// completion flag stays true. On Editing and Approval stages this is a
    /// silent no-op.
    pub fn add_approval(&mut self) {
        if let Self::Review { approvals, .. } = self {
            *approvals = approvals.saturating_add(1);
        }
    }

    /// Sign off an Editing or Approval stage. Idempotent.
    ///
    /// On a Review stage this is a silent no-op; Review completes only by
    /// collecting approvals.
    pub fn approve(&mut self) {
        match self {
            Self::Editing { approved } | Self::Approval { approved } => *approved = true,
            Self::Review { .. } => {}
        }
    }

    /// Approvals collected so far, for Review stages.
    pub fn approvals(&self) -> Option<u32> {
        match self {
            Self::Review { approvals, .. } => Some(*approvals),
            _ => None,
        }
    }

    /// Approvals required for completion, for Review stages.
    pub fn required_approvals(&self) -> Option<u32> {
        match self {
            Self::Review { required, .. } => Some(*required),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stages_are_incomplete() {
        assert!(!Stage::review(2).is_complete());
        assert!(!Stage::editing().is_complete());
        assert!(!Stage::approval().is_complete());
    }

    #[test]
    fn review_completes_at_required_count() {
        let mut stage = Stage::review(3);

        stage.add_approval();
        stage.add_approval();
        assert!(!stage.is_complete());

        stage.add_approval();
        assert!(stage.is_complete());
    }

    #[test]
    fn review_keeps_counting_after_completion() {
        let mut stage = Stage::review(1);
        stage.add_approval();
        assert!(stage.is_complete());

        stage.add_approval();
        assert!(stage.is_complete());
        assert_eq!(stage.approvals(), Some(2));
    }

    #[test]
    fn approve_is_idempotent() {
        let mut editing = Stage::editing();
        editing.approve();
        editing.approve();
        assert!(editing.is_complete());

        let mut approval = Stage::approval();
        approval.approve();
        approval.approve();
        assert!(approval.is_complete());
    }

    #[test]
    fn approve_does_not_touch_review() {
        let mut stage = Stage::review(2);
        stage.approve();
        assert!(!stage.is_complete());
        assert_eq!(stage.approvals(), Some(0));
    }

    #[test]
    fn add_approval_does_not_touch_editing_or_approval() {
        let mut editing = Stage::editing();
        editing.add_approval();
        assert!(!editing.is_complete());

        let mut approval = Stage::approval();
        approval.add_approval();
        assert!(!approval.is_complete());
    }

    #[test]
    fn kind_and_name_match_variant() {
        assert_eq!(Stage::review(2).kind(), StageKind::Review);
        assert_eq!(Stage::editing().kind(), StageKind::Editing);
        assert_eq!(Stage::approval().kind(), StageKind::Approval);
        assert_eq!(Stage::review(2).name(), "Review Stage");
        assert_eq!(Stage::approval().name(), "Approval Stage");
    }

    #[test]
    fn counter_accessors_are_review_only() {
        let stage = Stage::review(2);
        assert_eq!(stage.required_approvals(), Some(2));
        assert_eq!(stage.approvals(), Some(0));

        assert_eq!(Stage::editing().approvals(), None);
        assert_eq!(Stage::approval().required_approvals(), None);
    }

    #[test]
    fn stage_serializes_correctly() {
        let mut stage = Stage::review(2);
        stage.add_approval();

        let json = serde_json::to_string(&stage).unwrap();
        let deserialized: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(stage, deserialized);
    }
}
