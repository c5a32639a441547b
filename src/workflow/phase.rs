//! Lifecycle phases of a manuscript.
//!
//! A phase is the externally visible position of a manuscript in the
//! publishing pipeline. Phases are derived from a manuscript's stored status
//! and current stage; they are never stored directly, so they cannot drift
//! out of sync with the workflow state.

use serde::{Deserialize, Serialize};

/// Position of a manuscript in the publishing pipeline.
///
/// The pipeline is strictly linear:
/// `Draft -> InReview -> InEditing -> InApproval -> Published`.
/// `Published` is terminal.
///
/// # Example
///
/// ```rust
/// use galleypress::workflow::Phase;
///
/// assert_eq!(Phase::InReview.name(), "In Review");
/// assert!(!Phase::InReview.is_terminal());
/// assert!(Phase::Published.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Created but not yet entered into the pipeline.
    Draft,
    /// Collecting reviewer approvals.
    InReview,
    /// Awaiting editing sign-off.
    InEditing,
    /// Awaiting final approval.
    InApproval,
    /// Terminal: the manuscript has been published.
    Published,
}

impl Phase {
    /// Get the phase's name for display and reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::InReview => "In Review",
            Self::InEditing => "In Editing",
            Self::InApproval => "In Approval",
            Self::Published => "Published",
        }
    }

    /// Check if this is the terminal phase.
    ///
    /// No transition leaves `Published`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
