//! Actors in the publishing workflow.
//!
//! Each role carries a display name and a single entry point, [`Role::act`],
//! that dispatches on the manuscript's current stage. Actions never fail:
//! a role acting on a stage it has no authority over is silently ignored
//! and reported as such.

use crate::manuscript::Manuscript;
use crate::workflow::StageKind;
use serde::{Deserialize, Serialize};

/// The kind of actor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RoleKind {
    Author,
    Reviewer,
    Editor,
}

/// What a role action did, for the shell's messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The author acknowledged submission; no state changed.
    Submitted,
    /// A reviewer approval was recorded on the Review stage.
    ApprovalAdded { complete: bool },
    /// The editor signed off the given stage.
    Approved { stage: StageKind },
    /// The role has no authority over the current stage; nothing changed.
    Ignored,
}

/// An actor entitled to specific operations on specific stage kinds.
///
/// - Authors only acknowledge submission; they never mutate workflow state.
/// - Reviewers add approvals to Review stages.
/// - Editors sign off both Editing and Approval stages. This is a fixed
///   business rule, not a configuration point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    name: String,
    kind: RoleKind,
}

impl Role {
    pub fn author(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoleKind::Author,
        }
    }

    pub fn reviewer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoleKind::Reviewer,
        }
    }

    pub fn editor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoleKind::Editor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    /// Perform this role's action on the manuscript's current stage.
    pub fn act(&self, manuscript: &mut Manuscript) -> ActionOutcome {
        match self.kind {
            RoleKind::Author => ActionOutcome::Submitted,
            RoleKind::Reviewer => match manuscript.stage_mut() {
                Some(stage) if stage.kind() == StageKind::Review => {
                    stage.add_approval();
                    ActionOutcome::ApprovalAdded {
                        complete: stage.is_complete(),
                    }
                }
                _ => ActionOutcome::Ignored,
            },
            RoleKind::Editor => match manuscript.stage_mut() {
                Some(stage)
                    if matches!(stage.kind(), StageKind::Editing | StageKind::Approval) =>
                {
                    let kind = stage.kind();
                    stage.approve();
                    ActionOutcome::Approved { stage: kind }
                }
                _ => ActionOutcome::Ignored,
            },
        }
    }
}
