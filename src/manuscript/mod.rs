//! Manuscript records.
//!
//! A manuscript holds its identity, its stored status, and exclusive
//! ownership of at most one workflow stage at a time. Replacing the stage
//! drops the previous one; no stage history is retained here (the
//! coordinator's journal records transitions).

mod serial;

pub use serial::{SerialAllocator, SerialNumber};

use crate::workflow::{Phase, Stage, StageKind};
use serde::{Deserialize, Serialize};

/// Stored status of a manuscript.
///
/// Only the endpoints of the pipeline are stored; the intermediate positions
/// are carried by the current stage and surfaced through
/// [`Manuscript::phase`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    Draft,
    Published,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A manuscript moving through the publishing pipeline.
///
/// `set_stage` and `update_status` are trusted setters: they apply
/// unconditionally, and the ordering rules of the pipeline are enforced
/// entirely by the [`Coordinator`](crate::workflow::Coordinator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manuscript {
    title: String,
    genre: String,
    author: String,
    serial: SerialNumber,
    status: Status,
    stage: Option<Stage>,
}

impl Manuscript {
    /// Create a manuscript in Draft status with no stage attached.
    ///
    /// The serial number comes from a [`SerialAllocator`]; the registry's
    /// `create` does this in one step.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        author: impl Into<String>,
        serial: SerialNumber,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            author: author.into(),
            serial,
            status: Status::Draft,
            stage: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Display name of the manuscript's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    pub fn stage_mut(&mut self) -> Option<&mut Stage> {
        self.stage.as_mut()
    }

    /// Replace the current stage unconditionally, dropping the previous one.
    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = Some(stage);
    }

    /// Set the stored status unconditionally.
    pub fn update_status(&mut self, status: Status) {
        self.status = status;
    }

    /// The manuscript's position in the pipeline, derived from stored status
    /// and the current stage.
    pub fn phase(&self) -> Phase {
        if self.status == Status::Published {
            return Phase::Published;
        }
        match self.stage.as_ref().map(Stage::kind) {
            None => Phase::Draft,
            Some(StageKind::Review) => Phase::InReview,
            Some(StageKind::Editing) => Phase::InEditing,
            Some(StageKind::Approval) => Phase::InApproval,
        }
    }
}
