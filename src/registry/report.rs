//! Read-side projections of manuscript state.

use crate::manuscript::{Manuscript, SerialNumber, Status};
use crate::workflow::Phase;
use serde::Serialize;

/// Full status snapshot of a single manuscript.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusReport {
    pub title: String,
    pub serial: SerialNumber,
    pub status: Status,
    pub phase: Phase,
    /// Display name of the current stage, if one is attached.
    pub stage: Option<&'static str>,
}

impl StatusReport {
    pub(crate) fn of(manuscript: &Manuscript) -> Self {
        Self {
            title: manuscript.title().to_string(),
            serial: manuscript.serial(),
            status: manuscript.status(),
            phase: manuscript.phase(),
            stage: manuscript.stage().map(|s| s.name()),
        }
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Report for manuscript: {}", self.title)?;
        writeln!(f, "Serial Number: {}", self.serial)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Current Stage: {}", self.stage.unwrap_or("None"))
    }
}

/// One line of the all-manuscripts listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub serial: SerialNumber,
    pub status: Status,
}

impl Summary {
    pub(crate) fn of(manuscript: &Manuscript) -> Self {
        Self {
            title: manuscript.title().to_string(),
            serial: manuscript.serial(),
            status: manuscript.status(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Serial Number: {}, Status: {}",
            self.title, self.serial, self.status
        )
    }
}
