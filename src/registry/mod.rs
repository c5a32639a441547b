//! Manuscript registry and reporting.
//!
//! The registry owns every registered manuscript in registration order and
//! the serial allocator that numbers them. It is the factory for new
//! manuscripts and the read side of the system: reports and summaries are
//! projections that never mutate workflow state.

mod error;
mod report;

pub use error::RegistryError;
pub use report::{StatusReport, Summary};

use crate::manuscript::{Manuscript, SerialAllocator, SerialNumber};

/// Append-only collection of manuscripts plus the serial allocator.
#[derive(Debug, Default)]
pub struct Registry {
    manuscripts: Vec<Manuscript>,
    serials: SerialAllocator,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            manuscripts: Vec::new(),
            serials: SerialAllocator::new(),
        }
    }

    /// Create and register a manuscript, allocating its serial number.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        genre: impl Into<String>,
        author: impl Into<String>,
    ) -> SerialNumber {
        let serial = self.serials.next();
        self.manuscripts
            .push(Manuscript::new(title, genre, author, serial));
        serial
    }

    /// Register a manuscript constructed elsewhere.
    pub fn register(&mut self, manuscript: Manuscript) -> SerialNumber {
        let serial = manuscript.serial();
        self.manuscripts.push(manuscript);
        serial
    }

    /// The allocator, for constructing manuscripts outside the registry.
    pub fn allocator(&self) -> &SerialAllocator {
        &self.serials
    }

    pub fn get(&self, serial: SerialNumber) -> Option<&Manuscript> {
        self.manuscripts.iter().find(|m| m.serial() == serial)
    }

    pub fn get_mut(&mut self, serial: SerialNumber) -> Option<&mut Manuscript> {
        self.manuscripts.iter_mut().find(|m| m.serial() == serial)
    }

    /// Status snapshot of one manuscript.
    pub fn report(&self, serial: SerialNumber) -> Result<StatusReport, RegistryError> {
        self.get(serial)
            .map(StatusReport::of)
            .ok_or(RegistryError::UnknownSerial(serial))
    }

    /// One summary line per manuscript, in registration order.
    pub fn summaries(&self) -> Vec<Summary> {
        self.manuscripts.iter().map(Summary::of).collect()
    }

    pub fn len(&self) -> usize {
        self.manuscripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manuscripts.is_empty()
    }
}
