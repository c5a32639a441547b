//! Serial number allocation.
//!
//! Serial numbers identify manuscripts for the lifetime of the process. They
//! are allocated by an explicit allocator object rather than a hidden static,
//! and allocation is atomic so the counter stays correct even if manuscript
//! construction ever moves off a single thread.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique, immutable identifier assigned to a manuscript at creation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(u64);

impl SerialNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Strictly increasing serial number source, starting at 1.
#[derive(Debug)]
pub struct SerialAllocator {
    next: AtomicU64,
}

impl SerialAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next serial number.
    ///
    /// Takes `&self`: the counter is atomic, so a shared allocator hands out
    /// distinct serials without external locking.
    pub fn next(&self) -> SerialNumber {
        SerialNumber(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SerialAllocator {
    fn default() -> Self {
        Self::new()
    }
}
