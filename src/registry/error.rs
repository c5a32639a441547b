//! Registry lookup errors.

use crate::manuscript::SerialNumber;
use thiserror::Error;

/// Errors that can occur when querying the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no manuscript registered with serial number {0}")]
    UnknownSerial(SerialNumber),
}
