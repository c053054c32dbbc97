//! Domain-specific errors.

use thiserror::Error;

/// Validation failures at the input seam of the inventory.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("item volume must be greater than zero, got {0}")]
    NonPositiveVolume(f64),
    #[error("item weight must be greater than zero, got {0}")]
    NonPositiveWeight(f64),
    #[error("item index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
