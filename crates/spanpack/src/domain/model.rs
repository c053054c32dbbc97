//! Domain models for items and range selections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single item in the input order. An item has no identity beyond its
/// position in the sequence; the core assumes both fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub volume: f64,
    pub weight: f64,
}

impl Item {
    /// Create an item from its raw measurements.
    pub fn new(volume: f64, weight: f64) -> Self {
        Self { volume, weight }
    }

    /// Weight per unit volume for a single item. `None` when the item has no
    /// volume, since the ratio is undefined there.
    pub fn efficiency(&self) -> Option<f64> {
        (self.volume > 0.0).then(|| self.weight / self.volume)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.volume, self.weight)
    }
}

impl FromStr for Item {
    type Err = ItemParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (volume, weight) = value
            .split_once(':')
            .ok_or_else(|| ItemParseError::MissingSeparator(value.to_string()))?;
        let volume: f64 = volume
            .trim()
            .parse()
            .map_err(|_| ItemParseError::InvalidNumber(volume.trim().to_string()))?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| ItemParseError::InvalidNumber(weight.trim().to_string()))?;
        if volume < 0.0 || weight < 0.0 {
            return Err(ItemParseError::Negative(value.to_string()));
        }
        Ok(Item { volume, weight })
    }
}

/// Error returned when parsing a `VOLUME:WEIGHT` item spec fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ItemParseError {
    #[error("expected VOLUME:WEIGHT, got '{0}'")]
    MissingSeparator(String),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("item '{0}' has a negative measurement")]
    Negative(String),
}

/// The winning contiguous slice of a solve run.
///
/// A selection is a snapshot: it records the inclusive index range, the items
/// of that slice, and their exact sums at the time of computation. It becomes
/// meaningless once the source sequence or the capacity changes, so holders
/// must discard it on any such change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub start_index: usize,
    pub end_index: usize,
    pub items: Vec<Item>,
    pub total_volume: f64,
    pub total_weight: f64,
}

impl Selection {
    /// Number of items in the selected slice. Always at least one.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Whether the given sequence index falls inside the selected range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    /// Percentage of the capacity occupied by the selection. `None` when the
    /// capacity is not positive, since the ratio is undefined there.
    pub fn capacity_used(&self, capacity: f64) -> Option<f64> {
        (capacity > 0.0).then(|| self.total_volume / capacity * 100.0)
    }

    /// Weight per unit volume across the selection. `None` when the total
    /// volume is zero (a slice of zero-volume items is valid).
    pub fn efficiency(&self) -> Option<f64> {
        (self.total_volume > 0.0).then(|| self.total_weight / self.total_volume)
    }
}
