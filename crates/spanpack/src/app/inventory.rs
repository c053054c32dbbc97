//! Driver-owned inventory state.

use tracing::debug;

use crate::app::solver::select_best_range;
use crate::domain::errors::DomainError;
use crate::domain::model::{Item, Selection};

/// Tracks the capacity, the ordered item sequence, and the last computed
/// selection.
///
/// Every mutation of the capacity or the sequence discards the cached
/// selection: a [`Selection`] is a snapshot of the inputs it was computed
/// from and is meaningless once either changes.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    capacity: f64,
    items: Vec<Item>,
    selection: Option<Selection>,
}

impl Inventory {
    /// Create an empty inventory with zero capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently configured capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Access the ordered item sequence.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of tracked items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether any items exist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The selection cached by the last successful [`solve`](Self::solve),
    /// if the inputs have not changed since.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Replace the capacity, discarding any cached selection.
    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
        self.selection = None;
    }

    /// Append an item to the sequence.
    ///
    /// Both measurements must be strictly positive to pass the input seam;
    /// zero-volume items are representable in the core but are not accepted
    /// from user input. A successful append discards any cached selection.
    pub fn add_item(&mut self, volume: f64, weight: f64) -> Result<Item, DomainError> {
        if !(volume > 0.0) {
            return Err(DomainError::NonPositiveVolume(volume));
        }
        if !(weight > 0.0) {
            return Err(DomainError::NonPositiveWeight(weight));
        }
        let item = Item::new(volume, weight);
        self.items.push(item);
        self.selection = None;
        Ok(item)
    }

    /// Remove and return the item at `index`, discarding any cached
    /// selection.
    pub fn remove_item(&mut self, index: usize) -> Result<Item, DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        self.selection = None;
        Ok(item)
    }

    /// Clear items, capacity, and the cached selection in one step.
    pub fn clear(&mut self) {
        self.items.clear();
        self.capacity = 0.0;
        self.selection = None;
    }

    /// Run the range selector over the current state and cache the result.
    pub fn solve(&mut self) -> Option<&Selection> {
        self.selection = select_best_range(self.capacity, &self.items);
        debug!(
            capacity = self.capacity,
            items = self.items.len(),
            found = self.selection.is_some(),
            "solved inventory"
        );
        self.selection.as_ref()
    }
}
