//! Decision list domain model.
//!
//! A decision list is a named, ordered collection of text options the user
//! picks from. Lists are created and mutated exclusively through
//! [`crate::store::DecisionStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, ordered collection of selectable text options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionList {
    /// Unique identifier, immutable after creation.
    pub id: Uuid,
    /// Display title. The store does not validate it; an empty title is the
    /// UI's problem to prevent.
    pub title: String,
    /// Options in insertion order. Duplicates are permitted.
    pub items: Vec<String>,
    /// Creation time, set once and never mutated.
    pub created_at: DateTime<Utc>,
}

impl DecisionList {
    /// Creates a new list with a fresh id, no items, and the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an option, preserving insertion order.
    pub fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes the option at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Returns true when the list has no options to pick from.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
