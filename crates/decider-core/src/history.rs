//! Selection history domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An immutable record of one past random selection.
///
/// `list_title` is a snapshot of the owning list's title at selection time,
/// not a live reference: renaming the list later must not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Title of the list the selection was made from, copied at that moment.
    pub list_title: String,
    /// The option that was chosen.
    pub selected_item: String,
    /// Creation time, the sole sort key for history ordering.
    pub recorded_at: DateTime<Utc>,
}

impl SelectionRecord {
    /// Creates a record with a fresh id and the current time.
    pub fn new(list_title: impl Into<String>, selected_item: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            list_title: list_title.into(),
            selected_item: selected_item.into(),
            recorded_at: Utc::now(),
        }
    }
}
