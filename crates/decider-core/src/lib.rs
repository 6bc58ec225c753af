//! Core domain and store for Decider.
//!
//! Decider keeps named lists of text options, records which option past
//! random picks landed on, and persists both collections through a pluggable
//! key-value byte storage backend. This crate is an embedded library: it has
//! no UI, no network, and no runtime of its own. The UI layer constructs one
//! [`store::DecisionStore`] at startup, calls its operations from a single
//! logical thread, and polls [`store::DecisionStore::revision`] to refresh.

pub mod codec;
pub mod error;
pub mod history;
pub mod list;
pub mod selection;
pub mod storage;
pub mod store;

// Re-export common error type
pub use error::DeciderError;

pub use history::SelectionRecord;
pub use list::DecisionList;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::DecisionStore;
