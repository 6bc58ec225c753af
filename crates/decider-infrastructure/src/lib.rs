//! File-backed storage for Decider.
//!
//! Provides the on-device [`KeyValueStorage`] implementation the UI layer
//! plugs into [`decider_core::DecisionStore`] at startup.
//!
//! [`KeyValueStorage`]: decider_core::storage::KeyValueStorage

pub mod file_storage;
pub mod paths;

#[cfg(test)]
mod store_file_round_trip;

pub use crate::file_storage::FileKeyValueStorage;
pub use crate::paths::DeciderPaths;
