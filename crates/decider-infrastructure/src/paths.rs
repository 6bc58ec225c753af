//! Path management for Decider's on-device data.
//!
//! All persisted collections live under one data directory:
//!
//! ```text
//! ~/.local/share/decider/          # Data directory (platform equivalent)
//! ├── decision_lists.json          # Encoded list collection
//! └── selection_history.json       # Encoded history collection
//! ```

use std::path::PathBuf;

use decider_core::error::{DeciderError, Result};

/// Unified path management for Decider.
pub struct DeciderPaths;

impl DeciderPaths {
    /// Returns the Decider data directory.
    ///
    /// Uses the platform data directory (e.g. `~/.local/share/decider/` on
    /// Linux, `~/Library/Application Support/decider/` on macOS).
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the data directory
    /// - `Err(DeciderError::Io)`: Could not determine the home directory
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|base| base.join("decider"))
            .ok_or_else(|| DeciderError::io("Cannot find data directory"))
    }
}
