use std::fs;
use std::path::{Path, PathBuf};

use boardtint_core::{Result, TintError};

use crate::schema::Settings;

/// JSON-file-backed settings record.
///
/// Loading merges the stored record over [`Settings::default`] by key
/// (stored values win); saving writes the full record immediately.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings.  Returns `Settings::default()` if the file doesn't
    /// exist; first run is not an error.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::warn!(
                "Settings file not found at '{}'; using defaults.",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| TintError::Settings(format!("cannot read '{}': {e}", self.path.display())))?;

        serde_json::from_str(&raw).map_err(|e| TintError::Settings(format!("JSON parse error: {e}")))
    }

    /// Persist the record as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)
            .map_err(|e| TintError::Settings(format!("JSON encode error: {e}")))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
