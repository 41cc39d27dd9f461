pub mod schema;
pub mod store;
pub mod update;
pub mod watcher;

pub use schema::Settings;
pub use store::SettingsStore;
pub use update::SettingsUpdate;
pub use watcher::SettingsWatcher;

use std::path::PathBuf;

/// Return the default settings path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("boardtint").join("settings.json")
}
