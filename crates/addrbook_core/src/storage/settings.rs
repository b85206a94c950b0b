//! Settings file: `{ "language": "en" }`.

use crate::settings::Settings;
use crate::storage::{read_json, write_json, Loaded, StorageResult};
use log::info;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn save(&self, settings: &Settings) -> StorageResult<()> {
        write_json(&self.path, settings)?;
        info!(
            "event=settings_save module=storage status=ok language={}",
            settings.language
        );
        Ok(())
    }

    /// Missing file yields default settings.
    pub fn load(&self) -> StorageResult<Settings> {
        Ok(read_json::<Settings>(&self.path)?.unwrap_or_default())
    }

    pub fn load_or_default(&self) -> Loaded<Settings> {
        Loaded::recover(self.load(), "settings")
    }
}
