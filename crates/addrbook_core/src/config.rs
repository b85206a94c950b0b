//! File locations for one session.

use crate::storage::contacts::DEFAULT_CONTACTS_FILE;
use crate::storage::notes::DEFAULT_NOTES_FILE;
use crate::storage::settings::DEFAULT_SETTINGS_FILE;
use std::path::{Path, PathBuf};

/// Where a session reads and writes its three files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub contacts_path: PathBuf,
    pub notes_path: PathBuf,
    pub settings_path: PathBuf,
}

impl SessionConfig {
    /// Default file names inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            contacts_path: data_dir.join(DEFAULT_CONTACTS_FILE),
            notes_path: data_dir.join(DEFAULT_NOTES_FILE),
            settings_path: data_dir.join(DEFAULT_SETTINGS_FILE),
        }
    }
}

impl Default for SessionConfig {
    /// Default file names in the working directory.
    fn default() -> Self {
        Self::in_dir(".")
    }
}

#[cfg(test)]
mod tests {
    use super::SessionConfig;
    use std::path::Path;

    #[test]
    fn in_dir_uses_default_file_names() {
        let config = SessionConfig::in_dir("/data");
        assert_eq!(config.contacts_path, Path::new("/data/addressbook.json"));
        assert_eq!(config.notes_path, Path::new("/data/notes.json"));
        assert_eq!(config.settings_path, Path::new("/data/settings.json"));
    }
}
