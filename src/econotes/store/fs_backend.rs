use super::backend::StorageBackend;
use crate::error::{EcoError, Result};
use log::trace;
use std::fs;
use std::path::{Path, PathBuf};

/// Reject keys that would not name a plain file inside the data directory.
pub fn validate_storage_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
        return Err(EcoError::Store(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

/// File-based backend: slot `<key>` lives at `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(EcoError::Io)?;
        }
        Ok(())
    }

    fn checked_key<'a>(&self, key: &'a str) -> Result<&'a str> {
        validate_storage_key(key)?;
        Ok(key)
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(self.checked_key(key)?);
        if !path.exists() {
            return Ok(None);
        }
        trace!("Reading slot {}", path.display());
        let content = fs::read_to_string(path).map_err(EcoError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let key = self.checked_key(key)?;
        self.ensure_dir(&self.root)?;

        let target = self.slot_path(key);
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));

        trace!("Writing slot {}", target.display());
        fs::write(&tmp, value).map_err(EcoError::Io)?;
        fs::rename(&tmp, &target).map_err(EcoError::Io)?;
        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}
