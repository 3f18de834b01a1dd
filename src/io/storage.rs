//! Local persistence of the whole application state under one key.

use std::path::{Path, PathBuf};

use super::{file, DataError};
use crate::model::AppData;

/// Storage key; the state lives in `<key>.json` inside the storage directory.
pub const STORAGE_KEY: &str = "ganttAppData";

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage in the per-user data directory.
    pub fn new() -> Self {
        let dir = directories::ProjectDirs::from("", "", "ReleaseGantt")
            .map(|dirs| dirs.data_dir().to_path_buf())
            // Fallback
            .unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(dir)
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state. A missing entry is the empty default; an
    /// unreadable one is logged and returned as an error so the caller can
    /// keep a copy before anything overwrites it.
    pub fn load(&self) -> Result<AppData, DataError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppData::default()),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read stored data");
                return Err(e.into());
            }
        };
        let data = file::deserialize(&json).inspect_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to load stored data");
        })?;
        tracing::debug!(
            path = %self.path.display(),
            projects = data.projects.len(),
            releases = data.releases.len(),
            "loaded stored data"
        );
        Ok(data)
    }

    /// Where [`Storage::keep_backup`] copies an unreadable entry.
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Copy the current entry to [`Storage::backup_path`], replacing any older
    /// backup.
    pub fn keep_backup(&self) -> Result<PathBuf, DataError> {
        let backup = self.backup_path();
        std::fs::copy(&self.path, &backup)?;
        tracing::warn!(backup = %backup.display(), "kept a copy of unreadable stored data");
        Ok(backup)
    }

    /// Write the full state, replacing whatever was stored.
    pub fn save(&self, data: &AppData) -> Result<(), DataError> {
        self.try_save(data).inspect_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save data");
        })
    }

    fn try_save(&self, data: &AppData) -> Result<(), DataError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = file::serialize(data)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the stored entry. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), DataError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "cleared stored data");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to clear stored data");
                Err(e.into())
            }
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
