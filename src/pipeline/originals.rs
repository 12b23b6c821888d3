use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::MatteError;

/// Name of the backup directory created next to the sprites.
pub const ORIGINALS_DIR: &str = "_originals";

/// What [`OriginalsStore::prepare`] did before processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preparation {
    /// First run: the backup directory was created and this many files copied.
    BackedUp(usize),
    /// Later run: this many files were restored from their backups.
    Restored(usize),
}

/// Pristine copies of the sprites, so reprocessing always starts from the
/// original pixels rather than from an already matted file.
#[derive(Debug, Clone)]
pub struct OriginalsStore {
    backup_dir: PathBuf,
}

impl OriginalsStore {
    /// Store rooted at `<sprites_dir>/_originals`.
    pub fn new(sprites_dir: &Path) -> Self {
        Self {
            backup_dir: sprites_dir.join(ORIGINALS_DIR),
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Backs up `files` when no backup exists yet, otherwise restores every
    /// file in `files` that has a backup. Restoring is idempotent.
    ///
    /// # Errors
    ///
    /// * `MatteError::Io` - creating the directory or copying a file failed
    pub fn prepare(&self, files: &[PathBuf]) -> Result<Preparation, MatteError> {
        if self.backup_dir.exists() {
            self.restore(files).map(Preparation::Restored)
        } else {
            fs::create_dir_all(&self.backup_dir)
                .map_err(|source| MatteError::io(&self.backup_dir, source))?;
            self.back_up(files).map(Preparation::BackedUp)
        }
    }

    fn back_up(&self, files: &[PathBuf]) -> Result<usize, MatteError> {
        let mut copied = 0;
        for file in files {
            let Some(backup) = self.backup_path(file) else {
                continue;
            };
            if backup.exists() {
                continue;
            }
            fs::copy(file, &backup).map_err(|source| MatteError::io(file, source))?;
            copied += 1;
        }
        info!(copied, dir = %self.backup_dir.display(), "backed up originals");
        Ok(copied)
    }

    fn restore(&self, files: &[PathBuf]) -> Result<usize, MatteError> {
        let mut restored = 0;
        for file in files {
            let Some(backup) = self.backup_path(file) else {
                continue;
            };
            if !backup.exists() {
                debug!(file = %file.display(), "no backup to restore");
                continue;
            }
            fs::copy(&backup, file).map_err(|source| MatteError::io(&backup, source))?;
            restored += 1;
        }
        info!(restored, "restored originals before reprocessing");
        Ok(restored)
    }

    fn backup_path(&self, file: &Path) -> Option<PathBuf> {
        file.file_name().map(|name| self.backup_dir.join(name))
    }
}
