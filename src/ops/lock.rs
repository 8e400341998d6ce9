//! Single-writer serialization across processes.
//!
//! Every mutating command holds an exclusive advisory lock on a file in the
//! data directory for its whole duration. Readers never take it.

use crate::constants::LOCK_FILE_NAME;
use crate::errors::LockError;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Guard for the write lock; released on drop.
#[derive(Debug)]
pub struct WriteLock {
    file: File,
    path: PathBuf,
}

impl WriteLock {
    /// Takes the write lock in `data_dir` without waiting.
    ///
    /// # Errors
    ///
    /// Returns `LockError::Busy` if another process holds the lock.
    pub fn acquire(data_dir: &Path) -> Result<Self, LockError> {
        let path = data_dir.join(LOCK_FILE_NAME);
        let failed = |source: io::Error| LockError::AcquisitionFailed {
            path: data_dir.join(LOCK_FILE_NAME),
            source,
        };

        fs::create_dir_all(data_dir).map_err(failed)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(failed)?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!("Acquired write lock {:?}", path);
                Ok(WriteLock { file, path })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(LockError::Busy { path })
            }
            Err(e) => Err(failed(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WriteLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            debug!("Failed to release write lock {:?}: {}", self.path, e);
        }
    }
}
