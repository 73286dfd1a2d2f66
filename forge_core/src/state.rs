//! Progress persistence with file locking.
//!
//! Progress is stored as a single versioned JSON blob. Loading is
//! best-effort: a missing, unreadable, corrupt, or version-mismatched file
//! falls back to the default progress with a logged warning. Saving is
//! atomic (temp file, sync, rename) with exclusive locking.

use crate::{Error, Progress, Result, Schedule};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk schema version; bump on incompatible shape changes
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned envelope around the persisted progress
#[derive(Debug, Serialize, Deserialize)]
struct ProgressFile {
    version: u32,
    progress: Progress,
}

impl Progress {
    /// Load progress from a file with shared locking
    ///
    /// Returns default progress if the file doesn't exist.
    /// If the file is corrupted or carries an unknown schema version,
    /// logs a warning and returns default progress.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No progress file found, using default progress");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open progress file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                return Ok(Self::default());
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock progress file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read progress file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<ProgressFile>(&contents) {
            Ok(stored) if stored.version == SCHEMA_VERSION => {
                tracing::debug!("Loaded progress from {:?}", path);
                Ok(stored.progress)
            }
            Ok(stored) => {
                tracing::warn!(
                    "Progress file {:?} has schema version {} (expected {}). Using defaults.",
                    path,
                    stored.version,
                    SCHEMA_VERSION
                );
                Ok(Self::default())
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse progress file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Load progress and verify its structural invariants
    ///
    /// A file that parses but violates the progress invariants (e.g. more
    /// completed exercises recorded than a day schedules) is treated the
    /// same as a corrupt one: logs a warning and returns default progress.
    pub fn load_checked(path: &Path, schedule: &Schedule) -> Result<Self> {
        let progress = Self::load(path)?;

        let errors = progress.validate_against(schedule);
        if errors.is_empty() {
            return Ok(progress);
        }

        tracing::warn!(
            "Progress file {:?} violates invariants: {}. Using defaults.",
            path,
            errors.join("; ")
        );
        Ok(Self::default())
    }

    /// Save progress to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "progress path missing parent")
        })?)?;

        // Acquire exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let stored = ProgressFile {
                version: SCHEMA_VERSION,
                progress: self.clone(),
            };
            let contents = serde_json::to_string(&stored)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace old progress file
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved progress to {:?}", path);
        Ok(())
    }

    /// Load progress, modify it, and save it back atomically
    ///
    /// Convenience method for the load-modify-save pattern the CLI uses on
    /// every mutation.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Progress) -> Result<()>,
    {
        let mut progress = Self::load(path)?;
        f(&mut progress)?;
        progress.save(path)?;
        Ok(progress)
    }
}
