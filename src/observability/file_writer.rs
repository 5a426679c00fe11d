//! Size-rotated append-only line writer for trace output.
//!
//! When the active file grows past its size limit it is renamed to
//! `<stem>.<timestamp>.<ext>` and a fresh file is started. Only the newest
//! backups are kept. Timestamps come from `chrono` and are formatted so that
//! backup names sort chronologically.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit of the active file (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups retained.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

const BACKUP_TIMESTAMP: &str = "%Y%m%dT%H%M%S%.3f";

/// Thread-safe rotating line writer.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer with the default limits. Nothing is opened until the
    /// first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening, or writing the file, or
    /// an error if the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.is_full() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let backup = self.backup_path(&Local::now().format(BACKUP_TIMESTAMP).to_string());
        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }
        self.prune_backups()
    }

    fn backup_path(&self, stamp: &str) -> PathBuf {
        let stem = self.stem();
        let name = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{stem}.{stamp}.{ext}"),
            None => format!("{stem}.{stamp}"),
        };
        self.path.with_file_name(name)
    }

    fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("trace")
    }

    /// Rotated files belonging to this writer, oldest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!("{}.", self.stem());

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| *path != self.path)
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in &backups[..excess] {
            if let Err(e) = fs::remove_file(old) {
                tracing::trace!(path = %old.display(), error = %e, "failed to remove old trace backup");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        let name = backups[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("trace.") && name.ends_with(".json"), "{name}");
    }

    #[test]
    fn test_prunes_old_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path, 1, 2);

        for stamp in ["20260101T000000.000", "20260102T000000.000", "20260103T000000.000"] {
            fs::write(writer.backup_path(stamp), "old\n").unwrap();
        }
        writer.prune_backups().unwrap();

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].to_str().unwrap().contains("20260102"));
    }
}
