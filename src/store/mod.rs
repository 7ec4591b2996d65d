//! Persistent store module
//!
//! Maps one JSON document onto one backing file with whole-document load/save.
//! `transact` wraps a single load -> operate -> save-if-changed cycle.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DaysError, Result};

/// A JSON document backed by a single file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: File,
}

impl FileStore {
    /// Open (or create) the backing file, seeding it with `default_content` when empty
    pub fn open(path: &Path, default_content: &str) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| storage_error(path, "open", e))?;

        let metadata = file.metadata().map_err(|e| storage_error(path, "stat", e))?;

        if metadata.len() == 0 {
            debug!(path = %path.display(), "seeding empty store");
            file.write_all(default_content.as_bytes())
                .and_then(|_| file.seek(SeekFrom::Start(0)))
                .map_err(|e| storage_error(path, "seed", e))?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the whole file
    pub fn load<T: DeserializeOwned>(&mut self) -> Result<T> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| storage_error(&self.path, "read", e))?;

        let document = serde_json::from_reader(BufReader::new(&self.file)).map_err(|e| {
            DaysError::Storage(format!("Cannot decode '{}': {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), "loaded store");
        Ok(document)
    }

    /// Replace the whole file with `document`.
    ///
    /// The new content is written to a sibling temp file and renamed over the
    /// target, so a shorter document never leaves stale bytes behind.
    pub fn save<T: Serialize>(&mut self, document: &T) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| storage_error(&self.path, "write", e))?;
        serde_json::to_writer_pretty(&mut tmp, document)?;
        tmp.write_all(b"\n")
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| storage_error(&self.path, "write", e))?;

        self.file = tmp
            .persist(&self.path)
            .map_err(|e| storage_error(&self.path, "replace", e.error))?;

        debug!(path = %self.path.display(), "saved store");
        Ok(())
    }

    /// Release the backing file
    pub fn close(self) {
        debug!(path = %self.path.display(), "closed store");
    }
}

fn storage_error(path: &Path, action: &str, err: std::io::Error) -> DaysError {
    DaysError::Storage(format!("Cannot {} '{}': {}", action, path.display(), err))
}

/// Run one unit of work against the document stored at `path`.
///
/// The document is saved only when `op` succeeds and leaves it different from
/// what was loaded. On error nothing is written.
pub fn transact<T, R, F>(path: &Path, default_content: &str, op: F) -> Result<R>
where
    T: Serialize + DeserializeOwned + PartialEq + Clone,
    F: FnOnce(&mut T) -> Result<R>,
{
    let mut store = FileStore::open(path, default_content)?;
    let mut document: T = store.load()?;
    let snapshot = document.clone();

    let result = op(&mut document)?;

    if document != snapshot {
        store.save(&document)?;
    } else {
        debug!(path = %store.path().display(), "document unchanged, skipping save");
    }

    store.close();
    Ok(result)
}
