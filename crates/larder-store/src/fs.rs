//! Filesystem entry store.
//!
//! Provides [`FsStore`], which keeps one file per entry directly under a
//! root directory. The file name is the entry identifier and the file
//! modification time is the entry's last-write timestamp.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::id::EntryId;
use crate::store::{EntryStore, StoreError};

/// Filesystem-backed [`EntryStore`] rooted at a directory.
///
/// Directory layout:
/// ```text
/// {root}/
/// +-- 6258a5e0eb77…9a56ba    # one file per entry, named by EntryId
/// +-- ba7816bf8f01…0015ad
/// ```
///
/// The root directory is not touched on construction; it is created on the
/// first write. Reads against a missing root behave as if no entry exists.
///
/// Writes land in a sibling temp file and are renamed into place, so a
/// reader of the final path never observes a torn payload and no tail of a
/// longer previous payload survives an overwrite. Writers racing on one
/// identifier share the temp path; the last rename wins.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the entries live under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, id: &EntryId) -> PathBuf {
        self.root.join(id.as_str())
    }
}

fn io_error(path: &Path, source: io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Map an I/O failure on an entry path: a missing file is the store-level
/// miss, everything else keeps its path context.
fn entry_error(id: &EntryId, path: &Path, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(id.clone())
    } else {
        io_error(path, source)
    }
}

impl EntryStore for FsStore {
    fn exists(&self, id: &EntryId) -> bool {
        self.entry_path(id).is_file()
    }

    fn last_write(&self, id: &EntryId) -> Result<SystemTime, StoreError> {
        let path = self.entry_path(id);
        let metadata = fs::metadata(&path).map_err(|e| entry_error(id, &path, e))?;
        metadata.modified().map_err(|e| io_error(&path, e))
    }

    fn read(&self, id: &EntryId) -> Result<Vec<u8>, StoreError> {
        let path = self.entry_path(id);
        fs::read(&path).map_err(|e| entry_error(id, &path, e))
    }

    fn write(&self, id: &EntryId, payload: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| io_error(&self.root, e))?;
        let path = self.entry_path(id);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, payload).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))
    }

    fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        let path = self.entry_path(id);
        fs::remove_file(&path).map_err(|e| entry_error(id, &path, e))
    }

    fn list(&self) -> Result<Vec<EntryId>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.root, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.root, e))?;
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            // Names that don't parse as identifiers (temp files, strays)
            // are not entries.
            let name = entry.file_name();
            if let Some(id) = name.to_str().and_then(EntryId::from_hex) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
