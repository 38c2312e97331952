//! Directory-backed store for uploaded papers.
//!
//! Two lifecycles exist. Staged uploads live in a temporary file that is
//! removed on drop, so every exit path — error paths included — cleans
//! up. Stored papers are persisted under `<paper_id>.pdf` so later
//! summarize/related-work requests can resolve them by id.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::utils::{sanitize_paper_id, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Paper not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist upload: {0}")]
    Persist(String),
}

/// A staged upload: deleted from disk when dropped, unless persisted.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// The upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open (creating if needed) the upload directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write bytes to a staged temporary file inside the upload
    /// directory. The file disappears when the returned guard drops.
    pub fn stage(&self, bytes: &[u8]) -> Result<StagedUpload, StoreError> {
        let mut file = NamedTempFile::with_suffix_in(".pdf", &self.dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(StagedUpload { file })
    }

    /// Store bytes permanently under `<paper_id>.pdf`, replacing any
    /// previous upload with the same id. Staging through a temp file
    /// keeps half-written PDFs out of the store.
    pub fn store(&self, paper_id: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let paper_id = sanitize_paper_id(paper_id)?;
        let dest = self.path_for(&paper_id);

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        file.persist(&dest)
            .map_err(|e| StoreError::Persist(e.to_string()))?;

        Ok(dest)
    }

    /// Reserve a stored path for a paper id without writing anything,
    /// for callers that download directly into the store.
    pub fn path_for_id(&self, paper_id: &str) -> Result<PathBuf, StoreError> {
        let paper_id = sanitize_paper_id(paper_id)?;
        Ok(self.path_for(&paper_id))
    }

    /// Resolve a previously stored paper, or fail with `NotFound`.
    pub fn resolve(&self, paper_id: &str) -> Result<PathBuf, StoreError> {
        let paper_id = sanitize_paper_id(paper_id)?;
        let path = self.path_for(&paper_id);
        if !path.is_file() {
            return Err(StoreError::NotFound(paper_id));
        }
        Ok(path)
    }

    /// Remove a stored paper if present. Missing files are not an error.
    pub fn remove(&self, paper_id: &str) -> Result<(), StoreError> {
        let paper_id = sanitize_paper_id(paper_id)?;
        let path = self.path_for(&paper_id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn path_for(&self, paper_id: &str) -> PathBuf {
        self.dir.join(format!("{}.pdf", paper_id))
    }
}
