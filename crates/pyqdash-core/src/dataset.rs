//! Dataset resource: reads the chapter catalog from disk.
//!
//! The on-disk document is a top-level JSON array of chapter records (never a
//! subject-keyed map), UTF-8. `load_chapters` re-reads on every call;
//! `DatasetCache` keeps the parsed catalog and re-reads only when the file's
//! mtime changes, so a replaced dataset is picked up on the next request.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::types::Chapter;

/// One blocking read + parse of the dataset file.
pub fn load_chapters(path: &Path) -> Result<Vec<Chapter>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::DatasetParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parsed dataset keyed on file mtime.
pub struct DatasetCache {
    path: PathBuf,
    cached: Option<(SystemTime, Arc<Vec<Chapter>>)>,
}

impl DatasetCache {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path, cached: None }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current dataset, re-read from disk when the file changed.
    pub fn get(&mut self) -> Result<Arc<Vec<Chapter>>> {
        let mtime = fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .map_err(|source| Error::DatasetIo {
                path: self.path.clone(),
                source,
            })?;

        if let Some((cached_mtime, chapters)) = &self.cached {
            if *cached_mtime == mtime {
                return Ok(Arc::clone(chapters));
            }
        }

        tracing::debug!(path = %self.path.display(), "reloading chapter dataset");
        let chapters = Arc::new(load_chapters(&self.path)?);
        self.cached = Some((mtime, Arc::clone(&chapters)));
        Ok(chapters)
    }
}
