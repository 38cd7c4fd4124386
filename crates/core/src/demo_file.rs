//! Demo file service.
//!
//! Writes a fixed piece of content to the configured file and reads it back for download.
//! Every call performs blocking filesystem I/O against the path resolved in [`CoreConfig`].
//!
//! No locking is applied. A download that runs alongside a write may observe a partially
//! written file.

use crate::constants::DEMO_FILE_CONTENT;
use crate::{CoreConfig, FileError, FileResult};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// File contents loaded for an attachment response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl DownloadedFile {
    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.file_name)
    }
}

/// Stateless service bound to the single resolved file path.
#[derive(Clone, Debug)]
pub struct DemoFileService {
    cfg: Arc<CoreConfig>,
}

impl DemoFileService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Writes [`DEMO_FILE_CONTENT`] to the configured path.
    ///
    /// Missing parent directories are created. An existing file is truncated and overwritten.
    ///
    /// # Returns
    /// The absolute path that was written.
    ///
    /// # Errors
    /// Returns `FileError` if:
    /// - a parent directory cannot be created (`DirCreation`), or
    /// - the file cannot be opened or written, including when a directory already occupies
    ///   the path (`FileWrite`).
    pub fn write_demo_content(&self) -> FileResult<PathBuf> {
        let path = self.cfg.file_path();

        if let Some(parent) = self.cfg.parent_dir() {
            fs::create_dir_all(parent).map_err(|source| FileError::DirCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, DEMO_FILE_CONTENT).map_err(|source| FileError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = DEMO_FILE_CONTENT.len(), "wrote demo file");
        Ok(path.to_path_buf())
    }

    /// Reads the whole configured file into memory.
    ///
    /// # Errors
    /// Returns `FileError` if:
    /// - nothing exists at the path (`NotFound`), or
    /// - the path exists but cannot be read, for example because it is a directory, access is
    ///   denied, or it was removed after the existence check (`FileRead`).
    pub fn read_for_download(&self) -> FileResult<DownloadedFile> {
        let path = self.cfg.file_path();

        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }

        let content = fs::read(path).map_err(FileError::FileRead)?;

        Ok(DownloadedFile {
            file_name: self.cfg.file_name().to_string(),
            content,
        })
    }
}
