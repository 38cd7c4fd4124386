use std::path::PathBuf;

// Write failures display as `<path>: <io message>`; callers surface them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to determine working directory: {0}")]
    WorkingDir(std::io::Error),
    #[error("{}: {source}", path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    FileRead(std::io::Error),
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl FileError {
    /// Returns true if the error means nothing exists at the requested path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }
}

pub type FileResult<T> = std::result::Result<T, FileError>;
