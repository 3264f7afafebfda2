use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExifFillError>;

#[derive(Debug, Error)]
pub enum ExifFillError {
    #[error("no folder selected")]
    NoFolderSelected,
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("no .jpg files found in {}", .0.display())]
    NoInput(PathBuf),
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("bad file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Error: {} -> {details}", path.display())]
    Metadata { path: PathBuf, details: String },
    #[error("metadata backend: {0}")]
    Backend(String),
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExifFillError {
    pub fn metadata(msg: impl ToString, path: &Path) -> ExifFillError {
        ExifFillError::Metadata { details: msg.to_string(), path: path.to_path_buf() }
    }

    /// Input errors end a run before any file is touched.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ExifFillError::NoFolderSelected | ExifFillError::NoInput(_))
    }
}
