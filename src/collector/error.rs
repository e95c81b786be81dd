use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("No files found to process in {0}")]
    NoFilesFound(PathBuf),
}
