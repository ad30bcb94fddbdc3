use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("The provided path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("The provided path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
