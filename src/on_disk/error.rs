use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::object::{self, Id};

/// Describes the potential error conditions that might arise while reading
/// a loose object from disk.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    ObjectError(#[from] object::Error),

    /// The object's content doesn't hash to the ID its path implies.
    #[error("object content hashes to {actual}, but its path names {expected}")]
    IdMismatch { expected: Id, actual: Id },
}

/// A directory or directory entry that couldn't be read while looking for
/// objects.
#[derive(Debug, Error)]
#[error("{}: {}", .path.display(), .source)]
pub struct WalkError {
    pub path: PathBuf,
    pub source: io::Error,
}

/// A specialized `Result` type for on-disk object operations.
pub type Result<T> = std::result::Result<T, Error>;
