use std::io;

use thiserror::Error;

use super::ParseIdError;

/// Describes why an inflated object does not start with a well-formed
/// `<type> <size>\0` header.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeaderFormatError {
    /// No space separates the type tag from the size.
    #[error("no space after object type")]
    MissingSpace,

    /// No NUL terminates the size.
    #[error("no NUL after object size")]
    MissingNul,

    /// The size is not a decimal number.
    #[error("object size `{0}` is not a decimal number")]
    InvalidSize(String),

    /// The size does not match the number of content bytes present.
    #[error("object declares {declared} bytes of content but has {actual}")]
    SizeMismatch { declared: u64, actual: u64 },
}

/// Describes a tree or commit whose content cannot be decoded.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StructuralDecodeError {
    /// A tree entry ends before its 20-byte object ID is complete.
    #[error("tree entry at offset {offset} needs {needed} more bytes for its object ID")]
    TruncatedTreeEntry { offset: usize, needed: usize },

    /// Commit content is too short to hold a `tree` line.
    #[error("commit content is {0} bytes, too short for a tree line")]
    CommitTooShort(usize),

    /// Commit content does not begin with `tree <id>`.
    #[error("commit does not begin with a tree line")]
    MissingTreeHeader,

    /// A `tree` or `parent` line holds something other than an object ID.
    #[error("invalid object ID in commit: {0}")]
    InvalidId(#[from] ParseIdError),
}

/// Describes the potential error conditions that might arise while decoding
/// a single loose object.
#[derive(Debug, Error)]
pub enum Error {
    /// The bytes are not a valid zlib stream.
    #[error("unable to inflate object: {0}")]
    Decompress(#[source] io::Error),

    #[error("malformed object header: {0}")]
    Header(#[from] HeaderFormatError),

    #[error("malformed object content: {0}")]
    Structural(#[from] StructuralDecodeError),
}

/// A specialized `Result` type for object decoding.
pub type Result<T> = std::result::Result<T, Error>;
