//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the binary data.
//!
//! Objects here are always read from their loose (individually compressed)
//! form and are never written.

use sha1::{Digest, Sha1};
use tracing::debug;

mod commit;
pub use commit::{decode_commit, Commit};

mod content;
pub use content::Content;

mod error;
pub use error::{Error, HeaderFormatError, Result, StructuralDecodeError};

mod header;
pub use header::{parse_header, Header};

mod id;
pub use id::{Id, ParseIdError, HEX_ID_LEN, ID_LEN};

mod inflate;
pub use inflate::inflate;

mod kind;
pub use kind::Kind;

pub mod parse_utils;

mod tree;
pub use tree::{decode_tree, TreeEntry};

/// Describes a single object as read from a loose object file.
///
/// An `Object` owns the content that follows its header. It is built once
/// from a single decode pass and not modified afterward.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    kind: Kind,
    declared_size: u64,
    source: String,
    header: Vec<u8>,
    content: Vec<u8>,
}

impl Object {
    /// Inflate and parse the raw bytes of a loose object file.
    ///
    /// `source` describes where the bytes came from (typically a path) and is
    /// carried along for diagnostics only.
    pub fn from_compressed<S: Into<String>>(source: S, raw: &[u8]) -> Result<Object> {
        let data = inflate(raw)?;
        Object::from_inflated(source, data)
    }

    /// Parse an already-inflated object.
    ///
    /// The size in the header must match the number of bytes which follow it.
    pub fn from_inflated<S: Into<String>>(source: S, mut data: Vec<u8>) -> Result<Object> {
        let header = parse_header(&data)?;
        let content = data.split_off(header.content_start);
        let raw_header = data;

        let actual = content.len() as u64;
        if header.declared_size != actual {
            return Err(HeaderFormatError::SizeMismatch {
                declared: header.declared_size,
                actual,
            }
            .into());
        }

        let source = source.into();
        debug!(
            source = %source,
            kind = %header.kind,
            size = header.declared_size,
            "parsed object header"
        );

        Ok(Object {
            kind: header.kind,
            declared_size: header.declared_size,
            source,
            header: raw_header,
            content,
        })
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return the size given in the object's header.
    pub fn declared_size(&self) -> u64 {
        self.declared_size
    }

    /// Return the description of where this object was read from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Return the content which follows the header.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Return the size (in bytes) of the content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Decode the content according to the object's kind.
    pub fn decode(&self) -> Result<Content> {
        Content::decode(&self.kind, &self.content).map_err(Error::from)
    }

    /// Computes the object's ID: the SHA-1 of the header exactly as it was
    /// stored, followed by the content.
    ///
    /// For a canonical header this is the name git would store the object
    /// under.
    pub fn compute_id(&self) -> Id {
        let mut hasher = Sha1::new();

        hasher.update(&self.header);
        hasher.update(&self.content);

        let mut id = [0u8; ID_LEN];
        id.copy_from_slice(hasher.finalize().as_slice());
        Id::from_raw(id)
    }
}
