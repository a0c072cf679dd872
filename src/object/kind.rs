use std::fmt::{self, Display, Formatter};

/// Describes the type of a loose object as named in its header.
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
///
/// Only blobs, trees, and commits are decoded. Any other type tag (including
/// `tag`) is carried through verbatim as `Other` and its content left opaque.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
    Other(Vec<u8>),
}

impl Kind {
    /// Map a header type tag to a `Kind`. Unrecognized tags are not an error.
    pub fn from_tag(tag: &[u8]) -> Kind {
        match tag {
            b"blob" => Kind::Blob,
            b"tree" => Kind::Tree,
            b"commit" => Kind::Commit,
            _ => Kind::Other(tag.to_vec()),
        }
    }

    /// Returns the type tag as it appears in an object header.
    pub fn as_tag(&self) -> &[u8] {
        match self {
            Kind::Blob => b"blob",
            Kind::Tree => b"tree",
            Kind::Commit => b"commit",
            Kind::Other(tag) => tag,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Tree => write!(f, "tree"),
            Kind::Commit => write!(f, "commit"),
            Kind::Other(name) => write!(f, "{}", String::from_utf8_lossy(name)),
        }
    }
}
