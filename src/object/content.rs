use super::{commit, tree, Commit, Kind, StructuralDecodeError, TreeEntry};

/// The decoded payload of an object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Content {
    /// Blob content is opaque; nothing is decoded.
    Blob,

    Tree(Vec<TreeEntry>),
    Commit(Commit),

    /// An object of a kind we don't decode.
    Other,
}

impl Content {
    /// Decodes `content` according to `kind`.
    pub fn decode(kind: &Kind, content: &[u8]) -> Result<Content, StructuralDecodeError> {
        Ok(match kind {
            Kind::Blob => Content::Blob,
            Kind::Tree => Content::Tree(tree::decode_tree(content)?),
            Kind::Commit => Content::Commit(commit::decode_commit(content)?),
            Kind::Other(_) => Content::Other,
        })
    }
}
