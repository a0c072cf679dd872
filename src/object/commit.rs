use super::{id::HEX_ID_LEN, parse_utils, Id, StructuralDecodeError};

/// Length of `tree <40 hex digits>`, the shortest possible commit.
const TREE_LINE_LEN: usize = 5 + HEX_ID_LEN;

/// The tree and parent lines from the head of a commit.
///
/// Author, committer, and message are not decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    pub tree_id: Id,

    /// Parents in the order their lines appear. Duplicates are kept.
    pub parents: Vec<Id>,
}

/// Decodes the tree and parent lines of commit content.
///
/// The first line must be `tree <id>`. Each immediately following
/// `parent <id>` line adds a parent; the first line of any other form
/// ends the scan.
pub fn decode_commit(content: &[u8]) -> Result<Commit, StructuralDecodeError> {
    if content.len() < TREE_LINE_LEN {
        return Err(StructuralDecodeError::CommitTooShort(content.len()));
    }

    let mut lines = content.split(|b| *b == b'\n');

    let tree_line = lines.next().unwrap_or_default();
    let tree_id = match parse_utils::header(tree_line, b"tree") {
        Some(id) => Id::from_hex(id)?,
        None => return Err(StructuralDecodeError::MissingTreeHeader),
    };

    let mut parents = Vec::new();
    for line in lines {
        match parse_utils::header(line, b"parent") {
            Some(id) => parents.push(Id::from_hex(id)?),
            None => break,
        }
    }

    Ok(Commit { tree_id, parents })
}
