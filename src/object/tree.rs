//! Decodes the binary entry list held by a tree object.
//!
//! Each entry is laid out as `<mode> SP <name> NUL <20-byte id>`, with no
//! separator between one entry's id and the next entry's mode. Decoding is a
//! small state machine: each state is a pure function of the content and
//! the current offset which yields the next state, the next offset, and
//! possibly a completed entry.

use super::{id::ID_LEN, parse_utils, Id, StructuralDecodeError};

/// One line of a directory listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    /// Permission/type code as written, e.g. `100644` or `40000`.
    pub mode: Vec<u8>,

    /// Path segment, with surrounding ASCII whitespace removed.
    /// May hold any byte except NUL.
    pub name: Vec<u8>,

    pub object_id: Id,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum State {
    ReadMode,
    ReadName { mode: Vec<u8> },
    ReadHash { mode: Vec<u8>, name: Vec<u8> },
    Done,
}

#[derive(Debug)]
struct Step {
    state: State,
    offset: usize,
    entry: Option<TreeEntry>,
}

impl Step {
    fn to(state: State, offset: usize) -> Step {
        Step {
            state,
            offset,
            entry: None,
        }
    }
}

fn read_mode(content: &[u8], offset: usize) -> Step {
    match parse_utils::find(b' ', offset, content) {
        Some(sp) => {
            let mode = parse_utils::trim(&content[offset..sp]).to_vec();
            Step::to(State::ReadName { mode }, sp + 1)
        }
        // Nothing left, or a trailing fragment without a complete mode.
        None => Step::to(State::Done, offset),
    }
}

fn read_name(content: &[u8], offset: usize, mode: Vec<u8>) -> Step {
    match parse_utils::find(0, offset, content) {
        Some(nul) => {
            let name = parse_utils::trim(&content[offset..nul]).to_vec();
            Step::to(State::ReadHash { mode, name }, nul + 1)
        }
        None => Step::to(State::Done, offset),
    }
}

fn read_hash(
    content: &[u8],
    offset: usize,
    mode: Vec<u8>,
    name: Vec<u8>,
) -> Result<Step, StructuralDecodeError> {
    let remaining = content.len() - offset;
    if remaining < ID_LEN {
        return Err(StructuralDecodeError::TruncatedTreeEntry {
            offset,
            needed: ID_LEN - remaining,
        });
    }

    let end = offset + ID_LEN;
    let mut id = [0u8; ID_LEN];
    id.copy_from_slice(&content[offset..end]);

    Ok(Step {
        state: State::ReadMode,
        offset: end,
        entry: Some(TreeEntry {
            mode,
            name,
            object_id: Id::from_raw(id),
        }),
    })
}

fn step(state: State, content: &[u8], offset: usize) -> Result<Step, StructuralDecodeError> {
    match state {
        State::ReadMode => Ok(read_mode(content, offset)),
        State::ReadName { mode } => Ok(read_name(content, offset, mode)),
        State::ReadHash { mode, name } => read_hash(content, offset, mode, name),
        State::Done => Ok(Step::to(State::Done, offset)),
    }
}

/// Decodes tree content into its entries, in stored order.
///
/// A trailing fragment that ends before its mode or name is complete is
/// silently dropped. An entry whose name is complete but whose 20-byte object
/// ID is cut short is an error.
pub fn decode_tree(content: &[u8]) -> Result<Vec<TreeEntry>, StructuralDecodeError> {
    let mut entries = Vec::new();
    let mut state = State::ReadMode;
    let mut offset = 0;

    while state != State::Done {
        let next = step(state, content, offset)?;
        entries.extend(next.entry);
        state = next.state;
        offset = next.offset;
    }

    Ok(entries)
}
