//! Renders decoded objects as structured text.
//!
//! Each object becomes one record of the form
//! `{type: "<kind>", size: "<size>", content: <payload>}`.

use std::fmt::{self, Display, Formatter, Write};
use std::str;

use crate::object::{Commit, Content, Object, TreeEntry};

/// Placeholder payload printed for blobs.
pub const BLOB_PLACEHOLDER: &str = "I'm a blob";

/// A decoded object ready to be printed.
pub struct Report<'a> {
    object: &'a Object,
    content: &'a Content,
}

impl<'a> Report<'a> {
    pub fn new(object: &'a Object, content: &'a Content) -> Report<'a> {
        Report { object, content }
    }
}

/// Renders `object` and its decoded `content` as a record.
pub fn format(object: &Object, content: &Content) -> String {
    Report::new(object, content).to_string()
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{{type: \"{}\", size: \"{}\", content: ",
            Escaped(self.object.kind().as_tag()),
            self.object.declared_size()
        )?;

        match self.content {
            Content::Blob => f.write_str(BLOB_PLACEHOLDER)?,
            Content::Tree(entries) => write_tree(f, entries)?,
            Content::Commit(commit) => write_commit(f, commit)?,
            Content::Other => write!(f, "I'm a {}", Escaped(self.object.kind().as_tag()))?,
        }

        f.write_char('}')
    }
}

fn write_tree(f: &mut Formatter, entries: &[TreeEntry]) -> fmt::Result {
    f.write_str("[\n")?;

    for (i, entry) in entries.iter().enumerate() {
        write!(
            f,
            "{{mode: \"{}\", name: \"{}\", hash: \"{}\"}}",
            Escaped(&entry.mode),
            Escaped(&entry.name),
            entry.object_id
        )?;

        if i + 1 < entries.len() {
            f.write_char(',')?;
        }
        f.write_char('\n')?;
    }

    f.write_str("]\n")
}

fn write_commit(f: &mut Formatter, commit: &Commit) -> fmt::Result {
    f.write_str("{parents: [")?;

    for (i, parent) in commit.parents.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "\"{}\"", parent)?;
    }

    write!(f, "], tree: \"{}\"}}", commit.tree_id)
}

/// Displays arbitrary bytes inside a double-quoted string.
///
/// Quotes, backslashes, and control characters are escaped. Bytes that are
/// not valid UTF-8 are written as `\xNN`.
struct Escaped<'a>(&'a [u8]);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut bytes = self.0;

        loop {
            match str::from_utf8(bytes) {
                Ok(s) => return write_escaped_str(f, s),
                Err(err) => {
                    let (valid, rest) = bytes.split_at(err.valid_up_to());
                    if let Ok(s) = str::from_utf8(valid) {
                        write_escaped_str(f, s)?;
                    }

                    let bad_len = err.error_len().unwrap_or_else(|| rest.len());
                    for b in &rest[..bad_len] {
                        write!(f, "\\x{:02x}", b)?;
                    }

                    bytes = &rest[bad_len..];
                }
            }
        }
    }
}

fn write_escaped_str(f: &mut Formatter, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c if c.is_control() => write!(f, "{}", c.escape_default())?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
