//! Reads loose objects from the local file system.
//!
//! This is the thin layer between a directory of object files and the
//! decoding pipeline in [`crate::object`]. It never writes to disk.

use std::fs;
use std::path::Path;

use crate::object::{Id, Object, HEX_ID_LEN};
use crate::report;

mod error;
pub use error::{Error, Result, WalkError};

mod find;
pub use find::{find_objects, is_object_name};

/// Controls how each object file is checked.
#[derive(Clone, Debug)]
pub struct Options {
    /// Compare each object's hash with the ID implied by its path
    /// (see [`expected_id`]).
    pub verify_ids: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { verify_ids: true }
    }
}

/// Returns the ID an object file must hash to, if its location follows the
/// `objects/xx/yyyy...` fan-out layout: a two-hex-digit directory holding a
/// file named with the remaining 38 hex digits.
///
/// Returns `None` for any other path.
pub fn expected_id(path: &Path) -> Option<Id> {
    let name = path.file_name()?.to_str()?;
    let dir = path.parent()?.file_name()?.to_str()?;

    if dir.len() != 2 || name.len() != HEX_ID_LEN - 2 {
        return None;
    }

    let hex = format!("{}{}", dir, name).to_ascii_lowercase();
    Id::from_hex(hex).ok()
}

/// Reads and inflates the object stored at `path`.
pub fn read_object(path: &Path, options: &Options) -> Result<Object> {
    let raw = fs::read(path)?;
    let object = Object::from_compressed(path.display().to_string(), &raw)?;

    if options.verify_ids {
        if let Some(expected) = expected_id(path) {
            let actual = object.compute_id();
            if actual != expected {
                return Err(Error::IdMismatch { expected, actual });
            }
        }
    }

    Ok(object)
}

/// Runs the full pipeline for one file: read, inflate, parse, decode,
/// and render as a report record.
pub fn dump_object(path: &Path, options: &Options) -> Result<String> {
    let object = read_object(path, options)?;
    let content = object.decode()?;
    Ok(report::format(&object, &content))
}
