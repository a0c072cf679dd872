use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::WalkError;

/// Returns true if `name` could be the name of a loose object file:
/// one or more hex digits, in either case.
pub fn is_object_name(name: &OsStr) -> bool {
    match name.to_str() {
        Some(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Recursively lists every non-directory below `root` whose name
/// passes [`is_object_name`].
///
/// Entries are visited in lexical order of file name, so results are
/// stable from one run to the next. Other files are skipped silently.
///
/// A directory or entry that can't be read shows up as an `Err` in its
/// place in the list; the walk carries on with its siblings.
pub fn find_objects(root: &Path) -> Vec<Result<PathBuf, WalkError>> {
    walk(root, &list_dir)
}

struct Listed {
    path: PathBuf,
    name: OsString,
    is_dir: io::Result<bool>,
}

fn list_dir(dir: &Path) -> io::Result<Vec<Listed>> {
    fs::read_dir(dir)?
        .map(|entry| {
            let entry = entry?;
            Ok(Listed {
                path: entry.path(),
                name: entry.file_name(),
                is_dir: entry.file_type().map(|t| t.is_dir()),
            })
        })
        .collect()
}

fn walk<L>(root: &Path, list: &L) -> Vec<Result<PathBuf, WalkError>>
where
    L: Fn(&Path) -> io::Result<Vec<Listed>>,
{
    let mut found = Vec::new();
    visit(root, list, &mut found);
    found
}

fn visit<L>(dir: &Path, list: &L, found: &mut Vec<Result<PathBuf, WalkError>>)
where
    L: Fn(&Path) -> io::Result<Vec<Listed>>,
{
    let mut entries = match list(dir) {
        Ok(entries) => entries,
        Err(source) => {
            found.push(Err(WalkError {
                path: dir.to_path_buf(),
                source,
            }));
            return;
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        match entry.is_dir {
            Ok(true) => visit(&entry.path, list, found),
            Ok(false) if is_object_name(&entry.name) => found.push(Ok(entry.path)),
            Ok(false) => debug!(path = %entry.path.display(), "skipping non-object file"),
            Err(source) => found.push(Err(WalkError {
                path: entry.path,
                source,
            })),
        }
    }
}
