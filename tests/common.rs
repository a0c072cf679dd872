use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use flate2::{write::ZlibEncoder, Compression};
use loosedump::object::Object;

/// A `LooseObjects` is a temporary `objects` directory laid out the way
/// git lays out loose objects (`xx/yyyy...`).
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
pub struct LooseObjects {
    tempdir: tempfile::TempDir,
}

#[allow(dead_code)]
impl LooseObjects {
    pub fn new() -> LooseObjects {
        LooseObjects {
            tempdir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.tempdir.path()
    }

    // Compress `data` (header included) and store it under its ID.
    // Returns the path written.
    pub fn put(&self, data: &[u8]) -> PathBuf {
        let id = Object::from_inflated("test", data.to_vec())
            .unwrap()
            .compute_id()
            .to_string();

        self.put_at(&format!("{}/{}", &id[..2], &id[2..]), &deflate(data))
    }

    // Store `kind` content with a correct header.
    pub fn put_object(&self, kind: &str, content: &[u8]) -> PathBuf {
        let mut data = format!("{} {}\0", kind, content.len()).into_bytes();
        data.extend_from_slice(content);
        self.put(&data)
    }

    // Write raw bytes at a path relative to the root.
    pub fn put_at(&self, rel_path: &str, raw: &[u8]) -> PathBuf {
        let path = self.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, raw).unwrap();
        path
    }
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut e = ZlibEncoder::new(Vec::new(), Compression::default());
    e.write_all(data).unwrap();
    e.finish().unwrap()
}

// Builds tree content from (mode, name, raw id) triples.
#[allow(dead_code)]
pub fn tree_content(entries: &[(&str, &str, [u8; 20])]) -> Vec<u8> {
    let mut r = Vec::new();
    for (mode, name, id) in entries {
        r.extend_from_slice(mode.as_bytes());
        r.push(b' ');
        r.extend_from_slice(name.as_bytes());
        r.push(0);
        r.extend_from_slice(id);
    }
    r
}
