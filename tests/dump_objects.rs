use assert_cmd::{assert::Assert, Command};
use predicates::prelude::*;

mod common;
use common::{tree_content, LooseObjects};

const TEST_CONTENT: &[u8; 13] = b"test content\n";
const TEST_SHA1: &str = "d670460b4b4aece5915caf5c68d12f560a9fe3e4";
const EMPTY_TREE_SHA1: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

fn loosedump() -> Command {
    Command::cargo_bin("loosedump").unwrap()
}

fn stdout(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

fn blob_record(path: &std::path::Path) -> String {
    format!(
        "{}\n{{type: \"blob\", size: \"13\", content: I'm a blob}}\n",
        path.display()
    )
}

// --- Argument checking

#[test]
fn version() {
    loosedump()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("loosedump 0."))
        .stderr("");
}

#[test]
fn no_root_prints_usage() {
    loosedump()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("USAGE:"));
}

#[test]
fn root_is_not_a_directory() {
    let objects = LooseObjects::new();
    let missing = objects.path().join("nope");

    let assert = loosedump().arg(&missing).assert().code(1).stdout("");
    assert_eq!(
        stderr(&assert),
        format!("ERROR: {}: not a directory\n", missing.display())
    );
}

// --- Behavior

#[test]
fn blob() {
    let objects = LooseObjects::new();
    let path = objects.put_object("blob", TEST_CONTENT);
    assert!(path.ends_with(format!("d6/{}", &TEST_SHA1[2..])));

    let assert = loosedump().arg(objects.path()).assert().success().stderr("");
    assert_eq!(stdout(&assert), blob_record(&path));
}

#[test]
fn tree() {
    let objects = LooseObjects::new();

    let mut blob_id = [0u8; 20];
    blob_id.copy_from_slice(&hex_to_bytes(TEST_SHA1));

    let content = tree_content(&[
        ("100644", "hello.txt", blob_id),
        ("40000", "empty dir", [0x4b; 20]),
    ]);
    let path = objects.put_object("tree", &content);

    let assert = loosedump().arg(objects.path()).assert().success();
    assert_eq!(
        stdout(&assert),
        format!(
            "{}\n\
             {{type: \"tree\", size: \"{}\", content: [\n\
             {{mode: \"100644\", name: \"hello.txt\", hash: \"{}\"}},\n\
             {{mode: \"40000\", name: \"empty dir\", hash: \"{}\"}}\n\
             ]\n}}\n",
            path.display(),
            content.len(),
            TEST_SHA1,
            "4b".repeat(20)
        )
    );
}

#[test]
fn commit_stops_before_author() {
    let objects = LooseObjects::new();

    let content = format!(
        "tree {}\n\
         parent {}\n\
         author A <a@x> 0 +0000\n",
        EMPTY_TREE_SHA1,
        "a".repeat(40)
    );
    let path = objects.put_object("commit", content.as_bytes());

    let assert = loosedump().arg(objects.path()).assert().success();
    assert_eq!(
        stdout(&assert),
        format!(
            "{}\n{{type: \"commit\", size: \"{}\", content: {{parents: [\"{}\"], tree: \"{}\"}}}}\n",
            path.display(),
            content.len(),
            "a".repeat(40),
            EMPTY_TREE_SHA1
        )
    );
}

#[test]
fn unrecognized_kind() {
    let objects = LooseObjects::new();
    let path = objects.put_object("tag", b"object 1234\n");

    let assert = loosedump().arg(objects.path()).assert().success();
    assert_eq!(
        stdout(&assert),
        format!(
            "{}\n{{type: \"tag\", size: \"12\", content: I'm a tag}}\n",
            path.display()
        )
    );
}

#[test]
fn objects_are_listed_in_path_order() {
    let objects = LooseObjects::new();

    let tree = objects.put_object("tree", b"");
    let blob = objects.put_object("blob", TEST_CONTENT);
    assert!(tree.ends_with(format!("4b/{}", &EMPTY_TREE_SHA1[2..])));

    let assert = loosedump().arg(objects.path()).assert().success();
    assert_eq!(
        stdout(&assert),
        format!(
            "{}\n{{type: \"tree\", size: \"0\", content: [\n]\n}}\n{}",
            tree.display(),
            blob_record(&blob)
        )
    );
}

#[test]
fn non_hex_files_are_not_decoded() {
    let objects = LooseObjects::new();
    let blob = objects.put_object("blob", TEST_CONTENT);

    objects.put_at("info/packs", b"sand in the gears");
    objects.put_at("pack/pack-1234.idx", b"sand in the gears");
    objects.put_at("d6/tmp_obj_xyz", b"sand in the gears");

    let assert = loosedump().arg(objects.path()).assert().success().stderr("");
    assert_eq!(stdout(&assert), blob_record(&blob));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let objects = LooseObjects::new();
    let blob = objects.put_object("blob", TEST_CONTENT);
    objects.put_at("info/packs", b"sand in the gears");

    let assert = loosedump()
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg(objects.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping non-object file"))
        .stderr(predicate::str::contains("info/packs"));
    assert_eq!(stdout(&assert), blob_record(&blob));

    let assert = loosedump()
        .env_remove("RUST_LOG")
        .arg(objects.path())
        .assert()
        .success()
        .stderr("");
    assert_eq!(stdout(&assert), blob_record(&blob));
}

// --- Errors

#[test]
fn corrupt_object_does_not_stop_the_walk() {
    let objects = LooseObjects::new();

    let corrupt = objects.put_at("00/badbad", b"sand in the gears");
    let blob = objects.put_object("blob", TEST_CONTENT);

    let assert = loosedump()
        .arg(objects.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "ERROR: {}: unable to inflate object",
            corrupt.display()
        )))
        .stderr(predicate::str::contains(
            "ERROR: 1 of 2 objects could not be decoded",
        ));

    assert_eq!(stdout(&assert), blob_record(&blob));
}

#[test]
fn header_and_structure_errors_are_reported() {
    let objects = LooseObjects::new();

    let no_header = objects.put_at("01/aaaa", &common::deflate(b"no header here"));
    let short_commit = objects.put_at("02/bbbb", &common::deflate(b"commit 4\0tree"));

    loosedump()
        .arg(objects.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(format!(
            "ERROR: {}: malformed object header: no NUL after object size",
            no_header.display()
        )))
        .stderr(predicate::str::contains(format!(
            "ERROR: {}: malformed object content: commit content is 4 bytes, too short for a tree line",
            short_commit.display()
        )));
}

#[test]
fn misnamed_object() {
    let objects = LooseObjects::new();
    let raw = common::deflate(b"blob 13\0test content\n");
    let path = objects.put_at(&format!("4b/{}", &EMPTY_TREE_SHA1[2..]), &raw);

    loosedump()
        .arg(objects.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(format!(
            "ERROR: {}: object content hashes to {}, but its path names {}",
            path.display(),
            TEST_SHA1,
            EMPTY_TREE_SHA1
        )));

    let assert = loosedump()
        .arg("--no-verify-ids")
        .arg(objects.path())
        .assert()
        .success();
    assert_eq!(stdout(&assert), blob_record(&path));
}

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}
