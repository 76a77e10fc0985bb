//! When the user saves the list untouched, nothing is renamed and the run
//! still exits successfully.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::MetadataExt;

use assert_cmd::Command;
use assert_fs::prelude::*;

#[test]
fn untouched_list_renames_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let a = temp.child("a.txt");
    let b = temp.child("b.txt");
    a.write_str("tag-a").unwrap();
    b.write_str("tag-b").unwrap();
    let ino_a = fs::metadata(a.path()).unwrap().ino();
    let ino_b = fs::metadata(b.path()).unwrap().ino();

    // `true` exits 0 without touching the list at all.
    Command::cargo_bin("edmv")
        .unwrap()
        .env_remove("VISUAL")
        .env("EDITOR", "true")
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success();

    assert_eq!(fs::metadata(a.path()).unwrap().ino(), ino_a);
    assert_eq!(fs::metadata(b.path()).unwrap().ino(), ino_b);
    a.assert("tag-a");
    b.assert("tag-b");
}
