//! End-to-end tests for the studytube binary.
//!
//! Each test runs against a throwaway HOME so state never leaks between
//! tests or into the real user profile.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studytube(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studytube").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn videos_add_list_remove_roundtrip() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args([
            "videos",
            "add",
            "https://youtu.be/dQw4w9WgXcQ",
            "--title",
            "Integrals 101",
            "--subject",
            "math",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrals 101"));

    studytube(&home)
        .args(["videos", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrals 101"))
        .stdout(predicate::str::contains("math"));

    studytube(&home)
        .args(["videos", "remove", "1"])
        .assert()
        .success();

    studytube(&home)
        .args(["videos", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No videos watched yet"));
}

#[test]
fn videos_add_rejects_non_youtube_url() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["videos", "add", "https://example.com/watch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a recognizable YouTube URL"));
}

#[test]
fn videos_list_filters_by_subject() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["videos", "add", "https://youtu.be/aaa111", "--subject", "math"])
        .assert()
        .success();
    studytube(&home)
        .args(["videos", "add", "https://youtu.be/bbb222", "--subject", "history"])
        .assert()
        .success();

    studytube(&home)
        .args(["videos", "list", "--subject", "math"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aaa111"))
        .stdout(predicate::str::contains("bbb222").not());
}

#[test]
fn videos_json_output_is_parseable() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["videos", "add", "https://youtu.be/ccc333", "--subject", "biology"])
        .assert()
        .success();

    let output = studytube(&home)
        .args(["--output", "json", "videos", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["subject"], "biology");
}

#[test]
fn notes_survive_between_invocations() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["notes", "save", "chapter 4 summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved!"));

    studytube(&home)
        .args(["notes", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter 4 summary"));

    studytube(&home)
        .args(["notes", "snapshots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter 4 summary"));
}

#[test]
fn notes_clear_keeps_snapshots() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["notes", "save", "keep me"])
        .assert()
        .success();

    studytube(&home)
        .args(["notes", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes cleared"));

    studytube(&home)
        .args(["notes", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));

    studytube(&home)
        .args(["notes", "snapshots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep me"));
}

#[test]
fn notes_save_empty_is_a_noop() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["notes", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    studytube(&home)
        .args(["notes", "snapshots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved notes"));
}

#[test]
fn notes_export_writes_dated_file() {
    let home = TempDir::new().unwrap();
    let export_dir = home.path().join("out");

    studytube(&home)
        .args(["notes", "save", "export me"])
        .assert()
        .success();

    studytube(&home)
        .args(["notes", "export", "--dir"])
        .arg(&export_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes exported!"));

    let entries: Vec<_> = std::fs::read_dir(&export_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn shell_completions_are_generated() {
    let home = TempDir::new().unwrap();

    studytube(&home)
        .args(["shell", "completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studytube"));
}
