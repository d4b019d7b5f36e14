#![cfg(unix)]

use assert_cmd::prelude::*;
use chrono::Local;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const SEPARATOR: &str = "------------------------------------------------------------------------";

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn svn_log(entries: &[(&str, &str, &str)]) -> String {
    let mut out = String::new();
    for (rev, author, message) in entries {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!(
            "{rev} | {author} | 2024-01-02 10:00:00 +0800 (Tue, 02 Jan 2024) | 1 line\n\n{message}\n"
        ));
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Write a stand-in `svn` that records its arguments and prints `stdout`.
fn fake_svn(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
    let log_path = dir.join("svn.log");
    fs::write(dir.join("reply.txt"), stdout).unwrap();

    let path = dir.join("svn");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "#!/bin/sh").unwrap();
    writeln!(f, "echo \"$@\" >> '{}'", log_path.display()).unwrap();
    writeln!(f, "cat '{}'", dir.join("reply.txt").display()).unwrap();
    if exit_code != 0 {
        writeln!(f, "echo 'svn: E170013: Unable to connect' >&2").unwrap();
    }
    writeln!(f, "exit {exit_code}").unwrap();
    f.sync_all().unwrap();
    drop(f);

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn recorded_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("svn.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

fn bugking(svn: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bugking").unwrap();
    cmd.arg("--svn").arg(svn);
    cmd
}

#[test]
fn list_mode_prints_each_commit() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(
        dir.path(),
        &svn_log(&[("r1", "alice", "fix crash"), ("r2", "mlsvn_builder", "nightly")]),
        0,
    );

    let out = bugking(&svn)
        .args(["svn://host/trunk", &today(), "9", "17"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();

    assert!(stdout.contains("List of last commits between 9:00 and 17:00 since"));
    assert!(stdout.contains("Date: 2024-01-02 10:00:00 +0800 (Tue, 02 Jan 2024)\nMessage: fix crash\nAuthor: alice\n"));
    assert!(!stdout.contains("mlsvn_builder"));

    let calls = recorded_calls(dir.path());
    assert_eq!(
        calls,
        vec![format!(
            "log svn://host/trunk -r {{{t}T09:00:00}}:{{{t}T17:00:00}}",
            t = today()
        )]
    );
}

#[test]
fn rank_mode_prints_ascending_tally() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(
        dir.path(),
        &svn_log(&[("r1", "x", "a"), ("r2", "y", "b"), ("r3", "x", "c")]),
        0,
    );

    let out = bugking(&svn)
        .args(["svn://host/trunk", &today(), "9", "17", "rank"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(out).unwrap(), "y:1\nx:2\n");
}

#[test]
fn json_rank_lists_authors() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(dir.path(), &svn_log(&[("r1", "x", "a"), ("r2", "x", "b")]), 0);

    let out = bugking(&svn)
        .args(["--json", "svn://host/trunk", &today(), "9", "17", "rank"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["authors"][0]["author"], "x");
    assert_eq!(v["authors"][0]["commits"], 2);
    assert_eq!(v["start_hour"], 9);
}

#[test]
fn empty_result_is_not_an_error() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(dir.path(), &format!("{SEPARATOR}\n"), 0);

    let out = bugking(&svn)
        .args(["svn://host/trunk", &today(), "9", "17"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "No commits found between the specified hours since the specified date.\n"
    );
}

#[test]
fn svn_failure_is_reported_separately_from_empty() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(dir.path(), "", 1);

    let output = bugking(&svn)
        .args(["svn://host/trunk", &today(), "9", "17"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stdout.contains("No commits found"));
    assert!(stderr.contains("Failed to query commit history"));
    assert!(stderr.contains("E170013"));
}

#[test]
fn future_start_date_never_runs_svn() {
    let dir = tempdir().unwrap();
    let svn = fake_svn(dir.path(), "", 0);

    bugking(&svn)
        .args(["svn://host/trunk", "2999-01-01", "9", "17"])
        .assert()
        .failure();
    bugking(&svn)
        .args(["svn://host/trunk", "2024/01/01", "9", "17"])
        .assert()
        .failure();
    assert!(recorded_calls(dir.path()).is_empty());
}

#[test]
fn missing_arguments_print_usage_and_exit_one() {
    let out = Command::cargo_bin("bugking")
        .unwrap()
        .args(["svn://host/trunk", "2024-01-01", "9"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out).unwrap().contains("Usage:"));
}
