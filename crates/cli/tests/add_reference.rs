use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn smell() -> Command {
    Command::cargo_bin("iconclass-smell").expect("binary")
}

#[test]
fn references_compound_and_missing_entries_are_reported() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("notations.txt"), "N 0\n$\nN 5\n$\n").unwrap();

    let output = smell()
        .current_dir(root)
        .arg("add-reference")
        .arg("notations.txt")
        .arg("--out")
        .arg("edited.txt")
        .args(["--ref", "5=41", "--ref", "5=30", "--ref", "5=52", "--ref", "99=10"])
        .output()
        .expect("command run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["status"], "ok");
    assert_eq!(report["references_inserted"], 3);
    assert_eq!(report["references_skipped"], 1);
    assert_eq!(report["missing_entries"], serde_json::json!(["99"]));

    assert!(String::from_utf8_lossy(&output.stderr).contains("N 99 not found"));
    assert_eq!(
        fs::read_to_string(root.join("edited.txt")).unwrap(),
        "N 0\n$\nN 5\nR 30\n; 41\n; 52\n$\n"
    );
}

#[test]
fn malformed_pair_is_a_usage_error() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("notations.txt"), "N 0\n$\n").unwrap();

    smell()
        .current_dir(temp.path())
        .args(["add-reference", "notations.txt", "--out", "o.txt", "--ref", "041"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FROM=TO"));
    assert!(!temp.path().join("o.txt").exists());
}

#[test]
fn unreadable_notations_fail_the_run() {
    let temp = tempdir().unwrap();

    smell()
        .current_dir(temp.path())
        .args(["add-reference", "absent.txt", "--out", "o.txt", "--ref", "0=41"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}
