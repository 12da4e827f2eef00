//! End-to-end tests for the `stable-match` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stable-match"))
}

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn match_example_file() {
    let output = bin().arg("match").arg(data("example.in")).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "1 1\n2 2\n3 3\n");
}

#[test]
fn match_reads_stdin() {
    let mut child = bin()
        .args(["match", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2\n1 2\n1 2\n2 1\n2 1\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2\n2 1\n");
}

#[test]
fn match_receipt_goes_to_stderr() {
    let output = bin()
        .args(["match", "--receipt"])
        .arg(data("example.in"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stderr(&output).contains("n=3 proposals=5 root="));
    assert_eq!(stdout(&output), "1 1\n2 2\n3 3\n");
}

#[test]
fn match_validate_only() {
    let output = bin()
        .args(["match", "--validate-only"])
        .arg(data("example.in"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("ok (parsed n=3)"));
}

#[test]
fn match_rejects_bad_input() {
    let input = temp_file("2\n1 1\n2 1\n1 2\n2 1\n");
    let output = bin().arg("match").arg(input.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("invalid input: line 2: hospital 1 repeats id 1"));
    assert!(stderr(&output).contains("preference file rejected"));
    assert!(stderr(&output).contains("line=Some(2)"));
}

#[test]
fn match_missing_file() {
    let output = bin()
        .args(["match", "does/not/exist.in"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not read does/not/exist.in"));
}

#[test]
fn verify_example_stable() {
    let output = bin()
        .arg("verify")
        .arg(data("example.in"))
        .arg("--matching")
        .arg(data("example.out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "VALID STABLE\n");
}

#[test]
fn verify_reports_blocking_pair() {
    let output = bin()
        .arg("verify")
        .arg(data("unstable.in"))
        .arg("--matching")
        .arg(data("unstable.out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "UNSTABLE (blocking pair: hospital 1, student 1)\n"
    );
}

#[test]
fn verify_invalid_matching_exits_1() {
    let matching = temp_file("1 1\n2 1\n3 2\n");
    let output = bin()
        .arg("verify")
        .arg(data("example.in"))
        .arg("-m")
        .arg(matching.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "INVALID (student 1 matched to multiple hospitals)\n"
    );
}

#[test]
fn verify_short_matching_file() {
    let matching = temp_file("1 1\n2 2\n");
    let output = bin()
        .arg("verify")
        .arg(data("example.in"))
        .arg("-m")
        .arg(matching.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "INVALID (matching must have exactly 3 entries, found 2)\n"
    );
}

#[test]
fn match_then_verify_round_trip() {
    let matched = bin().arg("match").arg(data("unstable.in")).output().unwrap();
    assert!(matched.status.success());

    let matching = temp_file(&stdout(&matched));
    let output = bin()
        .arg("verify")
        .arg(data("unstable.in"))
        .arg("-m")
        .arg(matching.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "VALID STABLE\n");
}
