//! End-to-end tests for the `keyboard-signature` command line.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Path to the keyboard-signature binary
fn signature_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keyboard-signature")
}

fn run(args: &[&str]) -> Output {
    Command::new(signature_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(signature_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

/// Style file selecting dvorak with the number row
fn dvorak_numbers_style(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("dvorak.toml");
    fs::write(
        &path,
        r#"
[signature]
layout = "dvorak"
include-numbers = true
"#,
    )
    .expect("Should write style");
    path
}

// ============================================================================
// Path output
// ============================================================================

#[test]
fn test_path_only() {
    let output = run(&["-p", "sad"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "M 133 100 L 73 100 L 193 100\n");
}

#[test]
fn test_path_only_with_curve() {
    let output = run(&["-c", "catmull-rom", "-p", "sad"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "M 133 100 C 128 100 68 100 73 100 C 78 100 183 100 193 100\n"
    );
}

#[test]
fn test_name_from_stdin_trims_line_ending() {
    let output = run_with_stdin(&["-p"], "sad\r\n");
    assert_success(&output);
    assert_eq!(stdout(&output), "M 133 100 L 73 100 L 193 100\n");
}

#[test]
fn test_svg_output() {
    let output = run(&["-k", "-b", "#000000", "Ada"]);
    assert_success(&output);

    let svg = stdout(&output);
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<title>Signature for Ada</title>"));
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"<g class="ks-keyboard">"#));
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("ada.svg");
    let output = run(&["-o", path.to_str().expect("utf-8 path"), "Ada"]);
    assert_success(&output);

    assert!(stdout(&output).is_empty());
    let written = fs::read_to_string(&path).expect("Should write output file");
    assert!(written.contains("<svg"));
    assert!(written.ends_with("</svg>\n"));
}

// ============================================================================
// Style files and overrides
// ============================================================================

#[test]
fn test_style_file_options_apply() {
    let dir = TempDir::new().expect("Should create temp dir");
    let style = dvorak_numbers_style(&dir);
    let output = run(&["-s", style.to_str().expect("utf-8 path"), "-p", "o1"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "M 133 160 L 58 40\n");
}

#[test]
fn test_flags_override_style_file() {
    let dir = TempDir::new().expect("Should create temp dir");
    let style = dvorak_numbers_style(&dir);
    let style = style.to_str().expect("utf-8 path");

    let output = run(&["-s", style, "-l", "qwerty", "-p", "o1"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "M 538 100 L 58 40\n");

    let output = run(&["-s", style, "-l", "qwerty", "--no-numbers", "-p", "o1"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "M 538 40\n");
}

#[test]
fn test_invalid_style_file_exits_with_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[signature]\ncurve = \"spiral\"\n").expect("Should write style");

    let output = run(&["-s", path.to_str().expect("utf-8 path"), "-p", "sad"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert_eq!(err.matches("Error loading style").count(), 1);
    assert!(!err.contains("ERROR"), "failure reported once: {}", err);
}

#[test]
fn test_missing_style_file_exits_with_error() {
    let dir = TempDir::new().expect("Should create temp dir");
    let path = dir.path().join("missing.toml");

    let output = run(&["-s", path.to_str().expect("utf-8 path"), "sad"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read style file"));
}

// ============================================================================
// Argument handling
// ============================================================================

#[test]
fn test_list() {
    let output = run(&["--list"]);
    assert_success(&output);

    let listing = stdout(&output);
    for name in ["qwerty", "colemak", "dvorak", "azerty", "abcdef"] {
        assert!(listing.contains(name), "missing layout {}", name);
    }
    for name in [
        "linear",
        "catmull-rom",
        "quadratic-bezier",
        "cubic-bezier",
        "simple-curve",
    ] {
        assert!(listing.contains(name), "missing curve {}", name);
    }
}

#[test]
fn test_unknown_layout_is_rejected() {
    let output = run(&["-l", "bepo", "sad"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown keyboard layout 'bepo'"));
}

#[test]
fn test_numbers_flags_conflict() {
    let output = run(&["-n", "--no-numbers", "sad"]);
    assert_eq!(output.status.code(), Some(2));
}
