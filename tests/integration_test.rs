// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serial_test::serial;
use tempfile::TempDir;

const MANIFEST: &str = r#"{ "name": "ide", "version": "1.4.2" }"#;

/// Run the binary against `root` with an empty user config directory, so a
/// developer's own `.bumpversion.toml` cannot leak into the results.
fn bump_version(root: &Path, args: &[&str]) -> Output {
    let config_home = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .output()
        .expect("Failed to execute bump-version")
}

/// Project whose configured writer is `script`, so tests never need npm.
///
/// Tests spawning processes run serially: a script still open for writing in
/// one thread can fail to exec from another with ETXTBSY.
fn project_with_writer(script: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();

    let writer = dir.path().join("writer.sh");
    fs::write(&writer, script).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&writer, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fs::write(
        dir.path().join("bumpversion.toml"),
        format!("[delegate]\nprogram = \"{}\"\n", writer.display()),
    )
    .unwrap();
    dir
}

#[test]
#[serial]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let output = bump_version(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--release"));
    assert!(stdout.contains("--pre-release"));
}

#[test]
#[serial]
fn test_both_flags_is_usage_error() {
    // No manifest exists: a read attempt would exit 1, not 2
    let dir = TempDir::new().unwrap();
    let output = bump_version(dir.path(), &["--release", "--pre-release"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("manifest"));
}

#[test]
#[serial]
fn test_no_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = bump_version(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
#[serial]
fn test_missing_manifest_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let output = bump_version(dir.path(), &["--release"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read manifest"));
}

#[test]
#[serial]
fn test_dry_run_leaves_manifest_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();

    let output = bump_version(dir.path(), &["--pre-release", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.5.0"));
    assert!(stdout.contains("--no-git-tag-version"));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        MANIFEST
    );
}

#[cfg(unix)]
#[test]
#[serial]
fn test_writer_receives_version_arguments() {
    let dir = project_with_writer("#!/bin/sh\necho \"$@\" > args.txt\n");

    let output = bump_version(dir.path(), &["--release"]);

    assert!(output.status.success());
    let args = fs::read_to_string(dir.path().join("args.txt")).unwrap();
    assert_eq!(
        args.trim(),
        "version --no-commit-hooks --no-git-tag-version 1.4.3"
    );
}

#[cfg(unix)]
#[test]
#[serial]
fn test_writer_exit_code_is_propagated() {
    let dir = project_with_writer("#!/bin/sh\nexit 3\n");

    let output = bump_version(dir.path(), &["--pre-release"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exit code 3"));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_proposal_is_printed_before_writer_runs() {
    // The writer fails, so anything printed about the change came before it ran
    let dir = project_with_writer("#!/bin/sh\nexit 4\n");

    let output = bump_version(dir.path(), &["--release"]);

    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Proposed release bump:"));
    assert!(stdout.contains("1.4.3"));
    assert!(!stdout.contains("Version set to"));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_writer_runs_in_the_root_holding_the_manifest() {
    let dir = project_with_writer("#!/bin/sh\npwd > cwd.txt\n");

    let output = bump_version(dir.path(), &["--pre-release"]);

    assert!(output.status.success());
    let cwd = fs::read_to_string(dir.path().join("cwd.txt")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(dir.path()).unwrap()
    );
}
