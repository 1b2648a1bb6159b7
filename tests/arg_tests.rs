//! Tests around CLI argument and config handling. These run the real
//! binary, so each test points `-C` at its own temp location to keep the
//! user's config untouched.

use assert_cmd::Command;
use predicates::prelude::*;

fn msnap() -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("msnap").unwrap();
    cmd.arg("-C").arg(dir.path().join("memsnap.toml"));
    (cmd, dir)
}

#[test]
fn test_invalid_unit() {
    let (mut cmd, _dir) = msnap();
    cmd.arg("--unit")
        .arg("XX")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized unit 'XX'"));
}

#[test]
fn test_conflicting_section_flags() {
    let (mut cmd, _dir) = msnap();
    cmd.arg("--ram").arg("--swap").assert().failure();
}

#[test]
fn test_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memsnap.toml");
    std::fs::write(&path, "unit = [oops").unwrap();

    Command::cargo_bin("msnap")
        .unwrap()
        .arg("-C")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or create the config file.",
        ));
}

#[test]
fn test_version() {
    let (mut cmd, _dir) = msnap();
    cmd.arg("--version").assert().success();
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
#[test]
fn test_reports_both_sections() {
    let (mut cmd, _dir) = msnap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RAM usage:"))
        .stdout(predicate::str::contains("Swap usage:"))
        .stdout(predicate::str::contains("GB"));
}

// Swap collection exists on every platform, so a swap-only run must
// succeed everywhere, including where the RAM query is unsupported.
#[test]
fn test_swap_only() {
    let (mut cmd, _dir) = msnap();
    cmd.arg("--swap")
        .arg("-u")
        .arg("mb")
        .assert()
        .success()
        .stdout(predicate::str::contains("Swap usage:"))
        .stdout(predicate::str::contains("MB"))
        .stdout(predicate::str::contains("RAM usage:").not());
}
