//! Integration tests for asnwho CLI functionality

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report the ASN and network block"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--no-rdap"))
        .stdout(predicate::str::contains("--whois-server"))
        .stdout(predicate::str::contains("--timeout-ms"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("asnwho "));
    if cfg!(debug_assertions) {
        assert!(stdout.contains("-UNRELEASED"));
    }
}

#[test]
fn test_loopback_is_rejected_as_reserved() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("127.0.0.1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reserved address (loopback)"));
}

#[test]
fn test_private_address_is_rejected_as_reserved() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("192.168.1.1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("private network"));
}

#[test]
fn test_documentation_address_is_rejected_as_reserved() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("192.0.2.1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("documentation"));
}

#[test]
fn test_ipv6_loopback_is_rejected_as_reserved() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.arg("::1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reserved address (loopback)"));
}

#[test]
fn test_unresolvable_input_is_invalid() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    // .invalid is reserved and never resolves, online or offline
    cmd.arg("definitely-not-a-real-host.invalid");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid input: neither a valid IP address nor a resolvable domain.",
    ));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");
    cmd.args(["--timeout-ms", "0", "8.8.8.8"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("timeout-ms must be greater than 0"));
}

#[test]
fn test_missing_target_is_usage_error() {
    let mut cmd = Command::cargo_bin("asnwho").expect("Failed to find asnwho binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
