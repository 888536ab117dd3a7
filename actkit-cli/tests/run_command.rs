//! Integration tests for the `run` command.
//!
//! These tests spawn `sh`, so they only run on Unix hosts.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_run_success_passes_output_through() {
    TestEnv::new()
        .command_bare()
        .args(["run", "--", "sh", "-c", "echo out; echo err >&2"])
        .assert()
        .success()
        .stdout("out\n")
        .stderr(predicate::str::contains("err\n"))
        .stderr(predicate::str::contains("last").not());
}

#[test]
fn test_run_propagates_exit_code() {
    TestEnv::new()
        .command_bare()
        .args(["run", "--", "sh", "-c", "exit 7"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("'sh' exited with status 7"));
}

#[test]
fn test_run_failure_reports_tail() {
    TestEnv::new()
        .command_bare()
        .args([
            "run",
            "--",
            "sh",
            "-c",
            "echo compiling; echo 'error: boom' >&2; exit 3",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("----- last 65536 bytes of output -----"))
        .stderr(predicate::str::contains("error: boom"))
        .stderr(predicate::str::contains("----- end of output -----"));
}

#[test]
fn test_run_tail_is_bounded() {
    // 3000 bytes of 'a' then a marker; a 1 KiB tail keeps only the end.
    let script = "printf 'a%.0s' $(seq 1 3000); echo; echo MARKER; exit 1";
    let env = TestEnv::new();
    env.command()
        .args(["run", "--tail-kb", "1", "--output", "tail", "--", "sh", "-c", script])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("last 1024 bytes"));

    let contents = env.output_contents();
    assert!(contents.starts_with("tail<<ACTKIT_EOF\n"));
    assert!(contents.contains("MARKER\nACTKIT_EOF\n"));
    // Header, tail and delimiter lines; the tail itself is at most 1 KiB.
    assert!(contents.len() < 1024 + 64, "tail too long: {}", contents.len());
}

#[test]
fn test_run_tail_size_from_env() {
    TestEnv::new()
        .command_bare()
        .env("ACTKIT_TAIL_KB", "2")
        .args(["run", "--", "sh", "-c", "echo x; exit 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last 2048 bytes"));
}

#[test]
fn test_run_invalid_tail_env_uses_default() {
    TestEnv::new()
        .command_bare()
        .env("ACTKIT_TAIL_KB", "-5")
        .args(["run", "--", "sh", "-c", "echo x; exit 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("last 65536 bytes"));
}

#[test]
fn test_run_zero_tail_rejected() {
    TestEnv::new()
        .command_bare()
        .args(["run", "--tail-kb", "0", "--", "true"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_run_output_published_on_success() {
    let env = TestEnv::new();
    env.command()
        .args(["run", "--output", "log", "--", "sh", "-c", "echo done"])
        .assert()
        .success();

    assert_eq!(env.output_contents(), "log=done\n");
}

#[test]
fn test_run_quiet_suppresses_tail() {
    TestEnv::new()
        .command_bare()
        .args(["--quiet", "run", "--", "sh", "-c", "echo x; exit 1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("last").not());
}

#[test]
fn test_run_missing_program_is_io_error() {
    TestEnv::new()
        .command_bare()
        .args(["run", "--", "actkit-definitely-not-a-program"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("actkit-definitely-not-a-program"));
}
