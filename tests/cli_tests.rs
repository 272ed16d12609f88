//! # CLI Integration Tests / CLI 集成测试
//!
//! Runs the `suite-runner` binary end to end against scratch folders of
//! fake suite executables, asserting on the process exit code, the summary
//! output and the run log left on disk.
//!
//! 端到端运行 `suite-runner` 可执行文件，作用于伪造套件可执行文件的
//! 临时目录，断言进程退出码、摘要输出以及落盘的运行日志。

#![cfg(unix)]

mod common;

use assert_cmd::prelude::*;
use common::{suites_dir, write_suite};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn runner(dir: &std::path::Path, log: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.arg("--lang")
        .arg("en")
        .arg("-f")
        .arg(dir)
        .arg("-o")
        .arg(log);
    cmd
}

#[test]
fn all_passing_suites_exit_zero() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    write_suite(dir.path(), "b_tests", 0);
    let log = dir.path().join("testlog.log");

    runner(dir.path(), &log)
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("- a_tests"))
        .stdout(predicate::str::contains("- b_tests"));

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("BEGIN: a_tests"));
    assert!(contents.contains("END: b_tests | result: 0"));
}

#[test]
fn a_failing_suite_makes_the_run_fail() {
    let dir = suites_dir();
    write_suite(dir.path(), "bad_tests", 1);
    write_suite(dir.path(), "good_tests", 0);
    let log = dir.path().join("testlog.log");

    runner(dir.path(), &log)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("- bad_tests"))
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("- good_tests"));
}

#[test]
fn excluded_suites_are_skipped_not_run() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    write_suite(dir.path(), "b_tests", 1);
    let log = dir.path().join("testlog.log");

    // Excluding the failing suite leaves an all-green run.
    runner(dir.path(), &log)
        .arg("-e")
        .arg("b_tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIPPED"))
        .stdout(predicate::str::contains("- b_tests"));

    let contents = fs::read_to_string(&log).unwrap();
    assert!(!contents.contains("BEGIN: b_tests"));
}

#[test]
fn include_lists_flatten_and_report_missing_names() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    write_suite(dir.path(), "b_tests", 0);
    write_suite(dir.path(), "c_tests", 1);
    let log = dir.path().join("testlog.log");

    runner(dir.path(), &log)
        .arg("-i")
        .arg("a_tests,b_tests")
        .arg("-i")
        .arg("zz_tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT FOUND"))
        .stdout(predicate::str::contains("- zz_tests"));

    // c_tests was neither included nor executed.
    let contents = fs::read_to_string(&log).unwrap();
    assert!(!contents.contains("BEGIN: c_tests"));
}

#[test]
fn include_disables_exclude_with_a_warning() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    let log = dir.path().join("testlog.log");

    runner(dir.path(), &log)
        .arg("-i")
        .arg("a_tests")
        .arg("-e")
        .arg("a_tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude list will be ignored"))
        .stdout(predicate::str::contains("- a_tests"));

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("BEGIN: a_tests"));
}

#[test]
fn missing_folder_is_fatal() {
    let dir = suites_dir();
    let log = dir.path().join("testlog.log");

    runner(&dir.path().join("no-such-folder"), &log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));

    // Nothing ran, so no log was produced.
    assert!(!log.exists());
}

#[test]
fn empty_selection_still_succeeds() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 1);
    let log = dir.path().join("testlog.log");

    // Everything present is excluded; the failing suite never runs.
    runner(dir.path(), &log)
        .arg("-e")
        .arg("a_tests")
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIPPED"));
}

#[test]
fn lang_equals_form_selects_the_locale() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    let log = dir.path().join("testlog.log");

    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.arg("--lang=zh-CN")
        .arg("-f")
        .arg(dir.path())
        .arg("-o")
        .arg(&log);

    // The summary banner must come out in the requested language, proving
    // the pre-parse saw the = form and not just the two-token form.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("测试运行摘要"));
}

#[test]
fn stale_log_is_replaced_on_each_invocation() {
    let dir = suites_dir();
    write_suite(dir.path(), "a_tests", 0);
    let log = dir.path().join("testlog.log");
    fs::write(&log, "LEFTOVER FROM A PREVIOUS RUN\n").unwrap();

    runner(dir.path(), &log).assert().success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(!contents.contains("LEFTOVER"));
    assert!(contents.contains("BEGIN: a_tests"));
}
