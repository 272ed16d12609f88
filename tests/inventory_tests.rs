//! # Inventory Module Unit Tests / Inventory 模块单元测试
//!
//! Verifies suite discovery: the `_tests` suffix filter, the flat
//! (non-recursive) listing and the fatal missing-directory error.
//!
//! 验证套件发现：`_tests` 后缀过滤、平铺（非递归）列表
//! 以及目录缺失时的致命错误。

mod common;

use common::{sorted, suites_dir};
use std::fs;
use suite_runner::core::inventory::list_suites;

#[test]
fn lists_only_suffixed_files() {
    let dir = suites_dir();
    fs::write(dir.path().join("a_tests"), "").unwrap();
    fs::write(dir.path().join("b_tests"), "").unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();
    fs::write(dir.path().join("helper.sh"), "").unwrap();

    let suites = list_suites(dir.path()).unwrap();

    assert_eq!(
        sorted(&suites),
        vec!["a_tests".to_string(), "b_tests".to_string()]
    );
}

#[test]
fn does_not_recurse_into_subdirectories() {
    let dir = suites_dir();
    fs::write(dir.path().join("a_tests"), "").unwrap();
    // A directory matching the suffix is not an executable suite.
    fs::create_dir(dir.path().join("nested_tests")).unwrap();
    fs::create_dir(dir.path().join("more")).unwrap();
    fs::write(dir.path().join("more").join("hidden_tests"), "").unwrap();

    let suites = list_suites(dir.path()).unwrap();

    assert_eq!(suites, vec!["a_tests".to_string()]);
}

#[test]
fn empty_directory_yields_empty_inventory() {
    let dir = suites_dir();

    let suites = list_suites(dir.path()).unwrap();

    assert!(suites.is_empty());
}

#[test]
fn missing_directory_is_a_hard_error() {
    let dir = suites_dir();
    let gone = dir.path().join("does-not-exist");

    let result = list_suites(&gone);

    assert!(result.is_err());
}
