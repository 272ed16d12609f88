//! # Suite Inventory Module / 套件清单模块
//!
//! Discovers the test-suite executables physically present in a directory.
//! The listing is a one-shot snapshot: it is taken once per invocation and
//! never refreshed while suites run.
//!
//! 发现目录中实际存在的测试套件可执行文件。
//! 清单是一次性快照：每次调用只读取一次，套件运行期间不会刷新。

use crate::core::models::SUITE_SUFFIX;
use crate::infra::t;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Lists the suites in `dir`, in directory order.
///
/// Only regular files whose names end in `_tests` qualify; subdirectories
/// are not descended into. A missing or unreadable directory is the one
/// fatal error of the whole tool, so it is surfaced here as a hard failure.
///
/// 按目录顺序列出 `dir` 中的套件。
/// 只有名称以 `_tests` 结尾的普通文件才符合条件，不递归进入子目录。
/// 目录缺失或不可读是整个工具唯一的致命错误，在此处作为硬失败抛出。
pub fn list_suites(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| t!("run.folder_unavailable", path = dir.display()).to_string())?;

    let mut suites = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| t!("run.folder_unavailable", path = dir.display()).to_string())?;
        let file_type = entry.file_type()?;
        if !file_type.is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(SUITE_SUFFIX) {
                suites.push(name);
            }
        }
    }

    Ok(suites)
}
