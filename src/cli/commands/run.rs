//! # Run Command Module / 运行命令模块
//!
//! The top-level command of the tool: takes the parsed invocation options,
//! snapshots the suite inventory, resolves the selection, drives the
//! sequential executor and hands the merged result to reporting.
//!
//! 工具的顶层命令：接收解析后的调用选项，为套件清单生成快照，
//! 解析选择结果，驱动顺序执行器，并将合并结果交给报告层。

use anyhow::{Context, Result};
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

use crate::{
    core::{
        execution::run_suites,
        inventory,
        models::{RunOutcome, RunSummary, RunnerOptions},
        selection,
    },
    infra::{logfile::RunLog, t},
    reporting::console::print_summary,
};

/// Executes one full orchestrator invocation.
///
/// Only an unreadable suites folder (or an unwritable log path) is fatal;
/// everything else ends up in the four summary categories. The returned
/// error doubles as the nonzero process exit code when any suite failed.
///
/// 执行一次完整的编排器调用。
/// 只有不可读的套件目录（或不可写的日志路径）是致命的；
/// 其余一切都归入四个摘要类别。当有套件失败时，
/// 返回的错误同时充当非零的进程退出码。
pub async fn execute(
    options: RunnerOptions,
    include: Vec<String>,
    exclude: Vec<String>,
    shuffle: bool,
    locale: &str,
) -> Result<()> {
    if !include.is_empty() && !exclude.is_empty() {
        println!(
            "{}",
            t!("run.include_overrides_exclude", locale = locale).yellow()
        );
    }

    let suites_dir = fs::canonicalize(&options.suites_dir).with_context(|| {
        t!(
            "run.folder_unavailable",
            locale = locale,
            path = options.suites_dir.display()
        )
        .to_string()
    })?;
    let options = RunnerOptions {
        suites_dir,
        ..options
    };

    // The log is truncated before anything runs; a stale file from the
    // previous invocation must never leak into this one.
    // 日志在任何运行之前被清空；上次调用的陈旧文件绝不能泄漏到本次。
    let log = RunLog::create(&options.log_path)?;

    println!(
        "{}",
        t!(
            "run.scanning_folder",
            locale = locale,
            path = options.suites_dir.display()
        )
    );
    let inventory = inventory::list_suites(&options.suites_dir)?;

    let mut rng = StdRng::from_entropy();
    let selection = selection::select(&inventory, &include, &exclude, shuffle, &mut rng);

    let outcome = if selection.to_run.is_empty() {
        println!("{}", t!("run.nothing_to_run", locale = locale));
        RunOutcome::default()
    } else {
        run_suites(&selection.to_run, &options, &log).await?
    };

    let summary = RunSummary::compose(selection, outcome);
    print_summary(&summary, locale);

    if summary.has_failures() {
        anyhow::bail!(
            "{}",
            t!(
                "run.suites_failed",
                locale = locale,
                count = summary.failed.len()
            )
        );
    }
    Ok(())
}
