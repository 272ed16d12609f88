//! # Suite Execution Engine Module / 套件执行引擎模块
//!
//! Runs the selected suites strictly one at a time, in the order the
//! selector decided. Each suite gets BEGIN/END markers in the run log, its
//! console output appended in between, and an exit-code classification.
//! One suite's failure never aborts the rest of the sequence.
//!
//! 按选择器决定的顺序，严格地一次一个运行选中的套件。
//! 每个套件在运行日志中获得 BEGIN/END 标记，其控制台输出追加在两者之间，
//! 并按退出码分类。一个套件的失败绝不会中止后续序列。

use anyhow::Result;
use colored::*;

use crate::{
    core::models::{RunOutcome, RunnerOptions, SuiteResult},
    infra::{command, logfile::RunLog, server, t},
};

/// Executes every suite in `to_run`, sequentially, and partitions the
/// results by exit status.
///
/// The suite named in `options.server_suite` has the auxiliary test server
/// started immediately before it launches and stopped immediately after it
/// exits, whatever its exit status was. The stop is fire-and-forget; its
/// outcome never touches the pass/fail classification.
///
/// 顺序执行 `to_run` 中的每个套件，并按退出状态划分结果。
///
/// `options.server_suite` 所指的套件会在启动前立即开启辅助测试服务器，
/// 并在退出后立即关闭，无论其退出状态如何。关闭是即发即弃的，
/// 其结果绝不影响通过/失败的分类。
pub async fn run_suites(
    to_run: &[String],
    options: &RunnerOptions,
    log: &RunLog,
) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::default();

    for name in to_run {
        log.begin(name)?;

        let needs_server = *name == options.server_suite;
        if needs_server {
            server::start(options.server_port).await;
        }

        println!("{}", t!("run.begin_suite", name = name).blue());
        let result = launch_suite(name, options, log).await?;

        if needs_server {
            // Teardown happens even when the suite failed. The outcome is
            // already logged inside stop(); nothing to propagate.
            // 即使套件失败也要进行关闭。结果已在 stop() 内记录，无需传播。
            let _ = server::stop(options.server_port).await;
        }

        log.end(name, result.log_code())?;

        match &result {
            SuiteResult::Passed { .. } => {
                println!("{}", t!("run.suite_passed", name = name).green());
            }
            SuiteResult::Failed { code, .. } => {
                println!(
                    "{}",
                    t!("run.suite_failed", name = name, code = code.unwrap_or(-1)).red()
                );
            }
        }

        outcome.record(&result);
    }

    Ok(outcome)
}

/// Launches a single suite executable and folds its exit into a
/// `SuiteResult`. A spawn error (present in the listing but not runnable)
/// counts as a failure of that suite, keeping the run going.
///
/// 启动单个套件可执行文件并将其退出折叠为 `SuiteResult`。
/// 启动错误（在清单中存在但无法运行）算作该套件的失败，运行继续进行。
async fn launch_suite(name: &str, options: &RunnerOptions, log: &RunLog) -> Result<SuiteResult> {
    let executable = options.suites_dir.join(name);
    let mut cmd = tokio::process::Command::new(&executable);
    cmd.kill_on_drop(true);

    // Optional pass-through arguments are appended only when a value was
    // actually supplied; absent values add nothing to the argv.
    // 可选的透传参数只在确实提供了值时追加；缺省值不会加入 argv。
    if let Some(data_path) = &options.data_path {
        cmd.arg(format!("--data_path={data_path}"));
    }
    if let Some(resource_path) = &options.resource_path {
        cmd.arg(format!("--user_resource_path={resource_path}"));
    }

    let (status_res, output) = command::spawn_and_capture(cmd).await;

    if !output.is_empty() {
        log.append(&output)?;
    }

    match status_res {
        Ok(status) => Ok(SuiteResult::from_status(name, status)),
        Err(e) => {
            let message = t!("run.suite_spawn_failed", name = name, error = e).to_string();
            eprintln!("{}", message.red());
            log.append(&format!("{message}\n"))?;
            Ok(SuiteResult::Failed {
                name: name.to_string(),
                code: None,
            })
        }
    }
}
