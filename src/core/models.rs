//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the suite
//! runner: the runner configuration, per-suite execution results and the
//! categorized summary handed to reporting.
//!
//! 此模块定义了整个套件运行器中使用的核心数据结构：
//! 运行器配置、每个套件的执行结果以及交给报告层的分类摘要。

use crate::core::selection::Selection;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Fixed naming convention for test-suite executables.
/// 测试套件可执行文件的固定命名约定。
pub const SUITE_SUFFIX: &str = "_tests";

/// The one suite that needs the auxiliary test server alive while it runs.
/// 运行期间需要辅助测试服务器存活的唯一套件。
pub const SERVER_SUITE: &str = "platform_tests";

/// Pre-agreed TCP port of the auxiliary test server.
/// 辅助测试服务器的预定 TCP 端口。
pub const SERVER_PORT: u16 = 34568;

/// Default path of the combined run log.
pub const DEFAULT_LOG_FILE: &str = "testlog.log";

/// Configuration for one orchestrator invocation. All knobs are explicit;
/// nothing is read from ambient globals.
///
/// 一次编排器调用的配置。所有参数都是显式的，不读取任何全局状态。
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Directory holding the `*_tests` executables.
    /// 存放 `*_tests` 可执行文件的目录。
    pub suites_dir: PathBuf,
    /// Path of the combined log file, recreated at the start of each run.
    /// 合并日志文件的路径，每次运行开始时重建。
    pub log_path: PathBuf,
    /// Optional value forwarded to every suite as `--data_path=<value>`.
    pub data_path: Option<String>,
    /// Optional value forwarded to every suite as `--user_resource_path=<value>`.
    pub resource_path: Option<String>,
    /// Name of the suite whose run window brackets the test server.
    pub server_suite: String,
    /// Port the test server listens on and is shut down through.
    pub server_port: u16,
}

impl RunnerOptions {
    /// Creates options with the stock server settings and log path.
    pub fn new(suites_dir: PathBuf) -> Self {
        Self {
            suites_dir,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            data_path: None,
            resource_path: None,
            server_suite: SERVER_SUITE.to_string(),
            server_port: SERVER_PORT,
        }
    }
}

/// The outcome of running a single suite executable.
///
/// 运行单个套件可执行文件的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteResult {
    /// The child exited with status zero.
    /// 子进程以零状态退出。
    Passed {
        /// Name of the executed suite / 执行的套件名称
        name: String,
    },
    /// The child exited non-zero, was killed by a signal, or could not be
    /// launched at all.
    ///
    /// 子进程以非零状态退出、被信号终止，或根本无法启动。
    Failed {
        /// Name of the executed suite / 执行的套件名称
        name: String,
        /// The exit code, if the child produced one. `None` means the child
        /// was terminated by a signal or never started.
        /// 退出码（若存在）。`None` 表示子进程被信号终止或从未启动。
        code: Option<i32>,
    },
}

impl SuiteResult {
    /// Classifies a wait(2) status. Anything that is not a clean zero exit
    /// counts as a failure, including signal-terminated children that carry
    /// no exit code.
    ///
    /// 对 wait(2) 状态进行分类。任何非零退出都算失败，
    /// 包括没有退出码的被信号终止的子进程。
    pub fn from_status(name: &str, status: ExitStatus) -> Self {
        if status.success() {
            SuiteResult::Passed {
                name: name.to_string(),
            }
        } else {
            SuiteResult::Failed {
                name: name.to_string(),
                code: status.code(),
            }
        }
    }

    /// Gets the name of the suite this result belongs to.
    pub fn name(&self) -> &str {
        match self {
            SuiteResult::Passed { name } => name,
            SuiteResult::Failed { name, .. } => name,
        }
    }

    /// Checks if the result is any kind of failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, SuiteResult::Failed { .. })
    }

    /// The exit code as written to the run log. Signal-terminated or
    /// unlaunchable children are recorded as -1.
    ///
    /// 写入运行日志的退出码。被信号终止或无法启动的子进程记录为 -1。
    pub fn log_code(&self) -> i32 {
        match self {
            SuiteResult::Passed { .. } => 0,
            SuiteResult::Failed { code, .. } => code.unwrap_or(-1),
        }
    }
}

/// The two execution categories produced by the executor. Together they
/// cover exactly the suites that were selected to run.
///
/// 执行器产生的两个执行类别。两者合起来恰好覆盖所有被选中运行的套件。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Suites that exited with status zero, in execution order.
    pub passed: Vec<String>,
    /// Suites that exited non-zero or died on a signal, in execution order.
    pub failed: Vec<String>,
}

impl RunOutcome {
    /// Files a single suite result into the matching category.
    pub fn record(&mut self, result: &SuiteResult) {
        if result.is_failure() {
            self.failed.push(result.name().to_string());
        } else {
            self.passed.push(result.name().to_string());
        }
    }
}

/// The final, four-way categorization of one invocation, merging what the
/// selector decided with what the executor observed.
///
/// 一次调用的最终四类结果，合并了选择器的决定与执行器的观察。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub skipped: Vec<String>,
    pub not_found: Vec<String>,
}

impl RunSummary {
    /// Pure merge of the selection and execution halves. No classification
    /// happens here; both inputs are already partitioned.
    ///
    /// 对选择与执行两部分的纯合并。此处不做任何分类，两个输入均已分区。
    pub fn compose(selection: Selection, outcome: RunOutcome) -> Self {
        Self {
            passed: outcome.passed,
            failed: outcome.failed,
            skipped: selection.skipped,
            not_found: selection.not_found,
        }
    }

    /// Checks whether the run should be considered unsuccessful overall.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
