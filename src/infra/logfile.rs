//! # Run Log Module / 运行日志模块
//!
//! The single append-only text sink shared by one invocation. The file is
//! deleted and recreated when the run starts; after that the orchestrator
//! only ever appends: a BEGIN marker before each suite, the suite's own
//! output, and an END marker carrying the exit code.
//!
//! 一次调用共享的唯一追加式文本日志。运行开始时删除并重建该文件；
//! 此后编排器只做追加：每个套件前的 BEGIN 标记、套件自身的输出，
//! 以及带退出码的 END 标记。

use crate::infra::t;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to the combined log file of one run.
/// 一次运行的合并日志文件句柄。
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Starts a fresh log at `path`, removing any leftover from a previous
    /// run. A missing old file is not an error.
    ///
    /// 在 `path` 处开始一份新日志，删除上次运行的遗留文件。
    /// 旧文件不存在不算错误。
    pub fn create(path: &Path) -> Result<Self> {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| t!("run.log_unavailable", path = path.display()).to_string());
            }
        }

        let log = Self {
            path: path.to_path_buf(),
        };
        // Touch the file up front so an unwritable path fails before any
        // suite runs, not in the middle of the sequence.
        // 预先创建文件，使不可写路径在任何套件运行之前就失败，
        // 而不是在序列中途失败。
        log.append("")?;
        Ok(log)
    }

    /// Writes the begin-of-suite marker.
    pub fn begin(&self, suite: &str) -> Result<()> {
        self.append(&format!("\nBEGIN: {suite}\n"))
    }

    /// Writes the end-of-suite marker with the suite's exit code.
    pub fn end(&self, suite: &str, code: i32) -> Result<()> {
        self.append(&format!("\nEND: {suite} | result: {code}\n"))
    }

    /// Appends raw text, typically a suite's captured console output.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| {
                t!("run.log_unavailable", path = self.path.display()).to_string()
            })?;
        file.write_all(text.as_bytes())
            .with_context(|| t!("run.log_unavailable", path = self.path.display()).to_string())
    }

    /// The location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
