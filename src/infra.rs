//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Runner,
//! including child-process capture, the append-only run log and the
//! auxiliary test server.
//!
//! 此模块为 Suite Runner 提供基础设施服务，
//! 包括子进程捕获、追加式运行日志和辅助测试服务器。

pub mod command;
pub mod logfile;
pub mod server;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
