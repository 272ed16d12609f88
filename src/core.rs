//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including data models, suite discovery, selection and the
//! sequential execution engine.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括数据模型、套件发现、选择与顺序执行引擎。

pub mod models;
pub mod inventory;
pub mod selection;
pub mod execution;

// Re-exports
pub use models::{RunOutcome, RunSummary, RunnerOptions, SuiteResult};
pub use selection::{Selection, select};
