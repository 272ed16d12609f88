//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner tool,
//! a sequential orchestrator for directories of prebuilt test-suite
//! executables.
//!
//! 此库为 Suite Runner 工具提供核心功能，
//! 这是一个用于预编译测试套件可执行文件目录的顺序编排器。
//!
//! ## Modules / 模块
//!
//! - `core` - Inventory, selection and the sequential execution engine
//! - `infra` - Infrastructure services: process capture, run log, test server
//! - `reporting` - Categorized result reporting
//! - `cli` - Command-line interface
//!
//! - `core` - 清单、选择与顺序执行引擎
//! - `infra` - 基础设施服务：进程捕获、运行日志、测试服务器
//! - `reporting` - 分类结果报告
//! - `cli` - 命令行接口

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::models;
pub use core::selection;
pub use core::execution;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
