//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of a finished run: the four
//! result categories are printed as colored, banner-separated lists.
//!
//! 此模块负责展示已完成的运行：四个结果类别以彩色、
//! 带横幅分隔的列表形式打印。

pub mod console;

// Re-export common reporting functions
pub use console::print_summary;
