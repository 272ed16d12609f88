//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the final categorized summary of a run. Each non-empty category
//! appears as an upper-case header followed by one line per suite, so the
//! output stays grep-friendly on build servers.
//!
//! 打印一次运行的最终分类摘要。每个非空类别以大写标题开头，
//! 其后每个套件一行，使输出在构建服务器上便于 grep。

use crate::core::models::RunSummary;
use crate::infra::t;
use colored::*;

/// Prints the four result categories in the fixed order
/// failed, skipped, passed, not-found. Empty categories are omitted.
///
/// 按固定顺序打印四个结果类别：失败、跳过、通过、未找到。
/// 空类别被省略。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Run Summary ---
///
/// FAILED
/// - a_tests
///
/// PASSED
/// - b_tests
/// - c_tests
/// ```
pub fn print_summary(summary: &RunSummary, locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    print_category(&t!("report.failed", locale = locale).red().bold(), &summary.failed);
    print_category(
        &t!("report.skipped", locale = locale).yellow().bold(),
        &summary.skipped,
    );
    print_category(
        &t!("report.passed", locale = locale).green().bold(),
        &summary.passed,
    );
    print_category(
        &t!("report.not_found", locale = locale).cyan().bold(),
        &summary.not_found,
    );
}

/// Prints one category header and its suites, or nothing when empty.
fn print_category(header: &ColoredString, suites: &[String]) {
    if suites.is_empty() {
        return;
    }

    println!("\n{header}");
    for suite in suites {
        println!("- {suite}");
    }
}
