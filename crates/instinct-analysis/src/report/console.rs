//! Console reporter: human-readable analysis output.

use chrono::{Local, TimeZone};
use instinct_core::constants::DISPLAY_TRUNCATE_CHARS;

use super::analysis::{AnalysisReport, RankedEntry};
use crate::patterns::text::ellipsize;

const RULE: &str = "============================================================";
const BAR_CHAR: char = '█';
const BAR_MAX: usize = 50;

/// Renders an `AnalysisReport` as plain text for the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        heading(&mut out, "历史记录分析");
        out.push('\n');
        out.push_str(&format!("总记录数: {}\n", report.total_records));

        if let Some(range) = report.time_range {
            out.push_str(&format!(
                "时间范围: {} 到 {}\n",
                local_minute(range.start_millis),
                local_minute(range.end_millis)
            ));
            out.push_str(&format!("持续时间: {:.1} 天\n", range.span_days()));
        }

        out.push_str(&format!("\n唯一命令数: {}\n", report.unique_commands));
        out.push_str("\n前 50 个最常用命令:\n");
        for entry in &report.top_commands {
            let bar: String = std::iter::repeat(BAR_CHAR)
                .take((entry.count / 2).min(BAR_MAX))
                .collect();
            out.push_str(&format!("  {:4}  {:<50} {}\n", entry.count, entry.label, bar));
        }

        out.push_str(&format!("\n项目数: {}\n", report.unique_projects));
        out.push_str("\n前 10 个项目:\n");
        ranked_lines(&mut out, &report.top_projects, false);

        out.push_str(&format!("\n总会话数: {}\n", report.unique_sessions));

        out.push('\n');
        heading(&mut out, "识别的模式");

        out.push_str(&format!("\nClaude Code 命令: {}\n", report.directive_total));
        out.push_str("前 20 个:\n");
        ranked_lines(&mut out, &report.top_directives, false);

        out.push_str(&format!("\n中文命令: {}\n", report.cjk_total));
        out.push_str("前 20 个:\n");
        ranked_lines(&mut out, &report.top_cjk, true);

        out.push('\n');
        heading(&mut out, "潜在的工作流模式");

        out.push_str("\n各项目的常用命令:\n");
        for workflow in &report.workflows {
            out.push_str(&format!("\n  {}:\n", workflow.project));
            for entry in &workflow.top_commands {
                out.push_str(&format!(
                    "    {:3}  {}\n",
                    entry.count,
                    ellipsize(&entry.label, DISPLAY_TRUNCATE_CHARS)
                ));
            }
        }

        out
    }
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{RULE}\n{title}\n{RULE}\n"));
}

fn ranked_lines(out: &mut String, entries: &[RankedEntry], truncate: bool) {
    for entry in entries {
        if truncate {
            out.push_str(&format!(
                "  {:4}  {}\n",
                entry.count,
                ellipsize(&entry.label, DISPLAY_TRUNCATE_CHARS)
            ));
        } else {
            out.push_str(&format!("  {:4}  {}\n", entry.count, entry.label));
        }
    }
}

/// Epoch milliseconds → local `YYYY-MM-DD HH:MM`.
fn local_minute(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}
