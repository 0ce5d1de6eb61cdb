//! Frequency statistics over loaded history records.

use instinct_core::constants::{
    REPORT_TOP_COMMANDS, REPORT_TOP_PROJECTS, REPORT_TOP_SPECIAL, REPORT_WORKFLOW_COMMANDS,
    REPORT_WORKFLOW_PROJECTS,
};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::history::HistoryRecord;
use crate::patterns::domain::DIRECTIVE_PREFIX;
use crate::patterns::text::contains_cjk;
use crate::patterns::Tally;

/// A label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub count: usize,
}

/// Earliest and latest non-zero timestamps, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start_millis: i64,
    pub end_millis: i64,
}

impl TimeRange {
    pub fn span_days(&self) -> f64 {
        (self.end_millis - self.start_millis) as f64 / 1000.0 / 86_400.0
    }
}

/// One project's most frequent commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectWorkflow {
    pub project: String,
    pub command_count: usize,
    pub top_commands: Vec<RankedEntry>,
}

/// Everything the analysis report prints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_records: usize,
    pub time_range: Option<TimeRange>,
    pub unique_commands: usize,
    pub top_commands: Vec<RankedEntry>,
    pub unique_projects: usize,
    pub top_projects: Vec<RankedEntry>,
    pub unique_sessions: usize,
    pub directive_total: usize,
    pub top_directives: Vec<RankedEntry>,
    pub cjk_total: usize,
    pub top_cjk: Vec<RankedEntry>,
    pub workflows: Vec<ProjectWorkflow>,
}

impl AnalysisReport {
    /// Compute the report. Absent strings count as `""` for distinct totals.
    pub fn compute(records: &[HistoryRecord]) -> Self {
        let time_range = records
            .iter()
            .filter_map(HistoryRecord::timestamp_millis)
            .fold(None, |acc: Option<TimeRange>, ts| {
                Some(match acc {
                    None => TimeRange {
                        start_millis: ts,
                        end_millis: ts,
                    },
                    Some(r) => TimeRange {
                        start_millis: r.start_millis.min(ts),
                        end_millis: r.end_millis.max(ts),
                    },
                })
            });

        let commands: Tally = records.iter().map(HistoryRecord::display).collect();
        let projects: Tally = records.iter().map(HistoryRecord::project).collect();
        let sessions: Tally = records.iter().map(HistoryRecord::session_id).collect();

        let directives: Tally = records
            .iter()
            .map(HistoryRecord::display)
            .filter(|d| d.starts_with(DIRECTIVE_PREFIX))
            .collect();
        let cjk: Tally = records
            .iter()
            .map(HistoryRecord::display)
            .filter(|d| contains_cjk(d))
            .collect();

        Self {
            total_records: records.len(),
            time_range,
            unique_commands: commands.distinct(),
            top_commands: ranked(&commands, REPORT_TOP_COMMANDS),
            unique_projects: projects.distinct(),
            top_projects: ranked(&projects, REPORT_TOP_PROJECTS),
            unique_sessions: sessions.distinct(),
            directive_total: directives.total(),
            top_directives: ranked(&directives, REPORT_TOP_SPECIAL),
            cjk_total: cjk.total(),
            top_cjk: ranked(&cjk, REPORT_TOP_SPECIAL),
            workflows: project_workflows(records),
        }
    }
}

fn ranked(tally: &Tally<'_>, limit: usize) -> Vec<RankedEntry> {
    tally
        .most_common(Some(limit))
        .into_iter()
        .map(|(label, count)| RankedEntry {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Projects with the most commands (ties by first encounter), each with its
/// top commands. Records missing either a project or a command are ignored.
fn project_workflows(records: &[HistoryRecord]) -> Vec<ProjectWorkflow> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_project: FxHashMap<&str, Tally<'_>> = FxHashMap::default();

    for record in records {
        let (project, command) = (record.project(), record.display());
        if project.is_empty() || command.is_empty() {
            continue;
        }
        by_project
            .entry(project)
            .or_insert_with(|| {
                order.push(project);
                Tally::new()
            })
            .add(command);
    }

    let mut projects: Vec<(&str, &Tally<'_>)> = order
        .iter()
        .filter_map(|p| by_project.get(p).map(|t| (*p, t)))
        .collect();
    projects.sort_by(|a, b| b.1.total().cmp(&a.1.total()));

    projects
        .into_iter()
        .take(REPORT_WORKFLOW_PROJECTS)
        .map(|(project, tally)| ProjectWorkflow {
            project: project.to_string(),
            command_count: tally.total(),
            top_commands: ranked(tally, REPORT_WORKFLOW_COMMANDS),
        })
        .collect()
}
