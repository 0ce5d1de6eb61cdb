//! End-to-end scenarios: history file → report, observations, instincts, export.

use std::io::Write;
use std::path::{Path, PathBuf};

use instinct_analysis::history::load_history;
use instinct_analysis::output::{build_instincts, InstinctWriter, ObservationLog, ObservationRecord, YamlExporter};
use instinct_analysis::patterns::{extract_patterns, Domain, PatternQuery, RuleVariant, Tally};
use instinct_analysis::report::AnalysisReport;
use instinct_core::config::ExtractionConfig;

const GIT_COMMIT_LINE: &str =
    r#"{"display":"git commit","timestamp":1700000000000,"project":"p1","sessionId":"s1"}"#;

fn write_history(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("history.jsonl");
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

fn extract_instinct_files(history: &Path, out: &Path) -> Vec<PathBuf> {
    let loaded = load_history(history).unwrap();
    let tally: Tally = loaded.records.iter().map(|r| r.display()).collect();
    let patterns = extract_patterns(
        &tally,
        loaded.len(),
        PatternQuery {
            min_occurrences: 3,
            limit: None,
            variant: RuleVariant::Extractor,
        },
    );
    InstinctWriter::new(out, 10)
        .write_all(&build_instincts(patterns))
        .unwrap()
}

#[test]
fn git_commit_three_times() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_history(dir.path(), &[GIT_COMMIT_LINE, GIT_COMMIT_LINE, GIT_COMMIT_LINE]);

    let loaded = load_history(&history).unwrap();
    let report = AnalysisReport::compute(&loaded.records);
    assert_eq!(report.total_records, 3);
    assert_eq!(report.unique_commands, 1);
    assert_eq!(report.top_commands[0].label, "git commit");
    assert_eq!(report.top_commands[0].count, 3);

    let out = dir.path().join("instincts");
    let files = extract_instinct_files(&history, &out);
    assert_eq!(files, vec![out.join("git-workflow-instincts.yaml")]);

    let text = std::fs::read_to_string(&files[0]).unwrap();
    assert!(text.contains("- `git commit` (使用 3 次, 置信度 95%)"));
    assert!(text.contains("domain: git-workflow"));
    assert!(text.contains("confidence: 0.95"));
}

#[test]
fn directive_below_threshold_is_only_reported() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_history(
        dir.path(),
        &[r#"{"display":"/compact"}"#, r#"{"display":"/compact"}"#, r#"{"display":"ls"}"#],
    );

    let loaded = load_history(&history).unwrap();
    let report = AnalysisReport::compute(&loaded.records);
    assert_eq!(report.directive_total, 2);
    assert_eq!(report.top_directives[0].label, "/compact");

    let out = dir.path().join("instincts");
    let files = extract_instinct_files(&history, &out);
    assert!(files.is_empty());
    assert!(!out.join("claude-commands-instincts.yaml").exists());
}

#[test]
fn empty_history_runs_every_component() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_history(dir.path(), &[]);
    let loaded = load_history(&history).unwrap();
    assert!(loaded.is_empty());

    let report = AnalysisReport::compute(&loaded.records);
    assert_eq!(report.total_records, 0);
    assert!(report.time_range.is_none());

    let obs = ObservationLog::new(dir.path().join("obs/observations.jsonl"));
    assert_eq!(obs.append(&loaded.records).unwrap(), 0);

    let files = extract_instinct_files(&history, &dir.path().join("instincts"));
    assert!(files.is_empty());

    let dest = dir.path().join("export.yaml");
    let exporter = YamlExporter::new(&ExtractionConfig::default());
    assert_eq!(exporter.write(&loaded.records, &history, &dest).unwrap(), 0);
    let body: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&dest).unwrap()).unwrap();
    assert!(body["instincts"].as_sequence().unwrap().is_empty());
}

#[test]
fn malformed_lines_do_not_disturb_valid_ones() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_history(
        dir.path(),
        &[
            r#"{"display":"one"}"#,
            "{broken",
            "",
            r#"{"display":"two"}"#,
            "42",
            r#"{"display":"three"}"#,
        ],
    );
    let loaded = load_history(&history).unwrap();
    let displays: Vec<&str> = loaded.records.iter().map(|r| r.display()).collect();
    assert_eq!(displays, vec!["one", "two", "three"]);
    assert_eq!(loaded.skipped, 2);
}

#[test]
fn observation_log_is_append_only() {
    let dir = tempfile::tempdir().unwrap();
    let history = write_history(dir.path(), &[GIT_COMMIT_LINE, r#"{"display":"ls"}"#]);
    let loaded = load_history(&history).unwrap();

    let path = dir.path().join("deep/nested/observations.jsonl");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{\"existing\":true}\n").unwrap();

    let log = ObservationLog::new(&path);
    for _ in 0..3 {
        assert_eq!(log.append(&loaded.records).unwrap(), 2);
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + 3 * 2);
    assert_eq!(lines[0], "{\"existing\":true}");
    for line in &lines[1..] {
        let obs: ObservationRecord = serde_json::from_str(line).unwrap();
        assert_eq!(obs.event, "user_command");
    }
    let first: ObservationRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(first.timestamp, "2023-11-14T22:13:20Z");
    assert_eq!(first.project, "p1");
}

#[test]
fn extractor_writes_one_file_per_domain() {
    let dir = tempfile::tempdir().unwrap();
    let mut lines = Vec::new();
    for cmd in ["cargo build", "npm test", "git push", "/review", "帮我重构", "ls -la"] {
        for _ in 0..3 {
            lines.push(format!(r#"{{"display":"{cmd}"}}"#));
        }
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let history = write_history(dir.path(), &refs);

    let out = dir.path().join("instincts");
    let files = extract_instinct_files(&history, &out);
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "deployment-instincts.yaml",
            "testing-instincts.yaml",
            "git-workflow-instincts.yaml",
            "claude-commands-instincts.yaml",
            "chinese-workflow-instincts.yaml",
            "general-instincts.yaml",
        ]
    );
    for domain in Domain::ALL {
        assert!(out.join(format!("{domain}-instincts.yaml")).exists());
    }
}
