//! Orchestration: resolve config, load history once, run selected actions
//! in the order analyze → observations → instincts → YAML.

use anyhow::Context;
use instinct_analysis::history::{load_history, LoadedHistory};
use instinct_analysis::output::{build_instincts, InstinctWriter, ObservationLog, YamlExporter};
use instinct_analysis::patterns::{extract_patterns, PatternQuery, RuleVariant, Tally};
use instinct_analysis::report::{AnalysisReport, ConsoleReporter};
use instinct_core::config::{InstinctConfig, ResolvedPaths};
use instinct_core::errors::InstinctError;

use crate::cli::Cli;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = InstinctConfig::load(&cwd, Some(&cli.overrides())).map_err(InstinctError::from)?;
    let paths = config.resolve_paths().map_err(InstinctError::from)?;

    println!("正在加载 {}...", paths.history_file.display());
    let history = load_history(&paths.history_file).map_err(InstinctError::from)?;
    println!("已加载 {} 条记录\n", history.len());

    let actions = cli.actions();
    if !actions.any() {
        println!("{}", Cli::help_text());
        return Ok(());
    }
    tracing::info!(?actions, skipped = history.skipped, "running actions");

    if actions.analyze {
        let report = AnalysisReport::compute(&history.records);
        println!("{}", ConsoleReporter::new().render(&report));
    }

    if actions.to_observations {
        println!("转换为观察数据...");
        convert_to_observations(&history, &paths)?;
        println!();
    }

    if actions.extract_instincts {
        println!("提取 Instincts...");
        extract_instincts(&history, &paths, &config)?;
        println!();
    }

    if actions.export_yaml {
        println!("导出为 YAML...");
        let exporter = YamlExporter::new(&config.extraction);
        exporter
            .write(&history.records, &history.source, &paths.export_file)
            .map_err(InstinctError::from)?;
        println!("✅ 已导出到 {}", paths.export_file.display());
        println!();
    }

    Ok(())
}

fn convert_to_observations(
    history: &LoadedHistory,
    paths: &ResolvedPaths,
) -> Result<(), InstinctError> {
    let log = ObservationLog::new(&paths.observations_file);
    let written = log.append(&history.records)?;
    println!("✅ 已写入 {written} 条观察记录到 {}", log.path().display());
    Ok(())
}

fn extract_instincts(
    history: &LoadedHistory,
    paths: &ResolvedPaths,
    config: &InstinctConfig,
) -> Result<(), InstinctError> {
    let tally: Tally = history.records.iter().map(|r| r.display()).collect();
    let query = PatternQuery {
        min_occurrences: config.extraction.effective_min_occurrences(),
        limit: None,
        variant: RuleVariant::Extractor,
    };
    let docs = build_instincts(extract_patterns(&tally, history.len(), query));

    let writer = InstinctWriter::new(
        &paths.instincts_dir,
        config.extraction.effective_max_trigger_lines(),
    );
    let written = writer.write_all(&docs)?;
    for path in &written {
        println!("✅ 已创建 Instinct: {}", path.display());
    }
    println!("\n总共创建了 {} 个 Instinct 文件", written.len());
    Ok(())
}
