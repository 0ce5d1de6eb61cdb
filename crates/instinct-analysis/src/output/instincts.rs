//! Domain-clustered instinct descriptor files.
//!
//! Frequent commands are grouped by domain; each group becomes one
//! `<domain>-instincts.yaml` file with a frontmatter header, ranked trigger
//! lines, a fixed action block, and summary statistics.

use std::path::PathBuf;

use instinct_core::constants::INSTINCT_SOURCE;
use instinct_core::errors::OutputError;
use tracing::{debug, info};

use super::ensure_dir;
use crate::patterns::{CommandPattern, Domain};

/// All patterns sharing one domain, sorted by descending confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct InstinctDocument {
    pub domain: Domain,
    pub patterns: Vec<CommandPattern>,
}

impl InstinctDocument {
    pub fn id(&self) -> String {
        format!("{}-patterns", self.domain)
    }

    pub fn file_name(&self) -> String {
        format!("{}-instincts.yaml", self.domain)
    }

    pub fn total_occurrences(&self) -> usize {
        self.patterns.iter().map(|p| p.count).sum()
    }

    pub fn mean_confidence(&self) -> f64 {
        if self.patterns.is_empty() {
            return 0.0;
        }
        self.patterns.iter().map(|p| p.confidence).sum::<f64>() / self.patterns.len() as f64
    }

    /// Render the descriptor with at most `max_trigger_lines` trigger lines.
    pub fn render(&self, max_trigger_lines: usize) -> String {
        let domain = self.domain;
        let mean = self.mean_confidence();
        let mut out = format!(
            "---\n\
             id: {id}\n\
             trigger: when user uses commands in {domain} domain\n\
             confidence: {mean:.2}\n\
             domain: {domain}\n\
             source: {INSTINCT_SOURCE}\n\
             ---\n\
             ## Context\n\
             \n\
             用户在 {domain} 领域中有 {n} 种常用命令模式。\n\
             \n\
             ## Trigger Patterns\n\
             \n\
             用户经常使用以下命令:\n\
             \n",
            id = self.id(),
            n = self.patterns.len(),
        );

        for p in self.patterns.iter().take(max_trigger_lines) {
            out.push_str(&format!(
                "- `{}` (使用 {} 次, 置信度 {})\n",
                p.command,
                p.count,
                percent(p.confidence)
            ));
        }

        out.push_str(&format!(
            "\n\
             ## Action\n\
             \n\
             当用户请求 {domain} 相关操作时:\n\
             \n\
             1. 识别具体的命令模式\n\
             2. 根据历史使用频率预测下一步操作\n\
             3. 提供符合该领域惯例的建议\n\
             4. 考虑用户在此领域的常用工作流\n\
             \n\
             ## Statistics\n\
             \n\
             - 总命令数: {n}\n\
             - 总使用次数: {total}\n\
             - 平均置信度: {mean_pct}\n",
            n = self.patterns.len(),
            total = self.total_occurrences(),
            mean_pct = percent(mean),
        ));

        out
    }
}

/// `0.95` → `95%`.
fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Group patterns by domain in first-seen order, each group sorted by
/// descending confidence (stable, so equal scores keep tally order).
pub fn build_instincts(patterns: Vec<CommandPattern>) -> Vec<InstinctDocument> {
    let mut docs: Vec<InstinctDocument> = Vec::new();
    for pattern in patterns {
        match docs.iter_mut().find(|d| d.domain == pattern.domain) {
            Some(doc) => doc.patterns.push(pattern),
            None => docs.push(InstinctDocument {
                domain: pattern.domain,
                patterns: vec![pattern],
            }),
        }
    }
    for doc in &mut docs {
        doc.patterns
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    }
    docs
}

/// Writes instinct documents into one directory, overwriting same-named files.
#[derive(Debug, Clone)]
pub struct InstinctWriter {
    dir: PathBuf,
    max_trigger_lines: usize,
}

impl InstinctWriter {
    pub fn new(dir: impl Into<PathBuf>, max_trigger_lines: usize) -> Self {
        Self {
            dir: dir.into(),
            max_trigger_lines,
        }
    }

    /// Write every document. Returns the written paths in document order.
    pub fn write_all(&self, docs: &[InstinctDocument]) -> Result<Vec<PathBuf>, OutputError> {
        ensure_dir(&self.dir)?;

        let mut written = Vec::with_capacity(docs.len());
        for doc in docs {
            let path = self.dir.join(doc.file_name());
            std::fs::write(&path, doc.render(self.max_trigger_lines)).map_err(|source| {
                OutputError::Write {
                    path: path.clone(),
                    source,
                }
            })?;
            debug!(path = %path.display(), domain = %doc.domain, patterns = doc.patterns.len(), "instinct written");
            written.push(path);
        }

        info!(dir = %self.dir.display(), files = written.len(), "instincts extracted");
        Ok(written)
    }
}
