//! Heuristic domain classification.
//!
//! One rule table, two named variants. The extractor variant knows about
//! `branch`, `mock`, and a deployment rule; the exporter variant does not.
//! Both are evaluated first-match-wins in the same order:
//! directive prefix → git → testing → deployment → CJK → general.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::contains_cjk;

/// Closed set of heuristic domain tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    ClaudeCommands,
    GitWorkflow,
    Testing,
    Deployment,
    ChineseWorkflow,
    General,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::ClaudeCommands,
        Domain::GitWorkflow,
        Domain::Testing,
        Domain::Deployment,
        Domain::ChineseWorkflow,
        Domain::General,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ClaudeCommands => "claude-commands",
            Self::GitWorkflow => "git-workflow",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::ChineseWorkflow => "chinese-workflow",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prefix marking a slash-command directive.
pub const DIRECTIVE_PREFIX: char = '/';

/// Keyword sets for one classifier variant.
#[derive(Debug)]
pub struct DomainRules {
    /// Versioned variant name.
    pub name: &'static str,
    pub git_keywords: &'static [&'static str],
    pub testing_keywords: &'static [&'static str],
    /// `None` disables the deployment rule entirely.
    pub deployment_keywords: Option<&'static [&'static str]>,
}

pub static EXTRACTOR_RULES: DomainRules = DomainRules {
    name: "extractor-v1",
    git_keywords: &["git", "commit", "push", "pull", "branch"],
    testing_keywords: &["test", "spec", "mock"],
    deployment_keywords: Some(&["部署", "发布", "build"]),
};

pub static EXPORTER_RULES: DomainRules = DomainRules {
    name: "exporter-v1",
    git_keywords: &["git", "commit", "push", "pull"],
    testing_keywords: &["test", "spec"],
    deployment_keywords: None,
};

impl DomainRules {
    /// Classify `command`. Total: every input maps to exactly one domain.
    pub fn classify(&self, command: &str) -> Domain {
        if command.starts_with(DIRECTIVE_PREFIX) {
            return Domain::ClaudeCommands;
        }
        if contains_any(command, self.git_keywords) {
            return Domain::GitWorkflow;
        }
        if contains_any(command, self.testing_keywords) {
            return Domain::Testing;
        }
        if let Some(keywords) = self.deployment_keywords {
            if contains_any(command, keywords) {
                return Domain::Deployment;
            }
        }
        if contains_cjk(command) {
            return Domain::ChineseWorkflow;
        }
        Domain::General
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Which rule table a caller uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleVariant {
    /// Instinct file extraction.
    Extractor,
    /// YAML export.
    Exporter,
}

impl RuleVariant {
    pub fn rules(self) -> &'static DomainRules {
        match self {
            Self::Extractor => &EXTRACTOR_RULES,
            Self::Exporter => &EXPORTER_RULES,
        }
    }
}

/// Classify `command` under `variant`.
pub fn classify(command: &str, variant: RuleVariant) -> Domain {
    variant.rules().classify(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_prefix_wins_over_keywords() {
        assert_eq!(classify("/commit", RuleVariant::Extractor), Domain::ClaudeCommands);
        assert_eq!(classify("/compact", RuleVariant::Exporter), Domain::ClaudeCommands);
    }

    #[test]
    fn git_before_testing() {
        assert_eq!(classify("git test", RuleVariant::Exporter), Domain::GitWorkflow);
        assert_eq!(classify("run the spec", RuleVariant::Exporter), Domain::Testing);
    }

    #[test]
    fn variants_resolve_to_named_rule_sets() {
        assert_eq!(RuleVariant::Extractor.rules().name, "extractor-v1");
        assert_eq!(RuleVariant::Exporter.rules().name, "exporter-v1");
    }

    #[test]
    fn variants_diverge_on_extractor_only_keywords() {
        assert_eq!(classify("new branch", RuleVariant::Extractor), Domain::GitWorkflow);
        assert_eq!(classify("new branch", RuleVariant::Exporter), Domain::General);

        assert_eq!(classify("mock the db", RuleVariant::Extractor), Domain::Testing);
        assert_eq!(classify("mock the db", RuleVariant::Exporter), Domain::General);

        assert_eq!(classify("cargo build", RuleVariant::Extractor), Domain::Deployment);
        assert_eq!(classify("cargo build", RuleVariant::Exporter), Domain::General);

        assert_eq!(classify("部署到生产", RuleVariant::Extractor), Domain::Deployment);
        assert_eq!(classify("部署到生产", RuleVariant::Exporter), Domain::ChineseWorkflow);
    }

    #[test]
    fn cjk_then_general() {
        assert_eq!(classify("帮我看看这个问题", RuleVariant::Extractor), Domain::ChineseWorkflow);
        assert_eq!(classify("ls -la", RuleVariant::Extractor), Domain::General);
        assert_eq!(classify("", RuleVariant::Extractor), Domain::General);
    }

    #[test]
    fn keyword_match_is_case_sensitive_substring() {
        assert_eq!(classify("Git status", RuleVariant::Exporter), Domain::General);
        assert_eq!(classify("digit", RuleVariant::Exporter), Domain::GitWorkflow);
    }

    #[test]
    fn serde_uses_tag_names() {
        for domain in Domain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.name()));
        }
    }
}
