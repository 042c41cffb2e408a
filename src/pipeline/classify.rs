//! Subject classification
//!
//! Maps the free-text subject answer onto the handful of course options the
//! scheduling widget offers. Rules are tried in order and the first rule with
//! any matching pattern wins; nothing matching falls back to a fixed label.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::Result;

pub const LABEL_BIO: &str = "AP Bio";
pub const LABEL_CALCULUS: &str = "AP Calculus";
pub const LABEL_SAT: &str = "SAT Practice";

/// One classification rule: any pattern matching selects `label`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRule {
    pub label: String,

    /// Regular expressions, matched case-insensitively anywhere in the text
    pub patterns: Vec<String>,
}

impl SubjectRule {
    pub fn new(label: &str, patterns: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Classification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Label used when no rule matches
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,

    /// Rules in priority order
    #[serde(default = "default_rules")]
    pub rules: Vec<SubjectRule>,
}

fn default_fallback_label() -> String {
    LABEL_SAT.to_string()
}

fn default_rules() -> Vec<SubjectRule> {
    vec![
        SubjectRule::new(LABEL_BIO, &[r"ap\s*bio", r"ap\s*biology", "biology", "bio"]),
        SubjectRule::new(LABEL_CALCULUS, &[r"ap\s*calc", "calculus", "ap calculus"]),
        SubjectRule::new(LABEL_SAT, &["sat", "psat"]),
    ]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fallback_label: default_fallback_label(),
            rules: default_rules(),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    pattern: Regex,
}

/// Compiled classifier, cheap to share and reuse
#[derive(Debug, Clone)]
pub struct SubjectClassifier {
    rules: Vec<CompiledRule>,
    fallback_label: String,
}

impl SubjectClassifier {
    /// Compile the configured rules.
    ///
    /// The patterns of one rule are joined into a single alternation.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let rules = config
            .rules
            .iter()
            .filter(|rule| !rule.patterns.is_empty())
            .map(|rule| -> Result<CompiledRule> {
                let alternation = rule
                    .patterns
                    .iter()
                    .map(|p| format!("(?:{})", p))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = RegexBuilder::new(&alternation)
                    .case_insensitive(true)
                    .build()?;
                Ok(CompiledRule {
                    label: rule.label.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            fallback_label: config.fallback_label.clone(),
        })
    }

    /// Label of the first matching rule, or `None` when nothing matches.
    pub fn matching_label(&self, subject: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(subject))
            .map(|rule| rule.label.as_str())
    }

    /// Classify `subject`; always yields a label.
    pub fn classify(&self, subject: &str) -> &str {
        match self.matching_label(subject) {
            Some(label) => {
                tracing::debug!(subject, label, "subject matched rule");
                label
            }
            None => {
                tracing::debug!(subject, fallback = %self.fallback_label, "no subject rule matched");
                &self.fallback_label
            }
        }
    }
}

impl Default for SubjectClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default()).expect("built-in subject patterns are valid")
    }
}
