//! Result reporting: colored status lines or a JSON document

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::compare::Reconciliation;
use crate::error::Result;

/// How the report is written to stdout
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Summary of one reconciliation run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub success: bool,
    pub pattern: String,
    pub pods_file: String,
    pub log_file: String,
    /// Running pods
    pub expected: Vec<String>,
    /// Pods that logged at least one request
    pub observed: Vec<String>,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<BTreeMap<String, usize>>,
    pub checked_at: DateTime<Utc>,
}

fn sorted(set: BTreeSet<String>) -> Vec<String> {
    set.into_iter().collect()
}

impl Report {
    pub fn build(
        reconciliation: Reconciliation,
        pattern: &str,
        pods_file: &Path,
        log_file: &Path,
        occurrences: Option<BTreeMap<String, usize>>,
    ) -> Self {
        Self {
            success: reconciliation.is_match(),
            pattern: pattern.to_string(),
            pods_file: pods_file.display().to_string(),
            log_file: log_file.display().to_string(),
            expected: sorted(reconciliation.expected),
            observed: sorted(reconciliation.observed),
            missing: sorted(reconciliation.missing),
            unexpected: sorted(reconciliation.unexpected),
            occurrences,
            checked_at: Utc::now(),
        }
    }

    /// Human-readable output, see the `Display` impl
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.to_json().map(|mut s| {
                s.push('\n');
                s
            }),
        }
    }
}

/// Diagnostics are printed only on failure, occurrence counts whenever
/// they were collected.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            writeln!(f, "{}", "SUCCESS!".bright_green())?;
        } else {
            writeln!(f, "{}", "FAILURE!".bright_red())?;
            writeln!(f, "Running pods: {:?}", self.expected)?;
            writeln!(f, "Pods that logged requests: {:?}", self.observed)?;
            if !self.missing.is_empty() {
                writeln!(f, "Missing: {:?}", self.missing)?;
            }
            if !self.unexpected.is_empty() {
                writeln!(f, "Unexpected: {:?}", self.unexpected)?;
            }
        }

        if let Some(ref occurrences) = self.occurrences {
            writeln!(f, "Requests per pod:")?;
            for (pod, count) in occurrences {
                let line = format!("  {}: {}", pod, count);
                if *count == 0 {
                    writeln!(f, "{}", line.yellow())?;
                } else {
                    writeln!(f, "{}", line)?;
                }
            }
        }

        Ok(())
    }
}
