//! Log reconciliation for the reviews service
//!
//! Checks that every running reviews pod served at least one request:
//! - Extracts pod names from the pods listing and from the request log
//! - Compares the two sets for exact equality
//! - Reports missing and unexpected pods, optionally with request counts

mod compare;
mod extract;
mod pattern;
mod report;

use std::path::PathBuf;

use tracing::{info, instrument, warn};

pub use compare::{count_occurrences, occurrence_counts, reconcile, Reconciliation};
pub use extract::{extract_identifiers, scan_file, scan_str, Extraction};
pub use pattern::{IdentifierPattern, PatternPreset};
pub use report::{OutputFormat, Report};

use crate::error::Result;

/// Everything needed for one run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub pods_file: PathBuf,
    pub log_file: PathBuf,
    pub pattern: IdentifierPattern,
    pub show_counts: bool,
}

/// Read both files, compare, and build the report.
///
/// Fails on the first unreadable file; nothing is reported for a partial run.
#[instrument(skip_all, fields(pods_file = %options.pods_file.display(), log_file = %options.log_file.display()))]
pub fn run_check(options: &CheckOptions) -> Result<Report> {
    let pods = scan_file(&options.pods_file, &options.pattern)?;
    let requests = scan_file(&options.log_file, &options.pattern)?;

    if pods.is_empty() {
        warn!("No pods matched the pattern in the pods file");
    }

    let occurrences = options
        .show_counts
        .then(|| occurrence_counts(pods.unique(), requests.raw()));

    let reconciliation =
        Reconciliation::compute(pods.unique().clone(), requests.unique().clone());

    info!(
        expected = reconciliation.expected.len(),
        observed = reconciliation.observed.len(),
        missing = reconciliation.missing.len(),
        unexpected = reconciliation.unexpected.len(),
        "Reconciliation complete"
    );

    Ok(Report::build(
        reconciliation,
        options.pattern.as_str(),
        &options.pods_file,
        &options.log_file,
        occurrences,
    ))
}
