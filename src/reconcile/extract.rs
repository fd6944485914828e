//! Scanning text files for identifiers

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use super::pattern::IdentifierPattern;
use crate::error::{ReconcileError, Result};

/// Identifiers found in one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    raw: Vec<String>,
    unique: BTreeSet<String>,
}

impl Extraction {
    fn push(&mut self, identifier: &str) {
        self.raw.push(identifier.to_string());
        self.unique.insert(identifier.to_string());
    }

    /// Every match in input order, duplicates included
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Distinct identifiers, ascending
    pub fn unique(&self) -> &BTreeSet<String> {
        &self.unique
    }

    pub fn into_sorted(self) -> Vec<String> {
        self.unique.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Scan in-memory text line by line
pub fn scan_str(content: &str, pattern: &IdentifierPattern) -> Extraction {
    let mut extraction = Extraction::default();
    for line in content.lines() {
        for identifier in pattern.find_in(line) {
            extraction.push(identifier);
        }
    }
    extraction
}

/// Scan a file line by line. The file must exist and be valid UTF-8.
#[instrument(skip_all, fields(path = %path.display(), pattern = %pattern.as_str()))]
pub fn scan_file(path: &Path, pattern: &IdentifierPattern) -> Result<Extraction> {
    let file = File::open(path).map_err(|e| ReconcileError::file_access(path, e))?;
    let reader = BufReader::new(file);

    let mut extraction = Extraction::default();
    for line in reader.lines() {
        let line = line.map_err(|e| ReconcileError::file_access(path, e))?;
        for identifier in pattern.find_in(&line) {
            extraction.push(identifier);
        }
    }

    debug!(
        matches = extraction.raw.len(),
        unique = extraction.unique.len(),
        "Scanned file"
    );

    Ok(extraction)
}

/// Sorted unique identifiers matching `pattern` in the file at `path`
pub fn extract_identifiers(path: &Path, pattern: &str) -> Result<Vec<String>> {
    let pattern = IdentifierPattern::new(pattern)?;
    Ok(scan_file(path, &pattern)?.into_sorted())
}
