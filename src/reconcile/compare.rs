//! Set comparison between running pods and pods that served requests

use std::collections::{BTreeMap, BTreeSet};

/// True iff both sets hold exactly the same identifiers
pub fn reconcile(expected: &BTreeSet<String>, observed: &BTreeSet<String>) -> bool {
    expected == observed
}

/// Number of times `identifier` appears in the raw observed list
pub fn count_occurrences(identifier: &str, raw_observed: &[String]) -> usize {
    raw_observed.iter().filter(|s| s.as_str() == identifier).count()
}

/// Occurrence count for every expected identifier, zero when it was never seen
pub fn occurrence_counts(
    expected: &BTreeSet<String>,
    raw_observed: &[String],
) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> =
        expected.iter().map(|id| (id.clone(), 0)).collect();
    for id in raw_observed {
        if let Some(count) = counts.get_mut(id) {
            *count += 1;
        }
    }
    counts
}

/// Outcome of comparing the expected and observed sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub expected: BTreeSet<String>,
    pub observed: BTreeSet<String>,
    /// Expected but never observed
    pub missing: BTreeSet<String>,
    /// Observed but not expected
    pub unexpected: BTreeSet<String>,
}

impl Reconciliation {
    pub fn compute(expected: BTreeSet<String>, observed: BTreeSet<String>) -> Self {
        let missing = expected.difference(&observed).cloned().collect();
        let unexpected = observed.difference(&expected).cloned().collect();
        Self {
            expected,
            observed,
            missing,
            unexpected,
        }
    }

    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
