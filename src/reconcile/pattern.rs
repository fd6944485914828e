//! Identifier patterns used to pick pod names out of free-form text

use regex::Regex;
use serde::Deserialize;

use crate::error::Result;

/// Built-in patterns for the reviews service
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PatternPreset {
    /// Full pod names, e.g. `reviews-v2-7d8f9c-x4k2p`
    #[default]
    PodName,
    /// Only the service version, e.g. `reviews-v2`
    Version,
}

impl PatternPreset {
    pub fn regex(&self) -> &'static str {
        match self {
            PatternPreset::PodName => r"reviews[a-z0-9-]+",
            PatternPreset::Version => r"reviews-v[123]",
        }
    }
}

/// A compiled identifier pattern
///
/// When the regex has a capture group, the first group is the identifier;
/// otherwise the whole match is. Empty matches are never identifiers.
#[derive(Debug, Clone)]
pub struct IdentifierPattern {
    regex: Regex,
}

impl IdentifierPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    pub fn from_preset(preset: PatternPreset) -> Result<Self> {
        Self::new(preset.regex())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All identifiers in `haystack`, left to right, duplicates kept
    pub fn find_in<'h>(&self, haystack: &'h str) -> Vec<&'h str> {
        if self.regex.captures_len() > 1 {
            self.regex
                .captures_iter(haystack)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .collect()
        } else {
            self.regex
                .find_iter(haystack)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_display_and_parse() {
        assert_eq!(PatternPreset::PodName.to_string(), "pod-name");
        assert_eq!(PatternPreset::Version.to_string(), "version");
        assert_eq!(
            "version".parse::<PatternPreset>().unwrap(),
            PatternPreset::Version
        );
        assert!("loose".parse::<PatternPreset>().is_err());
    }

    #[test]
    fn test_pod_name_preset_matches_full_names() {
        let pattern = IdentifierPattern::from_preset(PatternPreset::PodName).unwrap();
        let line = "reviews-v1-545db77b95-8xq2c   2/2     Running   0          3m";
        assert_eq!(pattern.find_in(line), vec!["reviews-v1-545db77b95-8xq2c"]);
    }

    #[test]
    fn test_version_preset_collapses_replicas() {
        let pattern = IdentifierPattern::from_preset(PatternPreset::Version).unwrap();
        let line = "reviews-v1-abc reviews-v1-def reviews-v3-ghi reviews-v4-xyz";
        assert_eq!(
            pattern.find_in(line),
            vec!["reviews-v1", "reviews-v1", "reviews-v3"]
        );
    }

    #[test]
    fn test_capture_group_selects_identifier() {
        let pattern = IdentifierPattern::new(r"pod=(reviews-v\d-\w+)").unwrap();
        assert_eq!(
            pattern.find_in("served by pod=reviews-v2-def status=200"),
            vec!["reviews-v2-def"]
        );
    }

    #[test]
    fn test_empty_matches_are_skipped() {
        let pattern = IdentifierPattern::new(r"x*").unwrap();
        assert_eq!(pattern.find_in("abc xx d"), vec!["xx"]);
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        assert!(IdentifierPattern::new(r"reviews-v[123").is_err());
    }
}
