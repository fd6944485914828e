//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::{ReconcileError, Result};
use crate::reconcile::{CheckOptions, IdentifierPattern, OutputFormat, PatternPreset};

/// Verify that every running reviews pod logged at least one request.
///
/// Exits 0 when the running pods and the pods seen in the request log match,
/// 1 when they differ or an input cannot be read, 2 on invalid usage.
#[derive(Parser, Debug)]
#[command(name = "reviews-reconcile", version, rename_all = "kebab-case")]
pub struct Opts {
    /// File listing the running pods (e.g. `kubectl get pods` output)
    pub pods_file: PathBuf,

    /// File with the captured request output
    pub curl_output_file: PathBuf,

    /// Built-in identifier pattern: `pod-name` or `version`
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<PatternPreset>,

    /// Custom identifier regex; overrides --preset
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Print how many requests each running pod logged
    #[arg(long)]
    pub counts: bool,

    /// Output format: `text` or `json`
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Opts {
    /// Merge flags over the loaded configuration. Flags win.
    pub fn check_options(&self, config: &Config) -> Result<CheckOptions> {
        let pattern = match self.pattern.as_deref().or(config.pattern.as_deref()) {
            Some(custom) if custom.is_empty() => {
                return Err(ReconcileError::invalid_arguments("pattern must not be empty"));
            }
            Some(custom) => IdentifierPattern::new(custom)?,
            None => IdentifierPattern::from_preset(self.preset.unwrap_or(config.preset))?,
        };

        Ok(CheckOptions {
            pods_file: self.pods_file.clone(),
            log_file: self.curl_output_file.clone(),
            pattern,
            show_counts: self.counts || config.show_counts,
        })
    }

    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }

    pub fn use_color(&self, config: &Config) -> bool {
        !self.no_color && config.color
    }
}
