use serde::Deserialize;

use crate::error::Result;
use crate::reconcile::{OutputFormat, PatternPreset};

/// Environment variable prefix, e.g. `RECONCILE_PRESET=version`
pub const ENV_PREFIX: &str = "RECONCILE";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_preset")]
    pub preset: PatternPreset,

    /// Custom regex, takes precedence over `preset`
    #[serde(default)]
    pub pattern: Option<String>,

    #[serde(default = "default_show_counts")]
    pub show_counts: bool,

    #[serde(default = "default_format")]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_preset() -> PatternPreset {
    PatternPreset::PodName
}

fn default_show_counts() -> bool {
    false
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_color() -> bool {
    true
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env.try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            pattern: None,
            show_counts: default_show_counts(),
            format: default_format(),
            color: default_color(),
        }
    }
}
