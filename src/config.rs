use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::errors::{PipelineError, Result};

/// Name of the optional configuration file looked up in the working directory
const CONFIG_FILE: &str = ".seqpipe.toml";

/// Pipeline execution configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Suppress stage progress logging even when a pipeline requests it
    #[serde(default)]
    pub quiet: bool,

    /// Emit per-stage progress for every pipeline, without opting in per builder
    #[serde(default)]
    pub progress: bool,
}

impl PipelineConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PipelineError::configuration(format!("Invalid configuration: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Resolve configuration: `.seqpipe.toml` in the working directory if
    /// present, then environment overrides (`SEQPIPE_QUIET`).
    pub fn resolve() -> Self {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::from_file(path).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Ok(quiet) = std::env::var("SEQPIPE_QUIET") {
            config.quiet = quiet == "true" || quiet == "1";
        }

        config
    }
}

/// Process-wide configuration, resolved once on first access.
pub fn get_config() -> &'static PipelineConfig {
    static CONFIG: OnceLock<PipelineConfig> = OnceLock::new();
    CONFIG.get_or_init(PipelineConfig::resolve)
}
