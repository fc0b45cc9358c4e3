//! CLI configuration (env-driven).

use anyhow::{bail, Result};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Default output format when `--format` is not given.
    pub format: OutputFormat,

    /// Default cluster for commands that build WLIDs.
    pub cluster: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Table,
            cluster: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("WLIDCTL_LOG_LEVEL").unwrap_or(defaults.log_level);

        let format = match lookup("WLIDCTL_FORMAT") {
            Some(v) => match OutputFormat::parse(&v) {
                Some(format) => format,
                None => bail!("WLIDCTL_FORMAT must be 'table' or 'json', got '{}'.", v),
            },
            None => defaults.format,
        };

        let cluster = lookup("WLIDCTL_CLUSTER").filter(|v| !v.is_empty());

        Ok(Self {
            log_level,
            format,
            cluster,
        })
    }
}
