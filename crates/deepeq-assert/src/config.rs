//! Configuration for assertions

use deepeq_compare::{CompareOptions, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding [`AssertConfig::max_depth`]
pub const ENV_MAX_DEPTH: &str = "DEEPEQ_MAX_DEPTH";

/// Environment variable overriding [`AssertConfig::log_failures`]
pub const ENV_LOG_FAILURES: &str = "DEEPEQ_LOG_FAILURES";

/// Configuration for an [`Assert`](crate::Assert)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertConfig {
    /// Containers nested deeper than this are reported instead of compared
    pub max_depth: usize,
    /// Emit a `tracing` error event for every failed assertion
    pub log_failures: bool,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            log_failures: true,
        }
    }
}

impl AssertConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults; unparsable ones are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any variable source, e.g. a map of overrides
    ///
    /// `lookup` is called with [`ENV_MAX_DEPTH`] and [`ENV_LOG_FAILURES`] and
    /// follows the same rules as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => config.max_depth = depth,
                _ => warn!(var = ENV_MAX_DEPTH, value = %raw, "Ignoring invalid max depth"),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FAILURES) {
            match parse_flag(&raw) {
                Some(flag) => config.log_failures = flag,
                None => warn!(var = ENV_LOG_FAILURES, value = %raw, "Ignoring invalid flag"),
            }
        }

        config
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Options for the comparator this configuration describes
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions::new().max_depth(self.max_depth)
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|source| ConfigError::ParseYaml {
                origin: origin.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_depth".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
