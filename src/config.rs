use std::{fmt::Display, fs, path::Path};

use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "SQLCONST_";
pub const DEFAULT_AGENT_SERVER_API_BASE: &str = "http://localhost:8000";

/// Service settings.
///
/// - `environment` is reported with profiled queries.
/// - `log_level` is the fallback filter when `RUST_LOG` is not set.
/// - `company_id` is copied into every after-query event.
/// - `default_agent_server_api_base` is used when an agent engine is
///   created without `agent_server_api_base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub environment: String,
    pub log_level: String,
    pub company_id: Option<String>,
    pub default_agent_server_api_base: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            log_level: "info".to_string(),
            company_id: None,
            default_agent_server_api_base: DEFAULT_AGENT_SERVER_API_BASE.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: std::io::Error },
    Parse { path: String, source: serde_json::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "Could not read config file {}: {}", path, source),
            ConfigError::Parse { path, source } => write!(f, "Config file {} is not valid JSON: {}", path, source),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the JSON file, if any, then applies `SQLCONST_*` variables
    /// from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(std::env::vars());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_lossy = path.to_string_lossy().to_string();

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path_lossy.clone(), source })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path: path_lossy, source })
    }

    /// Applies `SQLCONST_<FIELD>` pairs; unknown keys are ignored.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let Some(field) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };

            match field.to_ascii_lowercase().as_str() {
                "environment" => self.environment = value.into(),
                "log_level" => self.log_level = value.into(),
                "company_id" => self.company_id = Some(value.into()),
                "default_agent_server_api_base" => self.default_agent_server_api_base = value.into(),
                _ => {},
            }
        }
    }
}
