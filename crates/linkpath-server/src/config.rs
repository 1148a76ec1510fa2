//! Service configuration.
//!
//! Values are layered from lowest to highest precedence: built-in defaults, an optional JSON file
//! (deep-merged, so a file may set only the keys it cares about), `LINKPATH_*` environment
//! variables, then command-line flags applied by the binary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_HOST: &str = "LINKPATH_HOST";
pub const ENV_PORT: &str = "LINKPATH_PORT";
pub const ENV_ALLOWED_ORIGINS: &str = "LINKPATH_ALLOWED_ORIGINS";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "LINKPATH_REQUEST_TIMEOUT_MS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("invalid CORS origin: {origin:?}")]
    InvalidOrigin { origin: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_ms: 5000,
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Deep-merges a JSON object over the current values.
    pub fn merge_json(&mut self, overrides: &Value) -> Result<(), ConfigError> {
        let mut base = serde_json::to_value(&*self)?;
        deep_merge_value(&mut base, overrides);
        *self = serde_json::from_value(base)?;
        Ok(())
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: Value = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        self.merge_json(&overrides)
    }

    /// Applies `LINKPATH_*` overrides. `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn merge_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = parse_value(ENV_PORT, &port)?;
        }
        if let Some(origins) = lookup(ENV_ALLOWED_ORIGINS) {
            self.allowed_origins = split_origins(&origins);
        }
        if let Some(ms) = lookup(ENV_REQUEST_TIMEOUT_MS) {
            self.request_timeout_ms = parse_value(ENV_REQUEST_TIMEOUT_MS, &ms)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "host".to_string(),
                value: self.host.clone(),
            });
        }
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "allowed_origins".to_string(),
                value: String::new(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_ms".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}
