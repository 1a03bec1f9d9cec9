//! Configuration file loading for etude.
//!
//! Reads `etude.config.json` from the current working directory. A
//! missing file yields defaults; a broken one warns and yields defaults
//! rather than aborting.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level etude configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EtudeConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Execution backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Lint behavior configuration.
    #[serde(default)]
    pub lint: LintConfig,
}

/// Configuration for the execution backend.
#[derive(Debug, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL the `/execute` endpoint lives under.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

/// Configuration for lint scheduling.
#[derive(Debug, Deserialize, Serialize)]
pub struct LintConfig {
    /// Quiet period in milliseconds before `watch` re-validates.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

/// Load `etude.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> EtudeConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("etude.config.json");

    if !config_path.exists() {
        return EtudeConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "\x1b[33mWarning:\x1b[0m Failed to parse {}: {}",
                    config_path.display(),
                    e
                );
                EtudeConfig::default()
            }
        },
        Err(e) => {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Failed to read {}: {}",
                config_path.display(),
                e
            );
            EtudeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EtudeConfig::default();
        assert_eq!(config.backend.base_url, "http://localhost:3001");
        assert_eq!(config.lint.debounce_ms, 500);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EtudeConfig =
            serde_json::from_str(r#"{"backend":{"base_url":"http://10.0.0.5:8080"}}"#).unwrap();
        assert_eq!(config.backend.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.lint.debounce_ms, 500);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = load_config(Some(Path::new("/nonexistent/etude-config-test")));
        assert_eq!(config.lint.debounce_ms, 500);
    }
}
