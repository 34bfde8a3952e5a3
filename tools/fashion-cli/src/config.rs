//! CLI configuration.

use anyhow::{Context, Result};
use fashion_store::search::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// CLI configuration file (`fashion.toml` or `fashion.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where catalog snapshots live.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing and money display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log output.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file; `.json` files are JSON, everything else TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Snapshot files saved from the backend's list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Body of the product list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,

    /// Body of the category list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency_symbol() -> String {
    fashion_store::money::DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable (for development).
    #[default]
    Pretty,
    /// JSON lines (for log aggregation).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.display.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [catalog]
            products = "snapshots/products.json"

            [display]
            currency_symbol = "$"

            [log]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.products.as_deref(), Some("snapshots/products.json"));
        assert_eq!(config.catalog.categories, None);
        assert_eq!(config.display.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"display":{"page_size":24},"log":{"level":"debug"}}"#).unwrap();
        assert_eq!(config.display.page_size, 24);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = CliConfig::load("/nonexistent/fashion.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
