//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use fashion_store::catalog::{parse_categories, parse_products, CatalogEntry, CategoryTree};
use fashion_store::Money;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names looked up in the working directory.
const CONFIG_NAMES: [&str; 2] = ["fashion.toml", "fashion.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the working directory.
    ///
    /// An explicit path must exist; without one, a missing config file
    /// means defaults.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => Self::find_config(&cwd)?.unwrap_or_default(),
        };

        Ok(Self { config, output, cwd })
    }

    fn find_config(dir: &Path) -> Result<Option<CliConfig>> {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.exists() {
                let path = path.to_string_lossy();
                return CliConfig::load(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the product snapshot named by the flag or the config.
    pub fn load_products(&self, flag: Option<&str>) -> Result<Vec<CatalogEntry>> {
        let Some(path) = flag.or(self.config.catalog.products.as_deref()) else {
            bail!("No products file given; pass --products or set catalog.products in fashion.toml");
        };
        let path = self.resolve_path(path);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read products file: {}", path.display()))?;
        let entries = parse_products(&text)
            .with_context(|| format!("Failed to parse products file: {}", path.display()))?;

        self.output
            .debug(&format!("Loaded {} products from {}", entries.len(), path.display()));
        Ok(entries)
    }

    /// Load the category snapshot named by the flag or the config.
    pub fn load_categories(&self, flag: Option<&str>) -> Result<CategoryTree> {
        let Some(path) = flag.or(self.config.catalog.categories.as_deref()) else {
            bail!("No categories file given; pass --categories or set catalog.categories in fashion.toml");
        };
        let path = self.resolve_path(path);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read categories file: {}", path.display()))?;
        let roots = parse_categories(&text)
            .with_context(|| format!("Failed to parse categories file: {}", path.display()))?;

        Ok(CategoryTree::new(roots))
    }

    /// Format money with the configured symbol.
    pub fn money(&self, amount: Money) -> String {
        amount.display_with(&self.config.display.currency_symbol)
    }
}
