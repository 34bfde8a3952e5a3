//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod categories;

use clap::Args;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category name at either level ("All" for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive substring of the product name.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Inclusive minimum price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Inclusive maximum price.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort order: none, asc, desc.
    #[arg(long, default_value = "none")]
    pub sort: String,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Products per page (default from config).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Products snapshot file (default from config).
    #[arg(long)]
    pub products: Option<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Categories snapshot file (default from config).
    #[arg(long)]
    pub categories: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations to replay, in order: add:<id>[:<size>], remove:…, inc:…, dec:…, clear.
    #[arg(required = true)]
    pub ops: Vec<String>,

    /// Products snapshot file (default from config).
    #[arg(long)]
    pub products: Option<String>,

    /// Validate size selection and stock before each add.
    #[arg(long)]
    pub check_stock: bool,
}
