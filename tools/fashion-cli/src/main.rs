//! Fashion CLI - browse catalog snapshots and replay cart operations.
//!
//! Commands:
//! - `fashion browse` - Filter, sort and page a product snapshot
//! - `fashion categories` - Show the category tree and selector options
//! - `fashion cart` - Replay cart operations and print totals

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, CategoriesArgs};

/// Fashion CLI - work with storefront catalog snapshots offline
#[derive(Parser)]
#[command(name = "fashion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching category, price and search filters
    Browse(BrowseArgs),

    /// Show the category tree
    Categories(CategoriesArgs),

    /// Replay cart operations against the catalog
    Cart(CartArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init_tracing(&ctx.config.log, cli.verbose)?;
    ctx.output.debug(&format!("Working directory: {}", ctx.cwd.display()));

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
