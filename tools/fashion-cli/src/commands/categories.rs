//! Category tree listing.

use anyhow::Result;
use serde::Serialize;

use super::CategoriesArgs;
use crate::context::Context;
use fashion_store::catalog::Category;

#[derive(Serialize)]
struct CategoriesReport<'a> {
    tree: &'a [Category],
    options: Vec<String>,
}

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let tree = ctx.load_categories(args.categories.as_deref())?;

    if ctx.output.is_json() {
        ctx.output.json(&CategoriesReport {
            tree: tree.roots(),
            options: tree.selector_options(),
        });
        return Ok(());
    }

    if tree.is_empty() {
        ctx.output.warn("Category snapshot is empty or not a category list.");
        return Ok(());
    }

    ctx.output.header("Categories");
    for (depth, category) in tree.walk() {
        ctx.output.list_item(depth, &category.name);
    }

    ctx.output.kv("Selector", &tree.selector_options().join(", "));
    Ok(())
}
