//! Replay cart operations against a catalog snapshot.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use fashion_store::cart::{CartKey, CartLine, CartStore, STANDARD_SIZE};
use fashion_store::catalog::CatalogEntry;

use super::CartArgs;
use crate::context::Context;

const WIDTHS: [usize; 5] = [24, 10, 5, 12, 12];

/// One replayed cart operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartOp {
    Add(CartKey),
    Remove(CartKey),
    Increase(CartKey),
    Decrease(CartKey),
    Clear,
}

impl FromStr for CartOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("clear") {
            return Ok(CartOp::Clear);
        }

        let (verb, key) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid cart operation '{}': expected <op>:<id>[:<size>]", s))?;
        let key = CartKey::parse(key).with_context(|| format!("Invalid cart operation '{}'", s))?;

        match verb.to_lowercase().as_str() {
            "add" => Ok(CartOp::Add(key)),
            "remove" | "rm" => Ok(CartOp::Remove(key)),
            "inc" | "increase" => Ok(CartOp::Increase(key)),
            "dec" | "decrease" => Ok(CartOp::Decrease(key)),
            other => bail!("Unknown cart operation '{}'", other),
        }
    }
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_products(args.products.as_deref())?;
    let ops = args
        .ops
        .iter()
        .map(|op| op.parse::<CartOp>())
        .collect::<Result<Vec<_>>>()?;

    let mut cart = CartStore::new();
    for op in &ops {
        apply(&mut cart, op, &catalog, args.check_stock)?;
    }

    let summary = cart.summary();
    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header(&format!("Cart after {} operations", ops.len()));
    if summary.is_empty() {
        ctx.output.info("Cart is empty.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ITEM", "SIZE", "QTY", "UNIT", "SUBTOTAL"], &WIDTHS);
    for line in &summary.lines {
        let quantity = line.quantity.to_string();
        let unit = ctx.money(line.unit_price);
        let subtotal = ctx.money(line.subtotal);
        ctx.output.table_row(
            &[
                line.name.as_str(),
                line.key.selected_size.as_str(),
                quantity.as_str(),
                unit.as_str(),
                subtotal.as_str(),
            ],
            &WIDTHS,
        );
    }

    ctx.output.kv("Items", &summary.total_items.to_string());
    ctx.output.kv("Average unit", &ctx.money(summary.average_unit_price()));
    ctx.output.success(&format!("Total {}", ctx.money(summary.total_amount)));
    Ok(())
}

fn apply(cart: &mut CartStore, op: &CartOp, catalog: &[CatalogEntry], check_stock: bool) -> Result<()> {
    match op {
        CartOp::Add(key) => {
            let entry = catalog
                .iter()
                .find(|e| e.id == key.product_id)
                .ok_or_else(|| anyhow!("Unknown product '{}'", key.product_id))?;

            let requested = (key.selected_size != STANDARD_SIZE).then_some(key.selected_size.as_str());
            let size = if check_stock {
                entry.check_available(requested)?
            } else {
                requested.unwrap_or(STANDARD_SIZE)
            };
            cart.add_to_cart(CartLine::from_entry(entry, Some(size)));
        }
        CartOp::Remove(key) => {
            if !cart.remove_from_cart(key) {
                tracing::warn!(key = %key, "remove matched no cart line");
            }
        }
        CartOp::Increase(key) => {
            if !cart.increase_quantity(key) {
                tracing::warn!(key = %key, "increase matched no cart line");
            }
        }
        CartOp::Decrease(key) => {
            if !cart.decrease_quantity(key) {
                tracing::warn!(key = %key, "decrease matched no cart line");
            }
        }
        CartOp::Clear => cart.clear_cart(),
    }
    Ok(())
}
