//! Filtered, paginated catalog listing.

use anyhow::Result;
use fashion_store::catalog::CatalogEntry;
use fashion_store::search::{paginate, FilterCriteria, Pagination, SortOrder};

use super::BrowseArgs;
use crate::context::Context;

const WIDTHS: [usize; 5] = [10, 28, 20, 12, 8];
const PAGER_SLOTS: usize = 5;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let entries = ctx.load_products(args.products.as_deref())?;
    let criteria = criteria_from_args(&args)?;

    let shown = criteria.apply(&entries);
    let per_page = args.per_page.unwrap_or(ctx.config.display.page_size);
    let page = paginate(shown, args.page, per_page);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Catalog ({} of {} products)",
        page.pagination.total,
        entries.len()
    ));

    if page.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &WIDTHS);
    for entry in &page.items {
        let price = ctx.money(entry.price);
        let category = category_label(entry);
        let stock = if entry.is_in_stock() { "yes" } else { "sold out" };
        ctx.output.table_row(
            &[entry.id.as_str(), entry.name.as_str(), category.as_str(), price.as_str(), stock],
            &WIDTHS,
        );
    }

    let p = page.pagination;
    ctx.output.kv(
        "Showing",
        &format!("{}-{} (page {}/{})", p.start_item(), p.end_item(), p.page, p.total_pages),
    );
    if p.total_pages > 1 {
        ctx.output.kv("Pages", &pager_line(&p));
    }
    ctx.output.kv("Sort", criteria.sort_order.display_name());

    Ok(())
}

fn criteria_from_args(args: &BrowseArgs) -> Result<FilterCriteria> {
    let sort: SortOrder = args.sort.parse()?;
    let mut criteria = FilterCriteria::new()
        .with_price_range(args.min, args.max)
        .with_sort(sort);
    if let Some(category) = &args.category {
        criteria = criteria.with_category(category.clone());
    }
    if let Some(search) = &args.search {
        criteria = criteria.with_search(search.clone());
    }
    Ok(criteria)
}

/// Page numbers around the current page, current one bracketed.
fn pager_line(pagination: &Pagination) -> String {
    pagination
        .page_numbers(PAGER_SLOTS)
        .into_iter()
        .map(|n| {
            if n == pagination.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Parent / Child" for nested categories, the bare name otherwise.
fn category_label(entry: &CatalogEntry) -> String {
    match entry.category.parent_name() {
        Some(parent) => format!("{} / {}", parent, entry.category.label()),
        None => entry.category.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashion_store::catalog::CategoryRef;

    fn args() -> BrowseArgs {
        BrowseArgs {
            category: Some("Men".into()),
            search: None,
            min: Some(100.0),
            max: None,
            sort: "desc".into(),
            page: 1,
            per_page: None,
            products: None,
        }
    }

    #[test]
    fn test_criteria_from_args() {
        let criteria = criteria_from_args(&args()).unwrap();
        assert_eq!(criteria.selected_category, "Men");
        assert_eq!(criteria.min_price, Some(100.0));
        assert_eq!(criteria.sort_order, SortOrder::PriceDescending);
        assert!(criteria.search_query.is_empty());
    }

    #[test]
    fn test_bad_sort_is_error() {
        let mut bad = args();
        bad.sort = "alphabetical".into();
        assert!(criteria_from_args(&bad).is_err());
    }

    #[test]
    fn test_pager_line() {
        assert_eq!(pager_line(&Pagination::new(1, 12, 30)), "[1] 2 3");
        assert_eq!(pager_line(&Pagination::new(6, 10, 100)), "4 5 [6] 7 8");
    }

    #[test]
    fn test_category_label() {
        let nested = CatalogEntry::new("p1", "Oxford", 900.0)
            .with_category(CategoryRef::nested("Shirts", "Men"));
        assert_eq!(category_label(&nested), "Men / Shirts");

        let flat = CatalogEntry::new("p2", "Tote", 300.0);
        assert_eq!(category_label(&flat), "General");
    }
}
