//! Pagination of filtered listings.

use serde::{Deserialize, Serialize};

/// Default number of products per catalog page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed), clamped into range.
    pub page: usize,
    pub per_page: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Always at least 1, even for an empty listing.
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Page numbers for a pager control, centered on the current page.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// First item number shown (1-indexed), 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice a listing into the requested page.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let pagination = Pagination::new(page, per_page, items.len());
    let items = items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.per_page)
        .collect();
    Page { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let p = Pagination::new(9, 10, 45);
        assert_eq!(p.page, 5);
        assert!(!p.has_next);

        let p = Pagination::new(0, 10, 45);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_paginate_slices() {
        let page = paginate((1..=25).collect::<Vec<_>>(), 3, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination.start_item(), 21);
        assert_eq!(page.pagination.end_item(), 25);
    }
}
