//! List paging
//!
//! The backend returns whole collections; paging happens client side for the
//! list views.

use serde::{Deserialize, Serialize};

/// Default page size of list views
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page as u64) as u32
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// One page of items plus its metadata
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `items` to the requested 1-based page
///
/// Page 0 is treated as page 1. A page past the end yields no items but
/// still reports the real totals.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Paginated<T> {
    let page = page.max(1);
    let pagination = Pagination::new(page, per_page, items.len() as u64);
    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let page_items = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    Paginated {
        items: page_items,
        pagination,
    }
}
