//! Paginated list envelope returned by the list operation.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// The flag fields are derived data:
/// `is_empty == content.is_empty()`, `is_first == (page_number == 0)` and
/// `is_last == (page_number == total_pages - 1 || total_pages == 0)`.
/// [`Page::of`] computes them, so locally built pages cannot violate the
/// invariants; deserialized pages carry whatever the backend derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in listing order.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page_number: u32,
    /// Requested page size (>0).
    pub page_size: u32,
    /// Total items across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether this is the first page.
    pub is_first: bool,
    /// Whether this is the last page.
    pub is_last: bool,
    /// Whether this page holds no items.
    pub is_empty: bool,
}

impl<T> Page<T> {
    /// Builds a page, deriving `total_pages` and the flag fields from the
    /// given content and counts.
    #[must_use]
    pub fn of(content: Vec<T>, page_number: u32, page_size: u32, total_elements: u64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            u32::try_from(total_elements.div_ceil(u64::from(page_size.max(1))))
                .unwrap_or(u32::MAX)
        };
        let is_empty = content.is_empty();
        Self {
            content,
            page_number,
            page_size,
            total_elements,
            total_pages,
            is_first: page_number == 0,
            is_last: total_pages == 0 || page_number == total_pages - 1,
            is_empty,
        }
    }
}
