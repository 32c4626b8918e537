//! Serializable page position summary.

use miniserde::Serialize;

/// An owned, JSON-serializable summary of a page's position.
///
/// [`Page`](crate::Page) borrows its paginator, which makes it awkward to
/// embed in a response body directly; `PageMeta` is the flat copy meant for
/// that, produced by [`Page::meta`](crate::Page::meta).
///
/// # Example
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let paginator = Paginator::new(MemoryQuery::new((0..45).collect::<Vec<u32>>()), 10);
/// let meta = paginator.page(2).unwrap().meta();
///
/// assert_eq!(meta.number, 2);
/// assert_eq!(meta.total_pages, 5);
/// assert!(meta.has_next);
///
/// let json = miniserde::json::to_string(&meta);
/// assert!(json.contains("\"total_records\":45"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// This page's 1-based number.
    pub number: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of records across all pages.
    pub total_records: u64,
    /// Records per page.
    pub page_size: u64,
    /// Whether a page exists after this one.
    pub has_next: bool,
    /// Whether a page exists before this one.
    pub has_previous: bool,
    /// 1-based index of the first record on this page (0 when empty).
    pub start_index: u64,
    /// 1-based index of the last record on this page.
    pub end_index: u64,
}

#[cfg(test)]
mod tests {
    use crate::{MemoryQuery, Paginator};

    #[test]
    fn test_meta_mirrors_page() {
        let paginator = Paginator::new(
            MemoryQuery::new((0u32..95).collect::<Vec<_>>()),
            10,
        );
        let page = paginator.page(10).unwrap();
        let meta = page.meta();

        assert_eq!(meta.number, 10);
        assert_eq!(meta.total_pages, 10);
        assert_eq!(meta.total_records, 95);
        assert_eq!(meta.page_size, 10);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
        assert_eq!(meta.start_index, 91);
        assert_eq!(meta.end_index, 95);
    }

    #[test]
    fn test_meta_serializes_to_json() {
        let paginator = Paginator::new(MemoryQuery::new(vec![1, 2, 3]), 2);
        let meta = paginator.page(1).unwrap().meta();
        let json = miniserde::json::to_string(&meta);

        assert!(json.contains("\"number\":1"));
        assert!(json.contains("\"total_pages\":2"));
        assert!(json.contains("\"has_next\":true"));
        assert!(json.contains("\"has_previous\":false"));
    }

    #[test]
    fn test_meta_for_empty_first_page() {
        let paginator = Paginator::new(MemoryQuery::<u32>::new(Vec::new()), 10);
        let meta = paginator.page(1).unwrap().meta();

        assert_eq!(meta.total_records, 0);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.start_index, 0);
        assert_eq!(meta.end_index, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
    }
}
