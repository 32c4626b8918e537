//! One page of records plus position-aware navigation.

use std::fmt;

use super::{PageMeta, Paginator};
use crate::query::Queryable;

/// An immutable view over one page of a paginated result set.
///
/// Records are fetched eagerly when the page is constructed by
/// [`Paginator::page`]; navigation reads only totals the paginator has
/// already memoized, so every method here is O(1) and touches no store.
///
/// The back-reference to the owning paginator is read-only - a page never
/// mutates paginator state.
///
/// # Example
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let paginator = Paginator::new(MemoryQuery::new((1..=30).collect::<Vec<u32>>()), 10);
/// let page = paginator.page(2).unwrap();
///
/// assert!(page.has_previous());
/// assert!(page.has_next());
/// assert_eq!(page.previous_page_number(), 1);
/// assert_eq!(page.next_page_number(), 3);
/// assert_eq!(page.to_string(), "page 2 of 3");
/// ```
pub struct Page<'a, Q: Queryable> {
    records: Vec<Q::Record>,
    number: u64,
    paginator: &'a Paginator<Q>,
}

impl<'a, Q: Queryable> Page<'a, Q> {
    /// Invariant: `number` has been validated and the paginator's totals are
    /// memoized by the time a page is constructed.
    pub(crate) fn new(records: Vec<Q::Record>, number: u64, paginator: &'a Paginator<Q>) -> Self {
        Self {
            records,
            number,
            paginator,
        }
    }

    /// The records on this page, in query order.
    #[must_use]
    pub fn records(&self) -> &[Q::Record] {
        &self.records
    }

    /// Consume the page and take ownership of its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Q::Record> {
        self.records
    }

    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this page holds no records.
    ///
    /// Only possible for an allowed empty first page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// This page's 1-based number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Whether a page exists before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Whether a page exists after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.paginator.cached_total_pages()
    }

    /// Whether any page exists besides this one.
    #[must_use]
    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    /// The previous page's number.
    ///
    /// No bounds enforcement: on page 1 this returns 0. Navigation callers
    /// are expected to gate on [`has_previous`](Self::has_previous) first.
    #[must_use]
    pub const fn previous_page_number(&self) -> u64 {
        self.number.saturating_sub(1)
    }

    /// The next page's number.
    ///
    /// Symmetric with [`previous_page_number`](Self::previous_page_number):
    /// no upper-bound enforcement, gate on [`has_next`](Self::has_next).
    #[must_use]
    pub const fn next_page_number(&self) -> u64 {
        self.number + 1
    }

    /// 1-based index of this page's first record within the whole result
    /// set, or 0 when the result set is empty.
    #[must_use]
    pub fn start_index(&self) -> u64 {
        if self.paginator.cached_count() == 0 {
            return 0;
        }
        self.paginator.page_size() * (self.number - 1) + 1
    }

    /// 1-based index of this page's last record within the whole result set.
    ///
    /// The last page may be short, so it ends at the total record count.
    #[must_use]
    pub fn end_index(&self) -> u64 {
        if self.number == self.paginator.cached_total_pages() {
            return self.paginator.cached_count();
        }
        self.number * self.paginator.page_size()
    }

    /// An owned, serializable summary of this page's position. See
    /// [`PageMeta`].
    #[must_use]
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            number: self.number,
            total_pages: self.paginator.cached_total_pages(),
            total_records: self.paginator.cached_count(),
            page_size: self.paginator.page_size(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }
}

impl<Q: Queryable> fmt::Display for Page<'_, Q> {
    /// Diagnostics only - not a stability contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} of {}",
            self.number,
            self.paginator.cached_total_pages()
        )
    }
}

impl<Q: Queryable> fmt::Debug for Page<'_, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl<'a, 'p, Q: Queryable> IntoIterator for &'p Page<'a, Q> {
    type Item = &'p Q::Record;
    type IntoIter = std::slice::Iter<'p, Q::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<Q: Queryable> IntoIterator for Page<'_, Q> {
    type Item = Q::Record;
    type IntoIter = std::vec::IntoIter<Q::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{MemoryQuery, Paginator};

    fn paginator(count: u32, page_size: u64) -> Paginator<MemoryQuery<u32>> {
        Paginator::new((0..count).collect(), page_size)
    }

    #[test]
    fn test_middle_page_navigation() {
        let p = paginator(30, 10);
        let page = p.page(2).unwrap();
        assert!(page.has_previous());
        assert!(page.has_next());
        assert!(page.has_other_pages());
        assert_eq!(page.previous_page_number(), 1);
        assert_eq!(page.next_page_number(), 3);
    }

    #[test]
    fn test_first_page_navigation() {
        let p = paginator(30, 10);
        let page = p.page(1).unwrap();
        assert!(!page.has_previous());
        assert!(page.has_next());
        assert!(page.has_other_pages());
        // Accepted out-of-range value; callers gate on has_previous().
        assert_eq!(page.previous_page_number(), 0);
    }

    #[test]
    fn test_last_page_navigation() {
        let p = paginator(30, 10);
        let page = p.page(3).unwrap();
        assert!(page.has_previous());
        assert!(!page.has_next());
        // Accepted out-of-range value; callers gate on has_next().
        assert_eq!(page.next_page_number(), 4);
    }

    #[test]
    fn test_single_page_has_no_other_pages() {
        let p = paginator(5, 10);
        let page = p.page(1).unwrap();
        assert!(!page.has_other_pages());
    }

    #[test]
    fn test_indices() {
        let p = paginator(1000, 10);
        let page = p.page(2).unwrap();
        assert_eq!(page.start_index(), 11);
        assert_eq!(page.end_index(), 20);
    }

    #[test]
    fn test_empty_page_indices_are_zero() {
        let p = paginator(0, 10);
        let page = p.page(1).unwrap();
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
    }

    #[test]
    fn test_display() {
        let p = paginator(1000, 10);
        let page = p.page(2).unwrap();
        assert_eq!(page.to_string(), "page 2 of 100");
    }

    #[test]
    fn test_debug_elides_records() {
        let p = paginator(30, 10);
        let page = p.page(1).unwrap();
        let debug = format!("{page:?}");
        assert!(debug.contains("number: 1"));
        assert!(debug.contains("records: 10"));
    }

    #[test]
    fn test_iteration_over_records() {
        let p = paginator(5, 3);
        let page = p.page(2).unwrap();
        let borrowed: Vec<u32> = (&page).into_iter().copied().collect();
        assert_eq!(borrowed, vec![3, 4]);
        let owned: Vec<u32> = page.into_iter().collect();
        assert_eq!(owned, vec![3, 4]);
    }

    #[test]
    fn test_into_records() {
        let p = paginator(4, 2);
        let page = p.page(1).unwrap();
        assert_eq!(page.into_records(), vec![0, 1]);
    }
}
