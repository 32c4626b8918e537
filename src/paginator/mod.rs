//! Paginator: validated, boundable page requests over a [`Queryable`].

mod iter;
mod page;
mod page_meta;
mod page_number;

pub use iter::Pages;
pub use page::Page;
pub use page_meta::PageMeta;
pub use page_number::{IntoPageNumber, PageNumberError};

use std::cell::Cell;
use std::ops::RangeInclusive;

use crate::error::PaginationError;
use crate::query::Queryable;

/// Slices a query's result set into fixed-size pages.
///
/// Construction is fully lazy - no store I/O happens until [`count`],
/// [`total_pages`], or [`page`] is first called. The total record count is
/// fetched exactly once per instance and memoized, so a paginator should not
/// outlive mutations to the underlying data set.
///
/// Counting uses a dedicated query: either one supplied via
/// [`with_count_query`], or the main query with its ordering stripped
/// (ordering has no bearing on a count and some backends reject ordered
/// aggregates).
///
/// Memoization uses unsynchronized interior mutability, so `Paginator` is
/// intentionally not `Sync`; wrap it in external synchronization if it must
/// be shared across threads.
///
/// # Example
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let query = MemoryQuery::new((1..=1000).collect::<Vec<u32>>());
/// let paginator = Paginator::new(query, 10);
///
/// assert_eq!(paginator.count().unwrap(), 1000);
/// assert_eq!(paginator.total_pages().unwrap(), 100);
///
/// let page = paginator.page(2).unwrap();
/// assert_eq!(page.records(), &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
/// assert_eq!(page.start_index(), 11);
/// assert_eq!(page.end_index(), 20);
/// ```
///
/// [`count`]: Self::count
/// [`total_pages`]: Self::total_pages
/// [`page`]: Self::page
/// [`with_count_query`]: Self::with_count_query
#[derive(Debug)]
pub struct Paginator<Q> {
    query: Q,
    count_query: Q,
    page_size: u64,
    allow_empty_first_page: bool,
    cached_count: Cell<Option<u64>>,
    cached_total_pages: Cell<Option<u64>>,
}

impl<Q: Queryable> Paginator<Q> {
    /// Create a paginator over `query` with `page_size` records per page.
    ///
    /// An empty first page is allowed by default; see
    /// [`allow_empty_first_page`](Self::allow_empty_first_page).
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    #[must_use]
    pub fn new(query: Q, page_size: u64) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        let count_query = query.unordered();
        Self {
            query,
            count_query,
            page_size,
            allow_empty_first_page: true,
            cached_count: Cell::new(None),
            cached_total_pages: Cell::new(None),
        }
    }

    /// Use a dedicated query for the total record count.
    ///
    /// Useful when counting through the main query would be needlessly
    /// expensive (joins, computed fields) and a leaner equivalent exists.
    /// The count query must match the main query's logical filter set.
    #[must_use]
    pub fn with_count_query(mut self, count_query: Q) -> Self {
        self.count_query = count_query;
        self.cached_count.set(None);
        self.cached_total_pages.set(None);
        self
    }

    /// Set whether page 1 of a zero-record result set succeeds.
    ///
    /// When `true` (the default), `page(1)` against no records returns an
    /// empty page; when `false` it fails with
    /// [`EmptyPage`](PaginationError::EmptyPage) and
    /// [`total_pages`](Self::total_pages) reports zero.
    #[must_use]
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self.cached_total_pages.set(None);
        self
    }

    /// Number of records per page.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of records, across all pages.
    ///
    /// Issues one count aggregate against the store on first call; the result
    /// is memoized for the life of the paginator. Store failures propagate
    /// unchanged.
    pub fn count(&self) -> Result<u64, Q::Error> {
        if let Some(count) = self.cached_count.get() {
            return Ok(count);
        }
        let count = self.count_query.count()?;
        self.cached_count.set(Some(count));
        Ok(count)
    }

    /// Total number of pages.
    ///
    /// Zero only when the result set is empty and an empty first page is
    /// disallowed; otherwise at least 1, so an empty-but-allowed first page
    /// still exists. Memoized alongside [`count`](Self::count).
    pub fn total_pages(&self) -> Result<u64, Q::Error> {
        if let Some(total) = self.cached_total_pages.get() {
            return Ok(total);
        }
        let count = self.count()?;
        let total = if count == 0 && !self.allow_empty_first_page {
            0
        } else {
            count.max(1).div_ceil(self.page_size)
        };
        self.cached_total_pages.set(Some(total));
        Ok(total)
    }

    /// Validate a requested page number without fetching records.
    ///
    /// Returns the page number as an integer when it lies in
    /// `[1, total_pages]`, or when it is 1 and an empty first page is
    /// allowed. Triggers the count query if totals are not yet memoized.
    pub fn validate_page_number(
        &self,
        number: impl IntoPageNumber,
    ) -> Result<u64, PaginationError<Q::Error>> {
        let number = number
            .into_page_number()
            .map_err(PaginationError::NotAnInteger)?;
        if number < 1 {
            return Err(PaginationError::EmptyPage { number });
        }
        let total = self.total_pages().map_err(PaginationError::Query)?;
        // `number >= 1` here, so the cast cannot wrap.
        let validated = number.unsigned_abs();
        if validated > total && !(validated == 1 && self.allow_empty_first_page) {
            return Err(PaginationError::EmptyPage { number });
        }
        Ok(validated)
    }

    /// Fetch one page of records.
    ///
    /// Validates the page number, then issues a single offset/limit fetch
    /// for up to [`page_size`](Self::page_size) records. Accepts anything
    /// implementing [`IntoPageNumber`], so raw request strings work directly:
    ///
    /// ```
    /// use mik_paginate::{MemoryQuery, Paginator};
    ///
    /// let paginator = Paginator::new(MemoryQuery::new(vec!['a', 'b', 'c']), 2);
    /// let page = paginator.page("2").unwrap();
    /// assert_eq!(page.records(), &['c']);
    /// ```
    pub fn page(
        &self,
        number: impl IntoPageNumber,
    ) -> Result<Page<'_, Q>, PaginationError<Q::Error>> {
        let number = self.validate_page_number(number)?;
        self.fetch_page(number).map_err(PaginationError::Query)
    }

    /// Range of valid page numbers, `1..=total_pages`.
    ///
    /// Empty when [`total_pages`](Self::total_pages) is zero.
    pub fn pages_range(&self) -> Result<RangeInclusive<u64>, Q::Error> {
        Ok(1..=self.total_pages()?)
    }

    /// Iterate over every page in order, from 1 through the last.
    ///
    /// Each call returns a fresh cursor starting at page 1; iteration state
    /// never lives in the paginator itself, so independent traversals do not
    /// interfere. See [`Pages`].
    pub fn pages(&self) -> Pages<'_, Q> {
        Pages::new(self)
    }

    /// Fetch a page whose number has already been validated.
    ///
    /// Totals must be memoized before this is called; `page()` and the page
    /// iterator both guarantee that.
    pub(crate) fn fetch_page(&self, number: u64) -> Result<Page<'_, Q>, Q::Error> {
        let offset = (number - 1) * self.page_size;
        let records = self.query.fetch(offset, self.page_size)?;
        Ok(Page::new(records, number, self))
    }

    /// Memoized count. Only meaningful once `count()` has run.
    pub(crate) fn cached_count(&self) -> u64 {
        self.cached_count.get().unwrap_or(0)
    }

    /// Memoized total pages. Only meaningful once `total_pages()` has run.
    pub(crate) fn cached_total_pages(&self) -> u64 {
        self.cached_total_pages.get().unwrap_or(0)
    }
}

impl<'a, Q: Queryable> IntoIterator for &'a Paginator<Q> {
    type Item = Result<Page<'a, Q>, Q::Error>;
    type IntoIter = Pages<'a, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}
