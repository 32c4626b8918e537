//! The query abstraction the paginator drives.
//!
//! The crate never talks to a data store itself. Callers hand the
//! [`Paginator`](crate::Paginator) anything implementing [`Queryable`]: an ORM
//! query, a prepared SQL statement pair, an in-memory collection. The trait is
//! the minimal capability set pagination needs - a count aggregate, an
//! offset/limit fetch, and an order-stripped variant for counting.

mod memory;

pub use memory::MemoryQuery;

/// A composable query that can be counted and fetched in windows.
///
/// Implementations are expected to be cheap to construct and lazy: no method
/// here should touch the data store except [`count`](Self::count) and
/// [`fetch`](Self::fetch).
///
/// # Example
///
/// ```
/// use mik_paginate::{Paginator, Queryable};
/// use std::convert::Infallible;
///
/// /// A query over a slice of already-loaded rows.
/// #[derive(Clone)]
/// struct Rows(Vec<u32>);
///
/// impl Queryable for Rows {
///     type Record = u32;
///     type Error = Infallible;
///
///     fn count(&self) -> Result<u64, Infallible> {
///         Ok(self.0.len() as u64)
///     }
///
///     fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<u32>, Infallible> {
///         let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.0.len());
///         let end = start.saturating_add(usize::try_from(limit).unwrap_or(usize::MAX));
///         Ok(self.0[start..end.min(self.0.len())].to_vec())
///     }
///
///     fn unordered(&self) -> Self {
///         self.clone()
///     }
/// }
///
/// let paginator = Paginator::new(Rows((0..25).collect()), 10);
/// assert_eq!(paginator.total_pages().unwrap(), 3);
/// ```
pub trait Queryable {
    /// The record type a fetch materializes.
    type Record;

    /// The error type the backing store surfaces.
    ///
    /// Store failures propagate through the paginator unchanged - they are
    /// never wrapped, retried, or suppressed.
    type Error;

    /// Total number of records matching the query's filters.
    ///
    /// A count aggregate (`COUNT(*)`-equivalent) against the same logical
    /// filter set as [`fetch`](Self::fetch). Ordering must not affect the
    /// result.
    fn count(&self) -> Result<u64, Self::Error>;

    /// Fetch up to `limit` records starting at `offset`, in query order.
    ///
    /// An offset past the end of the result set returns an empty vector, not
    /// an error.
    fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Record>, Self::Error>;

    /// The same logical query with ordering clauses stripped.
    ///
    /// Used to derive the default counting query: ordering has no bearing on
    /// a count, and some backends reject ordered aggregates outright. Must be
    /// pure - no I/O.
    fn unordered(&self) -> Self
    where
        Self: Sized;
}
