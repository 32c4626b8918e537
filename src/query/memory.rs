//! In-memory [`Queryable`] backend.

use std::convert::Infallible;

use super::Queryable;

/// A [`Queryable`] over records already held in memory.
///
/// Useful for paginating data that is materialized anyway (config entries,
/// API responses, fixture rows) and as the backend for tests and benches.
/// Records keep their insertion order; `unordered` is the identity since
/// there is no ordering clause to strip.
///
/// # Example
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let query = MemoryQuery::new((1..=95).collect::<Vec<i32>>());
/// let paginator = Paginator::new(query, 10);
///
/// assert_eq!(paginator.count().unwrap(), 95);
/// assert_eq!(paginator.total_pages().unwrap(), 10);
///
/// let last = paginator.page(10).unwrap();
/// assert_eq!(last.len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryQuery<T: Clone> {
    records: Vec<T>,
}

impl<T: Clone> MemoryQuery<T> {
    /// Create a query over the given records.
    #[must_use]
    pub const fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Number of records behind the query.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the query holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> Queryable for MemoryQuery<T> {
    type Record = T;
    type Error = Infallible;

    fn count(&self) -> Result<u64, Infallible> {
        Ok(self.records.len() as u64)
    }

    fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<T>, Infallible> {
        let start = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.records.len());
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        let end = start.saturating_add(take).min(self.records.len());
        Ok(self.records[start..end].to_vec())
    }

    fn unordered(&self) -> Self {
        self.clone()
    }
}

impl<T: Clone> From<Vec<T>> for MemoryQuery<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T: Clone> FromIterator<T> for MemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_window() {
        let q = MemoryQuery::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(q.fetch(0, 2).unwrap(), vec![1, 2]);
        assert_eq!(q.fetch(2, 2).unwrap(), vec![3, 4]);
        assert_eq!(q.fetch(4, 2).unwrap(), vec![5]);
    }

    #[test]
    fn test_fetch_past_end_is_empty() {
        let q = MemoryQuery::new(vec![1, 2, 3]);
        assert!(q.fetch(3, 10).unwrap().is_empty());
        assert!(q.fetch(100, 10).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_zero_limit() {
        let q = MemoryQuery::new(vec![1, 2, 3]);
        assert!(q.fetch(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_count_matches_len() {
        let q: MemoryQuery<u8> = (0..42).collect();
        assert_eq!(q.count().unwrap(), 42);
        assert_eq!(q.len(), 42);
        assert!(!q.is_empty());
    }

    #[test]
    fn test_unordered_is_identity() {
        let q = MemoryQuery::new(vec!["a", "b"]);
        assert_eq!(q.unordered(), q);
    }

    #[test]
    fn test_huge_offset_and_limit_saturate() {
        let q = MemoryQuery::new(vec![1, 2, 3]);
        assert!(q.fetch(u64::MAX, u64::MAX).unwrap().is_empty());
        assert_eq!(q.fetch(0, u64::MAX).unwrap(), vec![1, 2, 3]);
    }
}
