//! Error types for page requests.

use crate::paginator::PageNumberError;

/// Errors surfaced by a page request.
///
/// `E` is the error type of the underlying [`Queryable`](crate::Queryable).
/// Store failures pass through as [`Query`](Self::Query) untranslated; the
/// other two variants are caller-input errors, typically mapped to a "not
/// found" response at the edge:
///
/// ```
/// use mik_paginate::{MemoryQuery, PaginationError, Paginator};
///
/// let paginator = Paginator::new(MemoryQuery::new(vec![1, 2, 3]), 2);
///
/// match paginator.page("nope") {
///     Err(PaginationError::NotAnInteger(_)) => {},
///     other => panic!("expected NotAnInteger, got {other:?}"),
/// }
/// match paginator.page(9) {
///     Err(PaginationError::EmptyPage { number: 9 }) => {},
///     other => panic!("expected EmptyPage, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaginationError<E> {
    /// The requested page identifier could not be parsed as an integer.
    NotAnInteger(PageNumberError),
    /// The requested page number is outside `[1, total_pages]`.
    ///
    /// Page 1 is exempt when the paginator allows an empty first page.
    EmptyPage {
        /// The rejected page number.
        number: i64,
    },
    /// A failure from the underlying query, propagated unchanged.
    Query(E),
}

impl<E> PaginationError<E> {
    /// Returns `true` if the page identifier failed integer parsing.
    #[inline]
    #[must_use]
    pub const fn is_not_an_integer(&self) -> bool {
        matches!(self, Self::NotAnInteger(_))
    }

    /// Returns `true` if the requested page is out of range.
    #[inline]
    #[must_use]
    pub const fn is_empty_page(&self) -> bool {
        matches!(self, Self::EmptyPage { .. })
    }

    /// Returns `true` if the underlying query failed.
    #[inline]
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// Returns `true` for caller-input errors (either non-query variant).
    ///
    /// Handy for the common "bad page request means 404, query failure means
    /// 500" split at the edge.
    #[inline]
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(self, Self::NotAnInteger(_) | Self::EmptyPage { .. })
    }
}

impl<E: std::fmt::Display> std::fmt::Display for PaginationError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger(err) => err.fmt(f),
            Self::EmptyPage { number } => {
                if *number < 1 {
                    write!(f, "page number {number} is less than 1")
                } else {
                    write!(f, "page {number} contains no results")
                }
            },
            Self::Query(err) => err.fmt(f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for PaginationError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotAnInteger(err) => Some(err),
            Self::EmptyPage { .. } => None,
            Self::Query(err) => Some(err),
        }
    }
}
