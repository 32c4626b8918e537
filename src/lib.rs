// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs - extensive doc changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Fluent API doesn't need must_use everywhere

//! # mik-paginate - Offset Pagination for Composable Queries
//!
//! Slices the result set of a query into fixed-size pages and exposes
//! per-page navigation metadata (previous/next page numbers, start/end record
//! indices). Works against anything implementing the small [`Queryable`]
//! contract - an ORM query, a prepared statement pair, or an in-memory
//! collection via [`MemoryQuery`].
//!
//! The total record count is computed lazily, exactly once per
//! [`Paginator`], and memoized; page records are fetched eagerly, one
//! offset/limit query per page request. Nothing is materialized beyond the
//! page being served.
//!
//! ## Quick Start
//!
//! ```
//! use mik_paginate::{MemoryQuery, Paginator};
//!
//! let query = MemoryQuery::new((1..=45).collect::<Vec<u32>>());
//! let paginator = Paginator::new(query, 10);
//!
//! assert_eq!(paginator.count().unwrap(), 45);
//! assert_eq!(paginator.total_pages().unwrap(), 5);
//!
//! let page = paginator.page(2).unwrap();
//! assert_eq!(page.records(), &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
//! assert_eq!(page.start_index(), 11);
//! assert_eq!(page.end_index(), 20);
//! assert!(page.has_next());
//! ```
//!
//! ## Page Requests from the Edge
//!
//! [`Paginator::page`] accepts raw request strings and reports the two
//! caller-input failures as a tagged enum, so a handler can map them
//! straight to a "not found" response:
//!
//! ```
//! use mik_paginate::{MemoryQuery, PaginationError, Paginator};
//!
//! let paginator = Paginator::new(MemoryQuery::new(vec![1, 2, 3]), 2);
//!
//! assert!(matches!(
//!     paginator.page("abc"),
//!     Err(PaginationError::NotAnInteger(_))
//! ));
//! assert!(matches!(
//!     paginator.page("0"),
//!     Err(PaginationError::EmptyPage { number: 0 })
//! ));
//! ```
//!
//! ## Iterating Every Page
//!
//! ```
//! use mik_paginate::{MemoryQuery, Paginator};
//!
//! let paginator = Paginator::new(MemoryQuery::new((0..25).collect::<Vec<u32>>()), 10);
//!
//! for page in &paginator {
//!     let page = page.unwrap();
//!     println!("{page}: {} records", page.len());
//! }
//! assert_eq!(paginator.pages().count(), 3);
//! ```
//!
//! ## What This Crate Is Not
//!
//! No query building, no database driver, no record caching or prefetching,
//! no sorting or filtering. All of that belongs to the [`Queryable`]
//! implementation the caller supplies.

mod error;
mod paginator;
mod query;

pub use error::PaginationError;
pub use paginator::{IntoPageNumber, Page, PageMeta, PageNumberError, Pages, Paginator};
pub use query::{MemoryQuery, Queryable};

/// Prelude module for convenient imports.
///
/// ```
/// use mik_paginate::prelude::*;
///
/// let paginator = Paginator::new(MemoryQuery::new(vec![1, 2, 3]), 2);
/// assert_eq!(paginator.total_pages().unwrap(), 2);
/// ```
pub mod prelude {
    pub use crate::{
        IntoPageNumber, MemoryQuery, Page, PageMeta, PageNumberError, Pages, PaginationError,
        Paginator, Queryable,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        let paginator = Paginator::new(MemoryQuery::new((1..=7).collect::<Vec<u32>>()), 3);

        assert_eq!(paginator.total_pages().unwrap(), 3);
        assert_eq!(
            paginator.page(3).unwrap().records(),
            &[7]
        );

        let all: Vec<u32> = paginator
            .pages()
            .flat_map(|page| page.unwrap().into_records())
            .collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
