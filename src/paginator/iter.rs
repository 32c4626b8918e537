//! Sequential iteration over every page of a paginator.

use super::{Page, Paginator};
use crate::query::Queryable;

/// Iterator over a paginator's pages, in increasing page order.
///
/// Created by [`Paginator::pages`] (or iterating `&Paginator` directly).
/// The cursor lives entirely in this struct - the paginator holds no
/// iteration state, so multiple traversals of the same paginator never
/// interfere, and restarting is just calling [`Paginator::pages`] again.
///
/// Page numbers produced here are in range by construction, so the only
/// failure mode is the store itself: items are `Result<Page, Q::Error>`.
/// The iterator is fused, and a store error ends iteration after the error
/// is yielded.
///
/// # Example
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let paginator = Paginator::new(MemoryQuery::new((0..25).collect::<Vec<u32>>()), 10);
///
/// let numbers: Vec<u64> = paginator
///     .pages()
///     .map(|page| page.unwrap().number())
///     .collect();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct Pages<'a, Q> {
    paginator: &'a Paginator<Q>,
    next: u64,
    done: bool,
}

impl<'a, Q: Queryable> Pages<'a, Q> {
    pub(crate) const fn new(paginator: &'a Paginator<Q>) -> Self {
        Self {
            paginator,
            next: 1,
            done: false,
        }
    }
}

impl<'a, Q: Queryable> Iterator for Pages<'a, Q> {
    type Item = Result<Page<'a, Q>, Q::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let total = match self.paginator.total_pages() {
            Ok(total) => total,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            },
        };
        if self.next > total {
            self.done = true;
            return None;
        }
        let number = self.next;
        self.next += 1;
        match self.paginator.fetch_page(number) {
            Ok(page) => Some(Ok(page)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Exact once totals are memoized; unknown before the first count.
        self.paginator.cached_total_pages.get().map_or(
            (0, None),
            |total| {
                let remaining =
                    usize::try_from(total.saturating_sub(self.next - 1)).unwrap_or(usize::MAX);
                (remaining, Some(remaining))
            },
        )
    }
}

impl<Q: Queryable> std::iter::FusedIterator for Pages<'_, Q> {}
