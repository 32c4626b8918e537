//! Flexible page identifiers for page requests.

/// Trait for values that can be interpreted as a 1-based page number.
///
/// Lets [`Paginator::page`](crate::Paginator::page) accept integers directly
/// or raw request strings (e.g. a `?page=` query parameter) without the
/// caller parsing first:
///
/// ```
/// use mik_paginate::{MemoryQuery, Paginator};
///
/// let paginator = Paginator::new(MemoryQuery::new(vec![1, 2, 3]), 2);
/// assert_eq!(paginator.page(2).unwrap().number(), 2);
/// assert_eq!(paginator.page("2").unwrap().number(), 2);
/// ```
///
/// Conversion only interprets the value as an integer; range validation
/// (page `>= 1`, page `<= total_pages`) stays with the paginator. Negative
/// integers therefore convert successfully here and are rejected later as
/// out-of-range.
pub trait IntoPageNumber {
    /// Interpret this value as an integer page number.
    fn into_page_number(self) -> Result<i64, PageNumberError>;
}

impl IntoPageNumber for i64 {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        Ok(self)
    }
}

impl IntoPageNumber for i32 {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        Ok(i64::from(self))
    }
}

impl IntoPageNumber for u32 {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        Ok(i64::from(self))
    }
}

impl IntoPageNumber for u64 {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        // Anything past i64::MAX is out of range for every practical result
        // set; clamping keeps the error surface to the two documented kinds.
        Ok(i64::try_from(self).unwrap_or(i64::MAX))
    }
}

impl IntoPageNumber for usize {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        Ok(i64::try_from(self).unwrap_or(i64::MAX))
    }
}

impl IntoPageNumber for &str {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| PageNumberError::new(self))
    }
}

impl IntoPageNumber for String {
    fn into_page_number(self) -> Result<i64, PageNumberError> {
        self.as_str().into_page_number()
    }
}

/// Error for a page identifier that is not an integer.
///
/// Carries the raw input for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberError {
    input: String,
}

impl PageNumberError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The raw input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for PageNumberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page number `{}` is not an integer", self.input)
    }
}

impl std::error::Error for PageNumberError {}
