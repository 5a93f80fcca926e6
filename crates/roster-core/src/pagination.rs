//! Pagination types
//!
//! A `PageRequest` describes the window a caller asks for (0-indexed page
//! number plus page size); a `Page` carries one window of results together
//! with the exact total across all windows.

use serde::Serialize;

use crate::error::{RosterError, RosterResult};

/// A validated pagination request. Construction is the only way to get one,
/// so a held `PageRequest` always has a positive size and a non-negative
/// page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (0-indexed)
    page_number: i64,
    /// Items per page
    page_size: i64,
}

impl PageRequest {
    /// Create a page request, rejecting non-positive sizes and negative
    /// page numbers.
    pub fn new(page_number: i64, page_size: i64) -> RosterResult<Self> {
        if page_size <= 0 {
            return Err(RosterError::invalid_argument(format!(
                "page size must be positive, got {page_size}"
            )));
        }
        if page_number < 0 {
            return Err(RosterError::invalid_argument(format!(
                "page number must not be negative, got {page_number}"
            )));
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// First page with the given size
    pub fn first(page_size: i64) -> RosterResult<Self> {
        Self::new(0, page_size)
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// The row offset of this window
    pub fn offset(&self) -> i64 {
        self.page_number * self.page_size
    }
}

/// One page of results with the exact total element count
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub page_number: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched content and a known total.
    ///
    /// Invariants: `content.len() <= page_size` and
    /// `total_elements >= content.len()`.
    pub fn new(content: Vec<T>, total_elements: i64, request: PageRequest) -> Self {
        debug_assert!(content.len() as i64 <= request.page_size());
        debug_assert!(total_elements >= content.len() as i64);
        Self {
            content,
            total_elements,
            page_number: request.page_number(),
            page_size: request.page_size(),
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.total_elements == 0 {
            0
        } else {
            (self.total_elements + self.page_size - 1) / self.page_size
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page_number + 1) * self.page_size < self.total_elements
    }

    pub fn has_prev(&self) -> bool {
        self.page_number > 0
    }

    /// Map the content, keeping the pagination metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(request.offset(), 30);
        assert_eq!(request.page_size(), 10);
    }

    #[test]
    fn test_page_request_rejects_bad_size() {
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(RosterError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(0, -5),
            Err(RosterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_page_request_rejects_negative_page() {
        assert!(matches!(
            PageRequest::new(-1, 10),
            Err(RosterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_page_helpers() {
        let request = PageRequest::new(1, 5).unwrap();
        let page = Page::new(vec![6, 7, 8, 9, 10], 12, request);

        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_prev());

        let last = Page::new(vec![11, 12], 12, PageRequest::new(2, 5).unwrap());
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_map() {
        let request = PageRequest::first(2).unwrap();
        let page = Page::new(vec![1, 2], 4, request).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.total_elements, 4);
    }
}
