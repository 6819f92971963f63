//! Page requests and paged listings returned by `index`.

use serde::{Deserialize, Serialize};

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 25;
/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page number accepted. Keeps every offset within a signed
/// 64-bit SQL `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Which slice of a listing to return. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Build a request, moving `page` into `1..=MAX_PAGE` and `page_size`
    /// into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.clamp(1, MAX_PAGE),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Rows on a full page.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of records plus the numbers a client needs to navigate.
///
/// An empty listing still reports one (empty) page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Wrap the `items` fetched for `request` out of `total_items` records.
    pub fn new(items: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(request.page_size.max(1)).max(1);
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        let req = PageRequest::new(0, 500);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);

        let req = PageRequest::new(3, 0);
        assert_eq!(req.page_size, 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 25).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_huge_page_is_capped() {
        let req = PageRequest::new(u64::MAX, MAX_PAGE_SIZE);
        assert_eq!(req.page, MAX_PAGE);
        assert!(req.offset() <= i64::MAX as u64);

        // Fields set directly bypass the clamp; the offset still saturates.
        let raw = PageRequest {
            page: u64::MAX,
            page_size: u64::MAX,
        };
        assert_eq!(raw.offset(), u64::MAX);
    }

    #[test]
    fn test_page_response_arithmetic() {
        let page = PageResponse::new(vec![4, 5, 6], &PageRequest::new(2, 3), 7);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);

        let last = PageResponse::new(vec![7], &PageRequest::new(3, 3), 7);
        assert!(!last.has_next);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let page: PageResponse<u8> = PageResponse::new(Vec::new(), &PageRequest::default(), 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_page_past_the_end() {
        let page: PageResponse<u8> = PageResponse::new(Vec::new(), &PageRequest::new(9, 10), 15);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_last_allowed_page_past_the_end() {
        let page: PageResponse<u8> =
            PageResponse::new(Vec::new(), &PageRequest::new(u64::MAX, 100), 3);
        assert_eq!(page.page, MAX_PAGE);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }
}
