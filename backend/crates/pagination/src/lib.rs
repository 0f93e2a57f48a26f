//! Page-number pagination primitives for listing endpoints.
//!
//! [`PageRequest`] validates the one-based page and page size supplied by a
//! caller and yields the slice offset; [`PaginatedResult`] is the response
//! envelope carrying a page of items together with the totals needed to
//! render navigation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validation failures for [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Pages are numbered from one.
    #[error("page must be at least 1")]
    ZeroPage,
}

/// Validated one-based page request.
///
/// Any page size is accepted; a size of zero selects an empty page.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 5).expect("valid request");
/// assert_eq!(request.offset(), 5);
/// assert!(PageRequest::new(0, 5).is_err());
/// assert_eq!(PageRequest::new(3, 0).map(|r| r.offset()), Ok(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validate and build a request.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::ZeroPage);
        }
        Ok(Self { page, page_size })
    }

    /// One-based page number.
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first item on this page; saturates for absurd pages.
    pub const fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of items plus navigation totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// Items on this page, in repository order.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
    /// One-based page number echoed from the request.
    pub page: usize,
    /// Page size echoed from the request.
    pub page_size: usize,
    /// `ceil(total / page_size)`, or `0` when `page_size` is `0`.
    pub total_pages: usize,
}

impl<T> PaginatedResult<T> {
    /// Assemble a page and derive `total_pages`.
    ///
    /// # Examples
    /// ```
    /// use pagination::PaginatedResult;
    ///
    /// let page = PaginatedResult::create(vec!["a", "b"], 11, 1, 5);
    /// assert_eq!(page.total_pages, 3);
    /// assert_eq!(PaginatedResult::<u8>::create(Vec::new(), 11, 1, 0).total_pages, 0);
    /// ```
    pub fn create(items: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Assemble a page for a validated request.
    pub fn for_request(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self::create(items, total, request.page(), request.page_size())
    }

    /// Transform every item while keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }

    /// `true` when a later page exists.
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `true` when an earlier page exists.
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}
