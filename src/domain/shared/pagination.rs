//! Page/size arithmetic shared by every list endpoint.
//!
//! The free functions are the calculator proper. [`PaginationQuery`] can only
//! be built with `page >= 1` and `size >= 1`, so anything derived from it is
//! safe to feed into the calculator without further checks.

use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use ts_rs::TS;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SIZE: i64 = 10;

/// Rows to skip before the requested page. Saturates instead of wrapping.
pub fn offset(page: i64, size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(size)
}

/// `ceil(total_count / size)`, zero for an empty result set.
pub fn total_pages(total_count: i64, size: i64) -> i64 {
    if size <= 0 || total_count <= 0 {
        return 0;
    }
    total_count / size + i64::from(total_count % size != 0)
}

/// A product past `i64::MAX` is beyond any possible count, so there is
/// nothing more.
pub fn has_more(page: i64, total_count: i64, size: i64) -> bool {
    page.checked_mul(size).is_some_and(|seen| seen < total_count)
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PaginationQuery {
    page: i64,
    size: i64,
}

impl PaginationQuery {
    /// Non-positive pages fall back to the first page. A non-positive size is
    /// rejected, and so is a page whose offset does not fit in an `i64`.
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        if size <= 0 {
            return Err(DomainError::InvalidArgument(format!(
                "size must be a positive integer, got {}",
                size
            )));
        }
        let page = if page <= 0 { DEFAULT_PAGE } else { page };
        if (page - 1).checked_mul(size).is_none() {
            return Err(DomainError::InvalidArgument(format!(
                "page {} is out of range for size {}",
                page, size
            )));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        offset(self.page, self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

/// One page of records plus the metadata describing the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageResult<T> {
    pub total_count: i64,
    pub total_pages: i64,
    pub page: i64,
    pub size: i64,
    pub has_more: bool,
    pub items: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn new(total_count: i64, query: &PaginationQuery, items: Vec<T>) -> Self {
        Self {
            total_count,
            total_pages: total_pages(total_count, query.size()),
            page: query.page(),
            size: query.size(),
            has_more: has_more(query.page(), total_count, query.size()),
            items,
        }
    }

    pub fn empty(query: &PaginationQuery) -> Self {
        Self::new(0, query, Vec::new())
    }
}

/// Builds a page from an already computed total, invoking `fetch` with
/// `(offset, limit)` only when there is at least one matching row.
pub async fn paginate<T, E, F, Fut>(
    total_count: i64,
    query: &PaginationQuery,
    fetch: F,
) -> Result<PageResult<T>, E>
where
    F: FnOnce(i64, i64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    if total_count == 0 {
        return Ok(PageResult::empty(query));
    }
    let items = fetch(query.offset(), query.limit()).await?;
    Ok(PageResult::new(total_count, query, items))
}
