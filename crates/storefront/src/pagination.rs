//! # Pagination Cursor Manager
//!
//! Wraps a [`CatalogSource`] and walks it one page at a time.
//!
//! - The forward cursor is the current page's `endCursor`, and only exists
//!   while `hasNextPage` is set; the backward cursor is `startCursor` under
//!   `hasPreviousPage`.
//! - Moving in a direction the page rules out is refused here, without a
//!   request to the source.
//! - A manager scoped to a collection only ever asks for that collection's
//!   products.
//! - Pages are loaded on request only; there is no prefetch.
//! - Every load takes `&mut self`, so a manager never has two requests in
//!   flight.
//! - A failed fetch leaves an empty page with both directions closed.

use crate::error::{FetchError, PaginationError};
use crate::liveness::Liveness;
use crate::source::CatalogSource;
use catalog::{Cursor, CursorPage, PageRequest};
use tracing::{info, warn};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Walks a catalog source page by page.
pub struct CursorManager<S: CatalogSource> {
    source: S,
    page_size: usize,
    collection: Option<String>,
    current: CursorPage,
    last_error: Option<FetchError>,
    liveness: Liveness,
}

impl<S: CatalogSource> CursorManager<S> {
    /// Create a manager with a fixed page size.
    ///
    /// # Errors
    /// `InvalidPageSize` when `page_size` is zero.
    pub fn new(source: S, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        Ok(Self {
            source,
            page_size,
            collection: None,
            current: CursorPage::empty(),
            last_error: None,
            liveness: Liveness::new(),
        })
    }

    /// Tie this manager to an owner's liveness flag.
    pub fn with_liveness(mut self, liveness: Liveness) -> Self {
        self.liveness = liveness;
        self
    }

    /// Restrict every request to one collection (`None` for the whole
    /// catalog).
    pub fn with_collection(mut self, collection: Option<String>) -> Self {
        self.collection = collection;
        self
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The most recently loaded page (empty before the first load).
    pub fn current(&self) -> &CursorPage {
        &self.current
    }

    /// The error behind the current page, if the last fetch failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Cursor for the next page, if there is one.
    pub fn forward_cursor(&self) -> Option<&Cursor> {
        self.current.next_cursor()
    }

    /// Cursor for the previous page, if there is one.
    pub fn backward_cursor(&self) -> Option<&Cursor> {
        self.current.previous_cursor()
    }

    /// Load the first page of the listing.
    pub async fn load_first(&mut self) -> Result<&CursorPage, PaginationError> {
        self.load(PageRequest::first(self.page_size)).await
    }

    /// Load the page after the current one.
    ///
    /// # Errors
    /// `NoNextPage` if the current page has no next page; the source is not
    /// contacted.
    pub async fn load_next(&mut self) -> Result<&CursorPage, PaginationError> {
        let cursor = self
            .forward_cursor()
            .cloned()
            .ok_or(PaginationError::NoNextPage)?;
        self.load(PageRequest::after(cursor, self.page_size)).await
    }

    /// Load the page before the current one.
    ///
    /// # Errors
    /// `NoPreviousPage` if the current page has no previous page; the
    /// source is not contacted.
    pub async fn load_previous(&mut self) -> Result<&CursorPage, PaginationError> {
        let cursor = self
            .backward_cursor()
            .cloned()
            .ok_or(PaginationError::NoPreviousPage)?;
        self.load(PageRequest::before(cursor, self.page_size)).await
    }

    async fn load(&mut self, mut request: PageRequest) -> Result<&CursorPage, PaginationError> {
        if !self.liveness.is_live() {
            return Err(PaginationError::Detached);
        }
        request.collection = self.collection.clone();
        let direction = request.direction;
        let result = self.source.fetch_page(request).await;

        // The owner may have gone away while we were waiting
        if !self.liveness.is_live() {
            warn!("Discarding {:?} page fetched after teardown", direction);
            return Err(PaginationError::Detached);
        }

        match result {
            Ok(page) => {
                info!(
                    "Loaded {:?} page with {} products (next: {}, previous: {})",
                    direction,
                    page.len(),
                    page.page_info.has_next_page,
                    page.page_info.has_previous_page
                );
                self.current = page;
                self.last_error = None;
            }
            Err(e) => {
                warn!("Page fetch failed, showing an empty page: {}", e);
                self.current = CursorPage::empty();
                self.last_error = Some(e);
            }
        }
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IndexSource;
    use async_trait::async_trait;
    use catalog::{CatalogIndex, Money, ProductRecord};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts requests and forwards them to an index.
    struct CountingSource {
        inner: IndexSource,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch_page(&self, request: PageRequest) -> Result<CursorPage, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_page(request).await
        }
    }

    fn counting_source(count: usize) -> (CountingSource, Arc<AtomicUsize>) {
        let products = (0..count)
            .map(|i| {
                ProductRecord::new(
                    format!("p-{}", i),
                    format!("Club {}", i),
                    format!("club-{}", i),
                    Money::new("10", "GBP"),
                )
            })
            .collect();
        let index = Arc::new(CatalogIndex::from_products(products).unwrap());
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingSource {
                inner: IndexSource::new(index),
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[tokio::test]
    async fn test_collection_scope_reaches_source() {
        let products = ["drivers", "putters", "drivers"]
            .iter()
            .enumerate()
            .map(|(i, handle)| {
                ProductRecord::new(
                    format!("p-{}", i),
                    format!("Club {}", i),
                    format!("club-{}", i),
                    Money::new("10", "GBP"),
                )
                .in_collections([*handle])
            })
            .collect();
        let index = Arc::new(CatalogIndex::from_products(products).unwrap());
        let mut pager = CursorManager::new(IndexSource::new(index), 1)
            .unwrap()
            .with_collection(Some("drivers".to_string()));

        assert_eq!(pager.load_first().await.unwrap().products[0].id, "p-0");
        assert_eq!(pager.load_next().await.unwrap().products[0].id, "p-2");
        assert!(pager.forward_cursor().is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let (source, _) = counting_source(1);
        assert_eq!(
            CursorManager::new(source, 0).err(),
            Some(PaginationError::InvalidPageSize)
        );
    }

    #[tokio::test]
    async fn test_walk_forward_and_back() {
        let (source, calls) = counting_source(30);
        let mut pager = CursorManager::new(source, DEFAULT_PAGE_SIZE).unwrap();

        assert_eq!(pager.load_first().await.unwrap().len(), 12);
        assert!(pager.backward_cursor().is_none());

        assert_eq!(pager.load_next().await.unwrap().len(), 12);
        assert_eq!(pager.load_next().await.unwrap().len(), 6);
        assert!(pager.forward_cursor().is_none());

        let back = pager.load_previous().await.unwrap();
        assert_eq!(back.products[0].id, "p-12");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_refuses_locally_without_calling_source() {
        let (source, calls) = counting_source(5);
        let mut pager = CursorManager::new(source, 12).unwrap();
        pager.load_first().await.unwrap();

        assert_eq!(pager.load_next().await.err(), Some(PaginationError::NoNextPage));
        assert_eq!(
            pager.load_previous().await.err(),
            Some(PaginationError::NoPreviousPage)
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(pager.current().len(), 5);
    }

    #[tokio::test]
    async fn test_before_first_load_nothing_to_walk() {
        let (source, calls) = counting_source(5);
        let mut pager = CursorManager::new(source, 2).unwrap();

        assert_eq!(pager.load_next().await.err(), Some(PaginationError::NoNextPage));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_page(&self, _request: PageRequest) -> Result<CursorPage, FetchError> {
            Err(FetchError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_empty_page() {
        let mut pager = CursorManager::new(FailingSource, 12).unwrap();
        let page = pager.load_first().await.unwrap();

        assert!(page.is_empty());
        assert!(!page.page_info.has_next_page);
        assert!(!page.page_info.has_previous_page);
        assert!(matches!(pager.last_error(), Some(FetchError::Unavailable(_))));
        assert_eq!(pager.load_next().await.err(), Some(PaginationError::NoNextPage));
    }

    #[tokio::test]
    async fn test_torn_down_manager_does_not_fetch() {
        let (source, calls) = counting_source(5);
        let liveness = Liveness::new();
        let mut pager = CursorManager::new(source, 2)
            .unwrap()
            .with_liveness(liveness.clone());

        liveness.tear_down();
        assert_eq!(pager.load_first().await.err(), Some(PaginationError::Detached));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
