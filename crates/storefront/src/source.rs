//! Catalog sources: where cursor pages come from.
//!
//! The session only knows the [`CatalogSource`] trait. [`IndexSource`]
//! serves pages from an in-memory [`CatalogIndex`].

use crate::error::FetchError;
use async_trait::async_trait;
use catalog::{CatalogError, CatalogIndex, CursorPage, PageRequest};
use std::sync::Arc;
use tracing::debug;

/// Anything that can hand out cursor pages of products.
///
/// Implementations only fetch. They are never asked to filter or sort;
/// that happens on the loaded page.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<CursorPage, FetchError>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    async fn fetch_page(&self, request: PageRequest) -> Result<CursorPage, FetchError> {
        (**self).fetch_page(request).await
    }
}

/// Serves pages from a loaded catalog index.
#[derive(Clone)]
pub struct IndexSource {
    index: Arc<CatalogIndex>,
}

impl IndexSource {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }
}

#[async_trait]
impl CatalogSource for IndexSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<CursorPage, FetchError> {
        debug!(
            "Fetching page: cursor={:?} direction={:?} size={}",
            request.cursor, request.direction, request.page_size
        );
        // Copying a page out of the index is blocking work
        let index = self.index.clone();
        let page = tokio::task::spawn_blocking(move || index.page(&request))
            .await
            .map_err(|e| FetchError::Unavailable(format!("page task failed: {}", e)))?;

        page.map_err(|e| match e {
            CatalogError::UnknownCursor(_) | CatalogError::ValidationError(_) => {
                FetchError::Malformed(e.to_string())
            }
            other => FetchError::Unavailable(other.to_string()),
        })
    }
}
