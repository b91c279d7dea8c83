//! # Storefront Session
//!
//! Coordinates one shopper's browsing session:
//! 1. Hydrate the view state from the address
//! 2. Load the first page from the catalog source
//! 3. Publish the canonical query back to the address
//! 4. On every event: reduce, publish, recompose the summary
//!
//! ## Concurrency
//!
//! Every method takes `&mut self`, so events are handled one at a time and
//! at most one page fetch is in flight. The only await points are page
//! fetches. A session torn down through its [`Liveness`] handle while a
//! fetch is pending drops that fetch's result.

use crate::error::{FetchError, SessionError};
use crate::liveness::Liveness;
use crate::pagination::CursorManager;
use crate::source::CatalogSource;
use crate::view::{CollectionContext, PanelVisibility, ViewSummary};
use facets::{Facet, ViewEvent, ViewState, reduce};
use tracing::{debug, info};
use url_sync::{AddressSurface, UrlSynchronizer};

pub struct StorefrontSession<S: CatalogSource, A: AddressSurface> {
    view: ViewState,
    pager: CursorManager<S>,
    url: UrlSynchronizer<A>,
    collection: CollectionContext,
    panels: PanelVisibility,
    liveness: Liveness,
}

impl<S: CatalogSource, A: AddressSurface> StorefrontSession<S, A> {
    /// Build a session over the catalog-wide listing. Nothing is fetched
    /// until [`open`](Self::open).
    ///
    /// # Errors
    /// `Pagination(InvalidPageSize)` when `page_size` is zero.
    pub fn new(source: S, address: A, page_size: usize) -> Result<Self, SessionError> {
        let liveness = Liveness::new();
        let pager = CursorManager::new(source, page_size)?.with_liveness(liveness.clone());
        Ok(Self {
            view: ViewState::default(),
            pager,
            url: UrlSynchronizer::new(address),
            collection: CollectionContext::all(),
            panels: PanelVisibility::default(),
            liveness,
        })
    }

    /// Browse a specific collection instead of the full catalog.
    ///
    /// Pages are then fetched from that collection only.
    pub fn with_collection(self, collection: CollectionContext) -> Self {
        let scope = (!collection.is_all()).then(|| collection.handle.clone());
        Self {
            pager: self.pager.with_collection(scope),
            collection,
            ..self
        }
    }

    /// Share an existing liveness flag, e.g. one held by the owning screen.
    pub fn with_liveness(self, liveness: Liveness) -> Self {
        Self {
            pager: self.pager.with_liveness(liveness.clone()),
            liveness,
            ..self
        }
    }

    /// Hydrate from the address, load the first page and write the
    /// canonical query back.
    pub async fn open(&mut self) -> Result<ViewSummary, SessionError> {
        self.ensure_live()?;
        let hydrated = self.url.hydrate_from_address();
        self.view = self.scope_view(hydrated);
        info!(
            "Opening session on '{}' with {} active filter tokens",
            self.collection.handle,
            self.view.filters.active_count()
        );

        self.pager.load_first().await?;
        self.url.publish(&self.view);
        Ok(self.summary())
    }

    /// Apply one shopper event and return the recomputed summary.
    ///
    /// Nothing is fetched: filtering and sorting work on the loaded page.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<ViewSummary, SessionError> {
        self.ensure_live()?;
        debug!("Dispatching {:?}", event);

        let next = reduce(&self.view, event);
        self.view = self.scope_view(next);
        self.url.publish(&self.view);
        Ok(self.summary())
    }

    pub async fn next_page(&mut self) -> Result<ViewSummary, SessionError> {
        self.ensure_live()?;
        self.pager.load_next().await?;
        Ok(self.summary())
    }

    pub async fn previous_page(&mut self) -> Result<ViewSummary, SessionError> {
        self.ensure_live()?;
        self.pager.load_previous().await?;
        Ok(self.summary())
    }

    /// Open or close the filter panel for the given viewport width.
    pub fn toggle_panels(&mut self, viewport_width: u32) -> ViewSummary {
        self.panels = self.panels.toggle(viewport_width);
        self.summary()
    }

    /// Summary of the current page under the current view state.
    pub fn summary(&self) -> ViewSummary {
        ViewSummary::compose(self.pager.current(), &self.view, &self.collection, self.panels)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn collection(&self) -> &CollectionContext {
        &self.collection
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    pub fn address(&self) -> &A {
        self.url.address()
    }

    /// Why the current page is empty, if a fetch failed.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.pager.last_error()
    }

    /// Handle that can tear this session down from elsewhere.
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn tear_down(&self) {
        info!("Tearing down session on '{}'", self.collection.handle);
        self.liveness.tear_down();
    }

    pub fn is_live(&self) -> bool {
        self.liveness.is_live()
    }

    /// Collection pages hide the category facet, so they carry no category
    /// selection the shopper could not see or clear.
    fn scope_view(&self, view: ViewState) -> ViewState {
        if self.collection.shows_category_facet()
            || view.filters.selected(Facet::Category).is_empty()
        {
            return view;
        }
        debug!(
            "Dropping category selection on collection '{}'",
            self.collection.handle
        );
        ViewState {
            filters: view.filters.without(Facet::Category),
            ..view
        }
    }

    fn ensure_live(&self) -> Result<(), SessionError> {
        if self.liveness.is_live() {
            Ok(())
        } else {
            Err(SessionError::Detached)
        }
    }
}
