//! Storefront crate for the Fairway filter engine.
//!
//! Wires the catalog source, the view-state reducer, the filter pipeline and
//! the URL synchronizer into a browsing session, and composes what a listing
//! screen shows.

pub mod config;
pub mod error;
pub mod liveness;
pub mod pagination;
pub mod session;
pub mod source;
pub mod view;

pub use config::StorefrontConfig;
pub use error::{FetchError, PaginationError, SessionError};
pub use liveness::Liveness;
pub use pagination::{CursorManager, DEFAULT_PAGE_SIZE};
pub use session::StorefrontSession;
pub use source::{CatalogSource, IndexSource};
pub use view::{
    CollectionContext, GridLayout, PanelVisibility, ViewSummary, ALL_COLLECTION,
    EMPTY_RESULTS_MESSAGE,
};
