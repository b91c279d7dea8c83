//! Pipeline for filtering and ordering catalog pages.
//!
//! This crate provides:
//! - Filter trait and one implementation per facet plus price
//! - FilterPipeline for composing filters, and the `include` predicate
//! - The sort engine
//! - `visible_set`, which runs both over a loaded page
//!
//! ## Architecture
//! A page is processed in stages:
//! 1. Filters remove products that miss any active facet or the price window
//! 2. The sort engine orders the survivors
//! 3. The result is rendered and thrown away; it is recomputed on the next change
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::visible_set;
//! use facets::{Facet, ViewEvent, ViewState};
//!
//! let view = ViewState::default().apply(ViewEvent::toggle(Facet::Category, "drivers"));
//! let visible = visible_set(&page.products, &view);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod visible;

// Re-export main types
pub use traits::{Filter, FilterContext};
pub use filter_pipeline::{include, FilterPipeline};
pub use sort::{sort, sort_owned};
pub use visible::{visible_set, visible_set_with};
