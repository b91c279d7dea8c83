//! # Facets Crate
//!
//! The view state a shopper builds up while browsing, and the reducer that
//! moves it from one snapshot to the next.
//!
//! ## Components
//!
//! ### FilterState
//! Five facets (`hand`, `category`, `brand`, `condition`, `level`), each a
//! set of selected tokens. Changed one token at a time via `toggle`.
//!
//! ### PriceRange
//! An inclusive window inside `[0, 2000]` that keeps `min <= max` by
//! dragging the opposite bound along.
//!
//! ### SortKey
//! Best match (arrival order), or price ascending/descending.
//!
//! ### Reducer
//! `reduce(&ViewState, ViewEvent) -> ViewState`.
//!
//! ## Example Usage
//!
//! ```ignore
//! use facets::{Facet, ViewEvent, ViewState};
//!
//! let state = ViewState::default()
//!     .apply(ViewEvent::toggle(Facet::Brand, "titleist"))
//!     .apply(ViewEvent::SetMinPrice(100.0));
//! ```

// Public modules
pub mod types;
pub mod reducer;
pub mod vocabulary;

// Re-export commonly used types
pub use types::{
    Facet, FacetError, FilterState, PriceRange, SortKey, ViewState, MAX_PRICE, MIN_PRICE,
    PRICE_STEP,
};
pub use reducer::{reduce, ViewEvent};
pub use vocabulary::{FacetOption, FacetVocabulary};
