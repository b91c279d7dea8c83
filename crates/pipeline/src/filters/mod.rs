//! Filter implementations for the product pipeline.
//!
//! One filter per facet, plus the price window. Within a facet any selected
//! token may match; a facet with nothing selected lets everything through.

pub mod price;
pub mod tag_facet;
pub mod title_facet;

// Re-export for convenience
pub use price::PriceFilter;
pub use tag_facet::TagFacetFilter;
pub use title_facet::TitleFacetFilter;

use facets::{Facet, FilterState};

/// Selected tokens of a facet, lower-cased for comparison.
pub(crate) fn lowered_tokens(filters: &FilterState, facet: Facet) -> Vec<String> {
    filters
        .selected(facet)
        .iter()
        .map(|token| token.to_lowercase())
        .collect()
}
