//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each facet be its own
//! composable predicate over product records.

use catalog::ProductRecord;
use facets::{FilterState, PriceRange, ViewState};

/// What a filter gets to look at besides the product itself.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub filters: &'a FilterState,
    pub price: &'a PriceRange,
}

impl<'a> FilterContext<'a> {
    pub fn new(filters: &'a FilterState, price: &'a PriceRange) -> Self {
        Self { filters, price }
    }
}

impl<'a> From<&'a ViewState> for FilterContext<'a> {
    fn from(view: &'a ViewState) -> Self {
        Self {
            filters: &view.filters,
            price: &view.price,
        }
    }
}

/// Core trait for filtering products.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a pipeline live in a shared static
/// - `matches` is a pure decision for one product
/// - `apply` takes ownership of the Vec and returns the kept products in
///   their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether one product passes this filter.
    fn matches(&self, product: &ProductRecord, context: &FilterContext<'_>) -> bool;

    /// Apply this filter to a set of products.
    fn apply(
        &self,
        products: Vec<ProductRecord>,
        context: &FilterContext<'_>,
    ) -> Vec<ProductRecord> {
        products
            .into_iter()
            .filter(|product| self.matches(product, context))
            .collect()
    }
}
