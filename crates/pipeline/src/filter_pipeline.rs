//! The FilterPipeline chains the facet filters together.
//!
//! This module provides the FilterPipeline struct (builder pattern) and the
//! `include` predicate, which asks the standard pipeline about one product.

use crate::filters::{PriceFilter, TagFacetFilter, TitleFacetFilter};
use crate::traits::{Filter, FilterContext};
use catalog::ProductRecord;
use facets::{FilterState, PriceRange};
use std::sync::OnceLock;

/// Chains multiple filters together into a processing pipeline.
///
/// A product survives the pipeline only if every filter keeps it (AND
/// across facets); each filter decides OR across its own tokens.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TagFacetFilter::category())
///     .add_filter(TitleFacetFilter::brand())
///     .add_filter(PriceFilter);
///
/// let visible = pipeline.apply(page.products, &FilterContext::from(&view));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The storefront's pipeline: category, brand, price, hand, condition,
    /// level.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TagFacetFilter::category())
            .add_filter(TitleFacetFilter::brand())
            .add_filter(PriceFilter)
            .add_filter(TitleFacetFilter::hand())
            .add_filter(TagFacetFilter::condition())
            .add_filter(TagFacetFilter::level())
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Whether one product passes every filter.
    pub fn matches(&self, product: &ProductRecord, context: &FilterContext<'_>) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.matches(product, context))
    }

    /// Apply all filters in sequence to the products.
    ///
    /// ## Algorithm
    /// 1. Start with the input products
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving products in their original order
    pub fn apply(
        &self,
        products: Vec<ProductRecord>,
        context: &FilterContext<'_>,
    ) -> Vec<ProductRecord> {
        let mut current = products;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared instance of [`FilterPipeline::standard`].
pub(crate) fn standard_pipeline() -> &'static FilterPipeline {
    static STANDARD: OnceLock<FilterPipeline> = OnceLock::new();
    STANDARD.get_or_init(FilterPipeline::standard)
}

/// Decide whether a product belongs in the visible set.
///
/// All active facets must match and the minimum variant price must lie in
/// `price`. Empty facets impose nothing; an unreadable price excludes.
pub fn include(product: &ProductRecord, filters: &FilterState, price: &PriceRange) -> bool {
    standard_pipeline().matches(product, &FilterContext::new(filters, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Money;
    use facets::Facet;

    fn product(title: &str, tags: &[&str], amount: &str) -> ProductRecord {
        ProductRecord::new(title, title, "handle", Money::new(amount, "GBP"))
            .with_tags(tags.iter().copied())
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filters = FilterState::new().toggle(Facet::Brand, "ping");
        let price = PriceRange::full();

        let products = vec![
            product("Titleist Driver", &[], "199"),
            product("Callaway Putter", &[], "149"),
        ];

        let filtered = pipeline.apply(products, &FilterContext::new(&filters, &price));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let filters = FilterState::new().toggle(Facet::Brand, "callaway");
        let price = PriceRange::full();

        let pipeline = FilterPipeline::new().add_filter(TitleFacetFilter::brand());

        let products = vec![
            product("Titleist Driver", &[], "199"),
            product("Callaway Putter", &[], "149"),
        ];

        let filtered = pipeline.apply(products, &FilterContext::new(&filters, &price));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Callaway Putter");
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec![
                "CategoryFilter",
                "BrandFilter",
                "PriceFilter",
                "HandFilter",
                "ConditionFilter",
                "LevelFilter"
            ]
        );
    }

    #[test]
    fn test_include_and_across_facets() {
        let driver = product("Titleist TSR2 Driver Left", &["drivers", "good"], "299");
        let price = PriceRange::full();

        let filters = FilterState::new()
            .toggle(Facet::Brand, "titleist")
            .toggle(Facet::Hand, "left")
            .toggle(Facet::Condition, "good");
        assert!(include(&driver, &filters, &price));

        let filters = filters.toggle(Facet::Level, "pro");
        assert!(!include(&driver, &filters, &price));
    }

    #[test]
    fn test_include_no_op_filter() {
        let filters = FilterState::new();
        let price = PriceRange::full();
        assert!(include(&product("Anything", &[], "0"), &filters, &price));
        assert!(include(&product("Anything", &[], "2000"), &filters, &price));
    }

    #[test]
    fn test_pipeline_agrees_with_include() {
        let products = vec![
            product("Titleist Driver", &["drivers"], "199"),
            product("Callaway Putter", &["putters", "new"], "149"),
            product("Mizuno Irons", &["irons", "pro"], "650"),
        ];
        let filters = FilterState::new()
            .toggle(Facet::Category, "putters")
            .toggle(Facet::Category, "irons");
        let price = PriceRange::new(100.0, 600.0);

        let applied = FilterPipeline::standard()
            .apply(products.clone(), &FilterContext::new(&filters, &price));
        let expected: Vec<ProductRecord> = products
            .into_iter()
            .filter(|p| include(p, &filters, &price))
            .collect();

        assert_eq!(applied, expected);
        assert_eq!(applied.len(), 1);
    }
}
