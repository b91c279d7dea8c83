//! Filter for the price window.
//!
//! Unlike the facet filters this one is always active; at the full domain
//! it only removes products whose price cannot be read.

use crate::traits::{Filter, FilterContext};
use catalog::ProductRecord;

/// Keeps products whose minimum variant price lies inside the window.
///
/// ## Algorithm
/// 1. Parse `priceRange.minVariantPrice.amount` as a decimal
/// 2. Missing or unparsable prices are excluded
/// 3. Otherwise keep if `min <= price <= max`
pub struct PriceFilter;

impl Filter for PriceFilter {
    fn name(&self) -> &str {
        "PriceFilter"
    }

    fn matches(&self, product: &ProductRecord, context: &FilterContext<'_>) -> bool {
        product
            .min_variant_price()
            .is_some_and(|price| context.price.contains(price))
    }
}
