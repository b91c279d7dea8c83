//! Filters that match a facet against the product title.
//!
//! Brand and hand preference are not reliably tagged, so they are read off
//! the title: "Titleist TSR3 Driver (Left)" matches brand `titleist` and
//! hand `left`.

use super::lowered_tokens;
use crate::traits::{Filter, FilterContext};
use catalog::ProductRecord;
use facets::Facet;

/// Keeps products whose lower-cased title contains any selected token.
pub struct TitleFacetFilter {
    facet: Facet,
}

impl TitleFacetFilter {
    pub fn brand() -> Self {
        Self {
            facet: Facet::Brand,
        }
    }

    pub fn hand() -> Self {
        Self { facet: Facet::Hand }
    }

    fn matches_tokens(product: &ProductRecord, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let title = product.title_lowercase();
        tokens.iter().any(|token| title.contains(token.as_str()))
    }
}

impl Filter for TitleFacetFilter {
    fn name(&self) -> &str {
        match self.facet {
            Facet::Brand => "BrandFilter",
            Facet::Hand => "HandFilter",
            Facet::Category | Facet::Condition | Facet::Level => "TitleFacetFilter",
        }
    }

    fn matches(&self, product: &ProductRecord, context: &FilterContext<'_>) -> bool {
        Self::matches_tokens(product, &lowered_tokens(context.filters, self.facet))
    }

    fn apply(
        &self,
        products: Vec<ProductRecord>,
        context: &FilterContext<'_>,
    ) -> Vec<ProductRecord> {
        let tokens = lowered_tokens(context.filters, self.facet);
        if tokens.is_empty() {
            return products;
        }
        products
            .into_iter()
            .filter(|product| Self::matches_tokens(product, &tokens))
            .collect()
    }
}
