//! Filters that match a facet against product tags.
//!
//! Used for club category, condition and player level. Category also
//! accepts a title substring match, since many listings name the club type
//! in the title without tagging it. That fallback is a loose heuristic: a
//! token like `woods` also matches "Tiger Woods Signature Putter".

use super::lowered_tokens;
use crate::traits::{Filter, FilterContext};
use catalog::ProductRecord;
use facets::Facet;

/// Keeps products tagged with any selected token of one facet.
///
/// ## Algorithm
/// 1. Lower-case the facet's selected tokens
/// 2. A product matches if its tag set contains one of them
/// 3. With `title_fallback`, a product also matches if its lower-cased
///    title contains one of them
pub struct TagFacetFilter {
    facet: Facet,
    title_fallback: bool,
}

impl TagFacetFilter {
    /// Club category: tag or title.
    pub fn category() -> Self {
        Self {
            facet: Facet::Category,
            title_fallback: true,
        }
    }

    /// Condition: tag only.
    pub fn condition() -> Self {
        Self {
            facet: Facet::Condition,
            title_fallback: false,
        }
    }

    /// Player level: tag only.
    pub fn level() -> Self {
        Self {
            facet: Facet::Level,
            title_fallback: false,
        }
    }

    fn matches_tokens(&self, product: &ProductRecord, tokens: &[String]) -> bool {
        if tokens.is_empty() {
            return true;
        }
        let title = self.title_fallback.then(|| product.title_lowercase());
        tokens.iter().any(|token| {
            product.tags.contains(token)
                || title.as_deref().is_some_and(|title| title.contains(token.as_str()))
        })
    }
}

impl Filter for TagFacetFilter {
    fn name(&self) -> &str {
        match self.facet {
            Facet::Category => "CategoryFilter",
            Facet::Condition => "ConditionFilter",
            Facet::Level => "LevelFilter",
            Facet::Hand | Facet::Brand => "TagFacetFilter",
        }
    }

    fn matches(&self, product: &ProductRecord, context: &FilterContext<'_>) -> bool {
        self.matches_tokens(product, &lowered_tokens(context.filters, self.facet))
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
            .filter(|product| self.matches_tokens(product, &tokens))
            .collect()
    }
}
