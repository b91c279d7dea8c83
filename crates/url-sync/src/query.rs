//! Mapping between view state and the address query string.
//!
//! Recognized keys:
//! - `hand`, `category`, `brand`, `condition`, `level`: repeatable, one
//!   entry per selected token
//! - `minPrice`, `maxPrice`: one number each, only present when the price
//!   window is narrower than the full domain
//!
//! The sort order is session-local and never written here.

use facets::{Facet, FilterState, PriceRange, ViewState, MAX_PRICE, MIN_PRICE};
use std::collections::BTreeMap;
use tracing::debug;
use url::form_urlencoded;

pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";

/// Read filter state and price window from a query string.
///
/// ## Algorithm
/// 1. Drop a leading `?` and decode the pairs (`+` and percent escapes)
/// 2. Every value of a facet key joins that facet's selection
/// 3. The first `minPrice` / `maxPrice` is parsed as a number; a missing,
///    blank, or non-numeric value falls back to the domain edge
/// 4. The bounds go through `PriceRange::new`, which clamps and orders them
///
/// Unknown keys are ignored. Never fails.
pub fn hydrate(query: &str) -> (FilterState, PriceRange) {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut selections: BTreeMap<Facet, Vec<String>> = BTreeMap::new();
    let mut min_price: Option<String> = None;
    let mut max_price: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            MIN_PRICE_KEY => {
                min_price.get_or_insert_with(|| value.into_owned());
            }
            MAX_PRICE_KEY => {
                max_price.get_or_insert_with(|| value.into_owned());
            }
            other => match other.parse::<Facet>() {
                Ok(facet) => selections.entry(facet).or_default().push(value.into_owned()),
                Err(_) => debug!("Ignoring unrecognized query key: {}", other),
            },
        }
    }

    let filters = selections
        .into_iter()
        .fold(FilterState::new(), |state, (facet, tokens)| {
            state.with_selected(facet, tokens)
        });
    let price = PriceRange::new(
        parse_price(MIN_PRICE_KEY, min_price.as_deref(), MIN_PRICE),
        parse_price(MAX_PRICE_KEY, max_price.as_deref(), MAX_PRICE),
    );

    (filters, price)
}

/// Hydrate a whole view; the sort order starts at its default.
pub fn hydrate_view(query: &str) -> ViewState {
    let (filters, price) = hydrate(query);
    ViewState::new(filters, price)
}

/// Render filter state and price window as a query string (without `?`).
///
/// Returns `None` when nothing is active, meaning the address should carry
/// no query at all.
pub fn publish(filters: &FilterState, price: &PriceRange) -> Option<String> {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut has_active_filters = false;

    for facet in Facet::ALL {
        for token in filters.selected(facet) {
            serializer.append_pair(facet.key(), token);
            has_active_filters = true;
        }
    }

    if !price.is_full() {
        serializer.append_pair(MIN_PRICE_KEY, &format_price(price.min()));
        serializer.append_pair(MAX_PRICE_KEY, &format_price(price.max()));
        has_active_filters = true;
    }

    has_active_filters.then(|| serializer.finish())
}

/// [`publish`] for a whole view.
pub fn publish_view(view: &ViewState) -> Option<String> {
    publish(&view.filters, &view.price)
}

fn parse_price(key: &str, raw: Option<&str>, fallback: f64) -> f64 {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("Malformed {} {:?}, using {}", key, raw, fallback);
            fallback
        }
    }
}

/// `100.0` renders as `100`; fractional prices keep their digits.
fn format_price(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_facet_key_leaves_facet_unconstrained() {
        let (filters, price) = hydrate("condition=&hand=");
        assert!(filters.is_empty());
        assert!(price.is_full());
    }

    #[test]
    fn test_hydrate_brand_and_min_price() {
        let (filters, price) = hydrate("?brand=titleist&minPrice=100");

        let expected = FilterState::new().toggle(Facet::Brand, "titleist");
        assert_eq!(filters, expected);
        assert_eq!(price, PriceRange::new(100.0, 2000.0));
    }

    #[test]
    fn test_hydrate_repeated_keys() {
        let (filters, _) = hydrate("category=drivers&category=putters&category=drivers&level=pro");

        assert_eq!(filters.selected(Facet::Category).len(), 2);
        assert!(filters.is_selected(Facet::Level, "pro"));
        assert!(filters.selected(Facet::Hand).is_empty());
    }

    #[test]
    fn test_hydrate_malformed_prices_fall_back() {
        let (_, price) = hydrate("minPrice=cheap&maxPrice=");
        assert!(price.is_full());

        let (_, price) = hydrate("minPrice=NaN&maxPrice=Infinity");
        assert!(price.is_full());
    }

    #[test]
    fn test_hydrate_clamps_and_orders() {
        let (_, price) = hydrate("minPrice=-50&maxPrice=99999");
        assert!(price.is_full());

        let (_, price) = hydrate("minPrice=900&maxPrice=400");
        assert_eq!(price.min(), 900.0);
        assert_eq!(price.max(), 900.0);
    }

    #[test]
    fn test_hydrate_decodes_and_ignores_unknown_keys() {
        let (filters, _) = hydrate("brand=taylor%20made&hand=left+handed&cursor=abc&sort=priceHighToLow");

        assert!(filters.is_selected(Facet::Brand, "taylor made"));
        assert!(filters.is_selected(Facet::Hand, "left handed"));
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_publish_nothing_active_clears_query() {
        assert_eq!(publish(&FilterState::new(), &PriceRange::full()), None);
    }

    #[test]
    fn test_publish_facets_and_price() {
        let filters = FilterState::new()
            .toggle(Facet::Brand, "titleist")
            .toggle(Facet::Hand, "left");
        let query = publish(&filters, &PriceRange::new(100.0, 2000.0)).unwrap();

        assert_eq!(query, "hand=left&brand=titleist&minPrice=100&maxPrice=2000");
    }

    #[test]
    fn test_publish_full_range_omits_prices() {
        let filters = FilterState::new().toggle(Facet::Condition, "like-new");
        assert_eq!(
            publish(&filters, &PriceRange::full()).as_deref(),
            Some("condition=like-new")
        );
    }

    #[test]
    fn test_publish_encodes_values() {
        let filters = FilterState::new().toggle(Facet::Brand, "a&b=c");
        let query = publish(&filters, &PriceRange::new(12.5, 99.0)).unwrap();

        assert_eq!(query, "brand=a%26b%3Dc&minPrice=12.5&maxPrice=99");
        assert_eq!(hydrate(&query), (filters, PriceRange::new(12.5, 99.0)));
    }

    #[test]
    fn test_publish_is_idempotent() {
        let filters = FilterState::new()
            .toggle(Facet::Category, "irons")
            .toggle(Facet::Category, "drivers");
        let price = PriceRange::new(0.0, 750.0);
        assert_eq!(publish(&filters, &price), publish(&filters, &price));
    }
}
