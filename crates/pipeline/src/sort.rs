//! Sort engine for the visible set.
//!
//! Sorting never touches its input; it returns a freshly ordered Vec.
//! Price orders use a stable sort, so equal prices keep arrival order.

use catalog::ProductRecord;
use facets::SortKey;
use std::cmp::Ordering;

/// Return the products ordered by `key`.
///
/// ## Algorithm
/// - `BestMatch`: arrival order, unchanged
/// - `PriceLowToHigh` / `PriceHighToLow`: stable sort on the parsed
///   minimum variant price. Products without a readable price go last in
///   both directions.
pub fn sort(products: &[ProductRecord], key: SortKey) -> Vec<ProductRecord> {
    sort_owned(products.to_vec(), key)
}

/// Owned form of [`sort`], for callers that already hold a fresh Vec.
pub fn sort_owned(mut products: Vec<ProductRecord>, key: SortKey) -> Vec<ProductRecord> {
    match key {
        SortKey::BestMatch => {}
        SortKey::PriceLowToHigh => {
            products.sort_by(|a, b| compare_prices(a, b, false));
        }
        SortKey::PriceHighToLow => {
            products.sort_by(|a, b| compare_prices(a, b, true));
        }
    }
    products
}

fn compare_prices(a: &ProductRecord, b: &ProductRecord, descending: bool) -> Ordering {
    match (a.min_variant_price(), b.min_variant_price()) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Money;

    fn priced(id: &str, amount: &str) -> ProductRecord {
        ProductRecord::new(id, id, id, Money::new(amount, "GBP"))
    }

    fn ids(products: &[ProductRecord]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_best_match_keeps_order() {
        let products = vec![priced("a", "30"), priced("b", "10"), priced("c", "20")];
        assert_eq!(ids(&sort(&products, SortKey::BestMatch)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_price_sorts() {
        let products = vec![priced("a", "30"), priced("b", "10.5"), priced("c", "20")];
        assert_eq!(ids(&sort(&products, SortKey::PriceLowToHigh)), vec!["b", "c", "a"]);
        assert_eq!(ids(&sort(&products, SortKey::PriceHighToLow)), vec!["a", "c", "b"]);
        // input untouched
        assert_eq!(ids(&products), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let products = vec![
            priced("first", "100"),
            priced("cheap", "50"),
            priced("second", "100.00"),
            priced("third", "100"),
        ];
        assert_eq!(
            ids(&sort(&products, SortKey::PriceLowToHigh)),
            vec!["cheap", "first", "second", "third"]
        );
        assert_eq!(
            ids(&sort(&products, SortKey::PriceHighToLow)),
            vec!["first", "second", "third", "cheap"]
        );
    }

    #[test]
    fn test_unpriced_go_last() {
        let products = vec![priced("x", "POA"), priced("a", "30"), priced("b", "10")];
        assert_eq!(ids(&sort(&products, SortKey::PriceLowToHigh)), vec!["b", "a", "x"]);
        assert_eq!(ids(&sort(&products, SortKey::PriceHighToLow)), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_sorting_sorted_input_is_idempotent() {
        let products = vec![priced("a", "30"), priced("b", "10"), priced("c", "10")];
        let once = sort(&products, SortKey::PriceLowToHigh);
        let twice = sort(&once, SortKey::PriceLowToHigh);
        assert_eq!(once, twice);
    }
}
