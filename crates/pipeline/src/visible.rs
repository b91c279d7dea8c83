//! Visible-set derivation: filter, then sort.
//!
//! The visible set is never stored. Callers recompute it whenever the
//! loaded page or the view state changes.

use crate::filter_pipeline::{standard_pipeline, FilterPipeline};
use crate::sort::sort_owned;
use crate::traits::FilterContext;
use catalog::ProductRecord;
use facets::ViewState;
use tracing::debug;

/// Products from `products` that pass the view's filters, in the view's
/// sort order.
pub fn visible_set(products: &[ProductRecord], view: &ViewState) -> Vec<ProductRecord> {
    visible_set_with(standard_pipeline(), products, view)
}

/// Same as [`visible_set`] with a caller-supplied pipeline.
pub fn visible_set_with(
    pipeline: &FilterPipeline,
    products: &[ProductRecord],
    view: &ViewState,
) -> Vec<ProductRecord> {
    let filtered = pipeline.apply(products.to_vec(), &FilterContext::from(view));
    debug!(
        "Visible set: {} of {} products (sort: {})",
        filtered.len(),
        products.len(),
        view.sort
    );
    sort_owned(filtered, view.sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Money;
    use facets::{Facet, SortKey, ViewEvent};

    #[test]
    fn test_shared_pipeline_is_reused() {
        assert!(std::ptr::eq(standard_pipeline(), standard_pipeline()));
        assert_eq!(
            standard_pipeline().filter_names(),
            FilterPipeline::standard().filter_names()
        );
    }

    #[test]
    fn test_visible_set_filters_then_sorts() {
        let products = vec![
            ProductRecord::new("1", "Ping Putter", "a", Money::new("90", "GBP")),
            ProductRecord::new("2", "Ping Driver", "b", Money::new("300", "GBP")),
            ProductRecord::new("3", "Cobra Driver", "c", Money::new("150", "GBP")),
        ];
        let view = ViewState::default()
            .apply(ViewEvent::toggle(Facet::Category, "driver"))
            .apply(ViewEvent::SetSort(SortKey::PriceLowToHigh));

        let ids: Vec<_> = visible_set(&products, &view)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["3", "2"]);
    }
}
