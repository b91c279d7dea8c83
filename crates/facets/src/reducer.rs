//! The view-state reducer.
//!
//! Every shopper interaction becomes a [`ViewEvent`]; [`reduce`] turns the
//! current snapshot plus that event into the next snapshot. The caller keeps
//! the latest snapshot and recomputes whatever it derives from it.

use crate::types::{Facet, PriceRange, SortKey, ViewState};
use tracing::debug;

/// A discrete change requested by the shopper.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Check or uncheck one option of one facet
    ToggleToken { facet: Facet, token: String },
    /// Edit the lower price bound
    SetMinPrice(f64),
    /// Edit the upper price bound
    SetMaxPrice(f64),
    /// Drag both slider thumbs at once
    SetPriceRange(f64, f64),
    /// Pick a sort order
    SetSort(SortKey),
    /// Drop every facet selection and reset the price window
    ClearFilters,
}

impl ViewEvent {
    pub fn toggle(facet: Facet, token: impl Into<String>) -> Self {
        ViewEvent::ToggleToken {
            facet,
            token: token.into(),
        }
    }
}

/// Compute the snapshot that follows `state` once `event` is applied.
///
/// Pure: the input snapshot is never modified.
pub fn reduce(state: &ViewState, event: ViewEvent) -> ViewState {
    debug!("Reducing view event: {:?}", event);
    match event {
        ViewEvent::ToggleToken { facet, token } => ViewState {
            filters: state.filters.toggle(facet, &token),
            ..state.clone()
        },
        ViewEvent::SetMinPrice(value) => ViewState {
            price: state.price.with_min(value),
            ..state.clone()
        },
        ViewEvent::SetMaxPrice(value) => ViewState {
            price: state.price.with_max(value),
            ..state.clone()
        },
        ViewEvent::SetPriceRange(min, max) => ViewState {
            price: PriceRange::new(min, max),
            ..state.clone()
        },
        ViewEvent::SetSort(sort) => ViewState {
            sort,
            ..state.clone()
        },
        ViewEvent::ClearFilters => ViewState {
            filters: state.filters.clear(),
            price: PriceRange::full(),
            sort: state.sort,
        },
    }
}

impl ViewState {
    /// Method form of [`reduce`].
    pub fn apply(&self, event: ViewEvent) -> ViewState {
        reduce(self, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_event() {
        let state = ViewState::default();
        let next = reduce(&state, ViewEvent::toggle(Facet::Category, "drivers"));

        assert!(next.filters.is_selected(Facet::Category, "drivers"));
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_price_events() {
        let state = ViewState::default()
            .apply(ViewEvent::SetMinPrice(300.0))
            .apply(ViewEvent::SetMaxPrice(200.0));

        assert_eq!(state.price.min(), 200.0);
        assert_eq!(state.price.max(), 200.0);

        let dragged = state.apply(ViewEvent::SetPriceRange(50.0, 1500.0));
        assert_eq!(dragged.price, PriceRange::new(50.0, 1500.0));
    }

    #[test]
    fn test_sort_event_keeps_filters() {
        let state = ViewState::default().apply(ViewEvent::toggle(Facet::Brand, "ping"));
        let sorted = state.apply(ViewEvent::SetSort(SortKey::PriceHighToLow));

        assert_eq!(sorted.sort, SortKey::PriceHighToLow);
        assert_eq!(sorted.filters, state.filters);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let state = ViewState::default()
            .apply(ViewEvent::toggle(Facet::Hand, "left"))
            .apply(ViewEvent::SetMinPrice(400.0))
            .apply(ViewEvent::SetSort(SortKey::PriceLowToHigh));

        let cleared = state.apply(ViewEvent::ClearFilters);
        assert!(!cleared.has_active_filters());
        assert_eq!(cleared.sort, SortKey::PriceLowToHigh);
    }
}
