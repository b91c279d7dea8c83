//! Keeps an address surface in step with the view state.

use crate::address::AddressSurface;
use crate::query::{hydrate_view, publish_view};
use facets::ViewState;
use tracing::{debug, info};

/// Owns the address surface and is the only thing that writes to it.
///
/// Each publish renders the complete query from the given snapshot and
/// replaces the address with it, so the last publish always wins.
#[derive(Debug)]
pub struct UrlSynchronizer<A: AddressSurface> {
    address: A,
}

impl<A: AddressSurface> UrlSynchronizer<A> {
    pub fn new(address: A) -> Self {
        Self { address }
    }

    /// Initial view state from whatever the address currently holds.
    pub fn hydrate_from_address(&self) -> ViewState {
        let query = self.address.query().unwrap_or_default();
        let view = hydrate_view(&query);
        info!(
            "Hydrated {} facet selections from address (price {}..{})",
            view.filters.active_count(),
            view.price.min(),
            view.price.max()
        );
        view
    }

    /// Write `view` to the address in replace mode.
    ///
    /// Returns `false` when the address already shows this state and no
    /// write was needed.
    pub fn publish(&mut self, view: &ViewState) -> bool {
        let query = publish_view(view);
        if self.address.query() == query {
            debug!("Address already up to date");
            return false;
        }
        self.address.replace_query(query.as_deref());
        true
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn into_inner(self) -> A {
        self.address
    }
}
