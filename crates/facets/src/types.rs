//! View state types: which facet tokens are selected, the price window,
//! and the sort order.
//!
//! All of these are plain values. Changing the view means building a new
//! value (see [`crate::reducer`]); nothing here is mutated in place by the
//! code that renders it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors from parsing facet and sort identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacetError {
    #[error("Unknown facet: {0}")]
    UnknownFacet(String),

    #[error("Unknown sort key: {0} (expected bestMatch, priceLowToHigh or priceHighToLow)")]
    UnknownSortKey(String),
}

// =============================================================================
// Facet
// =============================================================================

/// One independently filterable dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Hand,
    Category,
    Brand,
    Condition,
    Level,
}

impl Facet {
    /// Every facet, in the order they are written to the address.
    pub const ALL: [Facet; 5] = [
        Facet::Hand,
        Facet::Category,
        Facet::Brand,
        Facet::Condition,
        Facet::Level,
    ];

    /// Query-string key for this facet.
    pub fn key(self) -> &'static str {
        match self {
            Facet::Hand => "hand",
            Facet::Category => "category",
            Facet::Brand => "brand",
            Facet::Condition => "condition",
            Facet::Level => "level",
        }
    }

    /// Heading shown above the facet's options.
    pub fn heading(self) -> &'static str {
        match self {
            Facet::Hand => "Hand Preference",
            Facet::Category => "Club Category",
            Facet::Brand => "Brand",
            Facet::Condition => "Condition",
            Facet::Level => "Player Level",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.key() == s)
            .ok_or_else(|| FacetError::UnknownFacet(s.to_string()))
    }
}

// =============================================================================
// FilterState
// =============================================================================

/// Selected tokens per facet.
///
/// Tokens are stored exactly as selected; matching lower-cases them. An
/// empty facet places no constraint on the result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    hand: BTreeSet<String>,
    category: BTreeSet<String>,
    brand: BTreeSet<String>,
    condition: BTreeSet<String>,
    level: BTreeSet<String>,
}

impl FilterState {
    /// A state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a facet's whole selection. Only used when loading a state
    /// from the address; interactive changes go through [`toggle`].
    ///
    /// Blank tokens are dropped, so a bare `?condition=` leaves the facet
    /// unconstrained instead of selecting an empty token that no tag matches.
    ///
    /// [`toggle`]: FilterState::toggle
    pub fn with_selected<I, S>(mut self, facet: Facet, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.slot_mut(facet) = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token: &String| !token.trim().is_empty())
            .collect();
        self
    }

    /// Flip one token: insert it if absent, remove it if present.
    ///
    /// Toggling a blank token returns an unchanged copy.
    pub fn toggle(&self, facet: Facet, token: &str) -> Self {
        let mut next = self.clone();
        if token.trim().is_empty() {
            return next;
        }
        let slot = next.slot_mut(facet);
        if !slot.remove(token) {
            slot.insert(token.to_string());
        }
        next
    }

    /// Tokens selected for a facet.
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Hand => &self.hand,
            Facet::Category => &self.category,
            Facet::Brand => &self.brand,
            Facet::Condition => &self.condition,
            Facet::Level => &self.level,
        }
    }

    pub fn is_selected(&self, facet: Facet, token: &str) -> bool {
        self.selected(facet).contains(token)
    }

    /// True when no facet has a selection.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|&facet| self.selected(facet).is_empty())
    }

    /// Number of selected tokens across all facets.
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().map(|&facet| self.selected(facet).len()).sum()
    }

    /// Facets that currently constrain the result set.
    pub fn active_facets(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL
            .into_iter()
            .filter(|&facet| !self.selected(facet).is_empty())
    }

    /// A state with every facet cleared.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// A copy with one facet's selection dropped.
    pub fn without(&self, facet: Facet) -> Self {
        let mut next = self.clone();
        next.slot_mut(facet).clear();
        next
    }

    fn slot_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Hand => &mut self.hand,
            Facet::Category => &mut self.category,
            Facet::Brand => &mut self.brand,
            Facet::Condition => &mut self.condition,
            Facet::Level => &mut self.level,
        }
    }
}

// =============================================================================
// PriceRange
// =============================================================================

/// Lowest selectable price.
pub const MIN_PRICE: f64 = 0.0;

/// Highest selectable price.
pub const MAX_PRICE: f64 = 2000.0;

/// Granularity of the price slider. The engine itself does not quantize.
pub const PRICE_STEP: f64 = 50.0;

/// Inclusive price window, always inside `[MIN_PRICE, MAX_PRICE]` with
/// `min <= max`.
///
/// The full domain is the default and means "no price filter" to the
/// address bar, though the predicate still applies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PriceBounds")]
pub struct PriceRange {
    min: f64,
    max: f64,
}

/// Serialized bounds; deserializing goes through [`PriceRange::new`].
#[derive(Deserialize)]
struct PriceBounds {
    min: f64,
    max: f64,
}

impl From<PriceBounds> for PriceRange {
    fn from(bounds: PriceBounds) -> Self {
        PriceRange::new(bounds.min, bounds.max)
    }
}

impl PriceRange {
    /// Build a range from two bounds.
    ///
    /// Non-finite bounds fall back to the domain edge, both bounds are
    /// clamped, and an inverted pair snaps `max` up to `min`.
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { clamp_price(min) } else { MIN_PRICE };
        let max = if max.is_finite() { clamp_price(max) } else { MAX_PRICE };
        Self {
            min,
            max: max.max(min),
        }
    }

    /// The whole domain.
    pub fn full() -> Self {
        Self {
            min: MIN_PRICE,
            max: MAX_PRICE,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Move the lower bound. Moving it above `max` pulls `max` along.
    /// Non-finite input leaves the range unchanged.
    pub fn with_min(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        let min = clamp_price(value);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Move the upper bound. Moving it below `min` pulls `min` along.
    /// Non-finite input leaves the range unchanged.
    pub fn with_max(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        let max = clamp_price(value);
        Self {
            min: self.min.min(max),
            max,
        }
    }

    /// Inclusive containment check.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// True when the range spans the whole domain.
    pub fn is_full(&self) -> bool {
        self.min == MIN_PRICE && self.max == MAX_PRICE
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

fn clamp_price(value: f64) -> f64 {
    value.clamp(MIN_PRICE, MAX_PRICE)
}

// =============================================================================
// SortKey
// =============================================================================

/// Result ordering. Not persisted to the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Catalog arrival order
    #[default]
    BestMatch,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::BestMatch,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
    ];

    /// Stable identifier (`bestMatch`, `priceLowToHigh`, `priceHighToLow`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::BestMatch => "bestMatch",
            SortKey::PriceLowToHigh => "priceLowToHigh",
            SortKey::PriceHighToLow => "priceHighToLow",
        }
    }

    /// Text for the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::BestMatch => "Best Match",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FacetError::UnknownSortKey(s.to_string()))
    }
}

// =============================================================================
// ViewState
// =============================================================================

/// Everything that decides which products are visible and in what order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterState,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(filters: FilterState, price: PriceRange) -> Self {
        Self {
            filters,
            price,
            sort: SortKey::default(),
        }
    }

    /// True when neither a facet nor the price range narrows the results.
    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty() || !self.price.is_full()
    }
}
