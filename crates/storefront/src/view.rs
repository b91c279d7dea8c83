//! # View Composition
//!
//! Turns a loaded page plus the current view state into what a listing
//! screen shows: the visible products, the count label, the grid shape,
//! page headings and which filter panels are open.

use catalog::{Collection, CursorPage, ProductRecord};
use facets::{SortKey, ViewState};
use serde::Serialize;

/// Handle of the collection that lists every product.
pub const ALL_COLLECTION: &str = "all";

/// Viewport width at which the desktop panel takes over.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

pub const EMPTY_RESULTS_MESSAGE: &str = "No products match the selected filters";

const ALL_TITLE: &str = "Golf Clubs";
const ALL_SUBTITLE: &str = "Browse our complete collection of premium second hand golf clubs";

// =============================================================================
// Collection Context
// =============================================================================

/// Headings for the collection being browsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionContext {
    pub handle: String,
    pub title: String,
    pub subtitle: String,
}

impl CollectionContext {
    /// The catch-all listing.
    pub fn all() -> Self {
        Self {
            handle: ALL_COLLECTION.to_string(),
            title: ALL_TITLE.to_string(),
            subtitle: ALL_SUBTITLE.to_string(),
        }
    }

    /// Look a handle up among the known collections.
    ///
    /// Unknown handles still render, under a generic "Products" heading.
    pub fn from_handle(handle: &str, collections: &[Collection]) -> Self {
        if handle == ALL_COLLECTION {
            return Self::all();
        }
        let known = collections.iter().find(|c| c.handle == handle);
        let title = known.map(|c| c.title.as_str()).unwrap_or("Products");
        let noun = known.map(|c| c.title.as_str()).unwrap_or("products");
        Self {
            handle: handle.to_string(),
            title: title.to_string(),
            subtitle: format!("Explore our selection of {}", noun),
        }
    }

    pub fn is_all(&self) -> bool {
        self.handle == ALL_COLLECTION
    }

    /// Collection pages are already narrowed to one kind of club.
    pub fn shows_category_facet(&self) -> bool {
        self.is_all()
    }
}

impl Default for CollectionContext {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Panels and Grid
// =============================================================================

/// Which filter panels are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub desktop: bool,
    pub mobile: bool,
}

impl PanelVisibility {
    /// Flip the panel that belongs to the given viewport width.
    pub fn toggle(self, viewport_width: u32) -> Self {
        if viewport_width >= DESKTOP_BREAKPOINT {
            Self {
                desktop: !self.desktop,
                ..self
            }
        } else {
            Self {
                mobile: !self.mobile,
                ..self
            }
        }
    }

    pub fn any_open(&self) -> bool {
        self.desktop || self.mobile
    }
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            desktop: true,
            mobile: false,
        }
    }
}

/// Product grid columns per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub base: u8,
    pub small: u8,
    pub medium: u8,
    pub large: u8,
    pub extra_large: u8,
}

impl GridLayout {
    /// The open desktop panel costs a column at large sizes.
    pub fn for_panels(panels: PanelVisibility) -> Self {
        let wide = if panels.desktop { 5 } else { 6 };
        Self {
            base: 2,
            small: 3,
            medium: 4,
            large: wide,
            extra_large: wide,
        }
    }
}

// =============================================================================
// View Summary
// =============================================================================

/// Everything a listing screen renders for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    pub products: Vec<ProductRecord>,
    pub result_count: usize,
    pub count_label: String,
    pub empty_message: Option<String>,
    pub grid: GridLayout,
    pub title: String,
    pub subtitle: String,
    pub show_category_facet: bool,
    pub sort_label: String,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl ViewSummary {
    /// Derive the summary for a page.
    ///
    /// The visible set only ever covers the loaded page; paging flags come
    /// from the source and ignore local filtering.
    pub fn compose(
        page: &CursorPage,
        view: &ViewState,
        collection: &CollectionContext,
        panels: PanelVisibility,
    ) -> Self {
        let products = pipeline::visible_set(&page.products, view);
        let result_count = products.len();
        Self {
            result_count,
            count_label: count_label(result_count),
            empty_message: (result_count == 0).then(|| EMPTY_RESULTS_MESSAGE.to_string()),
            grid: GridLayout::for_panels(panels),
            title: collection.title.clone(),
            subtitle: collection.subtitle.clone(),
            show_category_facet: collection.shows_category_facet(),
            sort_label: sort_label(view.sort),
            has_next_page: page.page_info.has_next_page,
            has_previous_page: page.page_info.has_previous_page,
            products,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result_count == 0
    }
}

fn count_label(count: usize) -> String {
    format!("{} Products", count)
}

fn sort_label(sort: SortKey) -> String {
    sort.label().to_string()
}
