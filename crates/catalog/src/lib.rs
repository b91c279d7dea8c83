//! # Catalog Crate
//!
//! This crate holds the product data the storefront filters and pages over.
//!
//! ## Main Components
//!
//! - **types**: Product records, money, cursor pages, and the in-memory `CatalogIndex`
//! - **parser**: Parse JSON catalog exports into Rust structs
//! - **index**: Load exports from disk and serve cursor pages
//! - **error**: Error types for catalog loading and paging
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, PageRequest};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load(Path::new("data/catalog"))?;
//! let page = index.page(&PageRequest::first(12))?;
//!
//! println!("{} products on the first page", page.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::CatalogExport;
pub use types::{
    // Type aliases
    ProductId,
    // Product types
    Collection,
    Money,
    ProductPriceRange,
    ProductRecord,
    SelectedOption,
    Variant,
    // Pagination types
    Cursor,
    CursorPage,
    Direction,
    PageInfo,
    PageRequest,
    // Index
    CatalogIndex,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_index_creation() {
        let index = CatalogIndex::new();
        let (products, collections) = index.counts();

        assert_eq!(products, 0);
        assert_eq!(collections, 0);
    }

    #[test]
    fn test_insert_product() {
        let mut index = CatalogIndex::new();
        let product = ProductRecord::new(
            "p-1",
            "Titleist Driver",
            "titleist-driver",
            Money::new("199", "GBP"),
        )
        .with_tags(["drivers"]);

        index.insert_product(product).unwrap();

        let retrieved = index.get_product("p-1").unwrap();
        assert_eq!(retrieved.title, "Titleist Driver");
        assert!(index.get_product_by_handle("titleist-driver").is_some());
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let mut index = CatalogIndex::new();
        let product = ProductRecord::new("p-1", "Driver", "driver", Money::new("1", "GBP"));

        index.insert_product(product.clone()).unwrap();
        let result = index.insert_product(product);
        assert!(matches!(result, Err(CatalogError::DuplicateProduct { .. })));
    }

    #[test]
    fn test_collection_upsert_by_handle() {
        let mut index = CatalogIndex::new();
        index.insert_collection(Collection {
            id: "c-1".to_string(),
            title: "Drivers".to_string(),
            handle: "drivers".to_string(),
        });
        index.insert_collection(Collection {
            id: "c-1".to_string(),
            title: "Drivers & Woods".to_string(),
            handle: "drivers".to_string(),
        });

        assert_eq!(index.collections().len(), 1);
        assert_eq!(index.get_collection("drivers").unwrap().title, "Drivers & Woods");
    }

    #[test]
    fn test_price_parsing() {
        let priced = ProductRecord::new("p", "Wedge", "wedge", Money::new(" 89.50 ", "GBP"));
        assert_eq!(priced.min_variant_price(), Some(89.5));

        let unpriced = ProductRecord::new("q", "Wedge", "wedge-2", Money::new("call us", "GBP"));
        assert_eq!(unpriced.min_variant_price(), None);

        let mut missing = priced.clone();
        missing.price_range = None;
        assert_eq!(missing.min_variant_price(), None);
    }

    #[test]
    fn test_empty_queries() {
        let index = CatalogIndex::new();

        assert!(index.get_product("nope").is_none());
        assert!(index.get_product_by_handle("nope").is_none());
        assert!(index.get_collection("nope").is_none());
        assert!(index.products().is_empty());
    }
}
