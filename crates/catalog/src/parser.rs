//! Parser for catalog export files.
//!
//! An export is the JSON body of a product listing query. Two shapes are
//! accepted for the product list:
//! - a plain array: `{ "products": [ {...}, ... ] }`
//! - a connection:  `{ "products": { "nodes": [ {...}, ... ] } }`
//!
//! `collections` is optional in both shapes. A product names the
//! collections it is listed in through its own `collections` field.

use crate::error::{CatalogError, Result};
use crate::types::{Collection, ProductRecord};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed contents of one export file.
#[derive(Debug, Clone, Default)]
pub struct CatalogExport {
    pub products: Vec<ProductRecord>,
    pub collections: Vec<Collection>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductList {
    Plain(Vec<ProductRecord>),
    Connection { nodes: Vec<ProductRecord> },
}

#[derive(Deserialize)]
struct RawExport {
    products: ProductList,
    #[serde(default)]
    collections: Option<CollectionList>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionList {
    Plain(Vec<Collection>),
    Connection { nodes: Vec<Collection> },
}

/// Parse an export from a JSON string.
///
/// `file` only labels errors.
pub fn parse_export_str(file: &str, content: &str) -> Result<CatalogExport> {
    let raw: RawExport = serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })?;

    let products = match raw.products {
        ProductList::Plain(list) => list,
        ProductList::Connection { nodes } => nodes,
    };
    let collections = match raw.collections {
        Some(CollectionList::Plain(list)) => list,
        Some(CollectionList::Connection { nodes }) => nodes,
        None => Vec::new(),
    };

    for (idx, product) in products.iter().enumerate() {
        validate_product(file, idx, product)?;
    }

    Ok(CatalogExport {
        products,
        collections,
    })
}

/// Read and parse one export file.
pub fn parse_export(path: &Path) -> Result<CatalogExport> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_export_str(&label, &content)
}

/// Reject records the rest of the system cannot address.
fn validate_product(file: &str, idx: usize, product: &ProductRecord) -> Result<()> {
    if product.id.trim().is_empty() {
        return Err(CatalogError::ValidationError(format!(
            "{}: product #{} has an empty id",
            file, idx
        )));
    }
    if product.handle.trim().is_empty() {
        return Err(CatalogError::ValidationError(format!(
            "{}: product {} has an empty handle",
            file, product.id
        )));
    }
    Ok(())
}
