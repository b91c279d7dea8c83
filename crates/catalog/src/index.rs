//! CatalogIndex loading and cursor paging.
//!
//! Loading:
//! - a single export file, or
//! - every `*.json` export in a directory, parsed in parallel with Rayon and
//!   appended in file-name order so arrival order is reproducible.
//!
//! Paging serves Relay-style pages (`first`/`after`, `last`/`before`) over
//! the in-memory product list.

use crate::error::{CatalogError, Result};
use crate::parser::{self, CatalogExport};
use crate::types::*;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CURSOR_PREFIX: &str = "pos:";

impl CatalogIndex {
    /// Load a catalog from one export file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog export from {:?}", path);
        let export = parser::parse_export(path)?;
        let index = Self::from_exports(vec![export])?;
        let (products, collections) = index.counts();
        info!("Loaded {} products, {} collections", products, collections);
        Ok(index)
    }

    /// Load every `*.json` export in a directory.
    ///
    /// Steps:
    /// 1. List the directory and keep `.json` files, sorted by name
    /// 2. Parse all files in parallel using Rayon
    /// 3. Append products and collections in file order
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::FileNotFound {
                path: dir.display().to_string(),
            });
        }
        info!("Loading catalog exports from {:?}", dir);

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        // `collect` on an indexed parallel iterator keeps input order
        let exports = paths
            .par_iter()
            .map(|path| parser::parse_export(path))
            .collect::<Vec<Result<CatalogExport>>>()
            .into_iter()
            .collect::<Result<Vec<CatalogExport>>>()?;

        let index = Self::from_exports(exports)?;
        let (products, collections) = index.counts();
        info!(
            "Loaded {} products, {} collections from {} files",
            products,
            collections,
            paths.len()
        );
        Ok(index)
    }

    /// Load from a path that is either an export file or a directory of them.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_from_dir(path)
        } else {
            Self::load_from_file(path)
        }
    }

    /// Build an index from already-parsed exports.
    pub fn from_exports(exports: Vec<CatalogExport>) -> Result<Self> {
        let mut index = CatalogIndex::new();
        for export in exports {
            for product in export.products {
                index.insert_product(product)?;
            }
            for collection in export.collections {
                index.insert_collection(collection);
            }
        }
        Ok(index)
    }

    /// Build an index from products in arrival order.
    pub fn from_products(products: Vec<ProductRecord>) -> Result<Self> {
        Self::from_exports(vec![CatalogExport {
            products,
            collections: Vec::new(),
        }])
    }

    /// Serve one page of products.
    ///
    /// ## Algorithm
    /// - Narrow the catalog to the requested collection, if any; cursors
    ///   count positions within that listing
    /// - Forward without a cursor: the first `page_size` products
    /// - Forward after cursor `c`: the `page_size` products following `c`
    /// - Backward without a cursor: the last `page_size` products
    /// - Backward before cursor `c`: the `page_size` products preceding `c`
    ///
    /// Page info reports whether anything lies outside the served window.
    pub fn page(&self, request: &PageRequest) -> Result<CursorPage> {
        if request.page_size == 0 {
            return Err(CatalogError::ValidationError(
                "page size must be at least 1".to_string(),
            ));
        }
        let listing: Vec<&ProductRecord> = match request.collection.as_deref() {
            Some(handle) => self
                .products
                .iter()
                .filter(|product| product.belongs_to(handle))
                .collect(),
            None => self.products.iter().collect(),
        };
        let len = listing.len();
        let anchor = request
            .cursor
            .as_ref()
            .map(|cursor| decode_cursor(cursor, len))
            .transpose()?;

        let (start, end) = match (request.direction, anchor) {
            (Direction::Forward, None) => (0, request.page_size.min(len)),
            (Direction::Forward, Some(pos)) => {
                let start = pos + 1;
                (start, start.saturating_add(request.page_size).min(len))
            }
            (Direction::Backward, None) => (len.saturating_sub(request.page_size), len),
            (Direction::Backward, Some(pos)) => (pos.saturating_sub(request.page_size), pos),
        };

        let products = listing[start..end].iter().map(|&p| p.clone()).collect();
        let page_info = PageInfo {
            has_next_page: end < len,
            has_previous_page: start > 0,
            start_cursor: (start < end).then(|| encode_cursor(start)),
            end_cursor: (start < end).then(|| encode_cursor(end - 1)),
        };
        debug!(
            "Served catalog page [{}, {}) of {} in {} ({:?})",
            start,
            end,
            len,
            request.collection.as_deref().unwrap_or("catalog"),
            request.direction
        );

        Ok(CursorPage {
            products,
            page_info,
        })
    }
}

fn decode_cursor(cursor: &Cursor, len: usize) -> Result<usize> {
    cursor
        .as_str()
        .strip_prefix(CURSOR_PREFIX)
        .and_then(|pos| pos.parse::<usize>().ok())
        .filter(|&pos| pos < len)
        .ok_or_else(|| CatalogError::UnknownCursor(cursor.to_string()))
}

fn encode_cursor(position: usize) -> Cursor {
    Cursor::new(format!("{}{}", CURSOR_PREFIX, position))
}
