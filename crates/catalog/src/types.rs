//! Core domain types for storefront catalog data.
//!
//! Product records mirror the shape the storefront API hands back for a
//! product listing (camelCase keys, prices as decimal strings), so a JSON
//! export of a listing query deserializes straight into these types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a product (a storefront global id such as
/// `gid://shopify/Product/42`)
pub type ProductId = String;

// =============================================================================
// Product-related Types
// =============================================================================

/// A monetary amount as the storefront reports it.
///
/// The amount stays a string: it is a decimal literal from the source and is
/// only interpreted when a price comparison needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    #[serde(default)]
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency_code: currency_code.into(),
        }
    }

    /// Parse the amount as a decimal number.
    ///
    /// Returns `None` for blank, non-numeric, or non-finite amounts.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }
}

/// Price span across a product's variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceRange {
    pub min_variant_price: Money,
}

/// A named option value on a variant (e.g. `Hand: Left`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// A purchasable variant of a product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

/// Represents a product as delivered by the catalog source.
///
/// The filtering core only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
    /// Tags as the merchant entered them. A missing or `null` list is an
    /// empty set.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub price_range: Option<ProductPriceRange>,
    #[serde(default, deserialize_with = "deserialize_variants")]
    pub variants: Vec<Variant>,
    /// Handles of the collections this product is listed in.
    #[serde(default, deserialize_with = "deserialize_collection_handles")]
    pub collections: BTreeSet<String>,
}

impl ProductRecord {
    /// Create a product with a single price and no variants.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        handle: impl Into<String>,
        min_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            handle: handle.into(),
            tags: BTreeSet::new(),
            price_range: Some(ProductPriceRange {
                min_variant_price: min_price,
            }),
            variants: Vec::new(),
            collections: BTreeSet::new(),
        }
    }

    /// Builder-style helper to attach tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to list the product in collections.
    pub fn in_collections<I, S>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = handles.into_iter().map(Into::into).collect();
        self
    }

    pub fn belongs_to(&self, collection: &str) -> bool {
        self.collections.contains(collection)
    }

    /// The minimum variant price parsed as a number.
    ///
    /// `None` when the product carries no price or the amount is not a
    /// finite decimal.
    pub fn min_variant_price(&self) -> Option<f64> {
        self.price_range
            .as_ref()
            .and_then(|range| range.min_variant_price.parsed_amount())
    }

    /// Lower-cased title, the form every title match compares against.
    pub fn title_lowercase(&self) -> String {
        self.title.to_lowercase()
    }

    /// Value of a named option on any variant (case-insensitive name).
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.variants
            .iter()
            .flat_map(|variant| variant.selected_options.iter())
            .find(|option| option.name.eq_ignore_ascii_case(name))
            .map(|option| option.value.as_str())
    }
}

/// Tags come through as `null` for untagged products.
fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default().into_iter().collect())
}

/// Variants are accepted either as a plain list or as a `{ "nodes": [...] }`
/// connection.
fn deserialize_variants<'de, D>(deserializer: D) -> std::result::Result<Vec<Variant>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Variants {
        List(Vec<Variant>),
        Connection { nodes: Vec<Variant> },
    }

    let variants: Option<Variants> = Option::deserialize(deserializer)?;
    Ok(match variants {
        Some(Variants::List(list)) => list,
        Some(Variants::Connection { nodes }) => nodes,
        None => Vec::new(),
    })
}

/// Collection membership, as plain handles (`["drivers"]`), as objects
/// (`[{"handle": "drivers"}]`) or as a `{ "nodes": [...] }` connection of
/// objects.
fn deserialize_collection_handles<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct CollectionRef {
        handle: String,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Memberships {
        Handles(Vec<String>),
        Refs(Vec<CollectionRef>),
        Connection { nodes: Vec<CollectionRef> },
    }

    let memberships: Option<Memberships> = Option::deserialize(deserializer)?;
    Ok(match memberships {
        Some(Memberships::Handles(handles)) => handles.into_iter().collect(),
        Some(Memberships::Refs(refs)) | Some(Memberships::Connection { nodes: refs }) => {
            refs.into_iter().map(|r| r.handle).collect()
        }
        None => BTreeSet::new(),
    })
}

/// A storefront collection, used for the collection navigation strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
}

// =============================================================================
// Pagination Types
// =============================================================================

/// Opaque position marker handed out by a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which way a page request walks from its cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Items after the cursor (`first`/`after`)
    Forward,
    /// Items before the cursor (`last`/`before`)
    Backward,
}

/// A request for one page of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<Cursor>,
    pub direction: Direction,
    pub page_size: usize,
    /// Only page through this collection's products; `None` pages the
    /// whole catalog.
    pub collection: Option<String>,
}

impl PageRequest {
    /// The opening page of a listing.
    pub fn first(page_size: usize) -> Self {
        Self {
            cursor: None,
            direction: Direction::Forward,
            page_size,
            collection: None,
        }
    }

    pub fn after(cursor: Cursor, page_size: usize) -> Self {
        Self {
            cursor: Some(cursor),
            direction: Direction::Forward,
            page_size,
            collection: None,
        }
    }

    pub fn before(cursor: Cursor, page_size: usize) -> Self {
        Self {
            cursor: Some(cursor),
            direction: Direction::Backward,
            page_size,
            collection: None,
        }
    }

    /// Scope the request to one collection.
    pub fn in_collection(mut self, handle: impl Into<String>) -> Self {
        self.collection = Some(handle.into());
        self
    }
}

/// Information about the current page in a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
}

/// One page of products plus its page info.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPage {
    #[serde(alias = "nodes")]
    pub products: Vec<ProductRecord>,
    pub page_info: PageInfo,
}

impl CursorPage {
    /// A page with no products and no way to move in either direction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cursor to request the following page, if there is one.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        if self.page_info.has_next_page {
            self.page_info.end_cursor.as_ref()
        } else {
            None
        }
    }

    /// Cursor to request the preceding page, if there is one.
    pub fn previous_cursor(&self) -> Option<&Cursor> {
        if self.page_info.has_previous_page {
            self.page_info.start_cursor.as_ref()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// CatalogIndex - In-Memory Catalog
// =============================================================================

/// Holds a loaded catalog in arrival order.
///
/// Products keep the order they were loaded in; that order is what
/// "best match" sorting shows. The id index only guards against duplicates
/// and serves lookups.
#[derive(Debug)]
pub struct CatalogIndex {
    pub(crate) products: Vec<ProductRecord>,
    pub(crate) positions: HashMap<ProductId, usize>,
    pub(crate) collections: Vec<Collection>,
}

impl CatalogIndex {
    /// Creates a new, empty CatalogIndex
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            positions: HashMap::new(),
            collections: Vec::new(),
        }
    }

    /// Get a product by id
    pub fn get_product(&self, id: &str) -> Option<&ProductRecord> {
        self.positions.get(id).map(|&pos| &self.products[pos])
    }

    /// Get a product by its URL handle
    pub fn get_product_by_handle(&self, handle: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|product| product.handle == handle)
    }

    /// All products in arrival order
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Look up a collection by handle
    pub fn get_collection(&self, handle: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.handle == handle)
    }

    /// Append a product, rejecting a second product with the same id.
    pub fn insert_product(&mut self, product: ProductRecord) -> crate::Result<()> {
        if self.positions.contains_key(&product.id) {
            return Err(crate::CatalogError::DuplicateProduct { id: product.id });
        }
        self.positions.insert(product.id.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    /// Insert or replace a collection (matched by handle)
    pub fn insert_collection(&mut self, collection: Collection) {
        match self
            .collections
            .iter_mut()
            .find(|c| c.handle == collection.handle)
        {
            Some(existing) => *existing = collection,
            None => self.collections.push(collection),
        }
    }

    /// Get counts for debugging/validation: (products, collections)
    pub fn counts(&self) -> (usize, usize) {
        (self.products.len(), self.collections.len())
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
