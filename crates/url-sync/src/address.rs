//! The address surface the synchronizer reads from and writes to.
//!
//! Writes always replace the current entry; the trait has no way to push a
//! new history entry, so filter changes never fill the back button.

use tracing::debug;

/// Read/replace access to the page address's query string.
pub trait AddressSurface {
    /// Current query string without the leading `?`, or `None` when the
    /// address has no query.
    fn query(&self) -> Option<String>;

    /// Replace the query string in place. `None` removes the query entirely.
    fn replace_query(&mut self, query: Option<&str>);
}

/// An in-memory address, for terminals and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAddress {
    path: String,
    query: Option<String>,
    replacements: usize,
}

impl MemoryAddress {
    /// An address with a path and an optional initial query.
    ///
    /// An empty query (`""` or `"?"`) is stored as no query.
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            path: path.into(),
            query: normalize(query),
            replacements: 0,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full relative address, e.g. `/collections/all?brand=ping`.
    pub fn href(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// How many times the query was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl AddressSurface for MemoryAddress {
    fn query(&self) -> Option<String> {
        self.query.clone()
    }

    fn replace_query(&mut self, query: Option<&str>) {
        self.query = normalize(query);
        self.replacements += 1;
        debug!("Address replaced: {}", self.href());
    }
}

impl<A: AddressSurface + ?Sized> AddressSurface for Box<A> {
    fn query(&self) -> Option<String> {
        (**self).query()
    }

    fn replace_query(&mut self, query: Option<&str>) {
        (**self).replace_query(query)
    }
}

fn normalize(query: Option<&str>) -> Option<String> {
    query
        .map(|q| q.strip_prefix('?').unwrap_or(q))
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}
