//! Error types for the catalog crate.
//!
//! Loading a catalog export can fail on I/O, on malformed JSON, or on data
//! that parses but violates catalog invariants (duplicate product ids,
//! blank handles). Paging an in-memory catalog can fail on a cursor that
//! was never handed out.

use thiserror::Error;

/// Errors that can occur while loading or paging a catalog.
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File or directory could not be found
    #[error("Failed to open catalog export: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading an export
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Export was not valid catalog JSON
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// The same product id appeared twice across the loaded exports
    #[error("Duplicate product id: {id}")]
    DuplicateProduct { id: String },

    /// A cursor was not produced by this catalog
    #[error("Unknown cursor: {0}")]
    UnknownCursor(String),

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
