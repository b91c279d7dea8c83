//! Errors raised by the storefront session and its collaborators.
//!
//! None of these are fatal to a browsing session: fetch failures degrade to
//! an empty page, refused page moves leave the current page in place, and a
//! detached session simply stops acting on results.

use thiserror::Error;

/// Failure reported by a catalog source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Source could not be reached or did not answer
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// Source answered with something that is not a usable page
    #[error("Malformed catalog page: {0}")]
    Malformed(String),
}

/// Errors from the pagination cursor manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// Refused locally: the current page reports no next page
    #[error("No next page to load")]
    NoNextPage,

    /// Refused locally: the current page reports no previous page
    #[error("No previous page to load")]
    NoPreviousPage,

    /// The owner was torn down while the fetch was in flight
    #[error("Page fetch finished after the session was torn down")]
    Detached,
}

/// Errors from the storefront session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session has been torn down")]
    Detached,

    #[error(transparent)]
    Pagination(PaginationError),
}

impl From<PaginationError> for SessionError {
    fn from(err: PaginationError) -> Self {
        match err {
            PaginationError::Detached => SessionError::Detached,
            other => SessionError::Pagination(other),
        }
    }
}
