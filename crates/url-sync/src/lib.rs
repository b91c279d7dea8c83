//! URL synchronization for the storefront view state.
//!
//! This crate keeps the page address and the in-memory view state in step:
//! - `hydrate` reads filter state and price window from a query string
//! - `publish` renders them back, or `None` when nothing is active
//! - `UrlSynchronizer` owns the address surface and writes in replace mode
//!
//! For every reachable state `S`, `hydrate(publish(S)) == S`.

pub mod address;
pub mod query;
pub mod synchronizer;

pub use address::{AddressSurface, MemoryAddress};
pub use query::{hydrate, hydrate_view, publish, publish_view, MAX_PRICE_KEY, MIN_PRICE_KEY};
pub use synchronizer::UrlSynchronizer;
