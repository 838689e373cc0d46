//! Static reference data and client-side state.
//!
//! # Submodules
//! - [`catalog`]: Fixed title to base price table.
//! - [`watchlist_store`]: The persisted, ordered watchlist.

pub mod catalog;
pub mod watchlist_store;

pub use catalog::StaticCatalog;
pub use watchlist_store::WatchlistStore;
