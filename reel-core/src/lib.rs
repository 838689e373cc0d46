//! # Reel Core Library
//!
//! The collaborators the valuation engine reads from or writes to.
//!
//! ## Modules
//! - `model`: Static catalog and the persisted watchlist store.
//! - `feed`: Synthetic price/volume history generation.
//! - `args`: Standardized argument parsing.
//! - `fs`: JSON state persistence.

pub mod args;
pub mod error;
pub mod feed;
pub mod fs;
pub mod model;

pub use error::CatalogError;
