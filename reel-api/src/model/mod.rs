//! Data models shared between the engine and its collaborators.
//!
//! # Submodules
//! - [`instrument`]: The selected movie security snapshot.
//! - [`market_data`]: Synthetic price/volume history.
//! - [`watchlist`]: Tracked entries as persisted by the watchlist store.
//! - [`notification`]: The single-slot user feedback message.

pub mod instrument;
pub mod market_data;
pub mod notification;
pub mod side;
pub mod watchlist;
