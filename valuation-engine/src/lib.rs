//! # Valuation Engine
//!
//! Turns a buy/sell intent on the selected movie into an updated portfolio, a realized
//! change net of tax, and a user notification.
//!
//! ## Modules
//! - `models`: Portfolio, configuration presets, intents and trade receipts.
//! - `engine`: The pure buy/sell valuation logic.
//! - `guard`: Validation policies run before any state change.
//! - `tax`: Illustrative capital gains tax.
//! - `alerts`: Cancellable delayed "breaking news" notifications.
//! - `session`: The per-user context that owns state and drives the engine.
//! - `io`: Command-line and console front end.

pub mod alerts;
pub mod engine;
pub mod error;
pub mod guard;
pub mod io;
pub mod models;
pub mod session;
pub mod tax;

pub use engine::Engine;
pub use error::EngineError;
pub use session::Session;
