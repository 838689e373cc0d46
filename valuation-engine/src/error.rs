use reel::InstrumentId;
use thiserror::Error;

/// Reasons a transaction is refused. Raised before any state is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Allocation {0}% is outside the 0-100% range")]
    InvalidAllocation(f64),

    #[error("Price {0} is not a valid non-negative amount")]
    InvalidPrice(f64),

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Selling ₹{requested:.2} would take the portfolio below zero (balance ₹{balance:.2})")]
    NegativeBalance { balance: f64, requested: f64 },

    #[error("No instrument selected")]
    NoInstrumentSelected,

    #[error("Watchlist entry {0} not found")]
    EntryNotFound(InstrumentId),
}
