use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::instrument::InstrumentId;

/// A tracked movie as stored in the watchlist.
///
/// Field names follow the persisted JSON layout (`releaseDate` is camel-cased).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: InstrumentId,
    pub title: String,
    pub price: f64,
    /// Percent change, signed.
    pub change: f64,
    pub genre: String,
    pub release_date: NaiveDate,
}

impl WatchlistEntry {
    pub fn new(
        id: InstrumentId,
        title: impl Into<String>,
        price: f64,
        change: f64,
        genre: impl Into<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            change,
            genre: genre.into(),
            release_date,
        }
    }
}
