//! The selected security.
//!
//! An `Instrument` is a value object: selecting a watchlist entry copies what it needs out of
//! the entry and attaches a freshly generated history. Later watchlist edits never reach it.

use serde::{Deserialize, Serialize};

use super::market_data::PriceSeries;
use super::watchlist::WatchlistEntry;

pub type InstrumentId = u64;

/// Descriptive metadata. Has no effect on valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub cast: Vec<String>,
    pub director: String,
    pub budget: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            cast: vec![
                "Shah Rukh Khan".to_string(),
                "Deepika Padukone".to_string(),
                "John Abraham".to_string(),
            ],
            director: "Siddharth Anand".to_string(),
            budget: 200_000_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    id: InstrumentId,
    title: String,
    price: f64,
    percent_change: f64,
    history: PriceSeries,
    profile: Profile,
}

impl Instrument {
    pub fn new(
        id: InstrumentId,
        title: impl Into<String>,
        price: f64,
        percent_change: f64,
        history: PriceSeries,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            percent_change,
            history,
            profile: Profile::default(),
        }
    }

    /// Builds a detached snapshot of a watchlist entry.
    pub fn from_entry(entry: &WatchlistEntry, history: PriceSeries) -> Self {
        Self::new(entry.id, &entry.title, entry.price, entry.change, history)
    }

    pub fn id(&self) -> InstrumentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn percent_change(&self) -> f64 {
        self.percent_change
    }

    pub fn history(&self) -> &PriceSeries {
        &self.history
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_snapshot_is_detached_from_entry() {
        let mut entry = WatchlistEntry::new(
            1,
            "Pathaan",
            25.50,
            3.2,
            "Action",
            NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
        );
        let instrument = Instrument::from_entry(&entry, PriceSeries::default());

        entry.price = 99.0;
        entry.title = "Renamed".to_string();

        assert_eq!(instrument.title(), "Pathaan");
        assert_eq!(instrument.price(), 25.50);
        assert_eq!(instrument.profile().director, "Siddharth Anand");
    }

    #[test]
    fn test_entry_serializes_with_camel_case_date() {
        let entry = WatchlistEntry::new(
            7,
            "Liger",
            18.40,
            1.5,
            "Sports Drama",
            NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"releaseDate\":\"2023-12-15\""));
    }
}
