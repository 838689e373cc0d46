use super::portfolio::Portfolio;
use reel::{InstrumentId, Notification, Side};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a single transaction did to the portfolio scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub timestamp: i64,
    pub side: Side,
    pub instrument_id: InstrumentId,
    pub title: String,
    pub allocation_percent: f64,
    pub investment_value: f64,
    /// Zero on sells.
    pub gross_profit: f64,
    /// Zero on sells.
    pub tax: f64,
    /// Signed delta applied to the cumulative change.
    pub net_change: f64,
}

impl Receipt {
    pub(crate) fn new(
        side: Side,
        instrument_id: InstrumentId,
        title: impl Into<String>,
        allocation_percent: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            side,
            instrument_id,
            title: title.into(),
            allocation_percent,
            investment_value: 0.0,
            gross_profit: 0.0,
            tax: 0.0,
            net_change: 0.0,
        }
    }
}

/// Result of a successful buy or sell: the next portfolio plus the feedback it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub portfolio: Portfolio,
    pub notification: Notification,
    pub receipt: Receipt,
}
