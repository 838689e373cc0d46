use reel::Side;
use serde::{Deserialize, Serialize};

pub const MIN_ALLOCATION: f64 = 0.0;
pub const MAX_ALLOCATION: f64 = 100.0;

/// A buy or sell sized as a percentage of the selected instrument's unit price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionIntent {
    side: Side,
    allocation_percent: f64,
}

impl TransactionIntent {
    pub fn new(side: Side, allocation_percent: f64) -> Self {
        Self {
            side,
            allocation_percent,
        }
    }

    pub fn buy(allocation_percent: f64) -> Self {
        Self::new(Side::Buy, allocation_percent)
    }

    pub fn sell(allocation_percent: f64) -> Self {
        Self::new(Side::Sell, allocation_percent)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn allocation_percent(&self) -> f64 {
        self.allocation_percent
    }

    pub fn is_within_bounds(&self) -> bool {
        is_valid_allocation(self.allocation_percent)
    }

    /// Monetary size of the transaction at `price`.
    pub fn investment_value(&self, price: f64) -> f64 {
        (self.allocation_percent / 100.0) * price
    }
}

/// `true` for finite percentages in `[0, 100]`.
pub fn is_valid_allocation(percent: f64) -> bool {
    percent.is_finite() && (MIN_ALLOCATION..=MAX_ALLOCATION).contains(&percent)
}
