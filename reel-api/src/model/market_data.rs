//! Market data models.
//!
//! A `PriceSeries` is a display artifact only. Valuation never reads it.

use serde::{Deserialize, Serialize};

/// Number of days in a generated history.
pub const SERIES_LENGTH: usize = 30;

/// One day of synthetic trading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 1-based day index.
    pub day: u32,
    pub price: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(day: u32, price: f64, volume: f64) -> Self {
        Self { day, price, volume }
    }
}

/// Ordered sequence of daily points, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_volume(&self) -> f64 {
        self.points.iter().map(|p| p.volume).sum()
    }

    /// Highest and lowest price over the series, `None` when empty.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.price);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
