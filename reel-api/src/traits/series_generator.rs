//! Defines the `SeriesGenerator` trait for synthetic history.
//!
//! The engine regenerates a series every time a new instrument is selected. Implementors may
//! be random (the dashboard default) or replay fixed data in tests.

use crate::model::market_data::PriceSeries;

pub trait SeriesGenerator {
    /// Produces a fresh history, oldest day first.
    fn generate(&mut self) -> PriceSeries;
}
