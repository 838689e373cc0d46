//! Synthetic price history for the selected movie.
//!
//! Every point is drawn independently: price uniform in `[10, 20)` and volume uniform in
//! `[0, 1_000_000)`. There is no random walk between days.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reel::model::market_data::SERIES_LENGTH;
use reel::{PricePoint, PriceSeries, SeriesGenerator};
use std::ops::Range;

const PRICE_RANGE: Range<f64> = 10.0..20.0;
const VOLUME_RANGE: Range<f64> = 0.0..1_000_000.0;

pub struct RandomSeries {
    rng: StdRng,
}

impl Default for RandomSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSeries {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SeriesGenerator for RandomSeries {
    fn generate(&mut self) -> PriceSeries {
        let points = (1..=SERIES_LENGTH as u32)
            .map(|day| {
                PricePoint::new(
                    day,
                    self.rng.gen_range(PRICE_RANGE),
                    self.rng.gen_range(VOLUME_RANGE),
                )
            })
            .collect();
        PriceSeries::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_thirty_days_in_range() {
        let series = RandomSeries::seeded(7).generate();
        assert_eq!(series.len(), 30);

        for (i, point) in series.points().iter().enumerate() {
            assert_eq!(point.day, i as u32 + 1);
            assert!(PRICE_RANGE.contains(&point.price), "price {}", point.price);
            assert!(VOLUME_RANGE.contains(&point.volume), "volume {}", point.volume);
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = RandomSeries::seeded(42).generate();
        let b = RandomSeries::seeded(42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_each_call_regenerates() {
        let mut generator = RandomSeries::seeded(1);
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }
}
