//! Illustrative tax model. Not a statement of any real tax law.

/// Long-term capital gains rate used by the default preset.
pub const LONG_TERM_GAINS_RATE: f64 = 0.15;

/// Tax owed on `profit` at `rate`.
///
/// Total over all inputs: a negative profit yields a negative tax and is not clamped.
pub fn tax(profit: f64, rate: f64) -> f64 {
    profit * rate
}

/// [`tax`] at the long-term capital gains rate.
pub fn long_term_gains_tax(profit: f64) -> f64 {
    tax(profit, LONG_TERM_GAINS_RATE)
}
