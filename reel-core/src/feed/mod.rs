pub mod random_series;

pub use random_series::RandomSeries;
