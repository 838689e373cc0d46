pub mod catalog;
pub mod series_generator;
