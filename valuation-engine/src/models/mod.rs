pub mod config;
pub mod intent;
pub mod portfolio;
pub mod trade;

pub use config::*;
pub use intent::*;
pub use portfolio::*;
pub use trade::*;

#[cfg(test)]
mod tests;
