pub mod args;
pub mod console;

pub use args::Args;
pub use console::{Console, Flow};
