pub mod persistence;

pub use persistence::{load_state, save_state};
