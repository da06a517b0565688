//! Price data loading

pub mod loader;

pub use loader::{load_series, read_series, LoadError, CLOSE_FIELD};
