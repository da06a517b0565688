//! Domain types for CrossLab

pub mod series;
pub mod signal;

pub use series::PriceSeries;
pub use signal::{Signal, SignalDirection};
