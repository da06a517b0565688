//! Crossover signal generation.
//!
//! Signals describe a market event at a position in the slice they were
//! computed over. Detection is a pure function of that slice.

pub mod crossover;

pub use crossover::{classify, CrossoverDetector, MovingAverages};
