//! CrossLab Core — price series, moving averages, crossover detection.
//!
//! This crate holds the pure computation the scanner fans out over:
//! - Domain types (price series, signals)
//! - Running-sum simple moving average
//! - Short/long SMA crossover detection
//! - CSV loading of closing prices

pub mod data;
pub mod domain;
pub mod indicators;
pub mod signal;
