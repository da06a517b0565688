//! Moving average crossover detection: golden cross and death cross.
//!
//! Emits Buy when the short SMA crosses above the long SMA and Sell when it
//! crosses below. Both averages are compared on windows ending at the same
//! position, so a signal at position `p` means: at `p - 1` the short average
//! was on one side (or level), at `p` it is strictly on the other.

use std::ops::Range;

use crate::domain::{Signal, SignalDirection};
use crate::indicators::{Indicator, Sma};

/// Short and long SMA series computed over one price slice.
///
/// Both are compact (see [`Sma`]): sample `k` of each ends at position
/// `k + period - 1` of the slice they were computed over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovingAverages {
    pub short: Vec<f64>,
    pub long: Vec<f64>,
}

/// Classify one step of the short/long relationship.
///
/// - Buy: `prev_short <= prev_long` and `cur_short > cur_long`.
/// - Sell: `prev_short >= prev_long` and `cur_short < cur_long`.
///
/// Any NaN input yields `None`.
pub fn classify(
    prev_short: f64,
    prev_long: f64,
    cur_short: f64,
    cur_long: f64,
) -> Option<SignalDirection> {
    if cur_short > cur_long && prev_short <= prev_long {
        Some(SignalDirection::Buy)
    } else if cur_short < cur_long && prev_short >= prev_long {
        Some(SignalDirection::Sell)
    } else {
        None
    }
}

/// Short/long SMA crossover detector.
#[derive(Debug, Clone)]
pub struct CrossoverDetector {
    short: Sma,
    long: Sma,
}

impl CrossoverDetector {
    pub fn new(short_period: usize, long_period: usize) -> Self {
        assert!(short_period >= 1, "short_period must be >= 1");
        assert!(
            long_period > short_period,
            "long_period must be > short_period"
        );
        Self {
            short: Sma::new(short_period),
            long: Sma::new(long_period),
        }
    }

    pub fn short_period(&self) -> usize {
        self.short.period()
    }

    pub fn long_period(&self) -> usize {
        self.long.period()
    }

    /// First position that can carry a signal: the long window plus one
    /// previous sample to compare against.
    pub fn warmup(&self) -> usize {
        self.long.period()
    }

    pub fn short_sma(&self) -> &Sma {
        &self.short
    }

    pub fn long_sma(&self) -> &Sma {
        &self.long
    }

    /// Compute both averages over `closes`.
    pub fn averages(&self, closes: &[f64]) -> MovingAverages {
        MovingAverages {
            short: self.short.compute(closes),
            long: self.long.compute(closes),
        }
    }

    /// Scan `closes` for crossovers.
    ///
    /// Indices are relative to `closes` and strictly increasing. Inputs no
    /// longer than the long period produce nothing.
    pub fn detect(&self, closes: &[f64]) -> Vec<Signal> {
        let averages = self.averages(closes);
        self.detect_in(closes, &averages, 0..closes.len())
    }

    /// Scan only the positions in `positions`, comparing precomputed
    /// `averages` of the whole of `closes`.
    ///
    /// Disjoint ranges over the same averages partition the result of
    /// [`detect`](Self::detect) exactly.
    pub fn detect_in(
        &self,
        closes: &[f64],
        averages: &MovingAverages,
        positions: Range<usize>,
    ) -> Vec<Signal> {
        debug_assert_eq!(averages.short.len(), self.short.output_len(closes.len()));
        debug_assert_eq!(averages.long.len(), self.long.output_len(closes.len()));

        let short_lookback = self.short.lookback();
        let long_lookback = self.long.lookback();
        let first = positions.start.max(self.warmup());
        let last = positions.end.min(closes.len());

        let mut signals = Vec::new();
        // Sample `k` of each average ends at position `k + lookback`.
        for index in first..last {
            let direction = classify(
                averages.short[index - 1 - short_lookback],
                averages.long[index - 1 - long_lookback],
                averages.short[index - short_lookback],
                averages.long[index - long_lookback],
            );
            if let Some(direction) = direction {
                signals.push(Signal {
                    direction,
                    index,
                    price: closes[index],
                });
            }
        }
        signals
    }
}
