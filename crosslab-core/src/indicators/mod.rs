//! Indicator implementations over plain closing-price slices.

pub mod sma;

pub use sma::Sma;

/// A rolling indicator computed over a whole slice at once.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_10").
    fn name(&self) -> &str;

    /// Number of leading inputs consumed before the first output value.
    fn lookback(&self) -> usize;

    /// Compute the indicator. Output `k` corresponds to input `k + lookback()`.
    fn compute(&self, values: &[f64]) -> Vec<f64>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
