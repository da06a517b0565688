//! Simple Moving Average (SMA).
//!
//! Rolling mean over a fixed window, maintained as a running sum so the whole
//! series costs O(N) instead of O(N * period).
//! Output is compact: `len - period + 1` values, the first one covering
//! `values[0..period]`. A period longer than the input yields an empty series.
//! Windows holding a NaN average to NaN, windows holding an infinity to that
//! infinity; later windows recover once the value has rolled out.

use super::Indicator;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of output values for an input of length `len`.
    pub fn output_len(&self, len: usize) -> usize {
        (len + 1).saturating_sub(self.period)
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, values: &[f64]) -> Vec<f64> {
        let period = self.period;
        let mut result = Vec::with_capacity(self.output_len(values.len()));

        if values.len() < period {
            return result;
        }

        let divisor = period as f64;

        // Initial window
        let mut sum = 0.0;
        let mut non_finite_in_window = false;
        for &v in &values[..period] {
            if !v.is_finite() {
                non_finite_in_window = true;
            }
            sum += v;
        }
        result.push(sum / divisor);

        // Roll the window forward
        for i in period..values.len() {
            let leaving = values[i - period];
            let entering = values[i];
            sum = sum - leaving + entering;

            // NaN or infinity poisons the running sum (inf - inf is NaN), so
            // sum the window directly until it has rolled out. A window still
            // holding one averages to NaN or +/-inf like a plain sum would.
            if !entering.is_finite() || !leaving.is_finite() || non_finite_in_window {
                non_finite_in_window = false;
                sum = 0.0;
                for &v in &values[(i + 1 - period)..=i] {
                    if !v.is_finite() {
                        non_finite_in_window = true;
                    }
                    sum += v;
                }
            }

            result.push(sum / divisor);
        }

        result
    }
}
