//! PriceSeries — the ordered closing prices a scan runs over.

/// Ordered closing prices, indexed from 0 in load order.
///
/// Built once by the loader and never mutated afterwards; workers borrow
/// disjoint sub-slices of [`PriceSeries::closes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>) -> Self {
        Self { closes }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Closing price at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.closes.get(index).copied()
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(closes: Vec<f64>) -> Self {
        Self::new(closes)
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.closes
    }
}
