//! Signal — a single crossover event.

use std::fmt;

/// Direction of a crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalDirection {
    /// Short average crossed above the long average.
    Buy,
    /// Short average crossed below the long average.
    Sell,
}

impl SignalDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "Buy",
            SignalDirection::Sell => "Sell",
        }
    }
}

/// An immutable crossover event.
///
/// `index` is the position of the bar the crossover was confirmed on. The
/// detector emits it relative to the slice it was given; the scanner rebases
/// it onto the full series before anything is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub direction: SignalDirection,
    pub index: usize,
    pub price: f64,
}

impl Signal {
    pub fn buy(index: usize, price: f64) -> Self {
        Self {
            direction: SignalDirection::Buy,
            index,
            price,
        }
    }

    pub fn sell(index: usize, price: f64) -> Self {
        Self {
            direction: SignalDirection::Sell,
            index,
            price,
        }
    }

    /// Same event shifted by `offset` positions.
    pub fn rebased(self, offset: usize) -> Self {
        Self {
            index: self.index + offset,
            ..self
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at index {}, Price: {:.2}",
            self.direction.label(),
            self.index,
            self.price
        )
    }
}
