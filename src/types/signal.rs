use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the 20-day moving average, with a flat band of
/// 0.05% of the average itself around zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlopeDirection {
    Up,
    Flat,
    Down,
}

impl SlopeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlopeDirection::Up => "up",
            SlopeDirection::Flat => "flat",
            SlopeDirection::Down => "down",
        }
    }
}

impl fmt::Display for SlopeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Close relative to MA20. Equality counts as Below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePosition {
    Above,
    Below,
}

impl PricePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePosition::Above => "above MA20",
            PricePosition::Below => "below MA20",
        }
    }
}

impl fmt::Display for PricePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bullish stacking of the four averages: MA5 > MA10 > MA20 > MA60,
/// all strict. Anything else, including a missing MA60, is None.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Bullish,
    None,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Bullish => "bullish stack",
            Alignment::None => "no stack",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three categorical signals derived from one indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalTriple {
    pub slope: SlopeDirection,
    pub position: PricePosition,
    pub alignment: Alignment,
}

impl SignalTriple {
    pub fn new(slope: SlopeDirection, position: PricePosition, alignment: Alignment) -> Self {
        Self {
            slope,
            position,
            alignment,
        }
    }

    /// All 12 combinations, in table order.
    pub fn all() -> Vec<SignalTriple> {
        let mut triples = Vec::with_capacity(12);
        for slope in [SlopeDirection::Up, SlopeDirection::Flat, SlopeDirection::Down] {
            for position in [PricePosition::Above, PricePosition::Below] {
                for alignment in [Alignment::Bullish, Alignment::None] {
                    triples.push(SignalTriple::new(slope, position, alignment));
                }
            }
        }
        triples
    }
}

impl fmt::Display for SignalTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MA20 {} | {} | {}", self.slope, self.position, self.alignment)
    }
}
