use serde::Serialize;

use crate::types::{Alignment, PricePosition, SignalTriple, SlopeDirection};

/// One of the twelve canonical scenarios. Static domain knowledge,
/// separate from the signal-derivation arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    pub id: u8,
    pub description: &'static str,
    pub action: &'static str,
    pub status_tag: &'static str,
}

/// Maps a signal triple to its scenario. The match is exhaustive over
/// the 3 x 2 x 2 signal space, so every combination has exactly one entry
/// and the original runtime "unknown scenario" fallback has no equivalent.
pub fn lookup(triple: SignalTriple) -> ScenarioRecord {
    use Alignment::{Bullish, None};
    use PricePosition::{Above, Below};
    use SlopeDirection::{Down, Flat, Up};

    match (triple.slope, triple.position, triple.alignment) {
        (Up, Above, Bullish) => ScenarioRecord {
            id: 1,
            description: "Primary markup / strong stock",
            action: "Strongest bullish posture: best entries, and pullbacks that hold the averages are buyable.",
            status_tag: "Strong bull",
        },
        (Up, Above, None) => ScenarioRecord {
            id: 2,
            description: "Early markup / choppy rally",
            action: "Short-term strength without long-term structure; short-horizon longs only.",
            status_tag: "Mild bull (choppy)",
        },
        (Up, Below, Bullish) => ScenarioRecord {
            id: 3,
            description: "Pullback within uptrend (golden pit)",
            action: "Trend intact, only price has dipped; look for support and buy the pullback.",
            status_tag: "Bull pullback",
        },
        (Up, Below, None) => ScenarioRecord {
            id: 4,
            description: "Trend weakening / topping",
            action: "No moving-average cover overhead; exit longs while the trend may be turning.",
            status_tag: "Weakness warning",
        },
        (Flat, Above, Bullish) => ScenarioRecord {
            id: 5,
            description: "Strong consolidation / coiling",
            action: "Selling pressure absorbed; watch for an upside breakout.",
            status_tag: "Poised to break out",
        },
        (Flat, Above, None) => ScenarioRecord {
            id: 6,
            description: "Range-bound, near upper edge",
            action: "Stand aside or scalp; price can fall back through the range, beware false breakouts.",
            status_tag: "Wait-and-see",
        },
        (Flat, Below, Bullish) => ScenarioRecord {
            id: 7,
            description: "False breakdown / deep shakeout",
            action: "Price must reclaim the averages within a few days or the structure breaks.",
            status_tag: "Watch support",
        },
        (Flat, Below, None) => ScenarioRecord {
            id: 8,
            description: "Weak consolidation, near lower edge",
            action: "Lean bearish; without support below, this tends to resolve lower.",
            status_tag: "Mild bear (range)",
        },
        (Down, Above, Bullish) => ScenarioRecord {
            id: 9,
            description: "Contradictory / extreme V-reversal",
            action: "Rare, internally contradictory reading; expect violent swings and stay alert.",
            status_tag: "Special / rare",
        },
        (Down, Above, None) => ScenarioRecord {
            id: 10,
            description: "Bear-market rally (dead-cat bounce)",
            action: "Overhead supply caps the bounce; look to sell into strength.",
            status_tag: "Look for exit",
        },
        (Down, Below, Bullish) => ScenarioRecord {
            id: 11,
            description: "Contradictory / sharp sell-off",
            action: "A crash-like sell-off has destroyed the bullish structure; a downtrend may be starting.",
            status_tag: "Structure broken",
        },
        (Down, Below, None) => ScenarioRecord {
            id: 12,
            description: "Primary downtrend / bearish alignment",
            action: "Trend down and capped by every average; do not catch the falling knife.",
            status_tag: "Absolute bear",
        },
    }
}
