use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::types::{Alignment, IndicatorBar, PricePosition, SignalTriple, SlopeDirection};

/// A bar reached the classifier without the indicator lead-in it needs.
/// This is an integration bug in the caller, not a market condition, so
/// it surfaces as an error instead of a silent Flat/Below default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("{indicator} is undefined for {date}: insufficient trailing history")]
    MissingIndicator {
        indicator: &'static str,
        date: NaiveDate,
    },
}

/// Derives the three categorical signals from one indicator bar.
#[derive(Debug, Clone)]
pub struct ScenarioClassifier {
    /// Flat band for the MA20 slope, as a fraction of MA20 itself.
    /// The band rescales with price level; it is not an absolute amount.
    flat_threshold: Decimal,
}

impl ScenarioClassifier {
    pub fn new(flat_threshold: Decimal) -> Self {
        Self { flat_threshold }
    }

    pub fn classify(&self, bar: &IndicatorBar) -> Result<SignalTriple, ClassifyError> {
        let ma20 = bar.ma20.ok_or(ClassifyError::MissingIndicator {
            indicator: "MA20",
            date: bar.date,
        })?;
        let slope = bar.ma20_slope.ok_or(ClassifyError::MissingIndicator {
            indicator: "MA20 slope",
            date: bar.date,
        })?;

        let threshold = ma20 * self.flat_threshold;
        let slope_direction = if slope > threshold {
            SlopeDirection::Up
        } else if slope < -threshold {
            SlopeDirection::Down
        } else {
            SlopeDirection::Flat
        };

        let position = if bar.close > ma20 {
            PricePosition::Above
        } else {
            PricePosition::Below
        };

        // All four averages must exist and stack strictly; a missing MA60
        // (short lead-in) can only ever downgrade to None, never Bullish.
        let alignment = match (bar.ma5, bar.ma10, bar.ma20, bar.ma60) {
            (Some(ma5), Some(ma10), Some(ma20), Some(ma60))
                if ma5 > ma10 && ma10 > ma20 && ma20 > ma60 =>
            {
                Alignment::Bullish
            }
            _ => Alignment::None,
        };

        Ok(SignalTriple::new(slope_direction, position, alignment))
    }
}

impl Default for ScenarioClassifier {
    fn default() -> Self {
        // 0.05% of MA20, matching the monthly-line flat band.
        Self::new(dec!(0.0005))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn bar(close: Decimal, ma20: Decimal, slope: Decimal) -> IndicatorBar {
        IndicatorBar {
            date: date(),
            close,
            ma5: Some(ma20),
            ma10: Some(ma20),
            ma20: Some(ma20),
            ma60: Some(ma20),
            ma20_slope: Some(slope),
        }
    }

    #[test]
    fn test_slope_threshold_is_strict_and_symmetric() {
        let classifier = ScenarioClassifier::default();
        // MA20 = 100 puts the flat band at +/- 0.05.
        let flat = classifier.classify(&bar(dec!(101), dec!(100), dec!(0.05))).unwrap();
        assert_eq!(flat.slope, SlopeDirection::Flat);

        let up = classifier.classify(&bar(dec!(101), dec!(100), dec!(0.0501))).unwrap();
        assert_eq!(up.slope, SlopeDirection::Up);

        let down = classifier.classify(&bar(dec!(101), dec!(100), dec!(-0.0501))).unwrap();
        assert_eq!(down.slope, SlopeDirection::Down);

        let edge_down = classifier.classify(&bar(dec!(101), dec!(100), dec!(-0.05))).unwrap();
        assert_eq!(edge_down.slope, SlopeDirection::Flat);
    }

    #[test]
    fn test_threshold_rescales_with_price_level() {
        let classifier = ScenarioClassifier::default();
        // Same absolute slope, ten times the price: band widens to 0.5.
        let triple = classifier.classify(&bar(dec!(1001), dec!(1000), dec!(0.06))).unwrap();
        assert_eq!(triple.slope, SlopeDirection::Flat);
    }

    #[test]
    fn test_position_equality_counts_as_below() {
        let classifier = ScenarioClassifier::default();
        let triple = classifier.classify(&bar(dec!(100), dec!(100), dec!(0))).unwrap();
        assert_eq!(triple.position, PricePosition::Below);

        let above = classifier.classify(&bar(dec!(100.01), dec!(100), dec!(0))).unwrap();
        assert_eq!(above.position, PricePosition::Above);
    }

    #[test]
    fn test_alignment_requires_strict_ordering() {
        let classifier = ScenarioClassifier::default();
        let mut b = bar(dec!(110), dec!(100), dec!(1));
        b.ma5 = Some(dec!(104));
        b.ma10 = Some(dec!(104)); // equal, not strictly greater
        b.ma60 = Some(dec!(90));
        let triple = classifier.classify(&b).unwrap();
        assert_eq!(triple.alignment, Alignment::None);

        b.ma5 = Some(dec!(105));
        let triple = classifier.classify(&b).unwrap();
        assert_eq!(triple.alignment, Alignment::Bullish);
    }

    #[test]
    fn test_missing_ma60_never_bullish() {
        let classifier = ScenarioClassifier::default();
        let mut b = bar(dec!(110), dec!(100), dec!(1));
        b.ma5 = Some(dec!(108));
        b.ma10 = Some(dec!(105));
        b.ma60 = None;
        let triple = classifier.classify(&b).unwrap();
        assert_eq!(triple.alignment, Alignment::None);
    }

    #[test]
    fn test_missing_ma20_or_slope_fails_loudly() {
        let classifier = ScenarioClassifier::default();
        let mut b = bar(dec!(100), dec!(100), dec!(0));
        b.ma20 = None;
        assert!(matches!(
            classifier.classify(&b),
            Err(ClassifyError::MissingIndicator { indicator: "MA20", .. })
        ));

        let mut b = bar(dec!(100), dec!(100), dec!(0));
        b.ma20_slope = None;
        assert!(matches!(
            classifier.classify(&b),
            Err(ClassifyError::MissingIndicator { indicator: "MA20 slope", .. })
        ));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = ScenarioClassifier::default();
        let b = bar(dec!(103), dec!(100), dec!(0.2));
        let first = classifier.classify(&b).unwrap();
        for _ in 0..10 {
            assert_eq!(classifier.classify(&b).unwrap(), first);
        }
    }
}
