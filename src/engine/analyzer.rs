use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::scenario::{lookup, ClassifyError, ScenarioClassifier};
use crate::types::PriceBar;

use super::preparator::prepare;
use super::results::{AnalysisResult, AnalysisRow};

/// Everything the analysis boundary can reject or fail with. All of these
/// are recoverable at the caller; none abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("requested window spans {days} days, more than the {max_days}-day limit")]
    WindowTooLong { days: i64, max_days: i64 },

    #[error(transparent)]
    InsufficientHistory(#[from] ClassifyError),
}

/// Runs the preparator and classifier over a price history for one
/// requested date window. Pure and synchronous: identical inputs always
/// produce the identical result, and nothing is shared across requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    classifier: ScenarioClassifier,
    max_window_days: i64,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            classifier: ScenarioClassifier::new(config.flat_threshold),
            max_window_days: config.max_window_days,
        }
    }

    /// Window policy, enforced before any data is touched: end must not
    /// precede start, and the calendar span is capped.
    pub fn validate_window(&self, start: NaiveDate, end: NaiveDate) -> Result<(), AnalysisError> {
        let days = (end - start).num_days();
        if days < 0 {
            return Err(AnalysisError::InvalidDateRange { start, end });
        }
        if days > self.max_window_days {
            return Err(AnalysisError::WindowTooLong {
                days,
                max_days: self.max_window_days,
            });
        }
        Ok(())
    }

    /// Classifies every trading day of `series` that falls in [start, end].
    /// The series must carry the lead-in history (at least 60 trading days
    /// before `start`); a bar reaching the classifier without it surfaces
    /// as `InsufficientHistory`. A window holding no trading days yields an
    /// empty result, not an error.
    pub fn analyze(
        &self,
        ticker: &str,
        series: &[PriceBar],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.validate_window(start, end)?;

        let indicators = prepare(series);
        let window: Vec<_> = indicators
            .iter()
            .filter(|b| b.date >= start && b.date <= end)
            .copied()
            .collect();

        debug!(ticker, bars = window.len(), "classifying window");

        let mut rows = Vec::with_capacity(window.len());
        for bar in &window {
            let signals = self.classifier.classify(bar)?;
            rows.push(AnalysisRow {
                date: bar.date,
                close: bar.close,
                signals,
                scenario: lookup(signals),
            });
        }

        Ok(AnalysisResult {
            ticker: ticker.to_string(),
            start,
            end,
            rows,
            indicators: window,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn day(i: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(i))
            .unwrap()
    }

    fn series(closes: &[Decimal]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| PriceBar::new(day(i as u64), *c))
            .collect()
    }

    #[test]
    fn test_window_rejects_reversed_dates() {
        let analyzer = Analyzer::default();
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            analyzer.validate_window(start, end),
            Err(AnalysisError::InvalidDateRange { start, end })
        );
    }

    #[test]
    fn test_window_rejects_long_spans() {
        let analyzer = Analyzer::default();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(
            analyzer.validate_window(start, end),
            Err(AnalysisError::WindowTooLong { days: 19, max_days: 10 })
        );

        // Ten days exactly is still allowed.
        let end = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        assert!(analyzer.validate_window(start, end).is_ok());
    }

    #[test]
    fn test_empty_window_is_empty_result() {
        let analyzer = Analyzer::default();
        let bars = series(&vec![dec!(100); 65]);
        // Window entirely after the series: no trading days, no error.
        let result = analyzer.analyze("TEST", &bars, day(200), day(205)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_series_is_empty_result() {
        let analyzer = Analyzer::default();
        let result = analyzer.analyze("TEST", &[], day(0), day(5)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_insufficient_lead_in_fails_loudly() {
        let analyzer = Analyzer::default();
        let bars = series(&vec![dec!(100); 65]);
        // Window starts on bar 5; MA20 and its slope are undefined there.
        let result = analyzer.analyze("TEST", &bars, day(5), day(8));
        assert!(matches!(result, Err(AnalysisError::InsufficientHistory(_))));
    }

    #[test]
    fn test_steady_rise_ends_in_strong_bull() {
        // 65 closes rising 100 -> 164: short averages above long ones,
        // MA20 slope clearly positive, close above MA20.
        let closes: Vec<Decimal> = (0..65).map(|i| Decimal::from(100 + i)).collect();
        let bars = series(&closes);
        let analyzer = Analyzer::default();

        let last = bars.last().unwrap().date;
        let result = analyzer.analyze("TEST", &bars, last, last).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.rows[0].scenario.id, 1);
        assert_eq!(result.rows[0].scenario.status_tag, "Strong bull");
    }

    #[test]
    fn test_flat_series_ends_in_weak_consolidation() {
        // Constant closes: slope 0 (Flat), close == MA20 (Below), all
        // averages equal so the strict stack fails (None) -> scenario 8.
        let bars = series(&vec![dec!(100); 65]);
        let analyzer = Analyzer::default();

        let last = bars.last().unwrap().date;
        let result = analyzer.analyze("TEST", &bars, last, last).unwrap();
        assert_eq!(result.rows[0].scenario.id, 8);
    }

    #[test]
    fn test_short_history_never_reports_bullish_alignment() {
        // 59 rising closes: MA60 stays undefined on every bar, so even a
        // perfect 5 > 10 > 20 stack cannot count as bullish.
        let closes: Vec<Decimal> = (0..59).map(|i| Decimal::from(100 + i)).collect();
        let bars = series(&closes);
        let analyzer = Analyzer::default();

        let result = analyzer.analyze("TEST", &bars, day(54), day(58)).unwrap();
        assert_eq!(result.len(), 5);
        for row in &result.rows {
            assert_eq!(row.signals.alignment, crate::types::Alignment::None);
            // Rising series: slope up, close above MA20, no stack.
            assert_eq!(row.scenario.id, 2);
        }
    }

    #[test]
    fn test_rows_are_chronological_and_windowed() {
        let closes: Vec<Decimal> = (0..70).map(|i| Decimal::from(100 + i)).collect();
        let bars = series(&closes);
        let analyzer = Analyzer::default();

        let result = analyzer.analyze("TEST", &bars, day(64), day(69)).unwrap();
        assert_eq!(result.len(), 6);
        for pair in result.rows.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert!(result.rows.iter().all(|r| r.date >= day(64) && r.date <= day(69)));
        assert_eq!(result.indicators.len(), result.rows.len());
    }
}
