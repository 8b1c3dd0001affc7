use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observed trading day. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PriceBar {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// A price bar augmented with trailing simple moving averages and the
/// day-over-day change of MA20. Every indicator is `None` until enough
/// trailing history exists; absence propagates, it is never coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBar {
    pub date: NaiveDate,
    pub close: Decimal,
    pub ma5: Option<Decimal>,
    pub ma10: Option<Decimal>,
    pub ma20: Option<Decimal>,
    pub ma60: Option<Decimal>,
    pub ma20_slope: Option<Decimal>,
}

impl IndicatorBar {
    /// True once every moving average and the MA20 slope are defined,
    /// i.e. the bar has the full 60-day lead-in behind it.
    pub fn is_ready(&self) -> bool {
        self.ma5.is_some()
            && self.ma10.is_some()
            && self.ma20.is_some()
            && self.ma60.is_some()
            && self.ma20_slope.is_some()
    }
}

