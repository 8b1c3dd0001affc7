use rust_decimal::Decimal;

use crate::indicators::SMA;
use crate::types::{IndicatorBar, PriceBar};

pub const MA_SHORT: usize = 5;
pub const MA_MEDIUM: usize = 10;
pub const MA_MONTHLY: usize = 20;
pub const MA_QUARTERLY: usize = 60;

/// Augments a chronological price series with the four trailing averages
/// and the day-over-day MA20 change. Output is 1:1 with the input; every
/// indicator stays `None` until its window is full, and the slope needs
/// both today's and yesterday's MA20.
pub fn prepare(series: &[PriceBar]) -> Vec<IndicatorBar> {
    let mut ma5 = SMA::new(MA_SHORT);
    let mut ma10 = SMA::new(MA_MEDIUM);
    let mut ma20 = SMA::new(MA_MONTHLY);
    let mut ma60 = SMA::new(MA_QUARTERLY);

    let mut out = Vec::with_capacity(series.len());
    let mut prev_ma20: Option<Decimal> = None;

    for bar in series {
        let ma5_value = ma5.update(bar.close);
        let ma10_value = ma10.update(bar.close);
        let ma20_value = ma20.update(bar.close);
        let ma60_value = ma60.update(bar.close);

        let ma20_slope = match (ma20_value, prev_ma20) {
            (Some(today), Some(yesterday)) => Some(today - yesterday),
            _ => None,
        };
        prev_ma20 = ma20_value;

        out.push(IndicatorBar {
            date: bar.date,
            close: bar.close,
            ma5: ma5_value,
            ma10: ma10_value,
            ma20: ma20_value,
            ma60: ma60_value,
            ma20_slope,
        });
    }

    out
}
