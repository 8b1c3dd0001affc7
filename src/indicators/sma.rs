use rust_decimal::Decimal;
use super::Indicator;

/// Incremental rolling simple moving average. Emits `None` until the
/// window is full, then the mean of the last `period` inputs.
#[derive(Debug, Clone)]
pub struct SMA {
    period: usize,
    window: Vec<Decimal>,
    sum: Decimal,
    value: Option<Decimal>,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            window: Vec::with_capacity(period),
            sum: Decimal::ZERO,
            value: None,
        }
    }

    pub fn update(&mut self, price: Decimal) -> Option<Decimal> {
        self.window.push(price);
        self.sum += price;

        if self.window.len() > self.period {
            let dropped = self.window.remove(0);
            self.sum -= dropped;
        }

        if self.window.len() < self.period {
            self.value = None;
        } else {
            self.value = Some(self.sum / Decimal::from(self.period as u32));
        }

        self.value
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for SMA {
    fn name(&self) -> &'static str {
        "SMA"
    }

    fn is_ready(&self) -> bool {
        self.value.is_some()
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sum = Decimal::ZERO;
        self.value = None;
    }
}
