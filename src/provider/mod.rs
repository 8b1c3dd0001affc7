pub mod yahoo;

pub use yahoo::*;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::PriceBar;

/// Boundary to the market-data collaborator. Implementations return a
/// chronologically ordered sequence of daily bars covering [start, end];
/// the caller widens `start` to include the indicator lead-in.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn daily_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<PriceBar>>;
}
