use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::types::PriceBar;

use super::MarketData;

const YAHOO_CHART_API: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Daily-bar client for the Yahoo Finance chart endpoint. Public data
/// only, no authentication.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: YAHOO_CHART_API.to_string(),
        }
    }

    fn to_epoch(date: NaiveDate) -> i64 {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).timestamp()
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for YahooClient {
    async fn daily_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>> {
        // Yahoo treats period2 as exclusive, so fetch through end + 1 day.
        let period1 = Self::to_epoch(start);
        let period2 = Self::to_epoch(
            end.checked_add_days(Days::new(1))
                .ok_or_else(|| anyhow!("end date out of range: {}", end))?,
        );

        let url = format!(
            "{}/{}?period1={}&period2={}&interval=1d",
            self.base_url, ticker, period1, period2
        );
        debug!(ticker, %url, "fetching daily history");

        let resp: ChartResponse = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = resp.chart.error {
            return Err(anyhow!("Yahoo chart error for {}: {}", ticker, error.description));
        }

        let result = resp
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| anyhow!("no data returned for {}", ticker))?;

        let timestamps = result.timestamp.unwrap_or_default();
        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        let mut bars = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.iter().zip(closes) {
            // Null closes show up on halted or partial days; skip them.
            let Some(close) = close else { continue };
            let date = Utc
                .timestamp_opt(*ts, 0)
                .single()
                .ok_or_else(|| anyhow!("invalid timestamp {} for {}", ts, ticker))?
                .date_naive();
            let close = Decimal::try_from(close)
                .map_err(|e| anyhow!("unrepresentable close {} on {}: {}", close, date, e))?;
            bars.push(PriceBar::new(date, close));
        }

        debug!(ticker, bars = bars.len(), "fetched daily history");
        Ok(bars)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    close: Vec<Option<f64>>,
}
