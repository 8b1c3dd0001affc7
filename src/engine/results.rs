use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::scenario::ScenarioRecord;
use crate::types::{IndicatorBar, SignalTriple};

/// One classified trading day inside the requested window.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRow {
    pub date: NaiveDate,
    pub close: Decimal,
    pub signals: SignalTriple,
    pub scenario: ScenarioRecord,
}

/// Per-request output: one row per trading day in [start, end], in
/// chronological order, plus the indicator series for charting.
/// Created per analysis request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<AnalysisRow>,
    pub indicators: Vec<IndicatorBar>,
}

impl AnalysisResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn print_summary(&self) {
        println!("\n=== {} scenarios, {} to {} ===", self.ticker, self.start, self.end);
        println!(
            "{:<12} {:>10} {:>3}  {:<42} {:<20}",
            "Date", "Close", "ID", "Scenario", "Status"
        );
        println!("{}", "-".repeat(92));
        for row in &self.rows {
            println!(
                "{:<12} {:>10.2} {:>3}  {:<42} {:<20}",
                row.date.to_string(),
                row.close,
                row.scenario.id,
                row.scenario.description,
                row.scenario.status_tag
            );
        }
        println!("{}", "-".repeat(92));
        for row in &self.rows {
            println!("{} [{}] {}", row.date, row.scenario.id, row.scenario.action);
        }
    }

    /// Close vs MA20 vs MA60 for the classified window, the minimum
    /// columns a charting consumer needs.
    pub fn print_chart_columns(&self) {
        println!(
            "\n{:<12} {:>10} {:>10} {:>10}",
            "Date", "Close", "MA20", "MA60"
        );
        for bar in &self.indicators {
            let fmt = |v: Option<Decimal>| match v {
                Some(v) => format!("{:.2}", v),
                None => "-".to_string(),
            };
            println!(
                "{:<12} {:>10.2} {:>10} {:>10}",
                bar.date.to_string(),
                bar.close,
                fmt(bar.ma20),
                fmt(bar.ma60)
            );
        }
    }
}
