mod config;
mod engine;
mod indicators;
mod provider;
mod scenario;
mod types;

use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::AnalyzerConfig;
use engine::Analyzer;
use provider::{MarketData, YahooClient};
use scenario::lookup;
use types::SignalTriple;

#[derive(Parser)]
#[command(name = "stock-scenario-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Labels daily stock closes with one of 12 technical scenarios", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "analyzer.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each trading day of a ticker inside a date window
    Analyze {
        /// Ticker symbol (e.g. 2330.TW, AAPL)
        #[arg(short, long)]
        ticker: String,
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
        /// Also print close/MA20/MA60 columns for charting
        #[arg(long)]
        chart: bool,
    },
    /// Print the 12-scenario reference table
    Scenarios,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            ticker,
            start,
            end,
            chart,
        } => {
            run_analysis(&cli.config, &ticker, &start, &end, chart).await?;
        }
        Commands::Scenarios => {
            print_scenario_table();
        }
    }

    Ok(())
}

async fn run_analysis(config_path: &str, ticker: &str, start: &str, end: &str, chart: bool) -> Result<()> {
    let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid start date format. Use YYYY-MM-DD"))?;
    let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid end date format. Use YYYY-MM-DD"))?;

    let config = AnalyzerConfig::load(config_path)?;
    if let Err(errors) = config.validate() {
        return Err(anyhow!("Invalid configuration: {}", errors.join("; ")));
    }

    let analyzer = Analyzer::new(&config);

    // Window policy is checked before any data is fetched.
    analyzer.validate_window(start_date, end_date)?;

    info!("Analyzing {} from {} to {}", ticker, start_date, end_date);

    let fetch_start = start_date
        .checked_sub_days(Days::new(config.fetch_lead_days as u64))
        .ok_or_else(|| anyhow!("start date out of range: {}", start_date))?;

    let client = YahooClient::new();
    let series = client.daily_history(ticker, fetch_start, end_date).await?;

    if series.is_empty() {
        return Err(anyhow!(
            "No data found for {}. Check the ticker symbol (Taiwan listings need a .TW suffix).",
            ticker
        ));
    }
    info!("Fetched {} daily bars (including lead-in)", series.len());

    let lead_in = series.iter().filter(|b| b.date < start_date).count();
    if lead_in < config.min_lead_in_bars {
        warn!(
            "Only {} lead-in bars before {} (need {}); the listing may be too young for MA60",
            lead_in, start_date, config.min_lead_in_bars
        );
    }

    let result = analyzer.analyze(ticker, &series, start_date, end_date)?;
    if result.is_empty() {
        warn!("No trading days inside the requested window (weekend or holiday?)");
        return Ok(());
    }

    result.print_summary();
    if chart {
        result.print_chart_columns();
    }

    Ok(())
}

fn print_scenario_table() {
    println!("\n=== 12 technical scenarios ===");
    println!(
        "{:>3}  {:<10} {:<12} {:<14} {:<42} {:<20}",
        "ID", "MA20 slope", "Position", "Alignment", "Scenario", "Status"
    );
    println!("{}", "-".repeat(106));
    for triple in SignalTriple::all() {
        let record = lookup(triple);
        println!(
            "{:>3}  {:<10} {:<12} {:<14} {:<42} {:<20}",
            record.id,
            triple.slope.to_string(),
            triple.position.to_string(),
            triple.alignment.to_string(),
            record.description,
            record.status_tag
        );
    }
    println!("{}", "-".repeat(106));
    for triple in SignalTriple::all() {
        let record = lookup(triple);
        println!("[{:>2}] {}", record.id, record.action);
    }
}
