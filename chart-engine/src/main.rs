use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde_json::json;

use chart_engine::{
    generate_synthetic_prices, load_file, ChartInterval, ChartParameters,
    ExponentialMovingAverage, FixedRateConverter, LineSeries, Security,
};

#[derive(Parser, Debug)]
#[command(name = "chart-engine")]
#[command(version = "0.1.0")]
#[command(about = "EMA chart series engine for security price histories", long_about = None)]
struct Args {
    /// Price file path (CSV/JSON). If not provided, uses synthetic data.
    #[arg(short = 'f', long)]
    data_file: Option<PathBuf>,

    /// Number of synthetic trading days (used without a data file)
    #[arg(short, long, default_value = "250")]
    days: usize,

    /// EMA range in periods; repeat for multiple lines
    #[arg(short, long, default_value = "20")]
    range: Vec<usize>,

    /// Display window start (YYYY-MM-DD); defaults to the first quote date
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Display window end (YYYY-MM-DD); defaults to the last quote date
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Security name
    #[arg(short, long, default_value = "SYNTH")]
    symbol: String,

    /// Currency the quotes are denominated in
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Convert quotes into the base currency at this constant rate
    #[arg(long)]
    fx_rate: Option<f64>,

    /// Base currency used with --fx-rate
    #[arg(long, default_value = "EUR")]
    base_currency: String,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let prices = match &args.data_file {
        Some(path) => load_file(path)?,
        None => generate_synthetic_prices(args.days, 100.0),
    };
    if prices.is_empty() {
        bail!("no price data available");
    }

    let mut params = ChartParameters::default()
        .with_ranges(args.range.clone())
        .with_interval(args.start, args.end);
    if args.fx_rate.is_some() {
        params = params.in_base_currency();
    }

    let security = Security::with_prices(&args.symbol, &args.currency, prices);
    let first = security.prices().first().map(|p| p.date).unwrap_or_default();
    let last = security.prices().last().map(|p| p.date).unwrap_or_default();
    let interval = ChartInterval::new(
        params.start.unwrap_or(first),
        params.end.unwrap_or(last),
    );

    let converter = args
        .fx_rate
        .map(|rate| FixedRateConverter::new(&args.base_currency, rate));

    for &range in &params.ema_ranges {
        let ema = match &converter {
            Some(c) => {
                ExponentialMovingAverage::with_conversion(range, Some(&security), interval, c)?
            }
            None => ExponentialMovingAverage::new(range, Some(&security), interval)?,
        };
        let series = ema.get_ema();

        if args.json {
            print_json(&args.symbol, range, series)?;
        } else {
            print_table(&args.symbol, range, series);
        }
    }

    Ok(())
}

fn print_json(symbol: &str, range: usize, series: &LineSeries) -> Result<()> {
    let output = json!({
        "symbol": symbol,
        "range": range,
        "dates": series.dates,
        "values": series.values,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_table(symbol: &str, range: usize, series: &LineSeries) {
    println!("EMA({}) for {}: {} points", range, symbol, series.len());
    for (date, value) in series.dates.iter().zip(&series.values) {
        println!("{}  {:>12.4}", date, value);
    }
}
