use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fareseer::ingest;
use fareseer::{
    AirportTable, NeighbourPredictor, PredictorConfig, ReportConfig, ThresholdBucket,
};
use fareseer_predict::report::{histogram, relative_errors, threshold_report};

/// Estimate flight ticket prices from the nearest historical flight
#[derive(Parser, Debug)]
#[command(name = "fareseer")]
#[command(about = "Nearest-neighbour flight price estimation", long_about = None)]
struct Args {
    /// Training CSV with complete flight records
    training: PathBuf,

    /// Testing CSV with at least the minimal core attributes
    testing: PathBuf,

    /// Airport reference CSV (airport,citycode,country), needed when the
    /// testing data omits city/country columns
    #[arg(short, long)]
    airports: Option<PathBuf>,

    /// Histogram bin count
    #[arg(long, default_value_t = 128)]
    bins: usize,

    /// Threshold step in percent
    #[arg(long, default_value_t = 5)]
    step: u32,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct Report {
    predictions: usize,
    thresholds: Vec<ThresholdBucket>,
    histogram: fareseer::Histogram,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting fareseer v{}", env!("CARGO_PKG_VERSION"));

    fareseer_core::validate_derivation_table()?;

    let airports = match &args.airports {
        Some(path) => ingest::read_airport_table(path)?,
        None => AirportTable::new(),
    };
    let training = ingest::read_training_flights(&args.training)?;
    let testing = ingest::read_query_flights(&args.testing, &airports)?;

    let predictor = NeighbourPredictor::fit(training, PredictorConfig::default())?;
    info!(size = predictor.len(), "fitted L1 index");

    let predictions = predictor
        .predict(&testing)
        .collect::<fareseer_predict::Result<Vec<_>>>()?;
    let errors = relative_errors(&predictions)?;

    let config = ReportConfig {
        threshold_step_pct: args.step,
        histogram_bins: args.bins,
    };
    let thresholds = threshold_report(&errors, &config);

    if args.json {
        let report = Report {
            predictions: predictions.len(),
            thresholds,
            histogram: histogram(&errors, config.histogram_bins),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for bucket in &thresholds {
            println!(
                "Flights predicted below {}% err - {} This is {:.2}% of all",
                bucket.threshold_pct, bucket.count, bucket.share_pct
            );
        }
    }

    Ok(())
}
