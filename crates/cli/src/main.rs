//! Vendor sustainability predictor CLI
//!
//! Invoked as a subprocess by a supervising application: the predicted
//! score is the only thing written to stdout; diagnostics and errors go
//! to stderr. Any failure becomes a single `ERROR: <message>` line and
//! exit code 1.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use predictor_lib::{format_score, predict, FallbackScorer, FeatureRow, Scorer};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Predict a vendor sustainability score from a trained model
#[derive(Parser)]
#[command(name = "vsp")]
#[command(author, version, about = "Vendor sustainability score predictor", long_about = None)]
struct Cli {
    /// Path to the ONNX model artifact
    model_path: PathBuf,

    /// Seller's price today
    #[arg(allow_negative_numbers = true)]
    vendor_price_today: String,

    /// Delivery duration in days
    #[arg(allow_negative_numbers = true)]
    vendor_delivery_days: String,

    /// Whether the vendor is local (0 or 1)
    #[arg(allow_negative_numbers = true)]
    local_flag_numeric: String,

    /// Average of the vendor's past sustainability scores
    #[arg(allow_negative_numbers = true)]
    past_sustainability_avg: String,

    /// Compute the heuristic fallback score when the model cannot produce one
    #[arg(long)]
    fallback: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit();
        }
        Err(_) => {
            eprintln!("ERROR: Invalid arguments");
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(score) => println!("{}", format_score(score)),
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<f64> {
    let row = FeatureRow::parse(
        &cli.vendor_price_today,
        &cli.vendor_delivery_days,
        &cli.local_flag_numeric,
        &cli.past_sustainability_avg,
    )?;
    debug!(model_path = %cli.model_path.display(), ?row, "Scoring feature row");

    match predict(&cli.model_path, &row) {
        Ok(score) => Ok(score),
        Err(err) if cli.fallback => {
            warn!(error = %err, "Model scoring failed, using heuristic fallback");
            Ok(FallbackScorer.score(&row)?)
        }
        Err(err) => Err(err.into()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
