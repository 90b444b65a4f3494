//! Command-line entry point for GCP selection.

use clap::Parser;
use gcpkit_cli::process_kmz;
use gcpkit_elevation::{ElevationProvider, OpenElevationClient, SyntheticProvider};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Derive Ground Control Points from a KMZ survey boundary.
#[derive(Debug, Parser)]
#[command(name = "gcpkit", version, about)]
struct Args {
    /// Path to the KMZ archive containing the boundary polygon.
    kmz: PathBuf,

    /// Use deterministic synthetic elevations instead of the elevation API.
    #[arg(long)]
    synthetic: bool,

    /// Seed for synthetic elevations.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Elevation API lookup endpoint (Open-Elevation compatible).
    #[arg(long)]
    api_url: Option<String>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let provider: Box<dyn ElevationProvider> = if args.synthetic {
        Box::new(SyntheticProvider::new(args.seed))
    } else {
        match &args.api_url {
            Some(url) => Box::new(OpenElevationClient::with_url(url)),
            None => Box::new(OpenElevationClient::new()),
        }
    };

    let report = match process_kmz(&args.kmz, provider.as_ref()) {
        Ok(report) => report,
        Err(e) => {
            error!("failed to process {}: {}", args.kmz.display(), e);
            return ExitCode::from(2);
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .expect("report serialization cannot fail");
    println!("{}", json);

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
