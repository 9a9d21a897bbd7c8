//! CLI for the Software Info Aggregator.
//!
//! This tool aggregates stars, forks, package downloads and citation badges
//! for every repository in an organization and publishes a sorted summary
//! table as a CSV snapshot plus a rendered README report.

use chrono::Local;
use clap::Parser;
use software_info_aggregator::{load_settings, RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Software Info Aggregator - Collect repository metadata and publish a summary table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file.
    #[arg(long, default_value = "config.toml")]
    config_path: PathBuf,

    /// Bearer credential for the repository-hosting API.
    #[arg(long, env = "GH_TOKEN")]
    token: Option<String>,

    /// Organization override.
    #[arg(long)]
    organization: Option<String>,

    /// Output root override.
    #[arg(long)]
    output_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Aggregation failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(fmt::layer().compact().with_target(false))
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut settings = load_settings(&args.config_path)?;
    if let Some(organization) = args.organization {
        settings.organization = organization;
    }
    if let Some(output_root) = args.output_root {
        settings.output_root = output_root;
    }

    let config = RunnerConfig::new(settings, args.token, Local::now().date_naive());
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Repositories aggregated: {}", summary.repositories);
    println!("  Packages found: {}", summary.packages_found);
    println!("  Citation badges found: {}", summary.citations_found);
}
