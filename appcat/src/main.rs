//! appcat - Application Category & Energy Label Analyzer
//!
//! Single-app mode prints the category and energy label for one application
//! name; batch mode reads names from a file and writes a CSV report.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appcat::batch::run_batch;
use appcat::Categorizer;
use appcat_common::Settings;

/// Command-line arguments for appcat
#[derive(Parser, Debug)]
#[command(name = "appcat")]
#[command(about = "Categorize desktop applications and assign energy labels")]
#[command(version)]
struct Args {
    /// Name of the application to categorize (single-app mode)
    app_name: Option<String>,

    /// Input file with one application name per line (batch mode)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file for batch results (batch mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Confidence threshold for the semantic-similarity fallback
    #[arg(long)]
    threshold: Option<f32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appcat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Mode validation before any processing
    if args.app_name.is_some() && (args.input.is_some() || args.output.is_some()) {
        bail!("Cannot specify both a single app name and input/output files");
    }
    if args.input.is_some() && args.output.is_none() {
        bail!("Output file is required when specifying an input file");
    }
    if args.output.is_some() && args.input.is_none() {
        bail!("Input file is required when specifying an output file");
    }

    let settings = Settings::load(args.threshold);
    info!(
        threshold = settings.confidence_threshold,
        "Starting appcat v{}",
        env!("CARGO_PKG_VERSION")
    );

    match (args.app_name, args.input, args.output) {
        (Some(app_name), _, _) => {
            let categorizer = Categorizer::new(&settings)?;
            let report = categorizer.process_app(&app_name).await;
            println!("Application: {}", report.app_name);
            println!("Category: {}", report.category);
            println!("Energy Label: {}", report.energy_label);
        }
        (None, Some(input), Some(output)) => {
            let categorizer = Categorizer::new(&settings)?;
            info!(input = %input.display(), "Processing applications in batch mode");
            let written = run_batch(&categorizer, &input, &output).await?;
            println!(
                "Batch processing complete. Results written to {}",
                written.display()
            );
        }
        _ => {
            Args::command().print_help()?;
            bail!("Provide an application name, or input and output files for batch processing");
        }
    }

    Ok(())
}
