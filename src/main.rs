use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use logstat::{report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let analysis = report::analyze_url(&args.url)
        .with_context(|| format!("Failed to analyze access log at {}", args.url));

    match analysis {
        Ok(result) => {
            report::print_analysis_results(&result, args.format)?;
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
