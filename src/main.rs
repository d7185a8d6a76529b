//! updatable - find newer releases of pinned Python packages
//!
//! Lists the packages pinned in a requirements file, or installed for a
//! Python interpreter, and reports the releases available on PyPI.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use updatable::cli::CliArgs;
use updatable::logging::init_logging;
use updatable::orchestrator::Orchestrator;
use updatable::output::{create_formatter, OutputConfig};
use updatable::progress::Progress;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    debug!(version = env!("CARGO_PKG_VERSION"), ?args, "starting");

    let orchestrator = Orchestrator::from_config(&args.orchestrator_config())?;
    let lister = args.lister();
    let mut progress = Progress::new(args.show_progress());

    let result = orchestrator.run(lister.as_ref(), &mut progress).await?;

    let output_config = OutputConfig::from_cli(args.json, args.pre_releases, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    formatter.format_failures(&result, &mut stderr)?;

    if result.has_failures() {
        // Partial success - some packages could not be checked
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
