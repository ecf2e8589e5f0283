// src/main.rs

use anyhow::Result;
use clap::Parser;
use llmstxt::cli::Cli;
use llmstxt::config::{ConfigBuilder, Mode};
use llmstxt::errors::Error;
#[cfg(feature = "progress")]
use llmstxt::progress::IndicatifProgress;
use llmstxt::progress::{NoOpProgress, ProgressReporter};
use llmstxt::run;
use llmstxt::signal::setup_signal_handler;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "llmstxt=debug".parse()?
                } else {
                    "llmstxt=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    // Usage errors exit with 1 (clap's default is 2); help and version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(ExitCode::from(code));
        }
    };
    log::info!("Starting llmstxt v{}...", env!("CARGO_PKG_VERSION"));

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(1));
        }
    };
    log::debug!("Configuration built successfully: {:?}", config);

    // Decide whether to show a progress bar. Show it if stderr is a TTY and no
    // prompts will be competing for the terminal.
    let progress_reporter: Box<dyn ProgressReporter> = {
        #[cfg(feature = "progress")]
        {
            if atty::is(atty::Stream::Stderr) && config.mode != Mode::Interactive {
                Box::new(IndicatifProgress::new())
            } else {
                Box::new(NoOpProgress)
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            Box::new(NoOpProgress)
        }
    };

    let token = setup_signal_handler()?;

    let result = run(&config, &token, progress_reporter.as_ref());

    // --- Error Handling ---
    match result {
        Ok(outcome) => {
            log::debug!("Run finished: {:?}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            Ok(ExitCode::from(130))
        }
        Err(e @ Error::NoFilesFound) => {
            eprintln!("{}", e);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(1))
        }
    }
}
