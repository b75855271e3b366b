// src/main.rs

use aicodeprep::cli::Cli;
use aicodeprep::config::Config;
use aicodeprep::output::ClipboardStatus;
use aicodeprep::{run, RunOutcome};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. RUST_LOG directives are layered on top.
    let directive = if cli.debug {
        "aicodeprep=debug"
    } else {
        "aicodeprep=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    log::debug!("Starting aicodeprep v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Parsed arguments: {:?}", cli);

    // --- Configuration & Execution ---
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let mut stdout = std::io::stdout();
    let outcome = match run(&config, &mut stdout) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // --- Reporting ---
    match outcome {
        RunOutcome::DryRun { .. } => {}
        RunOutcome::Processed(p) => {
            if let Some(error) = p.error {
                eprintln!("Error: {}", error);
                eprintln!("aicodeprep: 0 files processed.");
                std::process::exit(1);
            }
            match p.output_path {
                None => eprintln!("aicodeprep: No files selected."),
                Some(path) => {
                    eprintln!(
                        "aicodeprep: {} files processed into {}",
                        p.files_processed,
                        path.display()
                    );
                    match p.clipboard {
                        ClipboardStatus::Copied => eprintln!("Output copied to clipboard."),
                        ClipboardStatus::Failed(reason) => {
                            eprintln!("Could not copy to clipboard: {}", reason)
                        }
                        ClipboardStatus::Skipped => {}
                    }
                }
            }
        }
    }

    Ok(())
}
