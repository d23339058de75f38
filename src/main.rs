//! Ansible Content Parser - scan Ansible content through lint, enrichment,
//! and report stages
//!
//! This is the main entry point for the CLI application.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ansible_content_parser::cli::{exit_codes, Cli};
use ansible_content_parser::pipeline::Pipeline;

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // A user interrupt takes precedence over everything else: exit
    // immediately with the reserved code, bypassing remaining stages.
    if let Err(e) = ctrlc::set_handler(|| process::exit(exit_codes::INTERRUPT)) {
        tracing::warn!(error = %e, "could not install the interrupt handler");
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(io::stdout(), "{}\n", e);
            Cli::print_usage();
            process::exit(exit_codes::INVALID_ARGS);
        }
    };

    match Pipeline::production().run(&config) {
        Ok(code) => {
            if code == exit_codes::SUCCESS {
                // A closed downstream consumer is not a failure.
                let _ = writeln!(
                    io::stdout(),
                    "{} Report written to: {}",
                    "Success:".green().bold(),
                    config
                        .out_dir
                        .join(ansible_content_parser::artifacts::PARSER_REPORT_FILE)
                        .display()
                        .to_string()
                        .cyan()
                );
            }
            process::exit(code);
        }
        Err(e) if e.is_broken_pipe() => process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
