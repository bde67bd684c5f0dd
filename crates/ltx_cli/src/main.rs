//! ltx CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: User identity unavailable
//! - 4: Template not found
//! - 5: Output could not be written
//! - 6: Aggregate list could not be updated
//! - 7: Invalid configuration file

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ltx_templates::LtxError;

mod commands;

use commands::{Cli, Commands};

/// Exit codes, one per fatal error kind.
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const IDENTITY_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const WRITE_ERROR: u8 = 5;
    pub const LIST_ERROR: u8 = 6;
    pub const CONFIG_ERROR: u8 = 7;
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are reported through the error path too
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,ltx={level},ltx_templates={level}"))
    });
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::NewDoc(args) => commands::new_doc::execute(args, cli.template_dir),
        Commands::NewImg(args) => commands::new_fragment::execute_figure(args, cli.template_dir),
        Commands::NewTable(args) => commands::new_fragment::execute_table(args, cli.template_dir),
        Commands::Templates => commands::templates::execute(cli.template_dir),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Map the first library error in the chain to its exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.chain().find_map(|cause| cause.downcast_ref::<LtxError>()) {
        Some(LtxError::IdentityResolution(_)) => ExitCodes::IDENTITY_ERROR,
        Some(LtxError::TemplateNotFound { .. }) => ExitCodes::TEMPLATE_ERROR,
        Some(LtxError::DestinationWrite { .. }) => ExitCodes::WRITE_ERROR,
        Some(LtxError::AggregateAppend { .. }) => ExitCodes::LIST_ERROR,
        Some(LtxError::Config { .. }) => ExitCodes::CONFIG_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}
