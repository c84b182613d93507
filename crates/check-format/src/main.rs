mod annotate;
mod check;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::check::Outcome;
use crate::error::CliError;

/// Exit code when any violating range was found.
const EXIT_VIOLATIONS: u8 = 1;
/// Exit code for usage and environment errors; clap uses the same one.
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "check-format")]
#[command(about = "Check for formatter changes outside this PR's own edited lines", long_about = None)]
struct Cli {
    /// Base commit of the pull request range
    base: String,

    /// Path to the repository (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match check::run(&cli.base, &start_path) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::ViolationsFound) => ExitCode::from(EXIT_VIOLATIONS),
        Err(e) => {
            print_error(&e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
