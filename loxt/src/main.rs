//! loxt - command-line front end for the Lox scanner.
//!
//! `loxt scan FILE...` prints the token stream of each file;
//! `loxt prompt` scans lines typed at an interactive prompt.
//!
//! Exit status follows the sysexits convention: 65 when lexical errors were
//! reported, 74 when input could not be read, 1 for any other failure.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_prompt, run_scan, PromptArgs, ScanArgs};
use config::{Config, OutputFormat, ScanConfig};
use error::{LoxtError, Result};

/// Environment variable holding an explicit tracing filter, e.g. `loxc_lex=trace`.
const LOG_FILTER_ENV: &str = "LOXT_LOG";

/// loxt - Scan Lox source code into tokens
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source code into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan source files and print their tokens
    ///
    /// Tokens go to stdout, diagnostics to stderr. Every file is scanned
    /// even if an earlier one has errors.
    Scan(ScanCommand),

    /// Scan lines typed at an interactive prompt
    ///
    /// Each line is scanned independently. Errors are printed and the
    /// session continues until end of input.
    Prompt(PromptCommand),
}

/// Output options shared by both subcommands.
#[derive(Args, Debug)]
struct OutputOptions {
    /// Token output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the EOF token from the output
    #[arg(long)]
    no_eof: bool,

    /// Show the offending source line under each diagnostic
    #[arg(long, overrides_with = "no_snippets")]
    snippets: bool,

    /// Print diagnostics as bare `[line N] Error: ...` lines
    #[arg(long, overrides_with = "snippets")]
    no_snippets: bool,
}

impl OutputOptions {
    /// Applies the flags on top of the configured defaults.
    fn resolve(&self, config: &ScanConfig) -> ScanConfig {
        let snippets = if self.snippets {
            true
        } else if self.no_snippets {
            false
        } else {
            config.snippets
        };
        ScanConfig {
            format: self.format.unwrap_or(config.format),
            show_eof: config.show_eof && !self.no_eof,
            snippets,
        }
    }
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    output: OutputOptions,
}

/// Arguments for the prompt subcommand.
#[derive(Parser, Debug)]
struct PromptCommand {
    #[command(flatten)]
    output: OutputOptions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Lexical errors have already been printed as diagnostics.
            if !matches!(err, LoxtError::ScanFailed { .. }) {
                eprintln!("error: {}", err);
            }
            ExitCode::from(err.exit_code())
        },
    }
}

/// Loads configuration, initializes logging and dispatches the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token stream. `LOXT_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from an explicit file or the standard locations.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scan(args) => {
            let settings = args.output.resolve(&config.scan);
            run_scan(ScanArgs {
                files: args.files,
                format: settings.format,
                show_eof: settings.show_eof,
                snippets: settings.snippets,
            })
        },
        Commands::Prompt(args) => {
            let settings = args.output.resolve(&config.scan);
            run_prompt(PromptArgs {
                format: settings.format,
                show_eof: settings.show_eof,
                snippets: settings.snippets,
            })
        },
    }
}
