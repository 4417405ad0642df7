//! Gherkt CLI - a terminal syntax highlighter for Gherkin feature files.
//!
//! This is the main entry point for the gherkt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    highlight::{run_highlight, HighlightArgs},
    languages::{run_languages, LanguagesArgs},
    tokens::{run_tokens, TokensArgs},
};
use config::Config;
use error::{GherktError, Result};

/// Gherkt - terminal syntax highlighting for Gherkin feature files
///
/// Gherkt scans feature files with a per-dialect keyword table and can
/// render them with keywords colored, dump the raw token stream, or list
/// the registered dialects.
#[derive(Parser, Debug)]
#[command(name = "gherkt")]
#[command(author = "Gherk Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal syntax highlighting for Gherkin feature files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GHERKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GHERKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GHERKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the gherkt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Highlight feature files
    ///
    /// Scans each line of the given files and prints it with dialect
    /// keywords colored.
    Highlight(HighlightCommand),

    /// Dump the token stream for a feature file
    ///
    /// Prints one record per scanned token with its line number, category,
    /// and inclusive character positions, as text or JSON.
    Tokens(TokensCommand),

    /// List the registered Gherkin dialects
    ///
    /// Shows the culture tags accepted by the --language option of the
    /// other commands.
    Languages,
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Feature files to highlight
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Dialect culture tag (default: from config)
    #[arg(short, long)]
    language: Option<String>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Feature file to scan
    file: PathBuf,

    /// Dialect culture tag (default: from config)
    #[arg(short, long)]
    language: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Main entry point for the gherkt CLI.
///
/// Delegates to [`run`] and reports any error on stderr with a non-zero
/// exit status.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse command-line arguments, initialize logging, load configuration,
/// and dispatch to the appropriate command handler.
///
/// # Returns
/// * `Result<()>` - Success or an error
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, cli.no_color, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GherktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// # Arguments
/// * `command` - The command to execute
/// * `verbose` - Whether verbose output is enabled
/// * `no_color` - Whether color output is disabled
/// * `config` - The application configuration
///
/// # Returns
/// * `Result<()>` - Success or an error
fn execute_command(command: Commands, verbose: bool, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, verbose, no_color, config),
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Languages => execute_languages(verbose, config),
    }
}

/// Execute the highlight command.
fn execute_highlight(
    args: HighlightCommand,
    verbose: bool,
    no_color: bool,
    config: Config,
) -> Result<()> {
    let highlight_args = HighlightArgs {
        files: args.files,
        language: args.language.unwrap_or(config.language),
        color: !no_color && config.color,
        verbose: verbose || config.verbose,
    };
    run_highlight(highlight_args)
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        file: args.file,
        language: args.language.unwrap_or(config.language),
        format: args.format.unwrap_or(config.tokens.format),
        verbose: verbose || config.verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the languages command.
fn execute_languages(verbose: bool, config: Config) -> Result<()> {
    let languages_args = LanguagesArgs {
        verbose: verbose || config.verbose,
    };
    run_languages(languages_args)
}
