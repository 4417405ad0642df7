//! Tokens command implementation.
//!
//! This module dumps the scanner's raw token stream for one feature file,
//! either as readable text or as JSON for downstream tooling. The dump is
//! unfiltered: plain text comes out one character per token, exactly as
//! the scanner produced it.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    error_messages, split_at_chars, validate_input_file, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{GherktError, Result};
use gherk_dialect::resolve;
use gherk_scan::LineScanner;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Feature file to scan.
    pub file: PathBuf,
    /// Culture tag of the dialect to scan with.
    pub language: String,
    /// Output format name ("text" or "json").
    pub format: String,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for TokensArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            language: "en".to_string(),
            format: "text".to_string(),
            verbose: false,
        }
    }
}

/// One scanned token as reported by the tokens command.
///
/// This is the host-facing translation of the scanner's output: line
/// number and spanned text are added here, the core token carries only
/// category and positions.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRecord {
    /// 1-based line number in the input file.
    pub line: usize,
    /// Token category name ("keyword" or "text").
    pub category: &'static str,
    /// Inclusive start character index within the line.
    pub start: i32,
    /// Inclusive end character index within the line.
    pub end: i32,
    /// The text the token spans.
    pub text: String,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let format = self.parse_format()?;
        validate_input_file(&self.args.file)?;

        let records = self.scan_file()?;
        debug!(count = records.len(), "collected token records");

        match format {
            OutputFormat::Text => print_text(&records),
            OutputFormat::Json => print_json(&records)?,
        }

        self.log_completion(&records);
        Ok(())
    }

    /// Log scan statistics if verbose. Stdout carries only the records.
    fn log_completion(&self, records: &[TokenRecord]) {
        if self.args.verbose {
            let keywords = records.iter().filter(|r| r.category == "keyword").count();
            eprintln!("{} tokens, {} keywords", records.len(), keywords);
        }
    }

    /// Parse the requested output format.
    fn parse_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.args.format).ok_or_else(|| {
            GherktError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                self.args.format
            ))
        })
    }

    /// Scan the whole file into token records.
    fn scan_file(&self) -> Result<Vec<TokenRecord>> {
        let dialect = resolve(&self.args.language)?;
        let mut scanner = LineScanner::for_dialect(dialect);

        let content = std::fs::read_to_string(&self.args.file)?;
        let mut records = Vec::new();

        for (index, line) in content.lines().enumerate() {
            scanner.set_source(line, 0);
            let mut rest = line;
            while let Some(token) = scanner.next_token() {
                let (piece, tail) = split_at_chars(rest, token.char_count());
                rest = tail;
                records.push(TokenRecord {
                    line: index + 1,
                    category: token.category.as_str(),
                    start: token.start,
                    end: token.end,
                    text: piece.to_string(),
                });
            }
        }

        Ok(records)
    }
}

/// Print records one per line: `line:start-end category "text"`.
fn print_text(records: &[TokenRecord]) {
    for record in records {
        println!(
            "{}:{}-{} {} {:?}",
            record.line, record.start, record.end, record.category, record.text
        );
    }
}

/// Print records as a pretty JSON array.
fn print_json(records: &[TokenRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Dump the scanner's token stream for a feature file"
    }

    fn help() -> &'static str {
        "Scans every line of the given feature file and prints one record \
         per token with its line number, category, and inclusive character \
         positions, as text or JSON."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let command = TokensCommand::new(args);
    command.run()
}
