//! Highlight command implementation.
//!
//! This module renders Gherkin feature files to the terminal with dialect
//! keywords colored, driving the line scanner over each line of each
//! input file.

use std::path::{Path, PathBuf};

use crossterm::style::{Color, Stylize};
use tracing::debug;

use crate::commands::common::{error_messages, split_at_chars, validate_input_file};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{GherktError, Result};
use gherk_dialect::resolve;
use gherk_scan::{LineScanner, Token};

/// Color applied to keyword spans, matching the classic editor look.
const KEYWORD_COLOR: Color = Color::Blue;

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// Feature files to highlight.
    pub files: Vec<PathBuf>,
    /// Culture tag of the dialect to scan with.
    pub language: String,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for HighlightArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            language: "en".to_string(),
            color: true,
            verbose: false,
        }
    }
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

impl HighlightCommand {
    /// Create a new HighlightCommand.
    pub fn new(args: HighlightArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        self.validate_args()?;

        let dialect = resolve(&self.args.language)?;
        debug!(culture = dialect.culture(), "selected dialect");

        // One scanner serves every file; the table is bound to the dialect
        // for the lifetime of the command.
        let mut scanner = LineScanner::for_dialect(dialect);
        for file in &self.args.files {
            self.highlight_file(&mut scanner, file)?;
        }

        self.log_completion();
        Ok(())
    }

    /// Log completion if verbose.
    fn log_completion(&self) {
        if self.args.verbose {
            eprintln!("highlighted {} file(s)", self.args.files.len());
        }
    }

    /// Validate that input files were given and exist.
    fn validate_args(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(GherktError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        for file in &self.args.files {
            validate_input_file(file)?;
        }
        Ok(())
    }

    /// Highlight one file line by line.
    fn highlight_file(&self, scanner: &mut LineScanner, file: &Path) -> Result<()> {
        debug!(file = %file.display(), "highlighting file");

        let content = std::fs::read_to_string(file)?;
        for line in content.lines() {
            scanner.set_source(line, 0);
            let tokens: Vec<Token> = scanner.tokens().collect();
            println!("{}", render_line(line, &tokens, self.args.color));
        }
        Ok(())
    }
}

/// Render one line, styling the keyword spans.
///
/// Token positions are character indices from the start of `line` (the
/// scanner is fed offset 0 per line), so each token's text is recovered by
/// walking the line in character steps. With `color` disabled the output is
/// byte-identical to the input line.
fn render_line(line: &str, tokens: &[Token], color: bool) -> String {
    let mut out = String::with_capacity(line.len() + 16);
    let mut rest = line;

    for token in tokens {
        let (piece, tail) = split_at_chars(rest, token.char_count());
        rest = tail;

        if color && token.is_keyword() {
            out.push_str(&piece.with(KEYWORD_COLOR).to_string());
        } else {
            out.push_str(piece);
        }
    }

    out.push_str(rest);
    out
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "highlight"
    }
}

impl CommandDescription for HighlightCommand {
    fn description() -> &'static str {
        "Render feature files with keywords colored"
    }

    fn help() -> &'static str {
        "Scans each line of the given feature files with the selected \
         dialect's keyword table and prints the text with keyword spans \
         colored."
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    let command = HighlightCommand::new(args);
    command.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gherk_scan::PatternTable;
    use tempfile::TempDir;

    fn tokens_for(line: &str) -> Vec<Token> {
        let mut scanner =
            LineScanner::new(PatternTable::from_keywords(["Given ", "Scenario"]));
        scanner.set_source(line, 0);
        scanner.tokens().collect()
    }

    #[test]
    fn test_highlight_args_default() {
        let args = HighlightArgs::default();
        assert!(args.files.is_empty());
        assert_eq!(args.language, "en");
        assert!(args.color);
        assert!(!args.verbose);
    }

    #[test]
    fn test_render_line_without_color_is_identity() {
        let line = "Given there are 12 cucumbers";
        let tokens = tokens_for(line);
        assert_eq!(render_line(line, &tokens, false), line);
    }

    #[test]
    fn test_render_line_colors_keyword_span() {
        let line = "Given a pickle";
        let tokens = tokens_for(line);
        let rendered = render_line(line, &tokens, true);

        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("a pickle"));
    }

    #[test]
    fn test_render_line_plain_line_has_no_escapes() {
        let line = "| cucumbers | 12 |";
        let tokens = tokens_for(line);
        let rendered = render_line(line, &tokens, true);

        assert!(!rendered.contains('\u{1b}'));
        assert_eq!(rendered, line);
    }

    #[test]
    fn test_render_line_handles_multibyte_text() {
        let line = "Given огурцы";
        let tokens = tokens_for(line);
        assert_eq!(render_line(line, &tokens, false), line);
    }

    #[test]
    fn test_highlight_command_runs_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("basic.feature");
        std::fs::write(&file, "Feature: Basic\nGiven a step\n").unwrap();

        let args = HighlightArgs {
            files: vec![file],
            color: false,
            ..HighlightArgs::default()
        };
        assert!(run_highlight(args).is_ok());
    }

    #[test]
    fn test_highlight_command_rejects_missing_file() {
        let args = HighlightArgs {
            files: vec![PathBuf::from("/nonexistent/missing.feature")],
            ..HighlightArgs::default()
        };
        let result = run_highlight(args);
        assert!(matches!(result, Err(GherktError::Validation(_))));
    }

    #[test]
    fn test_highlight_command_rejects_empty_file_list() {
        let result = run_highlight(HighlightArgs::default());
        assert!(matches!(result, Err(GherktError::Validation(_))));
    }

    #[test]
    fn test_highlight_command_rejects_unknown_language() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("basic.feature");
        std::fs::write(&file, "Feature: Basic\n").unwrap();

        let args = HighlightArgs {
            files: vec![file],
            language: "xx".to_string(),
            ..HighlightArgs::default()
        };
        let result = run_highlight(args);
        assert!(matches!(result, Err(GherktError::Language(_))));
    }

    #[test]
    fn test_highlight_command_name_and_description() {
        assert_eq!(<HighlightCommand as Command>::name(), "highlight");
        assert_eq!(
            <HighlightCommand as CommandDescription>::description(),
            "Render feature files with keywords colored"
        );
    }
}
