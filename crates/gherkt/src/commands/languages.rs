//! Languages command implementation.
//!
//! Lists every registered Gherkin dialect with its culture tag, English
//! name, native name, and keyword count.

use tracing::debug;

use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;
use gherk_dialect::all;

/// Arguments for the languages command.
#[derive(Debug, Clone, Default)]
pub struct LanguagesArgs {
    /// Enable verbose output.
    pub verbose: bool,
}

/// Languages command handler.
pub struct LanguagesCommand {
    args: LanguagesArgs,
}

impl LanguagesCommand {
    /// Create a new LanguagesCommand.
    pub fn new(args: LanguagesArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let dialects = all();
        debug!(count = dialects.len(), "listing registered dialects");

        for dialect in dialects {
            println!(
                "{:<6} {:<12} {:<12} {:>3} keywords",
                dialect.culture(),
                dialect.name(),
                dialect.native(),
                dialect.keywords().len()
            );
            if self.args.verbose {
                // Debug formatting keeps trailing spaces visible.
                for keyword in dialect.keywords() {
                    println!("       {:?}", keyword);
                }
            }
        }
        Ok(())
    }
}

impl Command for LanguagesCommand {
    type Args = LanguagesArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "languages"
    }
}

impl CommandDescription for LanguagesCommand {
    fn description() -> &'static str {
        "List the registered Gherkin dialects"
    }

    fn help() -> &'static str {
        "Prints one row per dialect with its culture tag, English name, \
         native name, and number of scanning keywords. Culture tags are \
         what the --language option of the other commands accepts."
    }
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> Result<()> {
    let command = LanguagesCommand::new(args);
    command.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_runs() {
        let result = run_languages(LanguagesArgs::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_languages_runs_verbose() {
        let result = run_languages(LanguagesArgs { verbose: true });
        assert!(result.is_ok());
    }

    #[test]
    fn test_languages_command_name() {
        assert_eq!(<LanguagesCommand as Command>::name(), "languages");
    }

    #[test]
    fn test_languages_description_mentions_dialects() {
        assert!(LanguagesCommand::description().contains("dialects"));
    }
}
