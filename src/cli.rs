//! Command-line interface for deckdown.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Deckdown - a parser for slide-deck markup.
///
/// Reads markup from files or stdin and emits the parsed document tree as
/// JSON, as normalized markup text, or as a parse-only summary.
#[derive(Parser, Debug)]
#[command(
    name = "deck",
    author = "Deckdown Contributors",
    version,
    about = "Parse slide-deck markup into a structured document tree",
    after_help = "Examples:\n  \
                  cat talk.deck | deck\n  \
                  deck talk.deck\n  \
                  deck -f canonical talk.deck\n  \
                  deck -f check -l debug talk.deck"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Emit JSON on a single line (with -f json)
    #[arg(long = "compact")]
    pub compact: bool,
}

/// What to print for each parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Document tree as JSON
    Json,
    /// Normalized markup text
    Canonical,
    /// Parse only, print a one-line summary
    Check,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["deck"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.compact);
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["deck", "talk.deck"]);
        assert_eq!(cli.files.len(), 1);
        assert_eq!(cli.files[0], PathBuf::from("talk.deck"));
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "deck",
            "-f",
            "canonical",
            "-l",
            "debug",
            "--compact",
            "talk.deck",
        ]);
        assert_eq!(cli.format, OutputFormat::Canonical);
        assert_eq!(cli.log_level, "debug");
        assert!(cli.compact);
    }

    #[test]
    fn test_should_read_stdin() {
        let cli = Cli::parse_from(["deck"]);
        assert!(cli.should_read_stdin());

        let cli = Cli::parse_from(["deck", "talk.deck"]);
        assert!(!cli.should_read_stdin());
    }
}
