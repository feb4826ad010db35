//! Deckdown - a parser for slide-deck markup.
//!
//! This binary provides the CLI interface to the deckdown library, reading
//! markup from files or stdin and printing the parsed document tree.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use log::{error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};

use deckdown_core::{Presentation, Result};
use deckdown_parser::{parse, to_canonical};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Deckdown v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;

        let deck = parse(&content)?;
        write!(out, "{}", render(&deck, cli)?)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let content = fs::read_to_string(path)?;

            let deck = parse(&content)?;
            write!(out, "{}", render(&deck, cli)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Render one parsed document in the requested output format.
fn render(deck: &Presentation, cli: &Cli) -> Result<String> {
    match cli.format {
        OutputFormat::Json => {
            let rendered = if cli.compact {
                serde_json::to_string(deck)?
            } else {
                serde_json::to_string_pretty(deck)?
            };
            Ok(format!("{}\n", rendered))
        }
        OutputFormat::Canonical => Ok(to_canonical(deck)),
        OutputFormat::Check => Ok(format!(
            "ok: {} metadata entries, {} slides\n",
            deck.metadata.len(),
            deck.slides.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_deck(content: &str) -> Presentation {
        parse(content).unwrap()
    }

    #[test]
    fn test_render_check_summary() {
        let cli = Cli::parse_from(["deck", "-f", "check"]);
        let deck = parse_deck(":title: T\n\n'''\n\nhello\n");
        assert_eq!(render(&deck, &cli).unwrap(), "ok: 1 metadata entries, 1 slides\n");
    }

    #[test]
    fn test_render_canonical() {
        let cli = Cli::parse_from(["deck", "-f", "canonical"]);
        let deck = parse_deck("'''\n\nhello\n");
        assert_eq!(render(&deck, &cli).unwrap(), "'''\n\nhello\n");
    }

    #[test]
    fn test_render_compact_json_is_single_line() {
        let cli = Cli::parse_from(["deck", "--compact"]);
        let deck = parse_deck("'''\n\nhello\n");
        let rendered = render(&deck, &cli).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("\"slides\""));
    }

    #[test]
    fn test_render_pretty_json_is_multi_line() {
        let cli = Cli::parse_from(["deck"]);
        let deck = parse_deck("'''\n\nhello\n");
        assert!(render(&deck, &cli).unwrap().lines().count() > 1);
    }
}
