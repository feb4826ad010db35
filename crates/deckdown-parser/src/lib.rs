//! Deckdown Parser
//!
//! Line-oriented parsing engine for the deckdown slide markup. The pipeline
//! has three stages:
//!
//! 1. [`input::Input`] - a line cursor over the raw text
//! 2. [`tokenize`] - classifies lines into a flat [`Token`] sequence
//! 3. [`block::parse`] - assembles tokens into the document tree, resolving
//!    inline spans on the way
//!
//! [`parse`] runs the whole pipeline; [`to_canonical`] renders a tree back
//! to normalized markup text.
//!
//! # Example
//!
//! ```
//! let deck = deckdown_parser::parse(":title: Demo\n\n'''\n\nhello world\n").unwrap();
//! assert_eq!(deck.metadata[0].value, "Demo");
//! assert_eq!(deck.slides.len(), 1);
//! ```

pub mod block;
pub mod inline;
pub mod input;
pub mod tokenizer;
pub mod writer;

pub use inline::parse_inline;
pub use tokenizer::{tokenize, Token};
pub use writer::to_canonical;

use deckdown_core::{Presentation, Result};

/// Parse a complete document into a [`Presentation`].
pub fn parse(content: &str) -> Result<Presentation> {
    block::parse(&tokenizer::tokenize(content)?)
}
