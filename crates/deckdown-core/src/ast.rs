//! The deckdown document tree.
//!
//! A parsed presentation is an immutable tree built bottom-up in a single
//! pass: a [`Presentation`] holds deck-wide metadata and slides, each
//! [`Slide`] holds its own metadata and block-level content, and text-bearing
//! blocks hold resolved [`Inline`] spans. Consumers (renderers, exporters)
//! walk the tree read-only.

use serde::{Deserialize, Serialize};

/// Root node of a parsed deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Presentation {
    /// Deck-wide metadata entries, in source order
    pub metadata: Vec<Metadata>,
    /// Slides, in source order
    pub slides: Vec<Slide>,
}

/// A single `:key: value` metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

impl Metadata {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One slide: per-slide metadata followed by block-level content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slide {
    pub metadata: Vec<Metadata>,
    pub content: Vec<BlockContent>,
}

/// Block-level content of a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockContent {
    /// Heading with level 1-6
    Heading { level: u8, inline: Vec<Inline> },
    /// Paragraph of inline spans
    Paragraph { inline: Vec<Inline> },
    /// Ordered list (`.` markers)
    OrderedList { items: Vec<ListItem> },
    /// Unordered list (`*` markers)
    UnorderedList { items: Vec<ListItem> },
    /// Fenced region captured verbatim, e.g. source code
    SpecialBlock {
        name: String,
        body: String,
        args: Vec<String>,
    },
    /// `//` comment line
    Comment { text: String },
}

/// An entry of a list: either leaf text or a nested sub-list.
///
/// Nesting is structural: a deeper run of items becomes its own
/// `Ordered`/`Unordered` entry in the parent's `items` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListItem {
    Leaf { inline: Vec<Inline> },
    Ordered { items: Vec<ListItem> },
    Unordered { items: Vec<ListItem> },
}

/// An inline span of text with emphasis/literal/macro semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text run
    Text(String),
    /// Strong emphasis, `*...*` or `**...**`
    Strong(Vec<Inline>),
    /// Emphasis, `_..._` or `__...__`
    Emph(Vec<Inline>),
    /// Literal span, `` `...` `` or ```` ``...`` ````; holds exactly one
    /// child (no nested emphasis inside literal spans)
    Mono(Box<Inline>),
    /// Macro call `name:value[args]`, expanded by a downstream consumer
    Macro {
        name: String,
        value: String,
        args: Vec<String>,
    },
}

impl Inline {
    /// Convenience constructor for a plain text span.
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }
}
