//! Line classifier for deckdown markup.
//!
//! Each non-blank line (or span of continuation lines) becomes exactly one
//! [`Token`]. Line shapes are tried in a fixed priority order, first match
//! wins; the order is load-bearing because several shapes share leading
//! characters (`*` starts both unordered list items and strong emphasis).

use regex::Regex;
use std::sync::LazyLock;

use deckdown_core::{DeckdownError, Result};

use crate::input::Input;

// =============================================================================
// Line patterns
// =============================================================================

/// Metadata line: `:key: value` (key has no colon)
static METADATA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:([^:]+):\s*(.*)$").unwrap());

/// Slide separator: a line that is exactly `'''`
static SLIDE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^'''$").unwrap());

/// Heading: 1-6 `=` then whitespace then text
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(={1,6})\s+(.*)$").unwrap());

/// Ordered list item: 1-5 `.` then whitespace then text
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\.{1,5})\s+(.*)$").unwrap());

/// Unordered list item: 1-5 `*` then whitespace then text
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*{1,5})\s+(.*)$").unwrap());

/// Block header: `[name, arg1, arg2, ...]` alone on a line
static BLOCK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(.+)\]$").unwrap());

/// Layout block marker: a line that is exactly `--`
static LAYOUT_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^--$").unwrap());

/// Special block marker: a line that is exactly `----`
static SPECIAL_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^----$").unwrap());

/// Inline comment: a line starting with `//`
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^//").unwrap());

/// Check whether a line is "plain", i.e. continues a paragraph or list item
/// rather than opening some other construct.
///
/// A line is plain when it is non-blank and its first character is not a
/// marker character, with one carve-out: a leading `*` that is not followed
/// by whitespace or a second `*` is strong emphasis, not a list marker, and
/// the line stays plain. Hand-rolled because the `regex` crate has no
/// lookahead.
fn is_plain_line(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        None => false,
        Some('*') => !matches!(chars.next(), Some(c) if c.is_whitespace() || c == '*'),
        Some(':' | '-' | '=' | '.' | '[' | '\'') => false,
        Some(_) => true,
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// One classified line (or continuation-joined span of lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `:key: value`
    Metadata { key: String, value: String },

    /// `'''` alone on a line
    SlideSeparator,

    /// `={1,6}` heading, level is the marker count
    Heading { level: u8, text: String },

    /// `.{1,5}` list item, level is the marker count
    OrderedListItem { level: u8, text: String },

    /// `*{1,5}` list item, level is the marker count
    UnorderedListItem { level: u8, text: String },

    /// Block header followed by `--`; carries the raw bracket contents
    LayoutBlockOpen { name: String },

    /// `--` alone on a line, outside a block header position
    LayoutBlockClose,

    /// Block header followed by `----`; body captured verbatim
    SpecialBlock {
        name: String,
        body: String,
        args: Vec<String>,
    },

    /// Any other non-blank line, plus its plain continuation lines
    Paragraph { text: String },

    /// `// ...` line, text after the slashes
    Comment { text: String },
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Classify the whole document into a token sequence.
///
/// Blank lines separate tokens but produce none themselves. Returns a fatal
/// error for a block header that is not followed by a recognized opening
/// marker.
pub fn tokenize(content: &str) -> Result<Vec<Token>> {
    let mut input = Input::new(content);
    let mut tokens = Vec::new();

    while !input.eof() {
        let line = match input.next_line() {
            Some(line) => line.to_string(),
            None => break,
        };

        if line.is_empty() {
            continue;
        } else if let Some(caps) = METADATA_RE.captures(&line) {
            tokens.push(Token::Metadata {
                key: caps[1].to_string(),
                value: caps[2].trim_end().to_string(),
            });
        } else if SLIDE_SEPARATOR_RE.is_match(&line) {
            tokens.push(Token::SlideSeparator);
        } else if let Some(caps) = HEADING_RE.captures(&line) {
            tokens.push(Token::Heading {
                level: caps[1].len() as u8,
                text: caps[2].to_string(),
            });
        } else if let Some(caps) = ORDERED_ITEM_RE.captures(&line) {
            let level = caps[1].len() as u8;
            let text = format!("{}{}", &caps[2], eat_plain_lines(&mut input));
            tokens.push(Token::OrderedListItem { level, text });
        } else if let Some(caps) = UNORDERED_ITEM_RE.captures(&line) {
            let level = caps[1].len() as u8;
            let text = format!("{}{}", &caps[2], eat_plain_lines(&mut input));
            tokens.push(Token::UnorderedListItem { level, text });
        } else if let Some(caps) = BLOCK_HEADER_RE.captures(&line) {
            let header = caps[1].to_string();
            tokens.push(read_block(&mut input, &header)?);
        } else if LAYOUT_MARKER_RE.is_match(&line) {
            tokens.push(Token::LayoutBlockClose);
        } else if COMMENT_RE.is_match(&line) {
            tokens.push(Token::Comment {
                text: line[2..].to_string(),
            });
        } else if is_plain_line(&line) {
            let text = format!("{}{}", line, eat_plain_lines(&mut input));
            tokens.push(Token::Paragraph { text });
        } else {
            // Unreachable while is_plain_line stays the complement of the
            // marker shapes above; degrade by dropping the line.
            log::warn!(
                "line {} matches no token pattern, skipping: {:?}",
                input.line_number(),
                line
            );
        }
    }

    Ok(tokens)
}

/// Absorb the plain continuation lines that follow a paragraph or list item,
/// joined with single spaces. Stops at a blank line, EOF, or any line that
/// opens another construct.
fn eat_plain_lines(input: &mut Input) -> String {
    let mut value = String::new();

    loop {
        match input.peek_line() {
            Some(line) if is_plain_line(line) => {}
            _ => break,
        }
        if let Some(line) = input.next_line() {
            value.push(' ');
            value.push_str(line);
        }
    }

    value
}

/// Resolve a block header: the next line decides between a layout block
/// (`--`) and a special block (`----`, body captured verbatim until the
/// closing marker).
fn read_block(input: &mut Input, header: &str) -> Result<Token> {
    let marker = input.next_line().map(str::to_string);

    match marker.as_deref() {
        Some(m) if LAYOUT_MARKER_RE.is_match(m) => Ok(Token::LayoutBlockOpen {
            name: header.to_string(),
        }),
        Some(m) if SPECIAL_MARKER_RE.is_match(m) => {
            let mut body = String::new();
            loop {
                let Some(line) = input.next_line().map(str::to_string) else {
                    break;
                };
                if SPECIAL_MARKER_RE.is_match(&line) {
                    break;
                }
                // An unterminated final line is discarded rather than
                // captured; the closing marker is required to commit it.
                if input.eof() {
                    break;
                }
                body.push_str(&line);
                body.push('\n');
            }

            let mut parts = header.split(',').map(str::trim);
            let name = parts.next().unwrap_or_default().to_string();
            let args: Vec<String> = parts.map(str::to_string).collect();
            Ok(Token::SpecialBlock { name, body, args })
        }
        _ => Err(DeckdownError::Syntax {
            line: input.line_number(),
            message: "block header requires a block opening marker".to_string(),
        }),
    }
}

// =============================================================================
// Tests
// =============================================================================
