//! Inline span parser.
//!
//! Converts one text value (heading text, paragraph text, list-item text)
//! into a sequence of [`Inline`] nodes. Span patterns are tried against the
//! unconsumed suffix in a fixed order, first match wins. Doubled delimiters
//! are tried before single delimiters of the same family so that a doubled
//! span owns any single delimiter inside it instead of closing early.

use regex::Regex;
use std::sync::LazyLock;

use deckdown_core::Inline;

/// Macro call at the start of the input: `name:value[arg1,arg2,...]`.
/// Name is letters only; value starts with a non-bracket non-space
/// character and runs up to the bracket.
static MACRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+):([^\[\s][^\[]+)\[([^\]]*)\]").unwrap());

/// Macro call anywhere in the input; used to stop a plain-text run short of
/// a macro that would otherwise be swallowed into it.
static MACRO_ANYWHERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+:[^\[\s][^\[]+\[[^\]]*\]").unwrap());

/// Plain-text run: the longest prefix free of span delimiters.
static PLAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^*_`]+").unwrap());

/// Parse one text value into inline spans.
pub fn parse_inline(value: &str) -> Vec<Inline> {
    let mut output = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        if let Some(caps) = MACRO_RE.captures(rest) {
            let end = caps.get(0).map(|m| m.end()).unwrap_or(rest.len());
            output.push(Inline::Macro {
                name: caps[1].to_string(),
                value: caps[2].to_string(),
                args: split_args(&caps[3]),
            });
            rest = &rest[end..];
        } else if let Some((content, len)) = match_doubled(rest, b'*') {
            output.push(Inline::Strong(parse_inline(content)));
            rest = &rest[len..];
        } else if let Some((content, len)) = match_doubled(rest, b'_') {
            output.push(Inline::Emph(parse_inline(content)));
            rest = &rest[len..];
        } else if let Some((content, len)) = match_doubled(rest, b'`') {
            // Literal spans take a single text child, never nested spans
            output.push(Inline::Mono(Box::new(Inline::text(content))));
            rest = &rest[len..];
        } else if let Some((content, len)) = match_single(rest, b'*') {
            output.push(Inline::Strong(parse_inline(content)));
            rest = &rest[len..];
        } else if let Some((content, len)) = match_single(rest, b'_') {
            output.push(Inline::Emph(parse_inline(content)));
            rest = &rest[len..];
        } else if let Some((content, len)) = match_single(rest, b'`') {
            output.push(Inline::Mono(Box::new(Inline::text(content))));
            rest = &rest[len..];
        } else if let Some(plain) = PLAIN_RE.find(rest) {
            // A macro later in the run must not be swallowed into plain
            // text; truncate the run at the macro's start position.
            let take = match MACRO_ANYWHERE_RE.find(rest) {
                Some(mac) if mac.start() > 0 && mac.start() < plain.end() => mac.start(),
                _ => plain.end(),
            };
            push_text(&mut output, &rest[..take]);
            rest = &rest[take..];
        } else {
            // A delimiter character that opens no span is literal text.
            let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            push_text(&mut output, &rest[..len]);
            rest = &rest[len..];
        }
    }

    output
}

/// Append plain text, coalescing with a preceding text node so stray
/// delimiters do not fragment a run.
fn push_text(output: &mut Vec<Inline>, text: &str) {
    if let Some(Inline::Text(prev)) = output.last_mut() {
        prev.push_str(text);
    } else {
        output.push(Inline::Text(text.to_string()));
    }
}

/// Match a doubled-delimiter span at the start of `s`. Content runs to the
/// next doubled delimiter, must be non-empty, and must not start with
/// whitespace. Returns the content slice and total consumed length.
fn match_doubled(s: &str, delim: u8) -> Option<(&str, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() < 5 || bytes[0] != delim || bytes[1] != delim {
        return None;
    }
    if s[2..].chars().next()?.is_whitespace() {
        return None;
    }

    let mut i = 2;
    while i + 1 < bytes.len() {
        if bytes[i] == delim && bytes[i + 1] == delim {
            if i == 2 {
                return None;
            }
            return Some((&s[2..i], i + 2));
        }
        i += 1;
    }
    None
}

/// Match a single-delimiter span at the start of `s`. Content runs to the
/// next same delimiter, must be non-empty, and its first and last
/// characters must not be whitespace (prevents false positives on stray
/// symbols). Returns the content slice and total consumed length.
fn match_single(s: &str, delim: u8) -> Option<(&str, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != delim {
        return None;
    }

    let close = s[1..].find(delim as char)? + 1;
    let content = &s[1..close];
    if content.is_empty() {
        return None;
    }
    if content.chars().next()?.is_whitespace() || content.chars().last()?.is_whitespace() {
        return None;
    }
    Some((content, close + 1))
}

/// Split bracket arguments on commas, trimming surrounding whitespace.
/// An empty bracket yields no arguments.
fn split_args(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|arg| arg.trim().to_string()).collect()
}
