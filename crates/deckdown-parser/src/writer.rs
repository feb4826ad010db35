//! Canonical serializer.
//!
//! Renders a document tree back to markup text in a normalized form: one
//! blank line between blocks, metadata values single-spaced, doubled
//! emphasis delimiters at span top level and single delimiters inside a
//! surrounding span. A paragraph-initial strong span is the exception: it
//! uses the single form, because a line opening with `**` matches no token
//! shape and would be dropped on reparse. Parsing the canonical form
//! reproduces the tree, which makes the serializer usable as a formatter.

use deckdown_core::{BlockContent, Inline, ListItem, Metadata, Presentation};

/// Render a presentation to canonical markup text. Returns the empty string
/// for an empty presentation, otherwise the output ends with one newline.
pub fn to_canonical(deck: &Presentation) -> String {
    let mut chunks: Vec<String> = Vec::new();

    if !deck.metadata.is_empty() {
        chunks.push(metadata_chunk(&deck.metadata));
    }
    for slide in &deck.slides {
        chunks.push("'''".to_string());
        if !slide.metadata.is_empty() {
            chunks.push(metadata_chunk(&slide.metadata));
        }
        for block in &slide.content {
            chunks.push(block_chunk(block));
        }
    }

    if chunks.is_empty() {
        String::new()
    } else {
        format!("{}\n", chunks.join("\n\n"))
    }
}

fn metadata_chunk(entries: &[Metadata]) -> String {
    entries
        .iter()
        .map(|entry| format!(":{}: {}", entry.key, entry.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_chunk(block: &BlockContent) -> String {
    match block {
        BlockContent::Heading { level, inline } => {
            format!("{} {}", "=".repeat(*level as usize), write_spans(inline, 0))
        }
        BlockContent::Paragraph { inline } => paragraph_chunk(inline),
        BlockContent::OrderedList { items } => list_chunk(items, '.'),
        BlockContent::UnorderedList { items } => list_chunk(items, '*'),
        BlockContent::SpecialBlock { name, body, args } => {
            let header = if args.is_empty() {
                name.clone()
            } else {
                format!("{}, {}", name, args.join(", "))
            };
            format!("[{}]\n----\n{}----", header, body)
        }
        BlockContent::Comment { text } => format!("//{}", text),
    }
}

/// A paragraph line must stay tokenizable: a leading `**` matches neither a
/// list shape nor the plain-line predicate, so a paragraph-initial strong
/// span is emitted in the single-delimiter form (a line starting `*x` is
/// plain). Headings and list items carry their own leading markers and keep
/// the doubled form throughout.
fn paragraph_chunk(spans: &[Inline]) -> String {
    match spans.split_first() {
        Some((Inline::Strong(children), rest)) => {
            format!("*{}*{}", write_spans(children, 1), write_spans(rest, 0))
        }
        _ => write_spans(spans, 0),
    }
}

fn list_chunk(items: &[ListItem], marker: char) -> String {
    let mut lines = Vec::new();
    write_items(items, 1, marker, &mut lines);
    lines.join("\n")
}

/// Emit one line per leaf, markers repeated per nesting level. A sub-list
/// entry switches to its own marker one level deeper.
fn write_items(items: &[ListItem], level: usize, marker: char, lines: &mut Vec<String>) {
    for item in items {
        match item {
            ListItem::Leaf { inline } => {
                let markers: String = std::iter::repeat(marker).take(level).collect();
                lines.push(format!("{} {}", markers, write_spans(inline, 0)));
            }
            ListItem::Ordered { items } => write_items(items, level + 1, '.', lines),
            ListItem::Unordered { items } => write_items(items, level + 1, '*', lines),
        }
    }
}

fn write_spans(spans: &[Inline], depth: usize) -> String {
    spans
        .iter()
        .map(|span| write_span(span, depth))
        .collect::<Vec<_>>()
        .join("")
}

/// Render one span. `depth` selects the delimiter form: doubled at the top
/// of a text value, single inside a surrounding span (a doubled span ends at
/// the next doubled delimiter, so nested spans must not use one).
fn write_span(span: &Inline, depth: usize) -> String {
    let delim = |doubled: &str, single: &str| {
        if depth == 0 {
            doubled.to_string()
        } else {
            single.to_string()
        }
    };

    match span {
        Inline::Text(text) => text.clone(),
        Inline::Strong(children) => {
            let d = delim("**", "*");
            format!("{}{}{}", d, write_spans(children, depth + 1), d)
        }
        Inline::Emph(children) => {
            let d = delim("__", "_");
            format!("{}{}{}", d, write_spans(children, depth + 1), d)
        }
        Inline::Mono(child) => {
            let d = delim("``", "`");
            format!("{}{}{}", d, write_span(child, depth + 1), d)
        }
        Inline::Macro { name, value, args } => {
            format!("{}:{}[{}]", name, value, args.join(", "))
        }
    }
}
