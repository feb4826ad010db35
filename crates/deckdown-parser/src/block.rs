//! Block-level parser.
//!
//! Assembles the token sequence into the document tree: deck metadata, then
//! separator-delimited slides, with list items folded into nested list
//! structures. Parsing threads an explicit token index; each helper returns
//! the node it built together with the index of the first token it did not
//! consume.

use deckdown_core::{
    BlockContent, DeckdownError, ListItem, Metadata, Presentation, Result, Slide,
};

use crate::inline::parse_inline;
use crate::tokenizer::Token;

// =============================================================================
// Root
// =============================================================================

/// Parse a token sequence into a [`Presentation`].
///
/// Deck metadata is the leading run of metadata tokens. Any content after it
/// must open with a slide separator; a separator that is the very last token
/// opens no slide, while a separator with content after it starts the slide
/// loop (so a separator trailing the content yields a final empty slide).
pub fn parse(tokens: &[Token]) -> Result<Presentation> {
    let mut pos = 0;

    let mut metadata = Vec::new();
    while let Some(Token::Metadata { key, value }) = tokens.get(pos) {
        metadata.push(Metadata::new(key, value));
        pos += 1;
    }

    let mut slides = Vec::new();
    if pos < tokens.len() {
        if !matches!(tokens[pos], Token::SlideSeparator) {
            return Err(DeckdownError::Parse(
                "a slide separator must follow presentation metadata".to_string(),
            ));
        }
        if pos < tokens.len() - 1 {
            while pos < tokens.len() {
                let (slide, next) = parse_slide(tokens, pos + 1)?;
                slides.push(slide);
                pos = next;
            }
        }
    }

    Ok(Presentation { metadata, slides })
}

// =============================================================================
// Slides
// =============================================================================

/// Parse one slide starting at `pos`. Stops at the next slide separator
/// (returning its index) or at the end of the tokens.
fn parse_slide(tokens: &[Token], mut pos: usize) -> Result<(Slide, usize)> {
    let mut metadata = Vec::new();
    let mut content = Vec::new();

    while pos < tokens.len() {
        match &tokens[pos] {
            Token::SlideSeparator => break,
            Token::Metadata { key, value } => {
                metadata.push(Metadata::new(key, value));
                pos += 1;
            }
            Token::Heading { level, text } => {
                content.push(BlockContent::Heading {
                    level: *level,
                    inline: parse_inline(text),
                });
                pos += 1;
            }
            Token::Paragraph { text } => {
                content.push(BlockContent::Paragraph {
                    inline: parse_inline(text),
                });
                pos += 1;
            }
            Token::OrderedListItem { level, .. } => {
                if *level != 1 {
                    return Err(DeckdownError::Parse(
                        "list must start at the first level".to_string(),
                    ));
                }
                let (items, next) = parse_list(tokens, pos, 1, ListKind::Ordered);
                content.push(BlockContent::OrderedList { items });
                pos = next;
            }
            Token::UnorderedListItem { level, .. } => {
                if *level != 1 {
                    return Err(DeckdownError::Parse(
                        "list must start at the first level".to_string(),
                    ));
                }
                let (items, next) = parse_list(tokens, pos, 1, ListKind::Unordered);
                content.push(BlockContent::UnorderedList { items });
                pos = next;
            }
            Token::SpecialBlock { name, body, args } => {
                content.push(BlockContent::SpecialBlock {
                    name: name.clone(),
                    body: body.clone(),
                    args: args.clone(),
                });
                pos += 1;
            }
            Token::Comment { text } => {
                content.push(BlockContent::Comment { text: text.clone() });
                pos += 1;
            }
            token @ (Token::LayoutBlockOpen { .. } | Token::LayoutBlockClose) => {
                log::warn!("unimplemented token, skipping: {:?}", token);
                pos += 1;
            }
        }
    }

    Ok((Slide { metadata, content }, pos))
}

// =============================================================================
// Lists
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

/// Fold a run of list-item tokens at `level` into list entries. A deeper
/// item opens a sub-list that becomes its own entry in this list's sequence;
/// a shallower item, an item of the other kind at this level, or any
/// non-list token ends the run. Returns the entries and the index of the
/// first token not consumed.
fn parse_list(tokens: &[Token], mut pos: usize, level: u8, kind: ListKind) -> (Vec<ListItem>, usize) {
    let mut items = Vec::new();

    while pos < tokens.len() {
        match &tokens[pos] {
            Token::OrderedListItem {
                level: item_level,
                text,
            } => {
                if *item_level > level {
                    let (sub, next) = parse_list(tokens, pos, *item_level, ListKind::Ordered);
                    items.push(ListItem::Ordered { items: sub });
                    pos = next;
                } else if *item_level == level && kind == ListKind::Ordered {
                    items.push(ListItem::Leaf {
                        inline: parse_inline(text),
                    });
                    pos += 1;
                } else {
                    break;
                }
            }
            Token::UnorderedListItem {
                level: item_level,
                text,
            } => {
                if *item_level > level {
                    let (sub, next) = parse_list(tokens, pos, *item_level, ListKind::Unordered);
                    items.push(ListItem::Unordered { items: sub });
                    pos = next;
                } else if *item_level == level && kind == ListKind::Unordered {
                    items.push(ListItem::Leaf {
                        inline: parse_inline(text),
                    });
                    pos += 1;
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    (items, pos)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use deckdown_core::Inline;

    fn parse_str(content: &str) -> Result<Presentation> {
        parse(&tokenize(content)?)
    }

    fn leaf(text: &str) -> ListItem {
        ListItem::Leaf {
            inline: vec![Inline::text(text)],
        }
    }

    #[test]
    fn test_empty_input_is_empty_presentation() {
        let deck = parse_str("").unwrap();
        assert!(deck.metadata.is_empty());
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_deck_metadata_only() {
        let deck = parse_str(":title: Talk\n:author: Someone\n").unwrap();
        assert_eq!(
            deck.metadata,
            vec![
                Metadata::new("title", "Talk"),
                Metadata::new("author", "Someone"),
            ]
        );
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_content_without_separator_is_fatal() {
        let err = parse_str(":title: Talk\n\njust a paragraph\n").unwrap_err();
        assert!(matches!(err, DeckdownError::Parse(_)));
    }

    #[test]
    fn test_lone_trailing_separator_opens_no_slide() {
        let deck = parse_str(":title: Talk\n\n'''\n").unwrap();
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_separator_after_content_yields_trailing_empty_slide() {
        let deck = parse_str("'''\n\nhello\n\n'''\n").unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].content.len(), 1);
        assert!(deck.slides[1].content.is_empty());
    }

    #[test]
    fn test_two_slides_with_heading_and_paragraph() {
        let deck = parse_str("'''\n\n== Intro\n\nhello there\n\n'''\n\nsecond slide\n").unwrap();
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(
            deck.slides[0].content,
            vec![
                BlockContent::Heading {
                    level: 2,
                    inline: vec![Inline::text("Intro")],
                },
                BlockContent::Paragraph {
                    inline: vec![Inline::text("hello there")],
                },
            ]
        );
        assert_eq!(
            deck.slides[1].content,
            vec![BlockContent::Paragraph {
                inline: vec![Inline::text("second slide")],
            }]
        );
    }

    #[test]
    fn test_slide_metadata_is_kept_per_slide() {
        let deck = parse_str("'''\n\n:background: blue\n\ntext\n").unwrap();
        assert_eq!(deck.slides[0].metadata, vec![Metadata::new("background", "blue")]);
        assert_eq!(deck.slides[0].content.len(), 1);
    }

    #[test]
    fn test_flat_ordered_list() {
        let deck = parse_str("'''\n\n. one\n. two\n. three\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::OrderedList {
                items: vec![leaf("one"), leaf("two"), leaf("three")],
            }]
        );
    }

    #[test]
    fn test_nested_list_becomes_sibling_entry() {
        let deck = parse_str("'''\n\n. a\n.. b\n.. c\n. d\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::OrderedList {
                items: vec![
                    leaf("a"),
                    ListItem::Ordered {
                        items: vec![leaf("b"), leaf("c")],
                    },
                    leaf("d"),
                ],
            }]
        );
    }

    #[test]
    fn test_unordered_sublist_inside_ordered_list() {
        let deck = parse_str("'''\n\n. a\n** b\n. c\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::OrderedList {
                items: vec![
                    leaf("a"),
                    ListItem::Unordered {
                        items: vec![leaf("b")],
                    },
                    leaf("c"),
                ],
            }]
        );
    }

    #[test]
    fn test_blank_line_between_same_kind_lists_merges_them() {
        // Blank lines produce no token, so two same-kind runs separated
        // only by one come back as a single list.
        let deck = parse_str("'''\n\n. a\n\n. b\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::OrderedList {
                items: vec![leaf("a"), leaf("b")],
            }]
        );
    }

    #[test]
    fn test_same_level_kind_switch_starts_new_list() {
        let deck = parse_str("'''\n\n. a\n* b\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![
                BlockContent::OrderedList {
                    items: vec![leaf("a")],
                },
                BlockContent::UnorderedList {
                    items: vec![leaf("b")],
                },
            ]
        );
    }

    #[test]
    fn test_deep_list_returns_to_shallow_level() {
        let deck = parse_str("'''\n\n* a\n*** b\n* c\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::UnorderedList {
                items: vec![
                    leaf("a"),
                    ListItem::Unordered {
                        items: vec![leaf("b")],
                    },
                    leaf("c"),
                ],
            }]
        );
    }

    #[test]
    fn test_list_followed_by_paragraph() {
        let deck = parse_str("'''\n\n* a\n\nafterwards\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![
                BlockContent::UnorderedList {
                    items: vec![leaf("a")],
                },
                BlockContent::Paragraph {
                    inline: vec![Inline::text("afterwards")],
                },
            ]
        );
    }

    #[test]
    fn test_list_starting_above_first_level_is_fatal() {
        let err = parse_str("'''\n\n.. too deep\n").unwrap_err();
        assert!(matches!(err, DeckdownError::Parse(_)));
    }

    #[test]
    fn test_special_block_passes_through() {
        let deck = parse_str("'''\n\n[source, rust]\n----\nfn main() {}\n----\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::SpecialBlock {
                name: "source".to_string(),
                body: "fn main() {}\n".to_string(),
                args: vec!["rust".to_string()],
            }]
        );
    }

    #[test]
    fn test_comment_passes_through() {
        let deck = parse_str("'''\n\n// remember this\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::Comment {
                text: " remember this".to_string(),
            }]
        );
    }

    #[test]
    fn test_layout_tokens_are_dropped() {
        let deck = parse_str("'''\n\n[columns]\n--\ninside\n--\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::Paragraph {
                inline: vec![Inline::text("inside")],
            }]
        );
    }

    #[test]
    fn test_heading_text_gets_inline_parsing() {
        let deck = parse_str("'''\n\n= A *strong* title\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::Heading {
                level: 1,
                inline: vec![
                    Inline::text("A "),
                    Inline::Strong(vec![Inline::text("strong")]),
                    Inline::text(" title"),
                ],
            }]
        );
    }

    #[test]
    fn test_list_item_text_gets_inline_parsing() {
        let deck = parse_str("'''\n\n. has `code` inside\n").unwrap();
        assert_eq!(
            deck.slides[0].content,
            vec![BlockContent::OrderedList {
                items: vec![ListItem::Leaf {
                    inline: vec![
                        Inline::text("has "),
                        Inline::Mono(Box::new(Inline::text("code"))),
                        Inline::text(" inside"),
                    ],
                }],
            }]
        );
    }
}
