//! Deckdown Core
//!
//! This crate provides core types and error definitions for the deckdown
//! slide markup parser.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Presentation`], [`Slide`], [`BlockContent`], [`ListItem`], [`Inline`] - the document tree
//! - [`DeckdownError`], [`Result`] - error types

pub mod ast;
pub mod error;

pub use ast::{BlockContent, Inline, ListItem, Metadata, Presentation, Slide};
pub use error::{DeckdownError, Result};
