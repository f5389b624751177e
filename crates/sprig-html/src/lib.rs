//! Tag tokenizer and tree builder for the Sprig parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Tokenizer** - comment stripping and a lexical pass that turns
//!   markup into open/close/self-closing tag tokens and trimmed text runs
//! - **Attribute Extractor** - `key="value"` pairs and the class list of a tag
//! - **Tree Builder** - stack-based construction of a [`Document`] with
//!   lenient recovery from unmatched or mismatched closing tags
//!
//! # Known Limitations
//!
//! The tokenizer is pattern-based, not a WHATWG state machine:
//! - A `>` inside an attribute value ends the tag early
//! - Raw-text elements (`script`, `style`, `textarea`) are tokenized like
//!   any other content
//! - CDATA sections and doctypes are not recognized; a doctype is plain text
//! - Only double-quoted attribute values are understood
//!
//! [`Document`]: sprig_dom::Document

/// Attribute and class extraction from raw tag text.
pub mod attributes;
/// Tree construction from tokens.
pub mod parser;
/// Tag tokenizer for converting markup into tokens.
pub mod tokenizer;

pub use attributes::{parse_attributes, parse_classes};
pub use parser::{TreeBuilder, format_tree, parse, print_tree};
pub use tokenizer::{HTMLTokenizer, Token, strip_comments};
