//! Tag tokenizer module.
//!
//! Splits markup into an ordered stream of tag tokens interleaved with
//! literal text runs. This is a purely lexical pass: nesting and attribute
//! syntax are not validated here.

/// Tag tokenizer implementation.
pub mod core;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, strip_comments};
pub use token::Token;
