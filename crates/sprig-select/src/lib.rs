//! Selector compiler and query engine for the Sprig parser.
//!
//! # Scope
//!
//! Selectors are whitespace-separated chains of compound selectors:
//!
//! ```text
//! selector := compound (whitespace compound)*
//! compound := tag? ('#' id)? ('.' class)*
//! ```
//!
//! Each step after the first is searched among the descendants of the
//! previous step's match.
//!
//! # Not Supported
//!
//! - Child (`>`) and sibling (`+`, `~`) combinators
//! - Attribute selectors and pseudo-classes
//! - Selector lists (`a, b`)

/// Query engine.
pub mod matching;
/// Selector types and compiler.
pub mod selector;

pub use matching::{query, query_from};
pub use selector::{Selector, SelectorChain, Step, parse_selector};
