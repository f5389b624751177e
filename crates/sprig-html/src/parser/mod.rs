//! Tree construction from tokens.

/// Tree builder implementation.
pub mod core;

pub use self::core::{TreeBuilder, format_tree, parse, print_tree};
