//! High-level API for the Sprig parser.
//!
//! # Scope
//!
//! This crate ties the pieces together:
//! - **Document Loading** - read markup from a file, or fetch it from an
//!   `http://` / `https://` URL
//! - **Parsing** - markup to [`Document`]
//! - **Querying** - selector string to matching elements in document order

pub use sprig_common as common;
pub use sprig_dom as dom;
pub use sprig_html as html;
pub use sprig_select as select;

use std::fs;
use std::path::PathBuf;

use sprig_common::net::{fetch_text, is_remote};
use sprig_common::{FetchError, TagMetadata};
use sprig_dom::{Document, Element};
use sprig_select::{SelectorChain, query};
use thiserror::Error;

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a local file.
    #[error("failed to read '{}': {source}", .path.display())]
    File {
        /// The path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Failed to fetch a URL.
    #[error(transparent)]
    Network(#[from] FetchError),
}

/// Parse an HTML string into a [`Document`].
///
/// Returns `None` when the markup contains no opening tag.
#[must_use]
pub fn parse_document(html: &str, tags: &TagMetadata) -> Option<Document> {
    sprig_html::parse(html, tags)
}

/// Read markup from a file path or URL.
///
/// # Errors
///
/// Returns [`LoadError::Network`] if a URL cannot be fetched and
/// [`LoadError::File`] if a local file cannot be read.
pub fn load_source(path: &str) -> Result<String, LoadError> {
    if is_remote(path) {
        Ok(fetch_text(path)?)
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::File {
            path: PathBuf::from(path),
            source,
        })
    }
}

/// Load a document from a file path or URL.
///
/// `Ok(None)` means the source was read but contains no opening tag.
///
/// # Errors
///
/// See [`load_source`]. The parser itself never fails.
pub fn load_document(path: &str, tags: &TagMetadata) -> Result<Option<Document>, LoadError> {
    let html = load_source(path)?;
    Ok(parse_document(&html, tags))
}

/// Run a compiled selector and return the matches in document order.
#[must_use]
pub fn select_chain<'a>(document: &'a Document, chain: &SelectorChain) -> Vec<&'a Element> {
    let mut ids: Vec<_> = query(document, chain).into_iter().collect();
    ids.sort_unstable();
    ids.into_iter().filter_map(|id| document.get(id)).collect()
}

/// Compile `selector` and return the matching elements in document order.
#[must_use]
pub fn select<'a>(document: &'a Document, selector: &str) -> Vec<&'a Element> {
    select_chain(document, &SelectorChain::compile(selector))
}
