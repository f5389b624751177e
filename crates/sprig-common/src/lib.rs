//! Common utilities for the Sprig parser.
//!
//! This crate provides shared infrastructure used by the other Sprig crates:
//! - **Warning System** - colored, deduplicated terminal output
//! - **Tag Metadata** - known-tag and void-tag sets loaded from JSON
//! - **Fetching** - blocking HTTP GET for markup addressed by URL

pub mod net;
pub mod tags;
pub mod warning;

pub use net::FetchError;
pub use tags::{MetadataError, TagMetadata};
