//! Tag metadata: the set of known tag names and the set of void tag names.
//!
//! A void tag can never contain children or a closing tag. The tokenizer
//! consults [`TagMetadata::is_void`] to mark such tags self-closing even
//! without a trailing slash.
//!
//! Metadata is an explicit immutable value. Build it once at startup and pass
//! it by reference to whoever needs it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::warning::warn_once;

/// Bundled list of HTML element names.
const BUILTIN_TAGS: &str = include_str!("../res/tags.json");

/// Bundled list of HTML void element names.
const BUILTIN_VOID_TAGS: &str = include_str!("../res/void_tags.json");

/// Failure to read or decode a tag list.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The contents were not a JSON array of strings.
    #[error("invalid tag list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Known and void tag names, all lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMetadata {
    known: HashSet<String>,
    void: HashSet<String>,
}

impl TagMetadata {
    /// Metadata with no known and no void tags.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build metadata from explicit name lists. Names are lowercased.
    #[must_use]
    pub fn new<K, V>(known: K, void: V) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        Self {
            known: lowercase_set(known),
            void: lowercase_set(void),
        }
    }

    /// The bundled HTML tag lists.
    #[must_use]
    pub fn builtin() -> Self {
        // Decoding is checked by test_builtin_lists_decode.
        Self {
            known: parse_tag_list(BUILTIN_TAGS).unwrap_or_default(),
            void: parse_tag_list(BUILTIN_VOID_TAGS).unwrap_or_default(),
        }
    }

    /// Decode metadata from two JSON arrays of strings.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Parse`] if either document is not an array of
    /// strings.
    pub fn from_json(known_json: &str, void_json: &str) -> Result<Self, MetadataError> {
        Ok(Self {
            known: parse_tag_list(known_json)?,
            void: parse_tag_list(void_json)?,
        })
    }

    /// Load metadata from two JSON files.
    ///
    /// Never fails: a file that cannot be read or decoded is reported through
    /// [`warn_once`] and contributes an empty set.
    pub fn load(known_path: impl AsRef<Path>, void_path: impl AsRef<Path>) -> Self {
        Self {
            known: load_or_empty(known_path.as_ref()),
            void: load_or_empty(void_path.as_ref()),
        }
    }

    /// Whether `name` is a void tag (case-insensitive).
    #[must_use]
    pub fn is_void(&self, name: &str) -> bool {
        self.void.contains(&name.to_ascii_lowercase())
    }

    /// Whether `name` is a known tag (case-insensitive).
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(&name.to_ascii_lowercase())
    }

    /// All known tag names.
    #[must_use]
    pub const fn known_tags(&self) -> &HashSet<String> {
        &self.known
    }

    /// All void tag names.
    #[must_use]
    pub const fn void_tags(&self) -> &HashSet<String> {
        &self.void
    }
}

fn lowercase_set<I>(names: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_ascii_lowercase())
        .collect()
}

fn parse_tag_list(json: &str) -> Result<HashSet<String>, MetadataError> {
    let names: Vec<String> = serde_json::from_str(json)?;
    Ok(lowercase_set(names))
}

fn read_tag_list(path: &Path) -> Result<HashSet<String>, MetadataError> {
    let json = fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tag_list(&json)
}

fn load_or_empty(path: &Path) -> HashSet<String> {
    read_tag_list(path).unwrap_or_else(|err| {
        warn_once("Tags", &format!("{err}; using an empty tag set"));
        HashSet::new()
    })
}
