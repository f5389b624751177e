use core::fmt;

/// A lexical unit of markup.
///
/// Text tokens only carry non-empty, whitespace-trimmed runs. Tag names are
/// always lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening tag, possibly self-closing.
    StartTag {
        /// Lowercase tag name.
        name: String,
        /// Everything between the tag name and the closing `>`, minus a
        /// trailing `/`. Parsed later by [`crate::attributes`].
        raw_attributes: String,
        /// Set for `<tag ... />` and for tags in the void-tag set.
        self_closing: bool,
    },

    /// A closing tag such as `</div>`.
    EndTag {
        /// Lowercase tag name.
        name: String,
    },

    /// Literal text found between two tags.
    Text {
        /// Trimmed, never empty.
        data: String,
    },
}

impl Token {
    /// Create an opening tag token.
    #[must_use]
    pub fn start_tag(name: &str, raw_attributes: &str, self_closing: bool) -> Self {
        Self::StartTag {
            name: name.to_ascii_lowercase(),
            raw_attributes: raw_attributes.to_string(),
            self_closing,
        }
    }

    /// Create a closing tag token.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Self::EndTag {
            name: name.to_ascii_lowercase(),
        }
    }

    /// Create a text token from an untrimmed run, or `None` if the run is
    /// only whitespace.
    #[must_use]
    pub fn text(run: &str) -> Option<Self> {
        let data = run.trim();
        if data.is_empty() {
            None
        } else {
            Some(Self::Text {
                data: data.to_string(),
            })
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                raw_attributes,
                self_closing,
            } => {
                write!(f, "<{name}{raw_attributes}")?;
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => write!(f, "{data}"),
        }
    }
}
