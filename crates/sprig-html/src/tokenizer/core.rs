use once_cell::sync::Lazy;
use regex::Regex;
use sprig_common::TagMetadata;

use super::token::Token;

/// `<!-- ... -->`, shortest match, may span lines.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// `<`, optional `/`, alphanumeric name, attribute blob, `>`.
static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([A-Za-z0-9]+)([^>]*)>").expect("valid regex"));

/// Remove every comment span from `input`.
#[must_use]
pub fn strip_comments(input: &str) -> String {
    COMMENT.replace_all(input, "").into_owned()
}

/// Pattern-based tag tokenizer.
///
/// Void-tag membership comes from the [`TagMetadata`] passed at construction,
/// so the same markup can be tokenized against different tag sets.
pub struct HTMLTokenizer<'a> {
    input: String,
    tags: &'a TagMetadata,
    tokens: Vec<Token>,
}

impl<'a> HTMLTokenizer<'a> {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: String, tags: &'a TagMetadata) -> Self {
        Self {
            input,
            tags,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// Comments are removed first. Each tag produces the trimmed text that
    /// precedes it (if any) followed by the tag token itself. Text after the
    /// last tag belongs to no tag and is dropped.
    pub fn run(&mut self) {
        let source = strip_comments(&self.input);
        let mut last_end = 0;

        for caps in TAG.captures_iter(&source) {
            let Some(whole) = caps.get(0) else { continue };
            self.emit_text(&source[last_end..whole.start()]);
            last_end = whole.end();

            let name = &caps[2];
            if caps[1].is_empty() {
                let (raw_attributes, explicit) = split_self_closing(&caps[3]);
                let self_closing = explicit || self.tags.is_void(name);
                self.tokens
                    .push(Token::start_tag(name, raw_attributes, self_closing));
            } else {
                self.tokens.push(Token::end_tag(name));
            }
        }
    }

    /// Tokens produced so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the tokenizer and return its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn emit_text(&mut self, run: &str) {
        if let Some(token) = Token::text(run) {
            self.tokens.push(token);
        }
    }
}

/// Split a trailing `/` off the attribute blob.
fn split_self_closing(raw: &str) -> (&str, bool) {
    raw.trim_end()
        .strip_suffix('/')
        .map_or((raw, false), |rest| (rest, true))
}
