use std::fmt::Write as _;

use sprig_common::TagMetadata;
use sprig_dom::{Document, DocumentBuilder, ElementId};

use crate::attributes::{parse_attributes, parse_classes};
use crate::tokenizer::{HTMLTokenizer, Token};

/// Stack-based tree builder.
///
/// Owns the stack of open elements and, through its [`DocumentBuilder`], the
/// identity counter for this parse. Closing tags are never validated:
///
/// - a closing tag pops the innermost open element, whatever its name;
/// - a closing tag with nothing open is ignored;
/// - text with nothing open is discarded.
///
/// The first element opened becomes the root. Elements opened after the root
/// has been closed get identities and subtrees of their own but are not
/// attached to the root.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    document: DocumentBuilder,
    /// Stack of open elements, innermost last.
    open_elements: Vec<ElementId>,
}

impl TreeBuilder {
    /// Create a tree builder over a token stream.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            document: DocumentBuilder::new(),
            open_elements: Vec::new(),
        }
    }

    /// Build the tree. Returns `None` if the tokens contain no opening tag.
    #[must_use]
    pub fn run(mut self) -> Option<Document> {
        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            self.process_token(token);
        }
        self.document.finish()
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::StartTag {
                name,
                raw_attributes,
                self_closing,
            } => {
                let parent = self.current_node();
                let id = self.document.alloc(
                    name,
                    parse_attributes(&raw_attributes),
                    parse_classes(&raw_attributes),
                    parent,
                );
                if !self_closing {
                    self.open_elements.push(id);
                }
            }
            Token::EndTag { .. } => {
                let _ = self.open_elements.pop();
            }
            Token::Text { data } => {
                if let Some(current) = self.current_node() {
                    self.document.append_text(current, &data);
                }
            }
        }
    }

    fn current_node(&self) -> Option<ElementId> {
        self.open_elements.last().copied()
    }
}

/// Tokenize and build `html` in one step.
///
/// Returns `None` when the markup contains no opening tag.
#[must_use]
pub fn parse(html: &str, tags: &TagMetadata) -> Option<Document> {
    let mut tokenizer = HTMLTokenizer::new(html.to_string(), tags);
    tokenizer.run();
    TreeBuilder::new(tokenizer.into_tokens()).run()
}

/// Render the subtree under `id` as an indented outline.
#[must_use]
pub fn format_tree(document: &Document, id: ElementId) -> String {
    let mut out = String::new();
    let mut stack = vec![(id, 0_usize)];

    while let Some((id, indent)) = stack.pop() {
        let Some(element) = document.get(id) else {
            continue;
        };
        let prefix = "  ".repeat(indent);

        let mut attrs: Vec<String> = element
            .attributes
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{k}=\"{v}\"")
                }
            })
            .collect();
        attrs.sort();

        if attrs.is_empty() {
            let _ = writeln!(out, "{prefix}<{}>", element.name);
        } else {
            let _ = writeln!(out, "{prefix}<{} {}>", element.name, attrs.join(" "));
        }
        if !element.text.is_empty() {
            let _ = writeln!(out, "{prefix}  \"{}\"", element.text);
        }

        stack.extend(element.children.iter().rev().map(|&child| (child, indent + 1)));
    }
    out
}

/// Print a document tree for debugging.
pub fn print_tree(document: &Document, id: ElementId) {
    print!("{}", format_tree(document, id));
}
