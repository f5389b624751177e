//! Integration tests for the tag tokenizer.

use sprig_common::TagMetadata;
use sprig_html::{HTMLTokenizer, Token};

/// Helper to tokenize a string against the built-in tag lists
fn tokenize(input: &str) -> Vec<Token> {
    let tags = TagMetadata::builtin();
    let mut tokenizer = HTMLTokenizer::new(input.to_string(), &tags);
    tokenizer.run();
    tokenizer.into_tokens()
}

fn text(data: &str) -> Token {
    Token::Text {
        data: data.to_string(),
    }
}

#[test]
fn test_plain_text_without_tags_is_dropped() {
    assert!(tokenize("  Hello  ").is_empty());
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t ").is_empty());
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens, vec![Token::start_tag("div", "", false)]);
}

#[test]
fn test_end_tag() {
    assert_eq!(tokenize("</div>"), vec![Token::end_tag("div")]);
}

#[test]
fn test_tag_names_are_lowercased() {
    let tokens = tokenize("<DiV></DIV>");
    assert_eq!(tokens, vec![Token::start_tag("div", "", false), Token::end_tag("div")]);
}

#[test]
fn test_text_between_tags_is_trimmed() {
    let tokens = tokenize("<p>\n   Hello world \n</p>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("p", "", false),
            text("Hello world"),
            Token::end_tag("p"),
        ]
    );
}

#[test]
fn test_whitespace_only_runs_are_dropped() {
    let tokens = tokenize("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>");
    let texts = tokens.iter().filter(|t| matches!(t, Token::Text { .. })).count();
    assert_eq!(texts, 2);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_trailing_text_is_dropped() {
    assert_eq!(tokenize("<br>tail"), vec![Token::start_tag("br", "", true)]);

    let tokens = tokenize("<div>x</div>tail");
    assert_eq!(tokens.last(), Some(&Token::end_tag("div")));
}

#[test]
fn test_raw_attribute_text_is_kept() {
    let tokens = tokenize(r#"<a href="x" class="link">"#);
    assert_eq!(
        tokens,
        vec![Token::start_tag("a", r#" href="x" class="link""#, false)]
    );
}

#[test]
fn test_explicit_self_closing() {
    let tokens = tokenize(r#"<widget id="w"/>"#);
    assert_eq!(tokens, vec![Token::start_tag("widget", r#" id="w""#, true)]);

    let tokens = tokenize("<widget />");
    assert_eq!(tokens, vec![Token::start_tag("widget", " ", true)]);
}

#[test]
fn test_void_tags_are_self_closing() {
    let tokens = tokenize(r#"<img src="a.png"><IMG>"#);
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("img", r#" src="a.png""#, true),
            Token::start_tag("img", "", true),
        ]
    );
}

#[test]
fn test_void_set_comes_from_metadata() {
    let tags = TagMetadata::empty();
    let mut tokenizer = HTMLTokenizer::new("<img>".to_string(), &tags);
    tokenizer.run();
    assert_eq!(tokenizer.tokens(), &[Token::start_tag("img", "", false)]);

    let tags = TagMetadata::new(Vec::<String>::new(), ["widget"]);
    let mut tokenizer = HTMLTokenizer::new("<widget>".to_string(), &tags);
    tokenizer.run();
    assert_eq!(tokenizer.tokens(), &[Token::start_tag("widget", "", true)]);
}

#[test]
fn test_comments_are_stripped() {
    let tokens = tokenize("<div><!-- <p>hidden</p> --><p>y</p></div>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("div", "", false),
            Token::start_tag("p", "", false),
            text("y"),
            Token::end_tag("p"),
            Token::end_tag("div"),
        ]
    );
}

#[test]
fn test_multiline_comments_are_stripped() {
    let tokens = tokenize("<div><!--\n  <span>\n--></div>");
    assert_eq!(
        tokens,
        vec![Token::start_tag("div", "", false), Token::end_tag("div")]
    );
}

#[test]
fn test_comments_are_matched_non_greedily() {
    let tokens = tokenize("<!-- a --><b>kept</b><!-- c -->");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("b", "", false),
            text("kept"),
            Token::end_tag("b"),
        ]
    );
}

#[test]
fn test_doctype_is_text() {
    let tokens = tokenize("<!DOCTYPE html><html></html>");
    assert_eq!(tokens[0], text("<!DOCTYPE html>"));
    assert_eq!(tokens[1], Token::start_tag("html", "", false));
}

#[test]
fn test_gt_in_attribute_value_ends_tag() {
    // Known limitation of the pattern-based tokenizer.
    let tokens = tokenize(r#"<a title="1>0">x</a>"#);
    assert_eq!(tokens[0], Token::start_tag("a", r#" title="1"#, false));
    assert_eq!(tokens[1], text(r#"0">x"#));
}

#[test]
fn test_display_round_trips_tag_shape() {
    assert_eq!(Token::start_tag("img", r#" src="a""#, true).to_string(), r#"<img src="a" />"#);
    assert_eq!(Token::end_tag("p").to_string(), "</p>");
}
