//! Integration tests for attribute and class extraction.

use sprig_html::{parse_attributes, parse_classes};

#[test]
fn test_quoted_values() {
    let attrs = parse_attributes(r#" id="main" data-role="nav""#);
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("id").map(String::as_str), Some("main"));
    assert_eq!(attrs.get("data-role").map(String::as_str), Some("nav"));
}

#[test]
fn test_boolean_attributes_are_empty() {
    let attrs = parse_attributes(r#" disabled type="checkbox" checked"#);
    assert_eq!(attrs.get("disabled").map(String::as_str), Some(""));
    assert_eq!(attrs.get("checked").map(String::as_str), Some(""));
    assert_eq!(attrs.get("type").map(String::as_str), Some("checkbox"));
}

#[test]
fn test_duplicate_keys_last_wins() {
    let attrs = parse_attributes(r#" href="x" href="y""#);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("href").map(String::as_str), Some("y"));
}

#[test]
fn test_empty_attribute_text() {
    assert!(parse_attributes("").is_empty());
    assert!(parse_attributes("   ").is_empty());
    assert!(parse_classes("").is_empty());
}

#[test]
fn test_value_with_spaces_and_punctuation() {
    let attrs = parse_attributes(r#" title="a b = c" href="/x?y=1""#);
    assert_eq!(attrs.get("title").map(String::as_str), Some("a b = c"));
    assert_eq!(attrs.get("href").map(String::as_str), Some("/x?y=1"));
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_unquoted_value_is_read_as_bare_keys() {
    let attrs = parse_attributes(" width=100 height");
    assert_eq!(attrs.get("width").map(String::as_str), Some(""));
    assert_eq!(attrs.get("height").map(String::as_str), Some(""));
    assert!(!attrs.contains_key("100"));
}

#[test]
fn test_classes_split_on_whitespace() {
    let classes = parse_classes(" class=\"  container\tbig \n item \"");
    assert_eq!(classes, vec!["container", "big", "item"]);
}

#[test]
fn test_classes_keep_duplicates_and_order() {
    let classes = parse_classes(r#" class="b a b""#);
    assert_eq!(classes, vec!["b", "a", "b"]);
}

#[test]
fn test_classes_use_first_class_attribute() {
    let classes = parse_classes(r#" class="one" class="two""#);
    assert_eq!(classes, vec!["one"]);
    // The attribute map still follows last-write-wins.
    let attrs = parse_attributes(r#" class="one" class="two""#);
    assert_eq!(attrs.get("class").map(String::as_str), Some("two"));
}

#[test]
fn test_classes_ignore_prefixed_attributes() {
    assert!(parse_classes(r#" data-class="x""#).is_empty());
    assert_eq!(parse_classes(r#"class="x""#), vec!["x"]);
}

#[test]
fn test_empty_class_attribute() {
    assert!(parse_classes(r#" class="""#).is_empty());
    assert!(parse_classes(r#" class="   ""#).is_empty());
}
