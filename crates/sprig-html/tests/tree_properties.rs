//! Property tests for tree invariants over arbitrary tag soup.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sprig_common::TagMetadata;
use sprig_dom::Document;
use sprig_html::parse;

const FRAGMENTS: &[&str] = &[
    "<div>",
    "</div>",
    r#"<p class="a b">"#,
    "</p>",
    "<span>",
    "</span>",
    r#"<img src="x.png">"#,
    "<br/>",
    "<widget />",
    "text",
    "  ",
    "<!-- comment -->",
    "</li>",
    r#"<a href="x" href="y">"#,
];

/// Random markup assembled from well-known fragments.
#[derive(Debug, Clone)]
struct Markup(String);

impl Arbitrary for Markup {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 48;
        let mut html = String::new();
        for _ in 0..len {
            if let Some(fragment) = g.choose(FRAGMENTS) {
                html.push_str(fragment);
            }
        }
        Self(html)
    }
}

fn build(markup: &Markup) -> Option<Document> {
    parse(&markup.0, &TagMetadata::builtin())
}

#[quickcheck]
fn prop_parent_chain_terminates(markup: Markup) -> bool {
    let Some(doc) = build(&markup) else {
        return true;
    };
    doc.iter().all(|element| {
        let ancestors: Vec<_> = doc.ancestors(element.id).take(doc.len() + 1).collect();
        let mut seen = std::collections::HashSet::new();
        ancestors.len() <= doc.len()
            && ancestors.iter().all(|id| seen.insert(*id))
            && ancestors.last().map_or(element.id, |&id| id) == doc.root()
    })
}

#[quickcheck]
fn prop_children_point_back_to_owner(markup: Markup) -> bool {
    let Some(doc) = build(&markup) else {
        return true;
    };
    (0..doc.len()).all(|index| {
        let id = sprig_dom::ElementId(index);
        doc.children(id)
            .iter()
            .all(|&child| doc.parent(child) == Some(id))
    })
}

#[quickcheck]
fn prop_void_and_self_closing_have_no_children(markup: Markup) -> bool {
    let Some(doc) = build(&markup) else {
        return true;
    };
    doc.iter()
        .filter(|e| matches!(e.name.as_str(), "img" | "br" | "widget"))
        .all(|e| e.children.is_empty())
}

#[quickcheck]
fn prop_ids_increase_in_document_order(markup: Markup) -> bool {
    let Some(doc) = build(&markup) else {
        return true;
    };
    let ids: Vec<_> = doc.iter().map(|e| e.id).collect();
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn prop_root_exists_iff_markup_opens_a_tag(markup: Markup) -> bool {
    let opens_tag = FRAGMENTS
        .iter()
        .filter(|f| f.starts_with('<') && !f.starts_with("</") && !f.starts_with("<!"))
        .any(|f| markup.0.contains(f));
    build(&markup).is_some() == opens_tag
}
