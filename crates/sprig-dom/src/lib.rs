//! Element tree for the Sprig parser.
//!
//! # Design
//!
//! A [`Document`] owns every [`Element`] of one parse in a contiguous arena.
//! Elements refer to each other through [`ElementId`] indices: `children`
//! lists are the owning direction, `parent` is a plain index back-reference,
//! so the tree never forms an ownership cycle.
//!
//! An [`ElementId`] doubles as the element's identity. Ids are handed out by
//! a [`DocumentBuilder`] in the order tags are opened, so within one document
//! they are strictly increasing in document order.
//!
//! Documents are immutable once built. The only way to create or modify
//! elements is through a [`DocumentBuilder`], which is consumed by
//! [`DocumentBuilder::finish`].

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Identity of an element and its index into the owning [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

impl ElementId {
    /// The root element of a document is always the first one allocated.
    pub const ROOT: Self = Self(0);
}

/// One parsed tag instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Identity, strictly increasing in the order tags were opened.
    pub id: ElementId,
    /// Lowercase tag name.
    pub name: String,
    /// Attribute key/value pairs. Boolean attributes map to `""`.
    pub attributes: AttributesMap,
    /// Class tokens from the `class` attribute, in source order.
    pub classes: Vec<String>,
    /// Text runs seen while this element was the innermost open element,
    /// joined with single spaces. Descendants' text is not included.
    pub text: String,
    /// The owning element, `None` for the root.
    pub parent: Option<ElementId>,
    /// Owned children in source order.
    pub children: Vec<ElementId>,
}

impl Element {
    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id_attr(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns the value of attribute `name` if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether `class` is one of the element's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether every class in `required` is one of the element's classes.
    #[must_use]
    pub fn has_classes(&self, required: &HashSet<String>) -> bool {
        required.iter().all(|class| self.has_class(class))
    }
}

/// An immutable element tree produced by one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// All elements in allocation order, indexed by [`ElementId`].
    /// The root is always at index 0 ([`ElementId::ROOT`]).
    elements: Vec<Element>,
}

impl Document {
    /// Get the root element ID.
    #[must_use]
    pub const fn root(&self) -> ElementId {
        ElementId::ROOT
    }

    /// Get the root element.
    #[must_use]
    pub fn root_element(&self) -> &Element {
        &self.elements[ElementId::ROOT.0]
    }

    /// Get an element by its ID.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Number of elements allocated during the parse.
    ///
    /// This includes elements opened after the root was closed. Such
    /// elements are kept in the arena but are not reachable from the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always `false`: a document holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the parent of an element.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|e| e.parent)
    }

    /// Get all children of an element.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |e| e.children.as_slice())
    }

    /// Number of ancestors between `id` and its tree's top element.
    #[must_use]
    pub fn depth(&self, id: ElementId) -> usize {
        self.ancestors(id).count()
    }

    /// Check if `descendant` lies anywhere below `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: ElementId, ancestor: ElementId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of an element, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: ElementId) -> AncestorIterator<'_> {
        AncestorIterator {
            document: self,
            current: self.parent(id),
        }
    }

    /// Iterate over every element below `id`, breadth-first.
    ///
    /// `id` itself is not yielded.
    #[must_use]
    pub fn descendants(&self, id: ElementId) -> DescendantIterator<'_> {
        DescendantIterator {
            document: self,
            queue: self.children(id).iter().copied().collect(),
        }
    }

    /// Iterate over the root and everything below it in document order.
    #[must_use]
    pub fn iter(&self) -> DocumentOrderIterator<'_> {
        DocumentOrderIterator {
            document: self,
            stack: vec![self.root()],
        }
    }
}

/// Iterator over ancestors of an element.
pub struct AncestorIterator<'a> {
    document: &'a Document,
    current: Option<ElementId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.document.parent(id);
        Some(id)
    }
}

/// Breadth-first iterator over the descendants of an element.
pub struct DescendantIterator<'a> {
    document: &'a Document,
    queue: VecDeque<ElementId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        self.queue.extend(self.document.children(id).iter().copied());
        Some(id)
    }
}

/// Pre-order iterator over the elements reachable from the root.
pub struct DocumentOrderIterator<'a> {
    document: &'a Document,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for DocumentOrderIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = self.document.get(id)?;
        self.stack.extend(element.children.iter().rev().copied());
        Some(element)
    }
}

/// Allocates elements for one parse and hands out their identities.
///
/// The identity counter is owned by the builder, so separate builders never
/// interfere with each other.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    elements: Vec<Element>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The identity the next allocated element will receive.
    #[must_use]
    pub fn next_id(&self) -> ElementId {
        ElementId(self.elements.len())
    }

    /// Allocate a new element with the next identity.
    ///
    /// With `parent` set, the element is appended to that parent's children.
    /// A `parent` that was never allocated leaves the element detached.
    pub fn alloc(
        &mut self,
        name: String,
        attributes: AttributesMap,
        classes: Vec<String>,
        parent: Option<ElementId>,
    ) -> ElementId {
        let id = self.next_id();
        let parent = parent.filter(|p| p.0 < self.elements.len());
        self.elements.push(Element {
            id,
            name,
            attributes,
            classes,
            text: String::new(),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.elements[parent.0].children.push(id);
        }
        id
    }

    /// Append a text run to an element, space-joined with earlier runs.
    pub fn append_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            if !element.text.is_empty() {
                element.text.push(' ');
            }
            element.text.push_str(text);
        }
    }

    /// Finish the parse. Returns `None` if no element was ever allocated.
    #[must_use]
    pub fn finish(self) -> Option<Document> {
        if self.elements.is_empty() {
            None
        } else {
            Some(Document {
                elements: self.elements,
            })
        }
    }
}
