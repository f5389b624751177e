//! Query engine.
//!
//! # Algorithm
//!
//! Matching walks the tree top-down, carrying the current step of the chain:
//!
//! 1. If the element satisfies the current step:
//!    - on the last step, record it and stop this path;
//!    - otherwise try the next step on every descendant of the element
//!      (breadth-first, all depths), then stop. The element's subtree is
//!      not searched again for the same step.
//! 2. Otherwise try the same step on each child.
//!
//! Because of rule 1, a single-step query such as `div` returns only the
//! outermost `div` of each branch: a `div` nested inside a matched `div` is
//! never visited for that step. Multi-step queries are unaffected since the
//! next step is tried on every descendant.
//!
//! The walk uses an explicit work stack, so deeply nested documents do not
//! grow the native stack. Each (element, step) pair is queued at most once;
//! revisiting a pair can only reproduce matches already recorded.

use std::collections::HashSet;

use sprig_dom::{Document, ElementId};

use crate::selector::SelectorChain;

/// Find every element matching `chain`, starting from the document root.
///
/// The result is a set of identities in no particular order. An empty chain
/// matches nothing.
#[must_use]
pub fn query(document: &Document, chain: &SelectorChain) -> HashSet<ElementId> {
    query_from(document, document.root(), chain)
}

/// Like [`query`], but treats `start` as the top of the search.
#[must_use]
pub fn query_from(
    document: &Document,
    start: ElementId,
    chain: &SelectorChain,
) -> HashSet<ElementId> {
    let Some(first) = chain.first() else {
        return HashSet::new();
    };

    let mut work = Worklist::default();
    work.push(start, first.index());
    drain(document, chain, &mut work)
}

/// Pending (element, step index) pairs.
#[derive(Debug, Default)]
struct Worklist {
    pending: Vec<(ElementId, usize)>,
    queued: HashSet<(ElementId, usize)>,
    #[cfg(test)]
    peak: usize,
}

impl Worklist {
    /// Queue a pair unless it was queued before.
    fn push(&mut self, id: ElementId, index: usize) {
        if self.queued.insert((id, index)) {
            self.pending.push((id, index));
            #[cfg(test)]
            {
                self.peak = self.peak.max(self.pending.len());
            }
        }
    }

    fn pop(&mut self) -> Option<(ElementId, usize)> {
        self.pending.pop()
    }
}

fn drain(document: &Document, chain: &SelectorChain, work: &mut Worklist) -> HashSet<ElementId> {
    let mut matches = HashSet::new();

    while let Some((id, index)) = work.pop() {
        let (Some(element), Some(step)) = (document.get(id), chain.step(index)) else {
            continue;
        };

        if step.selector().matches(element) {
            match step.next() {
                None => {
                    let _ = matches.insert(id);
                }
                Some(next) => {
                    for descendant in document.descendants(id) {
                        work.push(descendant, next.index());
                    }
                }
            }
        } else {
            for &child in &element.children {
                work.push(child, index);
            }
        }
    }

    matches
}
