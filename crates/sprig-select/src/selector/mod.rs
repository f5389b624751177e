//! Selector parsing.
//!
//! The compiler is lenient: it never rejects input. Each whitespace-separated
//! token contributes the longest prefix that fits the compound grammar, and
//! anything after that prefix is ignored. A token with no usable prefix (a
//! bare `.` for instance) becomes a selector without constraints, which
//! matches every element.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use sprig_dom::Element;

/// `tag? ('#' id)? ('.' class)*`, anchored at the start of a token.
static COMPOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9-]*)(?:#([A-Za-z0-9-]+))?((?:\.[A-Za-z0-9-]+)*)")
        .expect("valid regex")
});

/// One compound selector: a bundle of tag, id and class constraints on a
/// single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name, lowercase.
    pub tag: Option<String>,
    /// Required value of the `id` attribute (case-sensitive).
    pub id: Option<String>,
    /// Classes the element must all carry (case-sensitive).
    pub classes: HashSet<String>,
}

impl Selector {
    /// Parse a single compound such as `div#main.container.big`.
    #[must_use]
    pub fn parse_compound(token: &str) -> Self {
        let Some(caps) = COMPOUND.captures(token) else {
            return Self::default();
        };

        let tag = caps
            .get(1)
            .as_ref()
            .map(Match::as_str)
            .filter(|tag| !tag.is_empty())
            .map(str::to_ascii_lowercase);
        let id = caps.get(2).as_ref().map(Match::as_str).map(str::to_string);
        let classes = caps
            .get(3)
            .as_ref()
            .map_or("", Match::as_str)
            .split('.')
            .filter(|class| !class.is_empty())
            .map(str::to_string)
            .collect();

        Self { tag, id, classes }
    }

    /// Whether this selector carries no constraint at all.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }

    /// Whether `element` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !tag.eq_ignore_ascii_case(&element.name)
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.id_attr() != Some(id.as_str())
        {
            return false;
        }
        element.has_classes(&self.classes)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return write!(f, "*");
        }
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        let mut classes: Vec<&String> = self.classes.iter().collect();
        classes.sort();
        for class in classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A descendant chain of compound selectors.
///
/// The first step is the outermost and is searched first; the last step
/// selects the elements a query returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorChain {
    steps: Vec<Selector>,
}

impl SelectorChain {
    /// Compile a selector string. An empty or all-whitespace string yields an
    /// empty chain, which matches nothing.
    #[must_use]
    pub fn compile(input: &str) -> Self {
        Self {
            steps: input
                .split_whitespace()
                .map(Selector::parse_compound)
                .collect(),
        }
    }

    /// Build a chain from already-parsed steps, outermost first.
    #[must_use]
    pub const fn from_steps(steps: Vec<Selector>) -> Self {
        Self { steps }
    }

    /// All steps, outermost first.
    #[must_use]
    pub fn steps(&self) -> &[Selector] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The outermost step.
    #[must_use]
    pub fn first(&self) -> Option<Step<'_>> {
        self.step(0)
    }

    /// The innermost step, whose matches a query returns.
    #[must_use]
    pub fn last(&self) -> Option<Step<'_>> {
        self.steps.len().checked_sub(1).and_then(|i| self.step(i))
    }

    /// The step at `index`.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<Step<'_>> {
        (index < self.steps.len()).then_some(Step { chain: self, index })
    }
}

impl FromStr for SelectorChain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::compile(s))
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// A position in a [`SelectorChain`], linked to its neighbours.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    chain: &'a SelectorChain,
    index: usize,
}

impl<'a> Step<'a> {
    /// Position of this step in the chain.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The compound selector at this step.
    #[must_use]
    pub fn selector(&self) -> &'a Selector {
        &self.chain.steps[self.index]
    }

    /// The step to satisfy among descendants once this one matches.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.chain.step(self.index + 1)
    }

    /// The step whose match this one is searched under.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.index.checked_sub(1).and_then(|i| self.chain.step(i))
    }

    /// Whether this is the final step of the chain.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Compile a selector string into a [`SelectorChain`].
#[must_use]
pub fn parse_selector(raw: &str) -> SelectorChain {
    SelectorChain::compile(raw)
}
