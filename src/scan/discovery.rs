use std::collections::HashSet;

use crate::dom::node::{DomInspector, NodeId};

// ============================================================================
// Candidate discovery: fixed selector set, document order, one entry per node
// ============================================================================

/// One pattern of the fixed selector set. Not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPattern {
    /// Match by tag name.
    Tag(&'static str),
    /// Match by ARIA `role` attribute value.
    Role(&'static str),
    /// Match elements carrying an inline `onclick` handler.
    ClickHandler,
}

/// The selector set: anchors, buttons, form controls, labels, heading levels
/// 1-4, ARIA button/link/tab roles, and inline click handlers.
pub const SELECTOR_PATTERNS: &[SelectorPattern] = &[
    SelectorPattern::Tag("a"),
    SelectorPattern::Tag("button"),
    SelectorPattern::Tag("input"),
    SelectorPattern::Tag("select"),
    SelectorPattern::Tag("textarea"),
    SelectorPattern::Tag("label"),
    SelectorPattern::Tag("h1"),
    SelectorPattern::Tag("h2"),
    SelectorPattern::Tag("h3"),
    SelectorPattern::Tag("h4"),
    SelectorPattern::Role("button"),
    SelectorPattern::Role("link"),
    SelectorPattern::Role("tab"),
    SelectorPattern::ClickHandler,
];

impl SelectorPattern {
    pub fn matches(&self, dom: &dyn DomInspector, node: NodeId) -> bool {
        match self {
            SelectorPattern::Tag(tag) => dom.tag(node) == *tag,
            SelectorPattern::Role(role) => dom.attr(node, "role") == Some(*role),
            SelectorPattern::ClickHandler => dom.attr(node, "onclick").is_some(),
        }
    }
}

/// Enumerate candidate nodes for one scan pass.
///
/// A node matched by several patterns (a button with `role="button"`, an
/// input carrying `onclick`) enters the stream once: the dedup set is keyed
/// on node identity and lives only for this call. The result is sorted back
/// into document order.
pub fn discover(dom: &dyn DomInspector) -> Vec<NodeId> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut candidates = Vec::new();

    for pattern in SELECTOR_PATTERNS {
        for node in 0..dom.len() {
            if pattern.matches(dom, node) && seen.insert(node) {
                candidates.push(node);
            }
        }
    }

    // Node ids are document positions
    candidates.sort_unstable();
    candidates
}
