use std::collections::HashMap;

use crate::dom::node::{DomInspector, NodeId};
use crate::scan::record::TextViews;

// ============================================================================
// Identifier resolution: best-effort human-readable label per element
// ============================================================================

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Full text content of an element's subtree, normalized.
pub fn subtree_text(dom: &dyn DomInspector, node: NodeId) -> String {
    let mut parts = Vec::new();
    collect_text(dom, node, &mut parts);
    normalize_whitespace(&parts.join(" "))
}

fn collect_text(dom: &dyn DomInspector, node: NodeId, parts: &mut Vec<String>) {
    if let Some(text) = dom.own_text(node) {
        parts.push(text.to_string());
    }
    for &child in dom.children(node) {
        collect_text(dom, child, parts);
    }
}

/// Map from `<label for=...>` targets to the label node, built once per scan.
/// First label wins when several point at the same id.
pub struct LabelIndex {
    by_target: HashMap<String, NodeId>,
}

impl LabelIndex {
    pub fn build(dom: &dyn DomInspector) -> Self {
        let mut by_target = HashMap::new();
        for node in 0..dom.len() {
            if dom.tag(node) != "label" {
                continue;
            }
            if let Some(target) = dom.attr(node, "for") {
                if !target.is_empty() {
                    by_target.entry(target.to_string()).or_insert(node);
                }
            }
        }
        Self { by_target }
    }

    pub fn label_for(&self, id: &str) -> Option<NodeId> {
        self.by_target.get(id).copied()
    }
}

/// Nearest `<label>` ancestor, for controls wrapped in their label.
fn enclosing_label(dom: &dyn DomInspector, node: NodeId) -> Option<NodeId> {
    let mut current = dom.parent(node);
    while let Some(n) = current {
        if dom.tag(n) == "label" {
            return Some(n);
        }
        current = dom.parent(n);
    }
    None
}

/// Resolve the three text views for a candidate.
///
/// `computed_text` takes the first non-empty source in priority order:
/// aria-label, associated `<label for>` text, enclosing `<label>` text, own
/// visible text, own value, placeholder, name, and as a last resort the id
/// itself, so every surviving record carries a non-empty label. Every source
/// is whitespace-normalized before the emptiness check. An empty
/// `computed_text` combined with an empty id means the element is dropped by
/// the caller; that gate is the only thing separating meaningful targets
/// from decoration.
pub fn resolve_texts(dom: &dyn DomInspector, node: NodeId, labels: &LabelIndex) -> TextViews {
    let visible_text = subtree_text(dom, node);

    let for_label = dom
        .attr(node, "id")
        .filter(|id| !id.is_empty())
        .and_then(|id| labels.label_for(id))
        .map(|label| subtree_text(dom, label))
        .filter(|text| !text.is_empty());

    let wrapping_label = enclosing_label(dom, node)
        .map(|label| subtree_text(dom, label))
        .filter(|text| !text.is_empty());

    let label_text = for_label
        .clone()
        .or_else(|| wrapping_label.clone())
        .unwrap_or_default();

    let sources: [Option<String>; 8] = [
        dom.attr(node, "aria-label").map(normalize_whitespace),
        for_label,
        wrapping_label,
        Some(visible_text.clone()),
        dom.value(node).map(normalize_whitespace),
        dom.attr(node, "placeholder").map(normalize_whitespace),
        dom.attr(node, "name").map(normalize_whitespace),
        dom.attr(node, "id").map(normalize_whitespace),
    ];

    let computed_text = sources
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or_default();

    TextViews {
        visible_text,
        label_text,
        computed_text,
    }
}
