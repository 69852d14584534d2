use crate::dom::node::{DomInspector, NodeId};
use crate::scan::record::{AncestorContext, FormRef};

// ============================================================================
// Ancestor context
// ============================================================================

/// Upper bound on the form lookup walk. Real documents sit far below this;
/// the cap keeps worst-case cost bounded on pathologically deep trees.
pub const MAX_FORM_SEARCH_DEPTH: usize = 50;

/// Capture the immediate parent's identity plus the nearest enclosing form.
/// `None` for a node with no parent.
pub fn extract(dom: &dyn DomInspector, node: NodeId) -> Option<AncestorContext> {
    let parent = dom.parent(node)?;

    Some(AncestorContext {
        tag_name: dom.tag(parent).to_string(),
        id: non_empty_attr(dom, parent, "id"),
        role: non_empty_attr(dom, parent, "role"),
        aria_label: non_empty_attr(dom, parent, "aria-label"),
        form: nearest_form(dom, node),
    })
}

fn nearest_form(dom: &dyn DomInspector, node: NodeId) -> Option<FormRef> {
    let mut current = dom.parent(node);
    let mut depth = 0;

    while let Some(n) = current {
        if depth >= MAX_FORM_SEARCH_DEPTH {
            return None;
        }
        if dom.tag(n) == "form" {
            return Some(FormRef {
                id: non_empty_attr(dom, n, "id"),
                name: non_empty_attr(dom, n, "name"),
            });
        }
        current = dom.parent(n);
        depth += 1;
    }

    None
}

pub fn non_empty_attr(dom: &dyn DomInspector, node: NodeId, name: &str) -> Option<String> {
    dom.attr(node, name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
