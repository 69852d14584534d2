use crate::dom::node::{DomInspector, NodeId};

// ============================================================================
// XPath synthesis
// ============================================================================

/// Synthesize a path expression for an element.
///
/// An element with a non-empty id gets the shortcut form `//*[@id='...']`;
/// id uniqueness is assumed, not verified. Everything else gets a
/// root-relative positional path built by walking up to the root. At each
/// level the 1-based position counts only preceding siblings with the same
/// tag, and an index is emitted only when the tag is not unique among its
/// siblings. Counting restarts independently at every ancestor level, which
/// is what keeps the path stable when re-evaluated against the same tree.
///
/// Returns `None` only when no element ancestor chain is reachable; callers
/// still emit the record in that case.
pub fn synthesize(dom: &dyn DomInspector, node: NodeId) -> Option<String> {
    if let Some(id) = dom.attr(node, "id") {
        if !id.is_empty() {
            return Some(format!("//*[@id='{}']", id));
        }
    }

    let mut segments = Vec::new();
    let mut current = Some(node);
    while let Some(n) = current {
        segments.push(segment(dom, n));
        current = dom.parent(n);
    }

    if segments.is_empty() {
        return None;
    }

    segments.reverse();
    Some(format!("/{}", segments.join("/")))
}

/// One path segment: `tag` when unique among same-tag siblings, `tag[n]`
/// otherwise.
fn segment(dom: &dyn DomInspector, node: NodeId) -> String {
    let tag = dom.tag(node);

    let Some(parent) = dom.parent(node) else {
        return tag.to_string();
    };

    let mut preceding = 0usize;
    let mut following = false;
    let mut before_self = true;

    for &sibling in dom.children(parent) {
        if sibling == node {
            before_self = false;
            continue;
        }
        if dom.tag(sibling) == tag {
            if before_self {
                preceding += 1;
            } else {
                following = true;
            }
        }
    }

    if preceding > 0 || following {
        format!("{}[{}]", tag, preceding + 1)
    } else {
        tag.to_string()
    }
}
