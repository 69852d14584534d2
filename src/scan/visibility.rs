use crate::dom::node::{DomInspector, NodeId};

// ============================================================================
// Visibility filter
// ============================================================================

/// Whether a candidate is actually rendered and therefore a valid target.
///
/// Rejects zero-width or zero-height boxes, elements outside layout (no
/// offset parent), `visibility: hidden` and `display: none`. Zero-opacity
/// elements that still occupy layout are NOT rejected; that gap is accepted,
/// not a bug to fix here.
pub fn is_visible(dom: &dyn DomInspector, node: NodeId) -> bool {
    let rect = dom.rect(node);
    if rect.width == 0.0 || rect.height == 0.0 {
        return false;
    }
    if !dom.has_offset_parent(node) {
        return false;
    }
    if dom.visibility(node) == "hidden" {
        return false;
    }
    if dom.display(node) == "none" {
        return false;
    }
    true
}
