use std::time::Instant;

use crate::dom::node::{DomInspector, ElementKind, NodeId};
use crate::scan::context::{self, non_empty_attr};
use crate::scan::discovery::discover;
use crate::scan::identifier::{LabelIndex, resolve_texts};
use crate::scan::record::{AttributeSet, ElementRecord, StateFlags, TextViews};
use crate::scan::visibility::is_visible;
use crate::scan::xpath;

// ============================================================================
// Record assembly: one synchronous pass over the snapshot
// ============================================================================

/// Counters and timing for one scan pass. Observational only; the record
/// sequence is identical with or without anyone reading these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Candidates matched by the selector set.
    pub candidates: usize,
    /// Candidates that survived the visibility filter.
    pub visible: usize,
    /// Records emitted (visible and identifiable).
    pub emitted: usize,
    pub elapsed_ms: u128,
}

/// The full result of one scan invocation.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub records: Vec<ElementRecord>,
    pub stats: ScanStats,
}

/// Run the extraction pass over a document snapshot.
///
/// Discovery order is preserved in the output. Elements that resolve to no
/// usable identifier are dropped silently; an uncomputable path still emits
/// the record with `xpath: None`. Nothing here retries or recovers: the
/// pass either completes or the host-level failure that interrupted it
/// propagates from the caller.
pub fn scan(dom: &dyn DomInspector) -> ScanOutcome {
    let started = Instant::now();

    let candidates = discover(dom);
    let labels = LabelIndex::build(dom);

    let mut visible = 0usize;
    let mut records = Vec::new();

    for &node in &candidates {
        if !is_visible(dom, node) {
            continue;
        }
        visible += 1;

        let texts = resolve_texts(dom, node, &labels);
        let id = non_empty_attr(dom, node, "id");

        // Relevance gate: no id and no resolved text means nothing for an
        // agent to address the element by.
        if id.is_none() && texts.computed_text.is_empty() {
            continue;
        }

        records.push(assemble(dom, node, id, texts));
    }

    let stats = ScanStats {
        candidates: candidates.len(),
        visible,
        emitted: records.len(),
        elapsed_ms: started.elapsed().as_millis(),
    };

    ScanOutcome { records, stats }
}

fn assemble(
    dom: &dyn DomInspector,
    node: NodeId,
    id: Option<String>,
    texts: TextViews,
) -> ElementRecord {
    let kind = dom.kind(node);

    let attributes = AttributeSet {
        id,
        class: non_empty_attr(dom, node, "class"),
        name: non_empty_attr(dom, node, "name"),
        control_type: match kind {
            ElementKind::FormControl => non_empty_attr(dom, node, "type"),
            _ => None,
        },
        role: non_empty_attr(dom, node, "role"),
        aria_label: non_empty_attr(dom, node, "aria-label"),
        placeholder: non_empty_attr(dom, node, "placeholder"),
        href: match kind {
            ElementKind::Anchor => non_empty_attr(dom, node, "href"),
            _ => None,
        },
    };

    let state = StateFlags {
        is_disabled: dom.is_disabled(node),
        is_read_only: dom.is_read_only(node),
        is_checked: dom.is_checked(node),
        is_selected: dom.is_selected(node),
        is_hidden_by_aria: dom.attr(node, "aria-hidden") == Some("true"),
    };

    ElementRecord {
        tag_name: dom.tag(node).to_string(),
        attributes,
        state,
        text: texts,
        context: context::extract(dom, node),
        xpath: xpath::synthesize(dom, node),
        location: dom.rect(node),
    }
}
