use element_inventory::dom::snapshot::DomSnapshot;
use serde_json::{Value, json};

// ============================================================================
// Snapshot fixture builders
// ============================================================================

/// A rendered element node: 100x20 box, visible, in layout.
pub fn el(tag: &str, attrs: Value, children: Vec<Value>) -> Value {
    json!({
        "tag": tag,
        "attrs": attrs,
        "rect": { "x": 0.0, "y": 0.0, "width": 100.0, "height": 20.0 },
        "children": children,
    })
}

/// A rendered element node carrying its own text content.
pub fn el_text(tag: &str, attrs: Value, text: &str) -> Value {
    let mut node = el(tag, attrs, vec![]);
    node["text"] = json!(text);
    node
}

/// Override one field of a node (e.g. "rect", "style", "checked", "value").
pub fn with(mut node: Value, key: &str, value: Value) -> Value {
    node[key] = value;
    node
}

/// Wrap body children in an html/body shell and build the snapshot.
pub fn doc(body_children: Vec<Value>) -> DomSnapshot {
    let html = json!({
        "tag": "html",
        "rect": { "x": 0.0, "y": 0.0, "width": 1280.0, "height": 720.0 },
        "children": [{
            "tag": "body",
            "rect": { "x": 0.0, "y": 0.0, "width": 1280.0, "height": 720.0 },
            "children": body_children,
        }],
    });

    DomSnapshot::from_value(json!({
        "url": "https://example.com/fixture",
        "title": "Fixture",
        "tree": html,
    }))
    .expect("fixture snapshot should deserialize")
}
