mod common;

use common::builders::{doc, el, el_text, with};
use element_inventory::scan::scanner::scan;
use serde_json::json;

// =========================================================================
// Discovery: selector set membership and document order
// =========================================================================

#[test]
fn selector_set_matches_expected_tags_roles_and_handlers() {
    let dom = doc(vec![
        el_text("a", json!({"href": "/home"}), "Home"),
        el_text("button", json!({}), "Go"),
        el("input", json!({"name": "q"}), vec![]),
        el("select", json!({"name": "country"}), vec![]),
        el("textarea", json!({"name": "bio"}), vec![]),
        el_text("label", json!({}), "Quantity"),
        el_text("h1", json!({}), "Title"),
        el_text("h4", json!({}), "Subtitle"),
        el_text("div", json!({"role": "button"}), "Fake button"),
        el_text("span", json!({"role": "link"}), "Fake link"),
        el_text("li", json!({"role": "tab"}), "Tab one"),
        el_text("div", json!({"onclick": "go()"}), "Clickable"),
    ]);

    let outcome = scan(&dom);
    let tags: Vec<&str> = outcome
        .records
        .iter()
        .map(|r| r.tag_name.as_str())
        .collect();

    assert_eq!(
        tags,
        vec![
            "a", "button", "input", "select", "textarea", "label", "h1", "h4", "div", "span",
            "li", "div"
        ],
        "All twelve selector-set members survive, in document order"
    );
}

#[test]
fn non_interactive_elements_are_not_candidates() {
    let dom = doc(vec![
        el_text("p", json!({}), "Just a paragraph"),
        el_text("h5", json!({}), "Too deep a heading"),
        el_text("div", json!({}), "Plain container"),
        el_text("span", json!({"role": "presentation"}), "Decorative"),
    ]);

    let outcome = scan(&dom);
    assert!(
        outcome.records.is_empty(),
        "Paragraphs, h5, plain divs, and non-target roles are never candidates"
    );
    assert_eq!(outcome.stats.candidates, 0);
}

#[test]
fn node_matching_multiple_patterns_appears_once() {
    // Matches Tag(button), Role(button), and ClickHandler at the same time
    let dom = doc(vec![el_text(
        "button",
        json!({"role": "button", "onclick": "submit()"}),
        "Order now",
    )]);

    let outcome = scan(&dom);
    assert_eq!(outcome.records.len(), 1, "Identity dedup: one record per node");
    assert_eq!(outcome.stats.candidates, 1, "Dedup applies at discovery, not assembly");
}

#[test]
fn label_and_wrapped_input_both_emit_records() {
    // Identity-based dedup only: overlapping text in related records is kept
    let dom = doc(vec![el(
        "label",
        json!({}),
        vec![
            el_text("span", json!({}), "Remember me"),
            el("input", json!({"type": "checkbox"}), vec![]),
        ],
    )]);

    let outcome = scan(&dom);
    assert_eq!(outcome.records.len(), 2, "Label and its wrapped input are separate records");
    assert_eq!(outcome.records[0].tag_name, "label");
    assert_eq!(outcome.records[1].tag_name, "input");
    assert_eq!(
        outcome.records[0].text.computed_text, "Remember me",
        "Label resolves its own text"
    );
    assert_eq!(
        outcome.records[1].text.computed_text, "Remember me",
        "Wrapped input resolves the enclosing label's text"
    );
}

// =========================================================================
// Visibility filter
// =========================================================================

#[test]
fn zero_width_or_height_is_filtered() {
    let dom = doc(vec![
        with(
            el_text("button", json!({}), "Flat"),
            "rect",
            json!({"x": 0.0, "y": 0.0, "width": 100.0, "height": 0.0}),
        ),
        with(
            el_text("button", json!({}), "Thin"),
            "rect",
            json!({"x": 0.0, "y": 0.0, "width": 0.0, "height": 20.0}),
        ),
        el_text("button", json!({}), "Solid"),
    ]);

    let outcome = scan(&dom);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].text.computed_text, "Solid");
    assert_eq!(outcome.stats.candidates, 3);
    assert_eq!(outcome.stats.visible, 1);
}

#[test]
fn hidden_styles_and_missing_offset_parent_are_filtered() {
    let dom = doc(vec![
        with(
            el_text("button", json!({}), "Invisible"),
            "style",
            json!({"visibility": "hidden"}),
        ),
        with(
            el_text("button", json!({}), "Display none"),
            "style",
            json!({"display": "none"}),
        ),
        with(
            el_text("button", json!({}), "Out of layout"),
            "offsetParent",
            json!(false),
        ),
        el_text("button", json!({}), "Visible"),
    ]);

    let outcome = scan(&dom);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].text.computed_text, "Visible");
}

#[test]
fn zero_opacity_is_not_filtered() {
    // Accepted gap: opacity does not participate in the visibility test
    let dom = doc(vec![with(
        el_text("button", json!({}), "Ghost"),
        "style",
        json!({"visibility": "visible", "display": "block", "opacity": "0"}),
    )]);

    let outcome = scan(&dom);
    assert_eq!(
        outcome.records.len(),
        1,
        "Zero-opacity but laid-out elements stay in the inventory"
    );
}

// =========================================================================
// Relevance gate
// =========================================================================

#[test]
fn record_exists_iff_id_or_computed_text() {
    let dom = doc(vec![
        // No id, no text source at all: dropped silently
        el("div", json!({"onclick": "noop()"}), vec![]),
        // Id only: kept, computed text falls back to the id
        el("a", json!({"id": "logo-link", "href": "/"}), vec![]),
        // Text only: kept
        el_text("button", json!({}), "Continue"),
    ]);

    let outcome = scan(&dom);
    assert_eq!(outcome.records.len(), 2, "Unidentifiable elements are omitted, not errors");
    assert_eq!(outcome.records[0].attributes.id.as_deref(), Some("logo-link"));
    assert_eq!(
        outcome.records[0].text.computed_text, "logo-link",
        "Survivors never carry an empty computedText"
    );
    assert_eq!(outcome.records[1].text.computed_text, "Continue");
    assert_eq!(outcome.stats.visible, 3);
    assert_eq!(outcome.stats.emitted, 2);
}

#[test]
fn invisible_elements_are_excluded_even_with_identifiers() {
    let dom = doc(vec![with(
        el_text("button", json!({"id": "hidden-submit"}), "Submit"),
        "style",
        json!({"display": "none"}),
    )]);

    let outcome = scan(&dom);
    assert!(
        outcome.records.is_empty(),
        "Membership requires visibility AND an identifier"
    );
}

// =========================================================================
// Scan pass bookkeeping
// =========================================================================

#[test]
fn stats_count_candidates_visible_and_emitted() {
    let dom = doc(vec![
        el_text("button", json!({}), "One"),
        with(
            el_text("button", json!({}), "Two"),
            "rect",
            json!({"x": 0.0, "y": 0.0, "width": 0.0, "height": 0.0}),
        ),
        el("a", json!({}), vec![]), // visible but unidentifiable
    ]);

    let outcome = scan(&dom);
    assert_eq!(outcome.stats.candidates, 3);
    assert_eq!(outcome.stats.visible, 2);
    assert_eq!(outcome.stats.emitted, 1);
    assert_eq!(outcome.records.len(), outcome.stats.emitted);
}

#[test]
fn rescanning_the_same_snapshot_is_deterministic() {
    let dom = doc(vec![
        el_text("a", json!({"href": "/a"}), "First"),
        el_text("button", json!({}), "Second"),
    ]);

    let first = scan(&dom);
    let second = scan(&dom);
    assert_eq!(
        first.records, second.records,
        "No state survives between invocations"
    );
}
