mod common;

use common::builders::{doc, el, el_text};
use element_inventory::dom::node::{DomInspector, NodeId};
use element_inventory::dom::snapshot::DomSnapshot;
use element_inventory::scan::scanner::scan;
use element_inventory::scan::xpath::synthesize;
use serde_json::json;

// =========================================================================
// Test-side resolver for the positional subset the synthesizer emits.
// Resolution logic is the consuming agent's job; it lives here only to
// check the round-trip property.
// =========================================================================

fn resolve(dom: &DomSnapshot, xpath: &str) -> Option<NodeId> {
    if let Some(rest) = xpath.strip_prefix("//*[@id='") {
        let id = rest.strip_suffix("']")?;
        return (0..dom.len()).find(|&n| dom.attr(n, "id") == Some(id));
    }

    let mut segments = xpath.strip_prefix('/')?.split('/');
    let root = dom.root()?;
    let (tag, pos) = parse_segment(segments.next()?);
    if dom.tag(root) != tag || pos != 1 {
        return None;
    }

    let mut current = root;
    for segment in segments {
        let (tag, pos) = parse_segment(segment);
        let mut count = 0usize;
        let mut next = None;
        for &child in dom.children(current) {
            if dom.tag(child) == tag {
                count += 1;
                if count == pos {
                    next = Some(child);
                    break;
                }
            }
        }
        current = next?;
    }
    Some(current)
}

fn parse_segment(segment: &str) -> (&str, usize) {
    match segment.find('[') {
        Some(i) => {
            let pos = segment[i + 1..segment.len() - 1]
                .parse()
                .expect("index in segment");
            (&segment[..i], pos)
        }
        None => (segment, 1),
    }
}

fn find_by_text(dom: &DomSnapshot, text: &str) -> NodeId {
    (0..dom.len())
        .find(|&n| dom.own_text(n) == Some(text))
        .expect("fixture node")
}

// =========================================================================
// Id shortcut
// =========================================================================

#[test]
fn id_shortcut_form() {
    let dom = doc(vec![el_text(
        "button",
        json!({"id": "submit-btn"}),
        "Submit",
    )]);

    let outcome = scan(&dom);
    assert_eq!(
        outcome.records[0].xpath.as_deref(),
        Some("//*[@id='submit-btn']"),
        "Non-empty id always wins the shortcut form"
    );
}

#[test]
fn empty_id_falls_back_to_positional_path() {
    let dom = doc(vec![el_text("button", json!({"id": ""}), "Submit")]);

    let outcome = scan(&dom);
    assert_eq!(
        outcome.records[0].xpath.as_deref(),
        Some("/html/body/button"),
        "An empty id does not trigger the shortcut"
    );
}

// =========================================================================
// Positional paths
// =========================================================================

#[test]
fn unique_tags_get_bare_segments() {
    let dom = doc(vec![el(
        "div",
        json!({}),
        vec![el_text("button", json!({}), "Only")],
    )]);

    let node = find_by_text(&dom, "Only");
    assert_eq!(
        synthesize(&dom, node).as_deref(),
        Some("/html/body/div/button"),
        "No index when the tag is unique among its siblings"
    );
}

#[test]
fn repeated_tags_get_one_based_indices() {
    let dom = doc(vec![
        el_text("button", json!({}), "First"),
        el_text("button", json!({}), "Second"),
        el_text("button", json!({}), "Third"),
    ]);

    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "First")).as_deref(),
        Some("/html/body/button[1]"),
        "First of three still carries an index: a same-tag sibling follows"
    );
    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "Second")).as_deref(),
        Some("/html/body/button[2]")
    );
    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "Third")).as_deref(),
        Some("/html/body/button[3]")
    );
}

#[test]
fn index_counts_only_same_tag_siblings() {
    let dom = doc(vec![
        el_text("span", json!({}), "Noise"),
        el_text("a", json!({}), "Link one"),
        el_text("span", json!({}), "More noise"),
        el_text("a", json!({}), "Link two"),
    ]);

    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "Link two")).as_deref(),
        Some("/html/body/a[2]"),
        "Intervening other-tag siblings do not advance the count"
    );
}

#[test]
fn sibling_counting_restarts_at_every_level() {
    let dom = doc(vec![
        el(
            "div",
            json!({}),
            vec![
                el_text("button", json!({}), "Alpha"),
                el_text("button", json!({}), "Beta"),
            ],
        ),
        el(
            "div",
            json!({}),
            vec![el_text("button", json!({}), "Gamma")],
        ),
    ]);

    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "Beta")).as_deref(),
        Some("/html/body/div[1]/button[2]")
    );
    assert_eq!(
        synthesize(&dom, find_by_text(&dom, "Gamma")).as_deref(),
        Some("/html/body/div[2]/button"),
        "Counting is local: the second div's only button needs no index"
    );
}

// =========================================================================
// Round-trip: synthesized paths resolve back to the same node
// =========================================================================

#[test]
fn positional_paths_resolve_to_the_original_node() {
    let dom = doc(vec![
        el(
            "div",
            json!({}),
            vec![
                el_text("a", json!({}), "One"),
                el("div", json!({}), vec![el_text("a", json!({}), "Two")]),
                el_text("a", json!({}), "Three"),
            ],
        ),
        el(
            "div",
            json!({}),
            vec![
                el_text("button", json!({}), "Four"),
                el_text("a", json!({}), "Five"),
            ],
        ),
    ]);

    for text in ["One", "Two", "Three", "Four", "Five"] {
        let node = find_by_text(&dom, text);
        let path = synthesize(&dom, node).expect("path for attached node");
        assert_eq!(
            resolve(&dom, &path),
            Some(node),
            "Path '{}' must resolve back to the node labelled '{}'",
            path,
            text
        );
    }
}

#[test]
fn id_shortcut_resolves_to_the_original_node() {
    let dom = doc(vec![
        el_text("button", json!({}), "Decoy"),
        el_text("button", json!({"id": "target"}), "Target"),
    ]);

    let node = find_by_text(&dom, "Target");
    let path = synthesize(&dom, node).expect("path");
    assert_eq!(path, "//*[@id='target']");
    assert_eq!(resolve(&dom, &path), Some(node));
}
