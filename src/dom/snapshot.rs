use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::dom::node::{DomInspector, ElementKind, NodeId, Rect};

// ============================================================================
// Wire format: the rendered-tree JSON emitted by the snapshot harness
// ============================================================================

/// Top-level payload of a `snapshot` command (or a saved snapshot file).
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotPayload {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub tree: SnapshotNode,
}

/// One rendered element as serialized by the harness.
///
/// Geometry and computed styles are captured at snapshot time; `text` holds
/// only the element's own text-node content, descendant text lives in
/// `children`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotNode {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rect: Rect,
    #[serde(default)]
    pub style: SnapshotStyle,
    #[serde(default = "default_true", rename = "offsetParent")]
    pub offset_parent: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, rename = "readOnly")]
    pub read_only: bool,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotStyle {
    #[serde(default = "default_visibility")]
    pub visibility: String,
    #[serde(default = "default_display")]
    pub display: String,
}

impl Default for SnapshotStyle {
    fn default() -> Self {
        Self {
            visibility: default_visibility(),
            display: default_display(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_visibility() -> String {
    "visible".to_string()
}

fn default_display() -> String {
    "block".to_string()
}

// ============================================================================
// Arena
// ============================================================================

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    kind: ElementKind,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    rect: Rect,
    visibility: String,
    display: String,
    offset_parent: bool,
    value: Option<String>,
    checked: bool,
    selected: bool,
    disabled: bool,
    read_only: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Immutable document snapshot backing one extraction pass.
///
/// Built from the harness's rendered-tree JSON; node ids are assigned in
/// pre-order, so they double as document positions.
#[derive(Debug, Clone)]
pub struct DomSnapshot {
    nodes: Vec<NodeData>,
    url: Option<String>,
    title: Option<String>,
}

impl DomSnapshot {
    /// Deserialize a full snapshot payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let payload: SnapshotPayload = serde_json::from_str(json)?;
        Ok(Self::from_payload(payload))
    }

    /// Deserialize a full snapshot payload from an in-memory JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let payload: SnapshotPayload = serde_json::from_value(value)?;
        Ok(Self::from_payload(payload))
    }

    pub fn from_payload(payload: SnapshotPayload) -> Self {
        let mut snapshot = DomSnapshot {
            nodes: Vec::new(),
            url: payload.url,
            title: payload.title,
        };
        snapshot.intern(payload.tree, None);
        snapshot
    }

    fn intern(&mut self, node: SnapshotNode, parent: Option<NodeId>) -> NodeId {
        let tag = node.tag.to_ascii_lowercase();
        let kind = ElementKind::from_tag(&tag);
        let attrs = node
            .attrs
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();

        let id = self.nodes.len();
        self.nodes.push(NodeData {
            tag,
            kind,
            attrs,
            text: node.text,
            rect: node.rect,
            visibility: node.style.visibility,
            display: node.style.display,
            offset_parent: node.offset_parent,
            value: node.value,
            checked: node.checked,
            selected: node.selected,
            disabled: node.disabled,
            read_only: node.read_only,
            parent,
            children: Vec::new(),
        });

        for child in node.children {
            let child_id = self.intern(child, Some(id));
            self.nodes[id].children.push(child_id);
        }

        id
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl DomInspector for DomSnapshot {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() { None } else { Some(0) }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node].tag
    }

    fn kind(&self, node: NodeId) -> ElementKind {
        self.nodes[node].kind
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node].attrs.get(name).map(String::as_str)
    }

    fn own_text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].text.as_deref()
    }

    fn rect(&self, node: NodeId) -> Rect {
        self.nodes[node].rect
    }

    fn visibility(&self, node: NodeId) -> &str {
        &self.nodes[node].visibility
    }

    fn display(&self, node: NodeId) -> &str {
        &self.nodes[node].display
    }

    fn has_offset_parent(&self, node: NodeId) -> bool {
        self.nodes[node].offset_parent
    }

    fn value(&self, node: NodeId) -> Option<&str> {
        if self.nodes[node].kind != ElementKind::FormControl {
            return None;
        }
        self.nodes[node].value.as_deref()
    }

    fn is_checked(&self, node: NodeId) -> bool {
        self.nodes[node].kind == ElementKind::FormControl && self.nodes[node].checked
    }

    fn is_selected(&self, node: NodeId) -> bool {
        self.nodes[node].kind == ElementKind::FormControl && self.nodes[node].selected
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes[node].kind == ElementKind::FormControl && self.nodes[node].disabled
    }

    fn is_read_only(&self, node: NodeId) -> bool {
        self.nodes[node].kind == ElementKind::FormControl && self.nodes[node].read_only
    }
}
