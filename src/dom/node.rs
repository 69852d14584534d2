use serde::{Deserialize, Serialize};

/// Handle to an element node within a [`DomInspector`] implementation.
///
/// Ids are assigned in document (pre-order) position, so sorting a set of
/// handles reproduces document order.
pub type NodeId = usize;

// ============================================================================
// Element kinds
// ============================================================================

/// Coarse element classification that gates which attributes and state flags
/// are meaningful. Form controls carry value/checked/disabled/readonly,
/// anchors carry href, headings and everything else carry neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    FormControl,
    Anchor,
    Heading,
    Generic,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "input" | "select" | "textarea" | "button" => ElementKind::FormControl,
            "a" => ElementKind::Anchor,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => ElementKind::Heading,
            _ => ElementKind::Generic,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Viewport-relative bounding box, as reported by the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

// ============================================================================
// Tree-inspection capability
// ============================================================================

/// Read access to an already-rendered document tree.
///
/// The extraction pass runs entirely against this interface, so it works
/// against any conforming host: the live-browser snapshot bridge, a snapshot
/// file loaded from disk, or a fixture built inline in a test.
///
/// Node handles cover `0..len()` and follow document order. State accessors
/// are kind-gated: an implementation must report the host default (`false` /
/// `None`) for kinds where the notion does not apply, rather than probing
/// attributes speculatively.
pub trait DomInspector {
    /// Number of element nodes in the document.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The document's root element, if the tree is non-empty.
    fn root(&self) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Child elements in document order.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Lower-cased tag name.
    fn tag(&self, node: NodeId) -> &str;

    fn kind(&self, node: NodeId) -> ElementKind;

    /// Attribute value by lower-cased name, `None` when absent.
    fn attr(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Text directly inside this element, excluding descendant elements.
    fn own_text(&self, node: NodeId) -> Option<&str>;

    fn rect(&self, node: NodeId) -> Rect;

    /// Computed `visibility` style.
    fn visibility(&self, node: NodeId) -> &str;

    /// Computed `display` style.
    fn display(&self, node: NodeId) -> &str;

    /// Whether the element participates in layout (it or an ancestor is not
    /// removed from rendering).
    fn has_offset_parent(&self, node: NodeId) -> bool;

    /// Current value. Form controls only.
    fn value(&self, node: NodeId) -> Option<&str>;

    /// Checked state. Form controls only.
    fn is_checked(&self, node: NodeId) -> bool;

    /// Selected state. Form controls only.
    fn is_selected(&self, node: NodeId) -> bool;

    /// Disabled state. Form controls only.
    fn is_disabled(&self, node: NodeId) -> bool;

    /// Read-only state. Form controls only.
    fn is_read_only(&self, node: NodeId) -> bool;
}
