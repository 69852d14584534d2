use serde::{Deserialize, Serialize};

use crate::dom::node::Rect;

// ============================================================================
// ElementRecord: one surviving interactive element, as handed to the agent
// ============================================================================

/// Structured description of one visible, identifiable element.
///
/// Records are produced in document order, live only for the scan pass that
/// created them, and serialize losslessly: parsing the canonical JSON back
/// yields field-for-field identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub tag_name: String,
    pub attributes: AttributeSet,
    pub state: StateFlags,
    pub text: TextViews,
    pub context: Option<AncestorContext>,
    pub xpath: Option<String>,
    pub location: Rect,
}

/// The attribute subset the agent matches against. Empty attributes are
/// treated as absent. `type` is populated only for form controls, `href`
/// only for anchors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Interaction state at scan time. Fields that don't apply to the element's
/// kind stay at the host default (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateFlags {
    pub is_disabled: bool,
    pub is_read_only: bool,
    pub is_checked: bool,
    pub is_selected: bool,
    pub is_hidden_by_aria: bool,
}

/// The three text views of an element. `computed_text` is the resolver's
/// best guess and is non-empty for every emitted record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextViews {
    pub visible_text: String,
    pub label_text: String,
    pub computed_text: String,
}

/// Metadata about the element's immediate parent and, when one encloses it,
/// the nearest form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestorContext {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FormRef>,
}

/// Identity of an enclosing form element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
