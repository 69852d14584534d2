use crate::scan::record::ElementRecord;

// ============================================================================
// Canonical serialization, the machine-facing half of the output contract
// ============================================================================

/// Serialize the record sequence as the canonical JSON array.
///
/// This is the form the external agent ingests. Parsing it back with
/// [`parse_records`] reproduces the input field for field.
pub fn to_canonical_json(records: &[ElementRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Parse a canonical JSON array back into records.
pub fn parse_records(json: &str) -> Result<Vec<ElementRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
