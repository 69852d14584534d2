use crate::scan::record::ElementRecord;

// ============================================================================
// Table reporter, the human-facing half of the output contract
// ============================================================================

const TEXT_WIDTH: usize = 32;
const XPATH_WIDTH: usize = 44;

/// Format the record sequence as a browsable text table.
///
/// Same result set as the canonical JSON, different rendering:
/// ```text
/// === Element inventory: 3 elements ===
///
///   # TAG       TEXT                             XPATH                                        SIZE
///   1 button    Submit Now                       //*[@id='submit-btn']                        120x36
///   2 input     Email                            /html/body/form/input                        240x28
///   3 a         Forgot password?                 /html/body/a                                 96x18
/// ```
pub fn format_table(records: &[ElementRecord]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Element inventory: {} element{} ===\n\n",
        records.len(),
        if records.len() == 1 { "" } else { "s" }
    ));

    if records.is_empty() {
        out.push_str("  (no visible interactive elements)\n");
        return out;
    }

    out.push_str(&format!(
        "  {:>3} {:<9} {:<text_w$} {:<xpath_w$} {}\n",
        "#",
        "TAG",
        "TEXT",
        "XPATH",
        "SIZE",
        text_w = TEXT_WIDTH,
        xpath_w = XPATH_WIDTH,
    ));

    for (i, record) in records.iter().enumerate() {
        let text = truncate(&record.text.computed_text, TEXT_WIDTH);
        let xpath = truncate(record.xpath.as_deref().unwrap_or("(none)"), XPATH_WIDTH);
        let size = format!(
            "{}x{}",
            record.location.width.round() as i64,
            record.location.height.round() as i64
        );

        out.push_str(&format!(
            "  {:>3} {:<9} {:<text_w$} {:<xpath_w$} {}\n",
            i + 1,
            record.tag_name,
            text,
            xpath,
            size,
            text_w = TEXT_WIDTH,
            xpath_w = XPATH_WIDTH,
        ));
    }

    out
}

/// Truncate to `width` characters, marking the cut with an ellipsis.
fn truncate(s: &str, width: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= width {
        return s.to_string();
    }
    let mut cut: String = chars[..width.saturating_sub(1)].iter().collect();
    cut.push('…');
    cut
}
