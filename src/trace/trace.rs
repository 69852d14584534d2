use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::scan::scanner::ScanStats;

/// One scan pass, as recorded in the JSONL trace.
#[derive(Debug, Serialize)]
pub struct ScanEvent {
    pub timestamp_ms: u128,

    /// URL or snapshot file the pass ran against.
    pub source: String,

    pub candidates: usize,
    pub visible: usize,
    pub emitted: usize,
    pub elapsed_ms: u128,
}

impl ScanEvent {
    pub fn completed(source: &str, stats: &ScanStats) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            source: source.to_string(),
            candidates: stats.candidates,
            visible: stats.visible,
            emitted: stats.emitted,
            elapsed_ms: stats.elapsed_ms,
        }
    }
}
