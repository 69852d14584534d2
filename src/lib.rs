use crate::{
    browser::{error::HostError, session::PageSession},
    dom::snapshot::DomSnapshot,
    scan::scanner::{ScanOutcome, scan},
};

pub mod browser;
pub mod cli;
pub mod dom;
pub mod report;
pub mod scan;
pub mod trace;

/// Load a URL through the snapshot harness and run one extraction pass over
/// the rendered tree.
pub fn scan_url(url: &str, harness_script: &str) -> Result<ScanOutcome, HostError> {
    let mut session = PageSession::launch(harness_script)?;
    session.navigate(url)?;
    let dom = session.snapshot()?;
    session.quit()?;

    Ok(scan(&dom))
}

/// Run one extraction pass over a snapshot payload serialized as JSON.
pub fn scan_snapshot_json(json: &str) -> Result<ScanOutcome, serde_json::Error> {
    let dom = DomSnapshot::from_json(json)?;
    Ok(scan(&dom))
}
