use crate::browser::session::PageSession;
use crate::cli::config::AppConfig;
use crate::dom::node::DomInspector;
use crate::dom::snapshot::DomSnapshot;
use crate::report::json::to_canonical_json;
use crate::report::table::format_table;
use crate::scan::record::ElementRecord;
use crate::scan::scanner::{ScanStats, scan};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::ScanEvent;

// ============================================================================
// scan subcommand
// ============================================================================

pub fn cmd_scan(
    url: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Scanning {} via {}...", url, config.harness.script);
    }

    let mut session = PageSession::launch(&config.harness.script)?;
    session.navigate(url)?;
    let dom = session.snapshot()?;
    session.quit()?;

    let outcome = scan(&dom);
    trace_pass(config, url, &outcome.stats);
    report_stats(&outcome.stats, verbose);

    emit(&outcome.records, format, output, config)
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(
    snapshot_path: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(snapshot_path)?;
    let dom = DomSnapshot::from_json(&content)?;

    if verbose > 0 {
        eprintln!("Inspecting snapshot {} ({} nodes)...", snapshot_path, dom.len());
    }

    let outcome = scan(&dom);
    trace_pass(config, snapshot_path, &outcome.stats);
    report_stats(&outcome.stats, verbose);

    emit(&outcome.records, format, output, config)
}

// ============================================================================
// Helpers
// ============================================================================

fn trace_pass(config: &AppConfig, source: &str, stats: &ScanStats) {
    let tracer = if config.output.trace_file.is_empty() {
        TraceLogger::disabled()
    } else {
        TraceLogger::new(&config.output.trace_file)
    };
    tracer.log(&ScanEvent::completed(source, stats));
}

fn report_stats(stats: &ScanStats, verbose: u8) {
    if verbose > 0 {
        eprintln!(
            "  {} candidates, {} visible, {} emitted in {}ms",
            stats.candidates, stats.visible, stats.emitted, stats.elapsed_ms
        );
    }
}

/// Render the record set and write it to a file or stdout.
///
/// CLI arguments win over the config file for both format and path. When the
/// serialized form goes to a file, the table preview of the same result set
/// still goes to stdout.
fn emit(
    records: &[ElementRecord],
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match format {
        "json" => to_canonical_json(records)?,
        _ => format_table(records),
    };

    let path = output.or(config.output.path.as_deref());
    match path {
        Some(p) => {
            std::fs::write(p, &content)?;
            print!("{}", format_table(records));
        }
        None => print!("{}", content),
    }

    Ok(())
}
