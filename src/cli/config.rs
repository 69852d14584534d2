use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "element-inventory",
    version,
    about = "Extracts an inventory of interactive elements from a rendered page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: element-inventory.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a live page through the snapshot harness
    Scan {
        /// URL to load and scan
        #[arg(long)]
        url: String,

        /// Output format: table or json (default from config, then "table")
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Scan a snapshot JSON file captured earlier
    Inspect {
        /// Path to the snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Output format: table or json (default from config, then "table")
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `element-inventory.yaml`.
///
/// Covers outer concerns only: where the harness script lives and where
/// output goes. Nothing here changes the selector set or filtering rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub harness: HarnessConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,

    pub path: Option<String>,

    /// JSONL scan trace destination; empty string disables tracing.
    #[serde(default = "default_trace_file")]
    pub trace_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
            trace_file: default_trace_file(),
        }
    }
}

// Serde default helpers
fn default_script() -> String {
    "node/dom-snapshot/snapshot_server.js".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

fn default_trace_file() -> String {
    "scan_trace.jsonl".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("element-inventory.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
