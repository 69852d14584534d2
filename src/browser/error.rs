use std::fmt;

#[derive(Debug)]
pub enum HostError {
    /// The rendering harness failed to spawn
    SubprocessSpawn { script: String, source: std::io::Error },

    /// Reading or writing the harness pipe failed
    SessionIo(String),

    /// JSON parsing failed (harness output or snapshot payload)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (request to the harness)
    JsonSerialize { context: String, source: serde_json::Error },

    /// The harness answered, but reported failure
    Protocol { command: String, error: String },

    /// Snapshot payload parsed but had an unusable shape
    SnapshotShape(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::SubprocessSpawn { script, source } => {
                write!(f, "Failed to spawn {} (is Node.js installed?): {}", script, source)
            }
            HostError::SessionIo(msg) => {
                write!(f, "Harness session I/O failed: {}", msg)
            }
            HostError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            HostError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            HostError::Protocol { command, error } => {
                write!(f, "Harness rejected '{}': {}", command, error)
            }
            HostError::SnapshotShape(msg) => {
                write!(f, "Unusable snapshot payload: {}", msg)
            }
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::SubprocessSpawn { source, .. } => Some(source),
            HostError::JsonParse { source, .. } => Some(source),
            HostError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
