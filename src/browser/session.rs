use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::browser::error::HostError;
use crate::dom::snapshot::DomSnapshot;

/// Request sent to the snapshot harness over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HostRequest {
    Navigate { cmd: &'static str, url: String },
    Snapshot { cmd: &'static str },
    CurrentUrl { cmd: &'static str },
    Quit { cmd: &'static str },
}

impl HostRequest {
    pub fn navigate(url: &str) -> Self {
        HostRequest::Navigate {
            cmd: "navigate",
            url: url.to_string(),
        }
    }

    pub fn snapshot() -> Self {
        HostRequest::Snapshot { cmd: "snapshot" }
    }

    pub fn current_url() -> Self {
        HostRequest::CurrentUrl { cmd: "current_url" }
    }

    pub fn quit() -> Self {
        HostRequest::Quit { cmd: "quit" }
    }
}

/// Response received from the harness over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct HostResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
}

/// A persistent session against the Node.js snapshot harness.
///
/// The harness keeps a Chromium page open; each `snapshot` command serializes
/// the rendered tree (tags, attributes, text, computed styles, bounding
/// rects, control state) as one JSON payload, which becomes the
/// [`DomSnapshot`] the extraction pass runs over. Commands are NDJSON over
/// stdin, responses one JSON line on stdout.
pub struct PageSession {
    child: Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
    current_url: Option<String>,
}

impl PageSession {
    /// Launch the harness script and wait for its ready signal.
    pub fn launch(script: &str) -> Result<Self, HostError> {
        let mut child = Command::new("node")
            .arg(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HostError::SubprocessSpawn {
                script: script.to_string(),
                source: e,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| HostError::SessionIo("Failed to capture harness stdin".into()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| HostError::SessionIo("Failed to capture harness stdout".into()))?;

        let mut reader = BufReader::new(stdout);

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| HostError::SessionIo(format!("Failed to read ready signal: {}", e)))?;

        let response: HostResponse =
            serde_json::from_str(line.trim()).map_err(|e| HostError::JsonParse {
                context: "harness ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(HostError::Protocol {
                command: "launch".into(),
                error: "Did not receive ready signal from harness".into(),
            });
        }

        Ok(PageSession {
            child,
            stdin,
            reader,
            current_url: None,
        })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &HostRequest) -> Result<HostResponse, HostError> {
        let json = serde_json::to_string(request).map_err(|e| HostError::JsonSerialize {
            context: "HostRequest".into(),
            source: e,
        })?;

        writeln!(self.stdin, "{}", json)
            .map_err(|e| HostError::SessionIo(format!("Failed to write to harness stdin: {}", e)))?;

        self.stdin
            .flush()
            .map_err(|e| HostError::SessionIo(format!("Failed to flush harness stdin: {}", e)))?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| HostError::SessionIo(format!("Failed to read from harness stdout: {}", e)))?;

        if line.trim().is_empty() {
            return Err(HostError::SessionIo(
                "Empty response from harness (process may have died)".into(),
            ));
        }

        let response: HostResponse =
            serde_json::from_str(line.trim()).map_err(|e| HostError::JsonParse {
                context: "harness response".into(),
                source: e,
            })?;

        Ok(response)
    }

    /// Send a request and verify it succeeded.
    fn send_ok(&mut self, request: &HostRequest, command: &str) -> Result<HostResponse, HostError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(HostError::Protocol {
                command: command.into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    /// Navigate the harness page to a URL.
    pub fn navigate(&mut self, url: &str) -> Result<(), HostError> {
        let request = HostRequest::navigate(url);
        self.send_ok(&request, "navigate")?;
        self.current_url = Some(url.to_string());
        Ok(())
    }

    /// Capture the rendered tree of the current page.
    pub fn snapshot(&mut self) -> Result<DomSnapshot, HostError> {
        let request = HostRequest::snapshot();
        let response = self.send_ok(&request, "snapshot")?;
        let data = response.data.ok_or_else(|| HostError::Protocol {
            command: "snapshot".into(),
            error: "No data in snapshot response".into(),
        })?;

        DomSnapshot::from_value(data).map_err(|e| HostError::JsonParse {
            context: "snapshot payload".into(),
            source: e,
        })
    }

    /// Ask the harness for the page's current URL.
    pub fn current_url(&mut self) -> Result<String, HostError> {
        let request = HostRequest::current_url();
        let response = self.send_ok(&request, "current_url")?;
        let url = response.url.ok_or_else(|| HostError::Protocol {
            command: "current_url".into(),
            error: "No URL in current_url response".into(),
        })?;
        self.current_url = Some(url.clone());
        Ok(url)
    }

    /// Last navigated URL (cached, no harness call).
    pub fn last_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    /// Quit the harness session.
    pub fn quit(&mut self) -> Result<(), HostError> {
        let request = HostRequest::quit();
        // Best-effort quit; the process may already be gone
        let _ = self.send(&request);
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        // Best-effort cleanup
        let _ = self.quit();
    }
}
