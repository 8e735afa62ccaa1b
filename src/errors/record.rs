//! Captured diagnostics for one failed call.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Random 128-bit identifier, rendered as 32 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorId(String);

impl ErrorId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Accepts exactly 32 hex digits in either case. The case is kept, so
    /// an uppercased id does not match a generated one.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == 32 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything known about one transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub id: ErrorId,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    pub function_name: String,
    /// Arguments as sent, with sensitive values masked.
    pub arguments: Value,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub trace: String,
    pub client_url: String,
}

impl ErrorRecord {
    /// Single-line form written to the error log.
    pub fn log_line(&self) -> String {
        format!(
            "[REACTO_API_ERROR] ID: {} | {} | Function: {} | Message: {} | File: {}:{} | URL: {} | Arguments: {} | Trace: {}",
            self.id,
            self.timestamp,
            self.function_name,
            self.message,
            self.file,
            self.line,
            self.client_url,
            self.arguments,
            flatten_lines(&self.trace),
        )
    }
}

/// Numbered rendering of an error and its source chain, one cause per line.
pub fn trace_of(error: &(dyn std::error::Error + 'static)) -> String {
    let mut lines = Vec::new();
    let mut current = Some(error);
    while let Some(err) = current {
        lines.push(format!("#{} {}", lines.len(), err));
        current = err.source();
    }
    lines.join("\n")
}

fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
