use crate::errors::IntakeError;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Opt-in JSONL event log. A normal run writes nothing besides the summary
/// on stdout; set this variable to a file path to capture run events.
pub const ENV_LOG_PATH: &str = "INTAKE_LOG_PATH";

#[derive(Debug, Clone)]
pub struct JsonlLogger {
    pub path: PathBuf,
    pub max_payload_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEvent<'a> {
    pub level: &'a str,
    pub event_type: &'a str,
    pub payload: Value,
}

impl JsonlLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_payload_bytes: 4096,
        }
    }

    pub fn append(&self, event: &LogEvent<'_>) -> Result<(), IntakeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| IntakeError::Io(e.to_string()))?;
        }
        let truncated = truncate_json(event.payload.clone(), self.max_payload_bytes);
        let line = serde_json::to_string(&LogEvent {
            level: event.level,
            event_type: event.event_type,
            payload: truncated,
        })
        .map_err(|e| IntakeError::Io(e.to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| IntakeError::Io(e.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|e| IntakeError::Io(e.to_string()))?;
        file.write_all(b"\n")
            .map_err(|e| IntakeError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Best-effort event logging; a failing or unset log sink never fails a run.
pub fn append_run_log(level: &str, event_type: &str, payload: Value) {
    let Ok(path) = std::env::var(ENV_LOG_PATH) else {
        return;
    };
    if path.trim().is_empty() {
        return;
    }
    let _ = JsonlLogger::new(path).append(&LogEvent {
        level,
        event_type,
        payload,
    });
}

fn truncate_json(value: Value, max_bytes: usize) -> Value {
    let rendered = serde_json::to_string(&value).unwrap_or_default();
    if rendered.len() <= max_bytes {
        return value;
    }
    let mut truncated = rendered;
    truncated.truncate(max_bytes.saturating_sub(3));
    Value::String(format!("{truncated}..."))
}
