//! Result log.
//!
//! Generated replies are appended to a CSV file together with the invocation
//! metadata, one row per generation. The header row is written only when the
//! file is new or empty, so repeated runs accumulate in the same file.
//!
//! # Columns
//!
//! `timestamp, model, prompt_kind, level, circuit, template, output`
//!
//! The timestamp is local time formatted as `%Y-%m-%d %H:%M:%S`.

use crate::error::{PromptError, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// Timestamp format used in the log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub timestamp: String,
    pub model: String,
    pub prompt_kind: String,
    pub level: String,
    pub circuit: String,
    pub template: String,
    pub output: String,
}

impl ResultRecord {
    /// Create a record stamped with the current local time.
    ///
    /// Exercise fields start empty; set them with [`ResultRecord::with_exercise`].
    pub fn new(model: impl Into<String>, template: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            model: model.into(),
            prompt_kind: String::new(),
            level: String::new(),
            circuit: String::new(),
            template: template.into(),
            output: output.into(),
        }
    }

    pub fn with_exercise(
        mut self,
        prompt_kind: impl Into<String>,
        level: impl Into<String>,
        circuit: impl Into<String>,
    ) -> Self {
        self.prompt_kind = prompt_kind.into();
        self.level = level.into();
        self.circuit = circuit.into();
        self
    }
}

/// Append a record to the CSV log at `path`, creating the file if needed.
///
/// # Returns
///
/// * `Ok(())` - Record was appended (with a header if the file was empty)
/// * `Err(PromptError::ResultLog)` - Directory creation, open or write failed
pub fn append_result<P: AsRef<Path>>(path: P, record: &ResultRecord) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            PromptError::ResultLog(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PromptError::ResultLog(format!("failed to open '{}': {}", path.display(), e))
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);

    writer.serialize(record).map_err(|e| {
        PromptError::ResultLog(format!("failed to write to '{}': {}", path.display(), e))
    })?;

    writer.flush().map_err(|e| {
        PromptError::ResultLog(format!("failed to flush '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "appended result record");
    Ok(())
}

/// Read every record from a CSV log.
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        PromptError::ResultLog(format!("failed to open '{}': {}", path.display(), e))
    })?;

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<ResultRecord>, _>>()
        .map_err(|e| PromptError::ResultLog(format!("failed to read '{}': {}", path.display(), e)))
}
