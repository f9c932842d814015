use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use phonegen_core::DEFAULT_OUTPUT;

/// Options for the generation engine.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// CSV destination, overwritten if it exists.
    pub output: PathBuf,
    /// Optional destination for a JSON run report.
    pub report: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub requested: u64,
    pub generated: u64,
    pub unique: bool,
    pub remaining_length: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unique: Option<u64>,
    pub collisions: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub output: PathBuf,
}
