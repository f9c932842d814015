//! Persistence of generated batches.

pub mod atomic;
pub mod csv;

use std::path::Path;

use crate::errors::GenerationError;
use crate::model::GenerationReport;
use crate::output::atomic::StagedFile;

/// Render a run report as pretty JSON next to `path`.
pub fn stage_report_json(
    path: &Path,
    report: &GenerationReport,
) -> Result<StagedFile, GenerationError> {
    let data = serde_json::to_vec_pretty(report)?;
    StagedFile::stage_bytes(path, &data)
}
