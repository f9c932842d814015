use std::time::Instant;

use rand::CryptoRng;
use tracing::{debug, info};

use phonegen_core::GenerationConfig;

use crate::errors::GenerationError;
use crate::generator::{PhoneNumber, PhoneNumberGenerator};
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::stage_phone_numbers_csv;
use crate::output::stage_report_json;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub numbers: Vec<PhoneNumber>,
    pub report: GenerationReport,
}

/// Entry point for a single validate-generate-write pass.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate the configured batch and write it to the output CSV.
    ///
    /// The CSV and the optional report are both staged before either replaces
    /// its destination, so a failed run leaves existing files as they were.
    pub fn run<R>(
        &self,
        config: GenerationConfig,
        rng: &mut R,
    ) -> Result<GenerationResult, GenerationError>
    where
        R: CryptoRng + ?Sized,
    {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let generated_at = chrono::Utc::now();

        info!(
            run_id = %run_id,
            requested = config.count(),
            unique = config.unique(),
            remaining_length = config.remaining_length(),
            "generation started"
        );

        let generator = PhoneNumberGenerator::new(config);
        let batch = generator.generate(rng);
        let config = generator.config();

        let (csv_file, bytes_written) =
            stage_phone_numbers_csv(&self.options.output, &batch.numbers)
                .inspect_err(|err| debug!(run_id = %run_id, error = %err, "csv staging failed"))?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            generated_at,
            requested: config.count(),
            generated: batch.numbers.len() as u64,
            unique: config.unique(),
            remaining_length: config.remaining_length(),
            max_unique: config.max_unique(),
            collisions: batch.collisions,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
            output: self.options.output.clone(),
        };

        let report_file = match &self.options.report {
            Some(report_path) => Some(stage_report_json(report_path, &report).inspect_err(
                |err| debug!(run_id = %run_id, error = %err, "report staging failed"),
            )?),
            None => None,
        };

        csv_file.commit()?;
        info!(
            path = %self.options.output.display(),
            bytes_written,
            "phone numbers written"
        );
        if let Some(report_file) = report_file {
            let report_path = report_file.path().to_path_buf();
            report_file.commit()?;
            info!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            generated = report.generated,
            collisions = report.collisions,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            numbers: batch.numbers,
            report,
        })
    }
}
