use std::path::PathBuf;

use phonegen_core::{DEFAULT_COUNT, DEFAULT_OUTPUT, GenerationRequest};

use crate::prompt::Answers;
use crate::settings::Settings;

/// Values supplied on the command line. `None` means not given.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub total_length: Option<i64>,
    pub country_code: Option<String>,
    pub local_code: Option<String>,
    pub count: Option<u64>,
    pub output: Option<PathBuf>,
    pub no_separator: bool,
    pub no_unique: bool,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
}

/// Options after merging flags, settings file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub total_length: Option<i64>,
    pub country_code: Option<String>,
    pub local_code: String,
    pub count: u64,
    pub output: PathBuf,
    pub include_separator: bool,
    pub unique: bool,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
}

impl RunOptions {
    pub fn resolve(overrides: Overrides, settings: Settings) -> Self {
        Self {
            total_length: overrides.total_length.or(settings.total_length),
            country_code: overrides.country_code.or(settings.country_code),
            local_code: overrides
                .local_code
                .or(settings.local_code)
                .unwrap_or_default(),
            count: overrides.count.or(settings.count).unwrap_or(DEFAULT_COUNT),
            output: overrides
                .output
                .or(settings.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            include_separator: !overrides.no_separator
                && settings.include_separator.unwrap_or(true),
            unique: !overrides.no_unique && settings.unique.unwrap_or(true),
            seed: overrides.seed.or(settings.seed),
            report: overrides.report.or(settings.report),
        }
    }

    /// Whether the required inputs are still missing.
    pub fn needs_prompt(&self) -> bool {
        self.total_length.is_none() || self.country_code.is_none()
    }

    /// Replace the generation inputs with interactive answers.
    pub fn apply(&mut self, answers: Answers) {
        self.total_length = Some(answers.total_length);
        self.country_code = Some(answers.country_code);
        self.local_code = answers.local_code;
        self.count = answers.count;
        self.output = answers.output;
        self.include_separator = answers.include_separator;
        self.unique = answers.unique;
    }

    /// Build the raw request, or `None` while required inputs are missing.
    pub fn request(&self) -> Option<GenerationRequest> {
        let total_length = self.total_length?;
        let country_code = self.country_code.clone()?;
        Some(
            GenerationRequest::new(total_length, country_code)
                .with_local_code(self.local_code.clone())
                .with_count(self.count)
                .with_separator(self.include_separator)
                .with_unique(self.unique),
        )
    }
}
