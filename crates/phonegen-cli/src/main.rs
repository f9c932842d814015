mod logging;
mod options;
mod prompt;
mod settings;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use logging::{LogFormat, init_logging};
use options::{Overrides, RunOptions};
use phonegen_core::validate_request;
use phonegen_generate::{GenerateOptions, GenerationEngine, GenerationError, GenerationResult};
use prompt::{PromptError, Prompter};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use settings::{SettingsError, load_settings};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: total length and country code are required")]
    MissingInputs,
}

#[derive(Parser, Debug)]
#[command(
    name = "phonegen",
    version,
    about = "Generate random phone numbers and export them to CSV"
)]
struct Cli {
    /// Total numeric length of each phone number, excluding '+'.
    #[arg(long, short = 't', allow_negative_numbers = true)]
    total: Option<i64>,
    /// Country code, e.g. +1 or 1.
    #[arg(long, short = 'c')]
    country: Option<String>,
    /// Local area code (optional).
    #[arg(long, short = 'l')]
    local: Option<String>,
    /// How many phone numbers to generate [default: 10].
    #[arg(long, short = 'n')]
    count: Option<u64>,
    /// Output CSV file [default: phone_numbers.csv].
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
    /// Do not include '+' in output.
    #[arg(long, default_value_t = false)]
    no_plus: bool,
    /// Allow duplicates.
    #[arg(long, default_value_t = false)]
    no_unique: bool,
    /// Force interactive prompts.
    #[arg(long, short = 'i', default_value_t = false)]
    interactive: bool,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Write a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// TOML settings file supplying defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            total_length: self.total,
            country_code: self.country.clone(),
            local_code: self.local.clone(),
            count: self.count,
            output: self.out.clone(),
            no_separator: self.no_plus,
            no_unique: self.no_unique,
            seed: self.seed,
            report: self.report.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = init_logging(cli.log_format)
        .map_err(CliError::Logging)
        .and_then(|()| run(&cli));

    match outcome {
        Ok(result) => {
            println!(
                "Success: generated {} phone numbers and saved to '{}'.",
                result.report.generated,
                result.report.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationResult, CliError> {
    let settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => Default::default(),
    };
    let mut options = RunOptions::resolve(cli.overrides(), settings);

    if cli.interactive || options.needs_prompt() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let answers = Prompter::new(stdin.lock(), stdout.lock()).collect()?;
        options.apply(answers);
    }

    let request = options.request().ok_or(CliError::MissingInputs)?;
    let config = validate_request(&request).map_err(GenerationError::from)?;

    let mut rng = match options.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_os_rng(),
    };

    let engine = GenerationEngine::new(GenerateOptions {
        output: options.output,
        report: options.report,
    });
    Ok(engine.run(config, &mut rng)?)
}
