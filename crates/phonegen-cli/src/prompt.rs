use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use phonegen_core::{DEFAULT_COUNT, DEFAULT_OUTPUT, SEPARATOR};

/// Errors raised while prompting for inputs.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before all answers were given")]
    Closed,
    #[error(transparent)]
    Config(#[from] phonegen_core::Error),
}

/// Answers gathered in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub total_length: i64,
    pub country_code: String,
    pub local_code: String,
    pub count: u64,
    pub output: PathBuf,
    pub include_separator: bool,
    pub unique: bool,
}

/// Line-oriented prompter over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every question in turn.
    pub fn collect(&mut self) -> Result<Answers, PromptError> {
        writeln!(self.output, "Random Phone Number Generator - Interactive Mode")?;

        let total_length = self.number::<i64>(
            &format!("Enter total numeric length of phone number (digits only, exclude '{SEPARATOR}'): "),
            None,
        )?;

        let country_code =
            self.line(&format!("Enter the country code (e.g., {SEPARATOR}1, 1, {SEPARATOR}91, 91): "))?;
        if country_code.is_empty() {
            return Err(phonegen_core::Error::InvalidConfiguration(
                "country code is required".to_string(),
            )
            .into());
        }

        let local_code =
            self.line("Enter the local code (e.g., 415, 011, 020). If none, press Enter: ")?;
        let count = self.number::<u64>(
            &format!("Enter how many phone numbers to generate (default: {DEFAULT_COUNT}): "),
            Some(DEFAULT_COUNT),
        )?;

        let output = self.line(&format!(
            "Enter output CSV filename (default: {DEFAULT_OUTPUT}): "
        ))?;
        let output = if output.is_empty() {
            PathBuf::from(DEFAULT_OUTPUT)
        } else {
            PathBuf::from(output)
        };

        let include_separator =
            self.yes_no(&format!("Include '{SEPARATOR}' sign in output? (Y/n) [default: Y]: "))?;
        let unique = self.yes_no("Require unique phone numbers? (Y/n) [default: Y]: ")?;

        Ok(Answers {
            total_length,
            country_code,
            local_code,
            count,
            output,
            include_separator,
            unique,
        })
    }

    fn line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(buf.trim().to_string())
    }

    /// Re-prompt until the answer parses, or Enter picks `default`.
    fn number<T: FromStr>(&mut self, prompt: &str, default: Option<T>) -> Result<T, PromptError> {
        let mut default = default;
        loop {
            let raw = self.line(prompt)?;
            if raw.is_empty() {
                if let Some(value) = default.take() {
                    return Ok(value);
                }
            }
            match raw.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a valid integer.")?,
            }
        }
    }

    /// Anything but `n` counts as yes.
    fn yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(!self.line(prompt)?.eq_ignore_ascii_case("n"))
    }
}
