use std::collections::HashSet;
use std::fmt;

use rand::{CryptoRng, Rng};
use tracing::debug;

use phonegen_core::{GenerationConfig, GenerationRequest, SEPARATOR, validate_request};

use crate::errors::GenerationError;

/// Upper bound on the up-front allocation for a batch.
const MAX_PREALLOCATED: u64 = 1 << 16;

/// A formatted phone number: optional separator followed by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, without the separator.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix(SEPARATOR).unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Numbers produced by one generator pass.
#[derive(Debug, Clone)]
pub struct GeneratedBatch {
    pub numbers: Vec<PhoneNumber>,
    /// Candidates discarded because they were already produced.
    pub collisions: u64,
}

/// Draws random phone numbers for a validated configuration.
#[derive(Debug, Clone)]
pub struct PhoneNumberGenerator {
    config: GenerationConfig,
    prefix: String,
}

impl PhoneNumberGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        let prefix = config.prefix();
        Self { config, prefix }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Produce exactly `config.count()` numbers.
    ///
    /// Under the unique policy a colliding candidate is discarded and drawn
    /// again. Validation already guarantees `count` does not exceed the
    /// number of distinct bodies, so the loop terminates; it slows down as
    /// `count` approaches that bound.
    pub fn generate<R>(&self, rng: &mut R) -> GeneratedBatch
    where
        R: CryptoRng + ?Sized,
    {
        let target = self.config.count();
        let mut numbers = Vec::with_capacity(target.min(MAX_PREALLOCATED) as usize);
        let mut seen: Option<HashSet<String>> = self.config.unique().then(HashSet::new);
        let mut collisions = 0_u64;

        while (numbers.len() as u64) < target {
            let digits = self.draw_digits(rng);
            if let Some(seen) = seen.as_mut() {
                if !seen.insert(digits.clone()) {
                    collisions += 1;
                    continue;
                }
            }
            numbers.push(PhoneNumber(self.config.format(&digits)));
        }

        if collisions > 0 {
            debug!(
                collisions,
                generated = numbers.len(),
                "discarded duplicate candidates"
            );
        }

        GeneratedBatch {
            numbers,
            collisions,
        }
    }

    fn draw_digits<R>(&self, rng: &mut R) -> String
    where
        R: CryptoRng + ?Sized,
    {
        let remaining = self.config.remaining_length() as usize;
        let mut digits = String::with_capacity(self.prefix.len() + remaining);
        digits.push_str(&self.prefix);
        for _ in 0..remaining {
            digits.push(char::from(b'0' + rng.random_range(0..10_u8)));
        }
        digits
    }
}

/// Validate `request` and generate its numbers in one step.
///
/// Fails before drawing anything when the request is invalid or infeasible.
pub fn generate_numbers<R>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<PhoneNumber>, GenerationError>
where
    R: CryptoRng + ?Sized,
{
    let config = validate_request(request)?;
    Ok(PhoneNumberGenerator::new(config).generate(rng).numbers)
}
