use serde::Serialize;

use crate::{DEFAULT_COUNT, SEPARATOR};

/// Raw generation inputs as supplied by prompts, flags or a settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Total digit count, excluding the separator.
    pub total_length: i64,
    /// Country prefix, with or without a leading separator.
    pub country_code: String,
    /// Local area code, possibly empty.
    pub local_code: String,
    /// Numbers to produce.
    pub count: u64,
    /// Prefix every number with the separator.
    pub include_separator: bool,
    /// Disallow duplicates within the batch.
    pub unique: bool,
}

impl GenerationRequest {
    pub fn new(total_length: i64, country_code: impl Into<String>) -> Self {
        Self {
            total_length,
            country_code: country_code.into(),
            local_code: String::new(),
            count: DEFAULT_COUNT,
            include_separator: true,
            unique: true,
        }
    }

    pub fn with_local_code(mut self, local_code: impl Into<String>) -> Self {
        self.local_code = local_code.into();
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_separator(mut self, include_separator: bool) -> Self {
        self.include_separator = include_separator;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

/// Validated, immutable generation configuration.
///
/// Only [`crate::validate_request`] builds one, so every instance satisfies
/// `total_length > country_digits.len() + local_digits.len()` and, when
/// `unique` is set, `count` fits within the available combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationConfig {
    pub(crate) total_length: u32,
    pub(crate) country_digits: String,
    pub(crate) local_digits: String,
    pub(crate) remaining_length: u32,
    pub(crate) count: u64,
    pub(crate) include_separator: bool,
    pub(crate) unique: bool,
    pub(crate) max_unique: Option<u64>,
}

impl GenerationConfig {
    pub fn total_length(&self) -> u32 {
        self.total_length
    }

    /// Country code digits, separator stripped.
    pub fn country_digits(&self) -> &str {
        &self.country_digits
    }

    pub fn local_digits(&self) -> &str {
        &self.local_digits
    }

    /// Digits left for the random body of each number.
    pub fn remaining_length(&self) -> u32 {
        self.remaining_length
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn include_separator(&self) -> bool {
        self.include_separator
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    /// Distinct random bodies available, `None` when beyond `u64::MAX`.
    pub fn max_unique(&self) -> Option<u64> {
        self.max_unique
    }

    /// Fixed leading digits shared by every number.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.country_digits, self.local_digits)
    }

    /// Apply the optional separator to a full digit string.
    pub fn format(&self, digits: &str) -> String {
        if self.include_separator {
            format!("{SEPARATOR}{digits}")
        } else {
            digits.to_string()
        }
    }
}
