//! Core contracts for phonegen.
//!
//! This crate defines the validated generation configuration, the
//! feasibility check for unique batches, and the error type shared by the
//! generator and the CLI.

pub mod config;
pub mod error;
pub mod validation;

pub use config::{GenerationConfig, GenerationRequest};
pub use error::{Error, Result};
pub use validation::{max_unique_combinations, validate_request};

/// Character optionally prefixed to every formatted phone number.
pub const SEPARATOR: char = '+';

/// Numbers generated when no count is supplied.
pub const DEFAULT_COUNT: u64 = 10;

/// Destination file used when no output path is supplied.
pub const DEFAULT_OUTPUT: &str = "phone_numbers.csv";
