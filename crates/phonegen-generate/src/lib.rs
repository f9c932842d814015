//! Random phone number generation for phonegen.
//!
//! This crate turns a validated [`phonegen_core::GenerationConfig`] into a
//! batch of formatted phone numbers and persists the batch as a
//! single-column CSV file.

pub mod engine;
pub mod errors;
pub mod generator;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::{ErrorKind, GenerationError};
pub use generator::{GeneratedBatch, PhoneNumber, PhoneNumberGenerator, generate_numbers};
pub use model::{GenerateOptions, GenerationReport};
