use thiserror::Error;

/// Core error type shared across phonegen crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Inputs cannot describe a phone number.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A unique batch asks for more numbers than there are combinations.
    #[error(
        "cannot generate {requested} unique numbers with {remaining_length} random digits; \
         maximum unique combinations = {max_possible}"
    )]
    CapacityExceeded {
        requested: u64,
        remaining_length: u32,
        max_possible: u64,
    },
}

/// Convenience alias for results returned by phonegen crates.
pub type Result<T> = std::result::Result<T, Error>;
