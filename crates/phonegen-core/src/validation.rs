use crate::config::{GenerationConfig, GenerationRequest};
use crate::error::{Error, Result};
use crate::SEPARATOR;

/// Validate raw inputs into a [`GenerationConfig`].
///
/// This checks:
/// - total length is positive
/// - country code is digits only once a single leading separator is removed
/// - local code is empty or digits only
/// - at least one digit remains for the random body
/// - a unique batch fits within the available combinations
pub fn validate_request(request: &GenerationRequest) -> Result<GenerationConfig> {
    if request.total_length <= 0 {
        return Err(Error::InvalidConfiguration(format!(
            "total length must be a positive integer, got {}",
            request.total_length
        )));
    }

    let country = request.country_code.trim();
    let country_digits = country.strip_prefix(SEPARATOR).unwrap_or(country);
    if !is_digits(country_digits) {
        return Err(Error::InvalidConfiguration(format!(
            "country code must contain digits only (a leading '{SEPARATOR}' is allowed), got '{}'",
            request.country_code
        )));
    }

    let local_digits = request.local_code.trim();
    if !local_digits.is_empty() && !is_digits(local_digits) {
        return Err(Error::InvalidConfiguration(format!(
            "local code must contain digits only, got '{}'",
            request.local_code
        )));
    }

    let fixed = (country_digits.len() + local_digits.len()) as i64;
    let remaining = request.total_length - fixed;
    if remaining <= 0 {
        return Err(Error::InvalidConfiguration(format!(
            "total length is too short for the country and local codes; \
             need remaining random digits > 0, got {remaining}"
        )));
    }
    let total_length = u32::try_from(request.total_length).map_err(|_| {
        Error::InvalidConfiguration(format!("total length {} is too large", request.total_length))
    })?;
    let remaining_length = total_length - fixed as u32;

    let max_unique = max_unique_combinations(remaining_length);
    if request.unique {
        if let Some(max_possible) = max_unique {
            if request.count > max_possible {
                return Err(Error::CapacityExceeded {
                    requested: request.count,
                    remaining_length,
                    max_possible,
                });
            }
        }
    }

    Ok(GenerationConfig {
        total_length,
        country_digits: country_digits.to_string(),
        local_digits: local_digits.to_string(),
        remaining_length,
        count: request.count,
        include_separator: request.include_separator,
        unique: request.unique,
        max_unique,
    })
}

/// Number of distinct random bodies of `remaining_length` digits.
///
/// Returns `None` when the count does not fit in a `u64`, in which case no
/// `u64` request can exceed it.
pub fn max_unique_combinations(remaining_length: u32) -> Option<u64> {
    10_u64.checked_pow(remaining_length)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
