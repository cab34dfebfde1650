//! Random value generation for verification codes and test emails.

use crate::error::{GeneratorError, GeneratorResult};
use chrono::Utc;
use rand::rngs::OsRng;
use rand::Rng;

/// Largest digit count whose full range fits in a `u64`.
const MAX_CODE_DIGITS: u32 = 19;

/// Generate a random numeric code with the given number of digits.
///
/// Draws from the operating system CSPRNG, so the result is suitable for use
/// as a verification secret. The value is uniform in `[0, 10^digits)` and
/// zero-padded to the requested width.
///
/// # Errors
///
/// [`GeneratorError::DigitsOutOfRange`] if `digits` is zero or above 19.
pub fn generate_random_with_n_digits(digits: u32) -> GeneratorResult<String> {
    if digits == 0 || digits > MAX_CODE_DIGITS {
        return Err(GeneratorError::DigitsOutOfRange(digits));
    }
    let upper = 10u64.pow(digits);
    let value = OsRng.gen_range(0..upper);
    Ok(format!("{:0width$}", value, width = digits as usize))
}

/// Derive a unique email address from a base address by inserting the current
/// Unix timestamp before the `@`.
///
/// Uniqueness only matters for disambiguating test accounts, so a timestamp
/// is enough; this is not a secret value.
pub fn generate_random_email(base: &str) -> String {
    let timestamp = Utc::now().timestamp();
    match base.split_once('@') {
        Some((local, domain)) => format!("{}+{}@{}", local, timestamp, domain),
        None => format!("{}+{}", base, timestamp),
    }
}
