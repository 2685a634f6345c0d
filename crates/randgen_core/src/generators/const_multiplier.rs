//! Constant-Multiplier generator.
//!
//! Each step multiplies the state by a fixed constant and extracts the
//! four middle digits of the zero-padded product:
//! ```text
//! Xi+1 = middle(a·Xi)        Ri = middle(a·Xi) / 10000
//! ```

use crate::digits::extract_middle;
use crate::types::{ConstMultiplierRecord, GeneratorError};

use super::{validate_count, validate_seed};

/// Conventional multiplier constant.
pub const DEFAULT_MULTIPLIER: u64 = 73;

/// Generates `count` Constant-Multiplier records starting from `seed`.
///
/// # Arguments
/// * `seed` - Initial state; must render to at least 4 decimal digits
/// * `count` - Number of records to produce; must be at least 1
/// * `constant` - Multiplier a; must be at least 1
///
/// # Errors
/// - `GeneratorError::SeedTooShort` if the seed is shorter than 4 digits
/// - `GeneratorError::InvalidCount` if `count` is zero
/// - `GeneratorError::InvalidMultiplier` if `constant` is zero
pub fn const_multiplier(
    seed: u64,
    count: usize,
    constant: u64,
) -> Result<Vec<ConstMultiplierRecord>, GeneratorError> {
    validate_seed(seed)?;
    validate_count(count)?;
    if constant == 0 {
        return Err(GeneratorError::InvalidMultiplier { constant });
    }

    let mut records = Vec::with_capacity(count);
    let mut x = seed;
    for _ in 0..count {
        let product = u128::from(x) * u128::from(constant);
        let digits = extract_middle(product);
        let middle_value = digits.value;
        records.push(ConstMultiplierRecord {
            x,
            product: digits.padded,
            middle: digits.middle,
            middle_value,
            ratio: f64::from(middle_value) / 10_000.0,
        });
        x = u64::from(middle_value);
    }
    Ok(records)
}
