//! Middle-of-Squares generator.
//!
//! The recurrence squares its state, reads out the four middle digits of
//! the zero-padded square, and uses the extracted value as the next state:
//! ```text
//! Xi+1 = middle(Xi²)        Ri = middle(Xi²) / 10000
//! ```
//! A state of 0 squares to 0 forever, so the sequence can collapse to a
//! constant. That is the documented behaviour of the algorithm, not an
//! error; callers who care can inspect the output for repeats.

use crate::digits::extract_middle;
use crate::types::{GeneratorError, MidSquaresRecord};

use super::{validate_count, validate_seed};

/// Generates `count` Middle-of-Squares records starting from `seed`.
///
/// # Arguments
/// * `seed` - Initial state; must render to at least 4 decimal digits
/// * `count` - Number of records to produce; must be at least 1
///
/// # Errors
/// - `GeneratorError::SeedTooShort` if the seed is shorter than 4 digits
/// - `GeneratorError::InvalidCount` if `count` is zero
///
/// # Examples
/// ```
/// use randgen_core::generators::mid_squares;
///
/// let records = mid_squares(1234, 2).unwrap();
///
/// // 1234² = 1522756 → "01522756" → middle "5227"
/// assert_eq!(records[0].square, "01522756");
/// assert_eq!(records[0].middle_value, 5227);
/// assert_eq!(records[0].ratio, 0.5227);
///
/// // The extracted middle becomes the next state.
/// assert_eq!(records[1].x, 5227);
/// ```
pub fn mid_squares(seed: u64, count: usize) -> Result<Vec<MidSquaresRecord>, GeneratorError> {
    validate_seed(seed)?;
    validate_count(count)?;

    let mut records = Vec::with_capacity(count);
    let mut x = seed;
    for _ in 0..count {
        let square = u128::from(x) * u128::from(x);
        let digits = extract_middle(square);
        let middle_value = digits.value;
        records.push(MidSquaresRecord {
            x,
            square: digits.padded,
            middle: digits.middle,
            middle_value,
            ratio: f64::from(middle_value) / 10_000.0,
        });
        x = u64::from(middle_value);
    }
    Ok(records)
}
