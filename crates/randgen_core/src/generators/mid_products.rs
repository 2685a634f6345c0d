//! Middle-of-Products generator.
//!
//! A two-seed variant of the middle-digit recurrence: each step multiplies
//! the state pair, extracts the four middle digits of the product, and then
//! rotates the pair:
//! ```text
//! (Xi+1, Yi+1) = (Yi, middle(Xi·Yi))        Ri = middle(Xi·Yi) / 10000
//! ```
//! The rotation is the defining trait of the algorithm: the old Y moves
//! into the X slot and the fresh middle becomes the new Y. Both state
//! values are never advanced independently.

use crate::digits::extract_middle;
use crate::types::{GeneratorError, MidProductsRecord};

use super::{validate_count, validate_seed};

/// Generates `count` Middle-of-Products records from the seed pair.
///
/// # Arguments
/// * `seed_x` - Initial X state; must render to at least 4 decimal digits
/// * `seed_y` - Initial Y state; must render to at least 4 decimal digits
/// * `count` - Number of records to produce; must be at least 1
///
/// # Errors
/// - `GeneratorError::SeedTooShort` if either seed is shorter than 4 digits
/// - `GeneratorError::InvalidCount` if `count` is zero
pub fn mid_products(
    seed_x: u64,
    seed_y: u64,
    count: usize,
) -> Result<Vec<MidProductsRecord>, GeneratorError> {
    validate_seed(seed_x)?;
    validate_seed(seed_y)?;
    validate_count(count)?;

    let mut records = Vec::with_capacity(count);
    let (mut x, mut y) = (seed_x, seed_y);
    for _ in 0..count {
        let product = u128::from(x) * u128::from(y);
        let digits = extract_middle(product);
        let middle_value = digits.value;
        records.push(MidProductsRecord {
            x,
            y,
            product: digits.padded,
            middle: digits.middle,
            middle_value,
            ratio: f64::from(middle_value) / 10_000.0,
        });
        // Rotate: old Y into the X slot, the fresh middle becomes Y.
        x = y;
        y = u64::from(middle_value);
    }
    Ok(records)
}
