//! Error types for generator parameter validation.
//!
//! This module provides:
//! - `GeneratorError`: Errors from generator input validation

use thiserror::Error;

/// Generator parameter errors.
///
/// Every generator validates its inputs before producing any records, so a
/// failed call never returns a partial sequence.
///
/// # Variants
/// - `SeedTooShort`: Seed has fewer than 4 decimal digits
/// - `InvalidCount`: Requested sequence length is zero
/// - `InvalidMultiplier`: Constant-Multiplier constant is zero
///
/// # Examples
/// ```
/// use randgen_core::types::GeneratorError;
///
/// let err = GeneratorError::SeedTooShort { seed: 123, digits: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Seed 123 has 3 decimal digits, need at least 4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Seed renders to fewer than 4 decimal digits.
    #[error("Seed {seed} has {digits} decimal digits, need at least 4")]
    SeedTooShort {
        /// The rejected seed value
        seed: u64,
        /// Number of decimal digits the seed renders to
        digits: usize,
    },

    /// Requested sequence length is zero.
    #[error("Sequence length must be at least 1, got {count}")]
    InvalidCount {
        /// The rejected length
        count: usize,
    },

    /// Constant-Multiplier constant is not a positive integer.
    #[error("Multiplier constant must be a positive integer, got {constant}")]
    InvalidMultiplier {
        /// The rejected constant
        constant: u64,
    },
}
