//! The three classical middle-digit recurrence generators.
//!
//! Each generator is a state-advancing recurrence producing an ordered
//! sequence of records: square or multiply the current state, extract the
//! four middle digits of the result, emit a record, and feed the extracted
//! middle back in as the next state.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch**: Algorithm selection via tagged enums and `match`
//!   expressions, not trait objects
//! - **Fail fast**: All parameters validated before the first record is
//!   produced; a failed call never returns a partial sequence
//! - **Pure recurrences**: No external randomness after the initial seed(s)
//!
//! ## Example
//!
//! ```
//! use randgen_core::generators::{generate, GeneratorKind, GeneratorSpec};
//!
//! let spec = GeneratorSpec::ConstMultiplier {
//!     seed: 9803,
//!     count: 3,
//!     constant: 73,
//! };
//! let output = generate(&spec).unwrap();
//!
//! assert_eq!(output.kind(), GeneratorKind::ConstMultiplier);
//! assert_eq!(output.ratios().len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{
    ConstMultiplierRecord, GeneratorError, MidProductsRecord, MidSquaresRecord,
};

pub mod const_multiplier;
pub mod mid_products;
pub mod mid_squares;

// Re-export the generator entry points at module level
pub use const_multiplier::{const_multiplier, DEFAULT_MULTIPLIER};
pub use mid_products::mid_products;
pub use mid_squares::mid_squares;

/// Minimum number of decimal digits a seed must render to.
pub const MIN_SEED_DIGITS: usize = 4;

/// Rejects seeds that render to fewer than [`MIN_SEED_DIGITS`] decimal digits.
pub(crate) fn validate_seed(seed: u64) -> Result<(), GeneratorError> {
    let digits = seed.to_string().len();
    if digits < MIN_SEED_DIGITS {
        return Err(GeneratorError::SeedTooShort { seed, digits });
    }
    Ok(())
}

/// Rejects zero-length sequences.
pub(crate) fn validate_count(count: usize) -> Result<(), GeneratorError> {
    if count == 0 {
        return Err(GeneratorError::InvalidCount { count });
    }
    Ok(())
}

/// Identifies one of the three recurrence algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorKind {
    /// Middle-of-Squares (single seed)
    MidSquares,
    /// Middle-of-Products (two seeds)
    MidProducts,
    /// Constant-Multiplier (single seed plus constant)
    ConstMultiplier,
}

impl GeneratorKind {
    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::MidSquares => "Middle-of-Squares",
            GeneratorKind::MidProducts => "Middle-of-Products",
            GeneratorKind::ConstMultiplier => "Constant-Multiplier",
        }
    }
}

/// A fully-parameterised generator invocation.
///
/// One variant per algorithm, carrying that algorithm's inputs. Pass to
/// [`generate`] for dispatch, or call the per-algorithm entry points
/// directly when the variant is statically known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorSpec {
    /// Middle-of-Squares parameters.
    MidSquares {
        /// Initial state (≥ 4 decimal digits)
        seed: u64,
        /// Number of records to produce (≥ 1)
        count: usize,
    },
    /// Middle-of-Products parameters.
    MidProducts {
        /// Initial X state (≥ 4 decimal digits)
        seed_x: u64,
        /// Initial Y state (≥ 4 decimal digits)
        seed_y: u64,
        /// Number of records to produce (≥ 1)
        count: usize,
    },
    /// Constant-Multiplier parameters.
    ConstMultiplier {
        /// Initial state (≥ 4 decimal digits)
        seed: u64,
        /// Number of records to produce (≥ 1)
        count: usize,
        /// Multiplier constant a (≥ 1); conventionally [`DEFAULT_MULTIPLIER`]
        constant: u64,
    },
}

impl GeneratorSpec {
    /// The algorithm this spec invokes.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorSpec::MidSquares { .. } => GeneratorKind::MidSquares,
            GeneratorSpec::MidProducts { .. } => GeneratorKind::MidProducts,
            GeneratorSpec::ConstMultiplier { .. } => GeneratorKind::ConstMultiplier,
        }
    }

    /// The requested sequence length.
    pub fn count(&self) -> usize {
        match self {
            GeneratorSpec::MidSquares { count, .. }
            | GeneratorSpec::MidProducts { count, .. }
            | GeneratorSpec::ConstMultiplier { count, .. } => *count,
        }
    }
}

/// An ordered record sequence produced by one generator invocation.
///
/// Wraps the per-algorithm record vectors behind uniform accessors so
/// downstream consumers (tests, mappers, exporters) need not match on the
/// algorithm to read lengths or ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneratorOutput {
    /// Middle-of-Squares records.
    MidSquares(Vec<MidSquaresRecord>),
    /// Middle-of-Products records.
    MidProducts(Vec<MidProductsRecord>),
    /// Constant-Multiplier records.
    ConstMultiplier(Vec<ConstMultiplierRecord>),
}

impl GeneratorOutput {
    /// The algorithm that produced these records.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorOutput::MidSquares(_) => GeneratorKind::MidSquares,
            GeneratorOutput::MidProducts(_) => GeneratorKind::MidProducts,
            GeneratorOutput::ConstMultiplier(_) => GeneratorKind::ConstMultiplier,
        }
    }

    /// Number of records in the sequence.
    pub fn len(&self) -> usize {
        match self {
            GeneratorOutput::MidSquares(records) => records.len(),
            GeneratorOutput::MidProducts(records) => records.len(),
            GeneratorOutput::ConstMultiplier(records) => records.len(),
        }
    }

    /// Whether the sequence is empty (never true for a successful call).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ratio column Ri, one value per record, each in [0, 0.9999].
    ///
    /// This is the uniform-variate sequence consumed by the statistical
    /// tests and the distribution mappers.
    pub fn ratios(&self) -> Vec<f64> {
        match self {
            GeneratorOutput::MidSquares(records) => {
                records.iter().map(|r| r.ratio).collect()
            }
            GeneratorOutput::MidProducts(records) => {
                records.iter().map(|r| r.ratio).collect()
            }
            GeneratorOutput::ConstMultiplier(records) => {
                records.iter().map(|r| r.ratio).collect()
            }
        }
    }
}

/// Runs the generator described by `spec`.
///
/// # Errors
/// - `GeneratorError::SeedTooShort` if any seed has fewer than 4 decimal digits
/// - `GeneratorError::InvalidCount` if `count` is zero
/// - `GeneratorError::InvalidMultiplier` if the multiplier constant is zero
pub fn generate(spec: &GeneratorSpec) -> Result<GeneratorOutput, GeneratorError> {
    match *spec {
        GeneratorSpec::MidSquares { seed, count } => {
            Ok(GeneratorOutput::MidSquares(mid_squares(seed, count)?))
        }
        GeneratorSpec::MidProducts {
            seed_x,
            seed_y,
            count,
        } => Ok(GeneratorOutput::MidProducts(mid_products(
            seed_x, seed_y, count,
        )?)),
        GeneratorSpec::ConstMultiplier {
            seed,
            count,
            constant,
        } => Ok(GeneratorOutput::ConstMultiplier(const_multiplier(
            seed, count, constant,
        )?)),
    }
}
