//! Per-algorithm record types.
//!
//! One generator step produces one record holding the complete arithmetic
//! trace of that step: the state before the step, the padded raw
//! square/product, the extracted middle digits (as text and integer), and
//! the normalised ratio. Records are immutable once produced and ordered by
//! generation step, starting at step 0.

use serde::{Deserialize, Serialize};

/// One step of the Middle-of-Squares recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidSquaresRecord {
    /// State value Xi before the step.
    pub x: u64,
    /// Zero-padded decimal rendering of Xi².
    pub square: String,
    /// The extracted 4-digit middle as text.
    pub middle: String,
    /// The extracted middle as an integer in 0..=9999.
    pub middle_value: u32,
    /// Normalised ratio Ri = middle / 10000, in [0, 0.9999].
    pub ratio: f64,
}

/// One step of the Middle-of-Products recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidProductsRecord {
    /// First state value Xi before the step.
    pub x: u64,
    /// Second state value Yi before the step.
    pub y: u64,
    /// Zero-padded decimal rendering of Xi·Yi.
    pub product: String,
    /// The extracted 4-digit middle as text.
    pub middle: String,
    /// The extracted middle as an integer in 0..=9999.
    pub middle_value: u32,
    /// Normalised ratio Ri = middle / 10000, in [0, 0.9999].
    pub ratio: f64,
}

/// One step of the Constant-Multiplier recurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstMultiplierRecord {
    /// State value Xi before the step.
    pub x: u64,
    /// Zero-padded decimal rendering of a·Xi.
    pub product: String,
    /// The extracted 4-digit middle as text.
    pub middle: String,
    /// The extracted middle as an integer in 0..=9999.
    pub middle_value: u32,
    /// Normalised ratio Ri = middle / 10000, in [0, 0.9999].
    pub ratio: f64,
}
