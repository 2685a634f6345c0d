//! Record and error types for the generator engine.
//!
//! This module provides:
//! - `record`: One plain-data struct per generator algorithm, holding the
//!   full arithmetic trace of a single recurrence step
//! - `error`: Structured error types for generator parameter validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MidSquaresRecord`], [`MidProductsRecord`], [`ConstMultiplierRecord`] from `record`
//! - [`GeneratorError`] from `error`

pub mod error;
pub mod record;

// Re-export commonly used types at module level
pub use error::GeneratorError;
pub use record::{ConstMultiplierRecord, MidProductsRecord, MidSquaresRecord};
