//! # randgen_core: Middle-Digit Recurrence Generators
//!
//! ## Engine Layer Role
//!
//! randgen_core is the foundation layer of the workspace, providing:
//! - Middle-digit extraction shared by all generators (`digits`)
//! - The three classical recurrence generators (`generators`):
//!   Middle-of-Squares, Middle-of-Products, Constant-Multiplier
//! - Record and error types (`types`)
//!
//! ## Zero Dependency Principle
//!
//! The engine layer has no dependencies on other randgen_* crates, with
//! minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support for records and specs
//!
//! ## Usage Examples
//!
//! ```rust
//! use randgen_core::generators::{generate, GeneratorSpec};
//!
//! let spec = GeneratorSpec::MidSquares { seed: 1234, count: 5 };
//! let output = generate(&spec).unwrap();
//!
//! assert_eq!(output.len(), 5);
//! for r in output.ratios() {
//!     assert!((0.0..1.0).contains(&r));
//! }
//! ```
//!
//! ## Determinism
//!
//! Every generator is a pure recurrence: the state at step i+1 derives
//! solely from the extracted middle digits at step i. No external
//! randomness is consulted after the initial seed(s), so equal inputs
//! always reproduce equal sequences.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod digits;
pub mod generators;
pub mod types;
