//! Error type shared by every fallible operation in the crate.
//!
//! All variants describe precondition violations detected at a call
//! boundary. None of them is transient: callers are expected to fix the
//! catalog or configuration rather than retry.

use thiserror::Error;

/// Errors raised by fitness evaluation, sampling, operators, and the solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// Two sequences that must have equal length do not.
    ///
    /// Raised when a genome does not match the catalog size, when two
    /// parents differ in length, or when sampling weights do not match
    /// the candidates.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// More distinct samples were requested than candidates exist.
    #[error("cannot draw {requested} distinct samples from {available} candidates")]
    InvalidSampleSize { requested: usize, available: usize },

    /// A sampling weight is negative or not finite.
    #[error("invalid sampling weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// A catalog item (or the capacity) carries an unusable number.
    #[error("invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// A predefined crossover point lies outside `[1, len)`.
    #[error("crossover point {point} out of range for genomes of length {len}")]
    InvalidCrossoverPoint { point: usize, len: usize },

    /// The solver configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KnapsackError>;
