//! Error types for the scoring engine
//!
//! The engine never clamps: a value outside its declared range is a bug in
//! whoever supplied it, so it is surfaced immediately.

use crate::constants::ConstantKind;
use crate::scores::ScoreKind;
use thiserror::Error;

/// Errors raised by scoring operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A constant fell outside its valid range (or was not finite)
    #[error("{kind} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        kind: ConstantKind,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A raw score that no in-range constant set can produce
    #[error("{kind} must be a finite, non-negative number (got {value})")]
    InvalidScore { kind: ScoreKind, value: f64 },
}

pub type Result<T> = std::result::Result<T, ScoringError>;
