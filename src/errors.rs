//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// The inductance engines themselves never fail: degenerate inputs propagate as
/// non-finite results. This type is returned only by the validating entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InductanceError {
    /// Raised when a coil section violates a physical precondition.
    #[error("invalid coil section: {0}")]
    InvalidSection(String),
    /// Raised when the method configuration is internally inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}
