#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and fixed method parameters.
pub mod constants;
/// Shared numerical primitives (scalar type, Gauss-Legendre quadrature).
pub mod math;
/// Exponentially scaled Bessel and Struve functions and their integrals.
pub mod special;
/// Coil-section geometry and normalization.
pub mod section;
/// Method configuration (permeability, window-height factor, truncation).
pub mod config;
/// Radial classification and canonical ordering of section pairs.
pub mod coupling;
/// Per-harmonic kernel contract and the native kernel.
pub mod kernel;
/// Self- and mutual-inductance engines.
pub mod inductance;
/// Inductance matrices and leakage inductance.
pub mod matrix;
/// Error types returned by the validating entry points.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
