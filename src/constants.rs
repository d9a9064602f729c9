//! Physical constants and fixed method parameters.
//!
//! ## Accuracy
//!
//! μ₀ is provided with 12 significant figures, suitable for engineering
//! applications. For higher precision or latest values, consult NIST directly.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)
//! - R. Del Vecchio et al., *Transformer Design Principles*, ch. 9 (Rabins' method).

/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
/// Note: CODATA 2022 value is 1.25663706127 × 10⁻⁶ H/m with relative uncertainty ~10⁻¹⁰.
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6;

/// Ratio between the periodic length of the Fourier expansion and the physical
/// core window height.
///
/// Rabins' method treats the window as one period of a cosine series bounded by
/// infinitely permeable yokes. Stretching that period to three window heights
/// (with the physical window centred in it) weakens the image currents of the
/// yokes to the level seen in practice.
pub const WINDOW_HEIGHT_FACTOR: f64 = 3.0;

/// Number of harmonics summed by default.
pub const DEFAULT_HARMONICS: usize = 200;

/// Two sections whose inner radii differ by less than this (m) share a radial position.
pub const SAME_RADIAL_POSITION_TOLERANCE: f64 = 0.001;

/// Returns the effective periodic length `k · window_ht` (m) for a window of height `window_ht`.
#[inline]
#[must_use]
pub fn effective_window_height(window_ht: f64, window_height_factor: f64) -> f64 {
    window_height_factor * window_ht
}
