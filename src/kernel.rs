//! Per-harmonic coefficients and scaled radial integrals consumed by the engines.
//!
//! The engines only see the [`HarmonicKernel`] trait. [`BlueBookKernel`] is the
//! native implementation of Rabins' coefficients; tests substitute recording or
//! synthetic kernels to observe the summation.
//!
//! # Commentary
//!
//! For harmonic `n` with spatial frequency `m = nπ / L` (`L` the effective
//! window height) and scaled radii `x = m r`, the vector potential of a section
//! spanning `[x1, x2]` over a core of scaled radius `xc` is built from
//!
//! * `E_n = ∫_0^{x2} t K1(t) dt`
//! * `D_n = (I0(xc) / K0(xc)) ∫_{x1}^{x2} t K1(t) dt`
//! * `F_n = D_n - ∫_0^{x1} t I1(t) dt`
//!
//! and the particular solution `-(π/2) L1(x)` inside the section. The kernel
//! returns these with the exponential factors removed that the engines
//! re-apply, so every value stays in range at high harmonics.
//!
//! # References
//!
//!   \[1\] W. Rabins, "Transformer reactance calculations with digital computers,"
//!         AIEE Trans., vol. 75, pt. I, pp. 261-267, 1956.
//!
//!   \[2\] R. Del Vecchio, B. Poulin, P. Feghali, D. Shah, R. Ahuja,
//!         *Transformer Design Principles*, 2nd ed., CRC Press, 2010, ch. 9.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::Scalar;
use crate::section::CoilSection;
use crate::special;

/// One term of the Fourier expansion along the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Harmonic index `n` (1-based).
    pub n: Scalar,
    /// Spatial frequency `m = nπ / L` (1/m).
    pub m: Scalar,
    /// Effective periodic length `L` (m).
    pub effective_height: Scalar,
}

impl Harmonic {
    /// Harmonic `index` of an expansion with period `effective_height`.
    #[must_use]
    pub fn new(index: usize, effective_height: Scalar) -> Self {
        let n = index as Scalar;
        Self {
            n,
            m: n * PI / effective_height,
            effective_height,
        }
    }
}

/// `∫ t L1(t) dt` over a range, split so that neither part overflows.
///
/// `∫_a^b t L1(t) dt = unscaled + e^{a} · scaled`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tl1Split {
    /// `∫_a^b t (L1(t) - I1(t)) dt`, bounded growth.
    pub unscaled: Scalar,
    /// `e^{-a} ∫_a^b t I1(t) dt`.
    pub scaled: Scalar,
}

/// Special-function kernel of the harmonic series.
///
/// Section arguments are already normalized by the engines.
pub trait HarmonicKernel {
    /// Fourier coefficient of the section's current density (A/m²).
    fn j(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar;

    /// `E_n`, tending to `π/2` as the harmonic grows.
    fn e(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar;

    /// `e^{x1 - 2 xc} F_n`.
    fn scaled_f(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar;

    /// `e^{-2 xc} e^{x1} D_n`.
    fn scaled_d(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar;

    /// `e^{x_lo} ∫_{x_lo}^{x_hi} t K1(t) dt`.
    fn scaled_integral_of_tk1(&self, x_lo: Scalar, x_hi: Scalar) -> Scalar;

    /// `e^{-x_lo} ∫_{x_lo}^{x_hi} t I1(t) dt`.
    fn scaled_integral_of_ti1(&self, x_lo: Scalar, x_hi: Scalar) -> Scalar;

    /// `∫_{x_lo}^{x_hi} t L1(t) dt` as an unscaled part and a scaled part.
    fn partial_scaled_integral_of_tl1(&self, x_lo: Scalar, x_hi: Scalar) -> Tl1Split;
}

/// Native kernel built on [`crate::special`].
///
/// Sections are placed centrally in the effective window: an axial position `z`
/// above the bottom yoke maps to `z + (L - window_ht) / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlueBookKernel;

impl BlueBookKernel {
    /// Creates the kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `I0(xc) / K0(xc)` with the exponentials of `e^{-2 xc}` absorbed.
    fn core_ratio(xc: Scalar) -> Scalar {
        special::i0e(xc) / special::k0e(xc)
    }
}

impl HarmonicKernel for BlueBookKernel {
    fn j(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar {
        let offset = 0.5 * (harmonic.effective_height - section.window_ht);
        let z1 = section.z1 + offset;
        let z2 = section.z2 + offset;
        2.0 * section.j / (harmonic.n * PI) * ((harmonic.m * z2).sin() - (harmonic.m * z1).sin())
    }

    fn e(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar {
        FRAC_PI_2 - special::integral_of_tk1_to_infinity(harmonic.m * section.r2)
    }

    fn scaled_f(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar {
        let x1 = harmonic.m * section.r1;
        let xc = harmonic.m * section.core_radius;
        // e^{x1 - 2xc} ∫_0^{x1} t I1 = e^{2(x1 - xc)} · e^{-x1} ∫_0^{x1} t I1
        self.scaled_d(harmonic, section)
            - (2.0 * (x1 - xc)).exp() * special::scaled_integral_of_ti1_from_zero(x1)
    }

    fn scaled_d(&self, harmonic: &Harmonic, section: &CoilSection) -> Scalar {
        let x1 = harmonic.m * section.r1;
        let x2 = harmonic.m * section.r2;
        let xc = harmonic.m * section.core_radius;
        Self::core_ratio(xc) * special::scaled_integral_of_tk1(x1, x2)
    }

    fn scaled_integral_of_tk1(&self, x_lo: Scalar, x_hi: Scalar) -> Scalar {
        special::scaled_integral_of_tk1(x_lo, x_hi)
    }

    fn scaled_integral_of_ti1(&self, x_lo: Scalar, x_hi: Scalar) -> Scalar {
        special::scaled_integral_of_ti1(x_lo, x_hi)
    }

    fn partial_scaled_integral_of_tl1(&self, x_lo: Scalar, x_hi: Scalar) -> Tl1Split {
        Tl1Split {
            unscaled: special::integral_of_t_l1_minus_i1(x_lo, x_hi),
            scaled: special::scaled_integral_of_ti1(x_lo, x_hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::section::CoreWindow;

    fn section() -> CoilSection {
        CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 1.0e6, CoreWindow::new(0.6, 0.05))
    }

    #[test]
    fn harmonic_frequency() {
        let h = Harmonic::new(3, 1.8);
        assert_relative_eq!(h.m, 3.0 * PI / 1.8, max_relative = 1.0e-15);
        assert_eq!(h.n, 3.0);
    }

    #[test]
    fn current_coefficient_matches_cosine_series() {
        let s = section();
        let h = Harmonic::new(1, 1.8);
        // Section spans [0.6, 1.1] of the 1.8 m period
        let expected = 2.0 * 1.0e6 / PI * ((PI * 1.1 / 1.8).sin() - (PI * 0.6 / 1.8).sin());
        assert_relative_eq!(BlueBookKernel.j(&h, &s), expected, max_relative = 1.0e-12);
    }

    #[test]
    fn full_window_section_has_no_harmonic_content() {
        // A section filling the effective window carries only the mean current
        let s = CoilSection::new(0.1, 0.15, 0.0, 1.0, 100.0, 1.0e6, CoreWindow::new(1.0, 0.05));
        for index in 1..6 {
            let h = Harmonic::new(index, 1.0);
            assert!(BlueBookKernel.j(&h, &s).abs() < 1.0e-6);
        }
    }

    #[test]
    fn e_approaches_half_pi() {
        let s = section();
        let low = BlueBookKernel.e(&Harmonic::new(1, 1.8), &s);
        let high = BlueBookKernel.e(&Harmonic::new(200, 1.8), &s);
        assert!(low < high && high <= FRAC_PI_2);
        assert_eq!(high, FRAC_PI_2);
    }

    #[test]
    fn tl1_split_reassembles_struve_integral() {
        // ∫_1^3 t L1(t) dt from mpmath
        let split = BlueBookKernel.partial_scaled_integral_of_tl1(1.0, 3.0);
        let total = split.unscaled + 1.0_f64.exp() * split.scaled;
        assert_relative_eq!(total, 6.333_009_949_116_207, max_relative = 1.0e-12);
    }

    #[test]
    fn air_core_has_no_core_term() {
        let s = CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 1.0e6, CoreWindow::new(0.6, 0.0));
        assert_eq!(BlueBookKernel.scaled_d(&Harmonic::new(4, 1.8), &s), 0.0);
    }
}
