//! Scaled modified Bessel and Struve functions, and the radial integrals built on them.
//!
//! Every function here is scaled by an exponential so that arguments in the
//! hundreds (high harmonics on large radii) stay within `f64` range:
//!
//! * `i0e(x) = e^{-x} I0(x)`, `i1e(x) = e^{-x} I1(x)`
//! * `k0e(x) = e^{x} K0(x)`, `k1e(x) = e^{x} K1(x)`
//!
//! Below [`ASYMPTOTIC_THRESHOLD`] the Bessel functions are evaluated from their
//! integral representations with the trapezoidal rule, which converges
//! geometrically for periodic (I) and double-exponentially decaying (K)
//! analytic integrands. Above it the Hankel asymptotic series is used.
//!
//! # References
//!
//!   \[1\] M. Abramowitz and I. A. Stegun, *Handbook of mathematical functions*, 9.6.19, 9.6.24, 9.7.1-2, 12.2.6.
//!
//!   \[2\] L. N. Trefethen and J. A. C. Weideman, "The exponentially convergent trapezoidal rule,"
//!         SIAM Review, vol. 56, no. 3, pp. 385-458, 2014.
//!
//!   \[3\] NIST DLMF, §11.5.2 and §11.6.1 (modified Struve functions).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::{gauss_legendre, panel_count, GaussOrder, Scalar};

/// Arguments at or above this use the asymptotic series for I and K.
pub const ASYMPTOTIC_THRESHOLD: Scalar = 25.0;

/// Arguments at or above this use the asymptotic series for `L1 - I1`.
const STRUVE_ASYMPTOTIC_THRESHOLD: Scalar = 30.0;

/// Integrands weighted by `e^{-|t - a|}` are negligible (< e^-40) beyond this span.
const DECAY_SPAN: Scalar = 40.0;

/// Below this, `t K1(t)` has a `t^2 ln t` term and is integrated on finer panels.
const GRADING_KNEE: Scalar = 2.0;

const MAX_SERIES_TERMS: usize = 64;
const MAX_TRAPEZOID_NODES: usize = 8192;

/// `e^{-x} I0(x)`.
#[inline]
#[must_use]
pub fn i0e(x: Scalar) -> Scalar {
    i_scaled(0, x.abs())
}

/// `e^{-|x|} I1(x)`.
#[inline]
#[must_use]
pub fn i1e(x: Scalar) -> Scalar {
    i_scaled(1, x.abs()).copysign(x)
}

/// `e^{x} K0(x)`; infinite at `x <= 0`.
#[inline]
#[must_use]
pub fn k0e(x: Scalar) -> Scalar {
    k_scaled(0, x)
}

/// `e^{x} K1(x)`; infinite at `x <= 0`.
#[inline]
#[must_use]
pub fn k1e(x: Scalar) -> Scalar {
    k_scaled(1, x)
}

/// Hankel expansion `Σ (±1)^k a_k(ν) / x^k` truncated at its smallest term.
fn hankel_series(order: u32, x: Scalar, alternating: bool) -> Scalar {
    let mu = 4.0 * Scalar::from(order * order);
    let mut term: Scalar = 1.0;
    let mut sum: Scalar = 1.0;
    for k in 1..MAX_SERIES_TERMS {
        let odd = (2 * k - 1) as Scalar;
        let mut next = term * (mu - odd * odd) / (8.0 * k as Scalar * x);
        if alternating {
            next = -next;
        }
        if next.abs() >= term.abs() {
            break;
        }
        sum += next;
        if next.abs() < 1.0e-17 * sum.abs() {
            break;
        }
        term = next;
    }
    sum
}

/// `e^{-x} I_n(x)` for `x >= 0` from `(1/π) ∫_0^π e^{x(cos θ - 1)} cos(nθ) dθ`.
fn i_scaled(order: u32, x: Scalar) -> Scalar {
    if x >= ASYMPTOTIC_THRESHOLD {
        return hankel_series(order, x, true) / (2.0 * PI * x).sqrt();
    }

    // Aliasing error decays like exp(-(2N)^2 / 2x)
    let intervals = 16 + (5.0 * x.sqrt()).ceil() as usize;
    let h = PI / intervals as Scalar;
    let nu = Scalar::from(order);

    let mut sum = 0.5 * (1.0 + (-2.0 * x).exp() * (nu * PI).cos());
    for k in 1..intervals {
        let theta = k as Scalar * h;
        sum += (x * (theta.cos() - 1.0)).exp() * (nu * theta).cos();
    }

    sum / intervals as Scalar
}

/// `e^{x} K_n(x)` for `x > 0` from `∫_0^∞ e^{-x(cosh t - 1)} cosh(nt) dt`.
fn k_scaled(order: u32, x: Scalar) -> Scalar {
    if x <= 0.0 {
        return Scalar::INFINITY;
    }
    if x >= ASYMPTOTIC_THRESHOLD {
        return (PI / (2.0 * x)).sqrt() * hankel_series(order, x, false);
    }

    // Step shrinks with x to keep the strip of analyticity wide enough
    let h = (0.5 / x.sqrt()).min(0.1);
    let nu = Scalar::from(order);

    let mut sum = 0.5;
    for k in 1..MAX_TRAPEZOID_NODES {
        let t = k as Scalar * h;
        let exponent = 2.0 * x * (0.5 * t).sinh().powi(2); // x (cosh t - 1)
        let term = (-exponent).exp() * (nu * t).cosh();
        sum += term;
        if exponent > 1.0 && term < 1.0e-17 * sum {
            break;
        }
    }

    sum * h
}

/// Difference of the modified Struve and Bessel functions, `L1(x) - I1(x)`, for `x >= 0`.
///
/// Bounded and tending to `-2/π`, so it carries the part of `L1` that does not
/// grow exponentially.
#[must_use]
pub fn struve_l1_minus_i1(x: Scalar) -> Scalar {
    if x >= STRUVE_ASYMPTOTIC_THRESHOLD {
        let x2 = x * x;
        let mut term: Scalar = -2.0;
        let mut sum: Scalar = -2.0;
        for k in 0..MAX_SERIES_TERMS {
            let kk = k as Scalar;
            let next = term * (4.0 * kk * kk - 1.0) / x2;
            if next.abs() >= term.abs() || next.abs() < 1.0e-17 * sum.abs() {
                break;
            }
            sum += next;
            term = next;
        }
        return sum / PI;
    }

    // -(2x/π) ∫_0^{π/2} sin²θ e^{-x cos θ} dθ
    let integral = gauss_legendre(
        |theta| theta.sin().powi(2) * (-x * theta.cos()).exp(),
        0.0,
        FRAC_PI_2,
        8,
        GaussOrder::Sixteen,
    );
    -2.0 * x / PI * integral
}

/// Gauss-Legendre over `[a, b]` on 0.25-wide panels below the knee and unit panels above it.
fn graded<F>(f: F, a: Scalar, b: Scalar) -> Scalar
where
    F: Fn(Scalar) -> Scalar,
{
    if b <= a {
        return 0.0;
    }
    let knee = GRADING_KNEE.max(a).min(b);
    gauss_legendre(&f, a, knee, panel_count(a, knee, 0.25), GaussOrder::Eight)
        + gauss_legendre(&f, knee, b, panel_count(knee, b, 1.0), GaussOrder::Eight)
}

/// `e^{a} ∫_a^b t K1(t) dt`. `b` may be infinite.
#[must_use]
pub fn scaled_integral_of_tk1(a: Scalar, b: Scalar) -> Scalar {
    if b <= a {
        return 0.0;
    }
    let upper = b.min(a + DECAY_SPAN);
    graded(|t| t * k1e(t) * (a - t).exp(), a, upper)
}

/// `e^{-a} ∫_a^b t I1(t) dt`.
#[must_use]
pub fn scaled_integral_of_ti1(a: Scalar, b: Scalar) -> Scalar {
    graded(|t| t * i1e(t) * (t - a).exp(), a, b)
}

/// `e^{-x} ∫_0^x t I1(t) dt`.
#[must_use]
pub fn scaled_integral_of_ti1_from_zero(x: Scalar) -> Scalar {
    let lower = (x - DECAY_SPAN).max(0.0);
    graded(|t| t * i1e(t) * (t - x).exp(), lower, x)
}

/// `∫_a^b t (L1(t) - I1(t)) dt`.
#[must_use]
pub fn integral_of_t_l1_minus_i1(a: Scalar, b: Scalar) -> Scalar {
    if b <= a {
        return 0.0;
    }
    gauss_legendre(
        |t| t * struve_l1_minus_i1(t),
        a,
        b,
        panel_count(a, b, 2.0),
        GaussOrder::Eight,
    )
}

/// `∫_x^∞ t K1(t) dt`, the complement of `∫_0^x t K1(t) dt` in `π/2`.
#[must_use]
pub fn integral_of_tk1_to_infinity(x: Scalar) -> Scalar {
    (-x).exp() * scaled_integral_of_tk1(x, Scalar::INFINITY)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // Reference values computed with mpmath at 40 digits.

    #[test]
    fn scaled_bessel_i_matches_reference() {
        assert_relative_eq!(i0e(0.0), 1.0, max_relative = 1.0e-14);
        assert_relative_eq!(i1e(0.0), 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(i0e(1.0), 0.465_759_607_593_640_44, max_relative = 1.0e-13);
        assert_relative_eq!(i1e(1.0), 0.207_910_415_349_708_45, max_relative = 1.0e-13);
        assert_relative_eq!(i0e(10.0), 0.127_833_337_163_428_61, max_relative = 1.0e-13);
        assert_relative_eq!(i1e(10.0), 0.121_262_681_384_455_52, max_relative = 1.0e-13);
        assert_relative_eq!(i1e(40.0), 0.062_482_229_074_442_061, max_relative = 1.0e-13);
    }

    #[test]
    fn scaled_bessel_k_matches_reference() {
        assert_relative_eq!(k0e(1.0), 1.144_463_079_806_895, max_relative = 1.0e-13);
        assert_relative_eq!(k1e(1.0), 1.636_153_486_263_258_2, max_relative = 1.0e-13);
        assert_relative_eq!(k0e(0.01), 4.768_694_028_544_462, max_relative = 1.0e-12);
        assert_relative_eq!(k1e(10.0), 0.410_766_570_595_788_75, max_relative = 1.0e-13);
        assert_relative_eq!(k1e(40.0), 0.200_009_967_254_433_48, max_relative = 1.0e-13);
        assert!(k0e(0.0).is_infinite());
    }

    #[test]
    fn bessel_branches_agree_at_threshold() {
        let below = ASYMPTOTIC_THRESHOLD - 1.0e-13;
        assert_relative_eq!(i_scaled(1, below), i1e(ASYMPTOTIC_THRESHOLD), max_relative = 1.0e-12);
        assert_relative_eq!(k_scaled(0, below), k0e(ASYMPTOTIC_THRESHOLD), max_relative = 1.0e-12);
    }

    #[test]
    fn wronskian_holds() {
        // I0 K1 + I1 K0 = 1/x; the exponential scalings cancel
        for x in [0.3, 2.0, 12.0, 24.9, 60.0] {
            let w = i0e(x) * k1e(x) + i1e(x) * k0e(x);
            assert_relative_eq!(w, 1.0 / x, max_relative = 1.0e-12);
        }
    }

    #[test]
    fn struve_difference_matches_reference() {
        assert_relative_eq!(struve_l1_minus_i1(0.5), -0.203_952_122_767_373_65, max_relative = 1.0e-13);
        assert_relative_eq!(struve_l1_minus_i1(5.0), -0.607_426_362_042_244_75, max_relative = 1.0e-13);
        assert_relative_eq!(struve_l1_minus_i1(30.0), -0.635_910_018_266_971_1, max_relative = 1.0e-12);
        assert_relative_eq!(struve_l1_minus_i1(1.0e4), -2.0 / PI, max_relative = 1.0e-7);
    }

    #[test]
    fn tk1_integral_reaches_half_pi() {
        // ∫_0^∞ t K1(t) dt = π/2
        let total = scaled_integral_of_tk1(1.0e-12, Scalar::INFINITY);
        assert_relative_eq!(total, FRAC_PI_2, max_relative = 1.0e-7);
        assert_relative_eq!(
            FRAC_PI_2 - integral_of_tk1_to_infinity(3.0),
            1.435_729_576_909_043_5,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn ti1_integrals_are_consistent() {
        let whole = scaled_integral_of_ti1_from_zero(8.0) * 8.0_f64.exp();
        let head = scaled_integral_of_ti1_from_zero(3.0) * 3.0_f64.exp();
        let middle = scaled_integral_of_ti1(3.0, 8.0) * 3.0_f64.exp();
        assert_relative_eq!(whole, head + middle, max_relative = 1.0e-12);
    }

    #[test]
    fn reversed_bounds_give_zero() {
        assert_eq!(scaled_integral_of_tk1(2.0, 1.0), 0.0);
        assert_eq!(scaled_integral_of_ti1(2.0, 1.0), 0.0);
        assert_eq!(integral_of_t_l1_minus_i1(2.0, 2.0), 0.0);
    }
}
