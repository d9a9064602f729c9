//! Self and mutual inductance of coaxial coil sections by Rabins' method.
//!
//! Each result is a closed-form leading term for the mean (n = 0) component of
//! the current distribution plus a Fourier-Bessel correction summed over
//! `config.harmonics` harmonics along the effective window. The engines own the
//! summation order and the exponential bookkeeping; every special-function
//! value comes from a [`HarmonicKernel`].
//!
//! Engines never fail. Sections that violate the physical preconditions (zero
//! turns, zero current, zero window) propagate as non-finite results; use the
//! `checked_*` methods of [`Inductance`] to reject them up front.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::DMatrix;
use tracing::{debug, trace};

use crate::config::InductanceConfig;
use crate::coupling::{CoupledPair, Coupling};
use crate::errors::InductanceError;
use crate::kernel::{BlueBookKernel, Harmonic, HarmonicKernel};
use crate::math::Scalar;
use crate::matrix;
use crate::section::CoilSection;

/// Sums `multiplier · (current / m⁴) · radial` for `n = 1..=harmonics` in ascending order.
///
/// `term` returns the product of the current coefficients and the radial bracket
/// of one harmonic.
fn sum_harmonics<F>(harmonics: usize, effective_height: Scalar, multiplier: Scalar, mut term: F) -> Scalar
where
    F: FnMut(&Harmonic) -> (Scalar, Scalar),
{
    let mut sum = 0.0;
    for index in 1..=harmonics {
        let harmonic = Harmonic::new(index, effective_height);
        let (current, radial) = term(&harmonic);
        sum += multiplier * (current / harmonic.m.powi(4)) * radial;
    }
    sum
}

/// Radial bracket shared by a section with itself and by two stacked sections.
fn same_radial_bracket<K>(kernel: &K, harmonic: &Harmonic, from: &CoilSection) -> Scalar
where
    K: HarmonicKernel + ?Sized,
{
    let x1 = harmonic.m * from.r1;
    let x2 = harmonic.m * from.r2;
    let xc = harmonic.m * from.core_radius;

    let e = kernel.e(harmonic, from);
    let scaled_f = kernel.scaled_f(harmonic, from);
    let scaled_tk1 = kernel.scaled_integral_of_tk1(x1, x2);
    let tl1 = kernel.partial_scaled_integral_of_tl1(x1, x2);

    // E saturates at π/2 once its tail drops below one ulp; e^{x1} may be infinite there
    let saturated = if e == FRAC_PI_2 {
        0.0
    } else {
        (e - FRAC_PI_2) * x1.exp() * tl1.scaled
    };

    saturated - FRAC_PI_2 * tl1.unscaled + (2.0 * (xc - x1)).exp() * (scaled_f * scaled_tk1)
}

/// Radial bracket of two concentric sections, `from` nearer the core.
fn different_radial_bracket<K>(
    kernel: &K,
    harmonic: &Harmonic,
    from: &CoilSection,
    to: &CoilSection,
) -> Scalar
where
    K: HarmonicKernel + ?Sized,
{
    let x1 = harmonic.m * from.r1;
    let x2 = harmonic.m * from.r2;
    let x3 = harmonic.m * to.r1;
    let x4 = harmonic.m * to.r2;
    let xc = harmonic.m * from.core_radius;

    let outer = (2.0 * xc - x3 - x1).exp();
    let inner = (-2.0 * xc + 2.0 * x1).exp();
    let direct =
        kernel.scaled_integral_of_tk1(x3, x4) * kernel.scaled_integral_of_ti1(x1, x2);
    let image = kernel.scaled_d(harmonic, to) * kernel.scaled_integral_of_tk1(x1, x2);

    outer * (inner * direct + image)
}

/// Self-inductance of one coil section (H).
///
/// Bounds may be supplied in either order; the section is normalized first and
/// the caller's value is left untouched.
pub fn self_inductance<K>(section: &CoilSection, kernel: &K, config: &InductanceConfig) -> Scalar
where
    K: HarmonicKernel + ?Sized,
{
    let s = section.normalized();
    let effective_height = config.effective_height(s.window_ht);
    let mu = config.permeability;

    let turns = s.n * s.n;
    let turns_current = s.n * s.terminal_current();
    let leading = PI * mu * turns / (6.0 * effective_height)
        * ((s.r1 + s.r2).powi(2) + 2.0 * s.r1 * s.r1);
    trace!(leading, "self-inductance leading term");

    let multiplier = PI * mu * effective_height * turns / (turns_current * turns_current);
    let correction = sum_harmonics(config.harmonics, effective_height, multiplier, |h| {
        let j = kernel.j(h, &s);
        (j * j, same_radial_bracket(kernel, h, &s))
    });

    let inductance = leading + correction;
    debug!(
        inductance,
        harmonics = config.harmonics,
        "computed self-inductance"
    );
    inductance
}

/// Mutual inductance between two coil sections (H).
///
/// The sections are put in canonical order first, so swapping the arguments
/// gives the same value.
pub fn mutual_inductance<K>(
    a: &CoilSection,
    b: &CoilSection,
    kernel: &K,
    config: &InductanceConfig,
) -> Scalar
where
    K: HarmonicKernel + ?Sized,
{
    let CoupledPair { from, to, coupling } = CoupledPair::new(a, b);
    let effective_height = config.effective_height(from.window_ht);
    let mu = config.permeability;
    let turns = from.n * to.n;

    let leading = match coupling {
        Coupling::SameRadialPosition => {
            PI * mu * turns / (6.0 * effective_height)
                * ((from.r1 + from.r2).powi(2) + 2.0 * from.r1 * from.r1)
        }
        Coupling::DifferentRadialPosition => {
            PI * mu * turns / (3.0 * effective_height)
                * (from.r1 * from.r1 + from.r1 * from.r2 + from.r2 * from.r2)
        }
    };
    trace!(leading, ?coupling, "mutual-inductance leading term");

    let multiplier = PI * mu * effective_height * turns
        / ((from.n * from.terminal_current()) * (to.n * to.terminal_current()));
    let correction = sum_harmonics(config.harmonics, effective_height, multiplier, |h| {
        let current = kernel.j(h, &from) * kernel.j(h, &to);
        let radial = match coupling {
            Coupling::SameRadialPosition => same_radial_bracket(kernel, h, &from),
            Coupling::DifferentRadialPosition => different_radial_bracket(kernel, h, &from, &to),
        };
        (current, radial)
    });

    let inductance = leading + correction;
    debug!(
        inductance,
        ?coupling,
        harmonics = config.harmonics,
        "computed mutual inductance"
    );
    inductance
}

/// A kernel bundled with the configuration it is evaluated under.
///
/// ```
/// use bluebook_inductance::prelude::*;
///
/// let core = CoreWindow::new(0.6, 0.05);
/// let inner = CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 1.0e6, core);
/// let outer = CoilSection::new(0.2, 0.25, 0.0, 0.5, 100.0, -1.0e6, core);
///
/// let engine = Inductance::blue_book();
/// let m = engine.mutual_inductance(&inner, &outer);
/// assert_eq!(m, engine.mutual_inductance(&outer, &inner));
/// ```
#[derive(Debug, Clone)]
pub struct Inductance<K = BlueBookKernel> {
    kernel: K,
    config: InductanceConfig,
}

impl Inductance<BlueBookKernel> {
    /// Native kernel under [`InductanceConfig::blue_book`].
    #[must_use]
    pub const fn blue_book() -> Self {
        Self::new(BlueBookKernel::new(), InductanceConfig::blue_book())
    }
}

impl Default for Inductance<BlueBookKernel> {
    fn default() -> Self {
        Self::blue_book()
    }
}

impl<K: HarmonicKernel> Inductance<K> {
    /// Bundles `kernel` with `config`.
    #[must_use]
    pub const fn new(kernel: K, config: InductanceConfig) -> Self {
        Self { kernel, config }
    }

    /// Returns a copy evaluated under `config`.
    #[must_use]
    pub fn with_config(self, config: InductanceConfig) -> Self {
        Self { config, ..self }
    }

    /// The kernel used for every evaluation.
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The configuration used for every evaluation.
    pub const fn config(&self) -> &InductanceConfig {
        &self.config
    }

    /// See [`self_inductance`].
    pub fn self_inductance(&self, section: &CoilSection) -> Scalar {
        self_inductance(section, &self.kernel, &self.config)
    }

    /// See [`mutual_inductance`].
    pub fn mutual_inductance(&self, a: &CoilSection, b: &CoilSection) -> Scalar {
        mutual_inductance(a, b, &self.kernel, &self.config)
    }

    /// See [`matrix::inductance_matrix`].
    pub fn matrix(&self, sections: &[CoilSection]) -> DMatrix<Scalar> {
        matrix::inductance_matrix(sections, &self.kernel, &self.config)
    }

    /// See [`matrix::leakage_inductance`].
    pub fn leakage(&self, a: &CoilSection, b: &CoilSection) -> Scalar {
        matrix::leakage_inductance(a, b, &self.kernel, &self.config)
    }

    /// Validates the configuration and the section, then computes its self-inductance.
    pub fn checked_self_inductance(&self, section: &CoilSection) -> Result<Scalar, InductanceError> {
        self.config.validate()?;
        section.validate()?;
        Ok(self.self_inductance(section))
    }

    /// Validates the configuration and both sections, then computes their mutual inductance.
    pub fn checked_mutual_inductance(
        &self,
        a: &CoilSection,
        b: &CoilSection,
    ) -> Result<Scalar, InductanceError> {
        self.config.validate()?;
        a.validate()?;
        b.validate()?;
        if a.window_ht != b.window_ht || a.core_radius != b.core_radius {
            return Err(InductanceError::InvalidSection(
                "coupled sections must share one core window".to_string(),
            ));
        }
        Ok(self.mutual_inductance(a, b))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::kernel::Tl1Split;
    use crate::section::CoreWindow;

    fn core() -> CoreWindow {
        CoreWindow::new(0.6, 0.05)
    }

    fn section() -> CoilSection {
        CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 1.0e6, core())
    }

    /// Kernel whose harmonic content vanishes, leaving only the leading terms.
    struct SilentKernel;

    impl HarmonicKernel for SilentKernel {
        fn j(&self, _: &Harmonic, _: &CoilSection) -> Scalar {
            0.0
        }
        fn e(&self, _: &Harmonic, _: &CoilSection) -> Scalar {
            FRAC_PI_2
        }
        fn scaled_f(&self, _: &Harmonic, _: &CoilSection) -> Scalar {
            0.0
        }
        fn scaled_d(&self, _: &Harmonic, _: &CoilSection) -> Scalar {
            0.0
        }
        fn scaled_integral_of_tk1(&self, _: Scalar, _: Scalar) -> Scalar {
            0.0
        }
        fn scaled_integral_of_ti1(&self, _: Scalar, _: Scalar) -> Scalar {
            0.0
        }
        fn partial_scaled_integral_of_tl1(&self, _: Scalar, _: Scalar) -> Tl1Split {
            Tl1Split {
                unscaled: 0.0,
                scaled: 0.0,
            }
        }
    }

    #[test]
    fn harmonics_are_summed_in_ascending_order() {
        let mut seen = Vec::new();
        let sum = sum_harmonics(4, 1.8, 2.0, |h| {
            seen.push(h.n);
            (h.m.powi(4), 1.0)
        });
        assert_eq!(seen, vec![1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(sum, 8.0, max_relative = 1.0e-12);
    }

    #[test]
    fn self_leading_term_matches_closed_form() {
        let config = InductanceConfig::default();
        let l = 1.8;
        let expected = PI * config.permeability * 100.0 * 100.0 / (6.0 * l)
            * (0.25_f64.powi(2) + 2.0 * 0.01);
        assert_relative_eq!(
            self_inductance(&section(), &SilentKernel, &config),
            expected,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn concentric_leading_term_uses_inner_radii() {
        let config = InductanceConfig::default();
        let outer = CoilSection::new(0.2, 0.25, 0.0, 0.5, 50.0, -2.0e6, core());
        let expected = PI * config.permeability * 100.0 * 50.0 / (3.0 * 1.8)
            * (0.01 + 0.015 + 0.0225);
        assert_relative_eq!(
            mutual_inductance(&outer, &section(), &SilentKernel, &config),
            expected,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn harmonic_correction_is_finite_and_positive() {
        // A short section on a core carries most of its energy in the harmonics
        let config = InductanceConfig::default();
        let leading = self_inductance(&section(), &SilentKernel, &config);
        let full = self_inductance(&section(), &BlueBookKernel, &config);
        assert!(full.is_finite());
        assert!(full > leading);
    }

    #[test]
    fn stacked_mutual_of_identical_sections_equals_self() {
        let config = InductanceConfig::default().with_harmonics(40);
        let s = section();
        assert_eq!(
            mutual_inductance(&s, &s, &BlueBookKernel, &config),
            self_inductance(&s, &BlueBookKernel, &config)
        );
    }

    #[test]
    fn checked_entry_points_reject_bad_input() {
        let engine = Inductance::blue_book();
        let dead = CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 0.0, core());
        assert!(matches!(
            engine.checked_self_inductance(&dead),
            Err(InductanceError::InvalidSection(_))
        ));

        let other_window = CoilSection::new(0.2, 0.25, 0.0, 0.5, 100.0, 1.0e6, CoreWindow::new(0.8, 0.05));
        assert!(engine.checked_mutual_inductance(&section(), &other_window).is_err());

        let engine = engine.with_config(InductanceConfig::default().with_harmonics(0));
        assert!(matches!(
            engine.checked_self_inductance(&section()),
            Err(InductanceError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_current_propagates_as_non_finite() {
        let dead = CoilSection::new(0.1, 0.15, 0.0, 0.5, 100.0, 0.0, core());
        let config = InductanceConfig::default().with_harmonics(5);
        assert!(!self_inductance(&dead, &BlueBookKernel, &config).is_finite());
    }
}
