//! Classification and canonical ordering of two coupled sections.

use std::cmp::Ordering;

use crate::constants::SAME_RADIAL_POSITION_TOLERANCE;
use crate::math::Scalar;
use crate::section::CoilSection;

/// Radial relationship between two sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {
    /// Inner radii agree within tolerance; the sections are stacked axially.
    SameRadialPosition,
    /// The sections sit at different distances from the core.
    DifferentRadialPosition,
}

impl Coupling {
    /// Classifies two sections by the inner radii exactly as supplied.
    ///
    /// The comparison is strict: a difference of exactly the tolerance is a
    /// different radial position.
    #[must_use]
    pub fn classify(a: &CoilSection, b: &CoilSection) -> Self {
        if (a.r1 - b.r1).abs() < SAME_RADIAL_POSITION_TOLERANCE {
            Self::SameRadialPosition
        } else {
            Self::DifferentRadialPosition
        }
    }
}

/// Two normalized sections in canonical `from`/`to` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledPair {
    /// Lower section (same radial position) or the one nearer the core.
    pub from: CoilSection,
    /// The other section.
    pub to: CoilSection,
    /// How the two sections are coupled.
    pub coupling: Coupling,
}

impl CoupledPair {
    /// Normalizes both sections, classifies them on the raw inputs and orders them.
    ///
    /// Ordering is by `z1` for stacked sections and by `r1` for concentric ones.
    /// Ties fall through to the remaining fields, so the pair depends only on
    /// the two section values and never on the argument order.
    #[must_use]
    pub fn new(a: &CoilSection, b: &CoilSection) -> Self {
        let coupling = Coupling::classify(a, b);
        let mut from = a.normalized();
        let mut to = b.normalized();

        let order = ordering_key(&from, coupling)
            .iter()
            .zip(ordering_key(&to, coupling).iter())
            .map(|(x, y)| x.total_cmp(y))
            .fold(Ordering::Equal, Ordering::then);
        if order == Ordering::Greater {
            std::mem::swap(&mut from, &mut to);
        }

        Self { from, to, coupling }
    }
}

/// Lexicographic sort key of a normalized section, primary field first.
fn ordering_key(s: &CoilSection, coupling: Coupling) -> [Scalar; 8] {
    match coupling {
        Coupling::SameRadialPosition => {
            [s.z1, s.r1, s.z2, s.r2, s.n, s.j, s.window_ht, s.core_radius]
        }
        Coupling::DifferentRadialPosition => {
            [s.r1, s.z1, s.r2, s.z2, s.n, s.j, s.window_ht, s.core_radius]
        }
    }
}
