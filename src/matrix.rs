//! Inductance matrices and two-winding leakage inductance.

use nalgebra::DMatrix;
use tracing::debug;

use crate::config::InductanceConfig;
use crate::inductance::{mutual_inductance, self_inductance};
use crate::kernel::HarmonicKernel;
use crate::math::Scalar;
use crate::section::CoilSection;

/// Dense symmetric inductance matrix (H).
pub type InductanceMatrix = DMatrix<Scalar>;

/// Builds the inductance matrix of `sections`.
///
/// Entry `(i, i)` is the self-inductance of section `i` and entry `(i, j)` the
/// mutual inductance of sections `i` and `j`. Each pair is evaluated once and
/// mirrored, so the result is exactly symmetric.
#[must_use]
pub fn inductance_matrix<K>(
    sections: &[CoilSection],
    kernel: &K,
    config: &InductanceConfig,
) -> InductanceMatrix
where
    K: HarmonicKernel + ?Sized,
{
    let size = sections.len();
    let mut matrix = InductanceMatrix::zeros(size, size);
    for (i, a) in sections.iter().enumerate() {
        matrix[(i, i)] = self_inductance(a, kernel, config);
        for (j, b) in sections.iter().enumerate().skip(i + 1) {
            let m = mutual_inductance(a, b, kernel, config);
            matrix[(i, j)] = m;
            matrix[(j, i)] = m;
        }
    }
    debug!(sections = size, "assembled inductance matrix");
    matrix
}

/// Leakage inductance of winding `a` against winding `b`, referred to `a` (H).
///
/// `L_a + (N_a/N_b)² L_b - 2 (N_a/N_b) M_ab`. The currents of the two sections
/// only enter through their shape; the sign convention of `J` does not matter.
#[must_use]
pub fn leakage_inductance<K>(
    a: &CoilSection,
    b: &CoilSection,
    kernel: &K,
    config: &InductanceConfig,
) -> Scalar
where
    K: HarmonicKernel + ?Sized,
{
    let ratio = a.n / b.n;
    let la = self_inductance(a, kernel, config);
    let lb = self_inductance(b, kernel, config);
    let mab = mutual_inductance(a, b, kernel, config);

    let leakage = la + ratio * ratio * lb - 2.0 * ratio * mab;
    debug!(leakage, ratio, "computed leakage inductance");
    leakage
}
