//! Convenience re-exports for computing winding inductances.

pub use crate::config::InductanceConfig;
pub use crate::constants::*;
pub use crate::coupling::{CoupledPair, Coupling};
pub use crate::errors::InductanceError;
pub use crate::inductance::{mutual_inductance, self_inductance, Inductance};
pub use crate::kernel::{BlueBookKernel, Harmonic, HarmonicKernel, Tl1Split};
pub use crate::math::Scalar;
pub use crate::matrix::{inductance_matrix, leakage_inductance, InductanceMatrix};
pub use crate::section::{CoilSection, CoreWindow};
