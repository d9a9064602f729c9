//! Method parameters shared by the inductance engines.

use crate::constants::{
    effective_window_height, DEFAULT_HARMONICS, VACUUM_PERMEABILITY, WINDOW_HEIGHT_FACTOR,
};
use crate::errors::InductanceError;
use crate::math::Scalar;

/// Constants and truncation used by one inductance calculation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductanceConfig {
    /// Permeability of the medium around the windings (H/m).
    pub permeability: Scalar,
    /// Effective periodic length as a multiple of the window height.
    pub window_height_factor: Scalar,
    /// Number of harmonics summed after the leading term.
    pub harmonics: usize,
}

impl Default for InductanceConfig {
    fn default() -> Self {
        Self::blue_book()
    }
}

impl InductanceConfig {
    /// Free-space permeability, the standard window-height factor and 200 harmonics.
    #[must_use]
    pub const fn blue_book() -> Self {
        Self {
            permeability: VACUUM_PERMEABILITY,
            window_height_factor: WINDOW_HEIGHT_FACTOR,
            harmonics: DEFAULT_HARMONICS,
        }
    }

    /// Returns a copy summing `harmonics` terms.
    #[must_use]
    pub const fn with_harmonics(mut self, harmonics: usize) -> Self {
        self.harmonics = harmonics;
        self
    }

    /// Returns a copy using `factor` as the window-height factor.
    #[must_use]
    pub const fn with_window_height_factor(mut self, factor: Scalar) -> Self {
        self.window_height_factor = factor;
        self
    }

    /// Returns a copy using `permeability` (H/m).
    #[must_use]
    pub const fn with_permeability(mut self, permeability: Scalar) -> Self {
        self.permeability = permeability;
        self
    }

    /// Effective periodic length for a window of height `window_ht` (m).
    #[must_use]
    pub fn effective_height(&self, window_ht: Scalar) -> Scalar {
        effective_window_height(window_ht, self.window_height_factor)
    }

    /// Checks that the configuration describes a usable expansion.
    pub fn validate(&self) -> Result<(), InductanceError> {
        if self.harmonics == 0 {
            return Err(InductanceError::InvalidConfig(
                "at least one harmonic is required".to_string(),
            ));
        }
        if !(self.permeability.is_finite() && self.permeability > 0.0) {
            return Err(InductanceError::InvalidConfig(format!(
                "permeability must be positive, got {}",
                self.permeability
            )));
        }
        // The physical window must fit inside one period
        if !(self.window_height_factor.is_finite() && self.window_height_factor >= 1.0) {
            return Err(InductanceError::InvalidConfig(format!(
                "window height factor must be at least 1, got {}",
                self.window_height_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blue_book() {
        let config = InductanceConfig::default();
        assert_eq!(config.harmonics, 200);
        assert_eq!(config.window_height_factor, WINDOW_HEIGHT_FACTOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = InductanceConfig::default()
            .with_harmonics(400)
            .with_window_height_factor(1.0);
        assert_eq!(config.harmonics, 400);
        assert_eq!(config.window_height_factor, 1.0);
        assert_eq!(config.permeability, VACUUM_PERMEABILITY);
    }

    #[test]
    fn validate_rejects_inconsistent_values() {
        let base = InductanceConfig::default();
        for bad in [
            base.with_harmonics(0),
            base.with_permeability(0.0),
            base.with_window_height_factor(0.5),
            base.with_window_height_factor(Scalar::NAN),
        ] {
            assert!(matches!(bad.validate(), Err(InductanceError::InvalidConfig(_))));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_feature_covers_inputs_and_config() {
        fn serializable<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        serializable::<InductanceConfig>();
        serializable::<crate::section::CoilSection>();
        serializable::<crate::section::CoreWindow>();
    }
}
