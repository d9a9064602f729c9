//! Coil-section geometry and its normalization.

use crate::errors::InductanceError;
use crate::math::Scalar;

/// Core window shared by every section wound on the same limb.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreWindow {
    /// Axial height of the window between the yokes (m).
    pub window_ht: Scalar,
    /// Radius of the core leg (m).
    pub core_radius: Scalar,
}

impl CoreWindow {
    /// Creates a window description.
    #[must_use]
    pub const fn new(window_ht: Scalar, core_radius: Scalar) -> Self {
        Self {
            window_ht,
            core_radius,
        }
    }
}

/// Rectangular cross-section of a coaxial winding.
///
/// Axial positions are measured from the bottom yoke. The value is plain input
/// data: engines normalize a copy and never write back.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilSection {
    /// Inner radius (m).
    pub r1: Scalar,
    /// Outer radius (m).
    pub r2: Scalar,
    /// Bottom axial position (m).
    pub z1: Scalar,
    /// Top axial position (m).
    pub z2: Scalar,
    /// Number of turns.
    pub n: Scalar,
    /// Current density over the cross-section (A/m²).
    pub j: Scalar,
    /// Axial window height of the core (m).
    pub window_ht: Scalar,
    /// Radius of the core (m).
    pub core_radius: Scalar,
}

impl CoilSection {
    /// Creates a section without validating it.
    #[must_use]
    pub const fn new(
        r1: Scalar,
        r2: Scalar,
        z1: Scalar,
        z2: Scalar,
        turns: Scalar,
        current_density: Scalar,
        core: CoreWindow,
    ) -> Self {
        Self {
            r1,
            r2,
            z1,
            z2,
            n: turns,
            j: current_density,
            window_ht: core.window_ht,
            core_radius: core.core_radius,
        }
    }

    /// Creates a section and checks it with [`CoilSection::validate`].
    pub fn try_new(
        r1: Scalar,
        r2: Scalar,
        z1: Scalar,
        z2: Scalar,
        turns: Scalar,
        current_density: Scalar,
        core: CoreWindow,
    ) -> Result<Self, InductanceError> {
        let section = Self::new(r1, r2, z1, z2, turns, current_density, core);
        section.validate()?;
        Ok(section)
    }

    /// Returns a copy with `r1 <= r2` and `z1 <= z2`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (r1, r2) = if self.r1 > self.r2 {
            (self.r2, self.r1)
        } else {
            (self.r1, self.r2)
        };
        let (z1, z2) = if self.z1 > self.z2 {
            (self.z2, self.z1)
        } else {
            (self.z1, self.z2)
        };

        Self {
            r1,
            r2,
            z1,
            z2,
            ..*self
        }
    }

    /// The core window this section is wound in.
    #[must_use]
    pub const fn core(&self) -> CoreWindow {
        CoreWindow::new(self.window_ht, self.core_radius)
    }

    /// Cross-sectional area (m²); signed if the section is not normalized.
    #[must_use]
    pub fn area(&self) -> Scalar {
        (self.r2 - self.r1) * (self.z2 - self.z1)
    }

    /// Total ampere-turns `J · area` (A).
    #[must_use]
    pub fn ampere_turns(&self) -> Scalar {
        self.j * self.area()
    }

    /// Current in each turn `J · area / N` (A).
    #[must_use]
    pub fn terminal_current(&self) -> Scalar {
        self.ampere_turns() / self.n
    }

    /// Checks the physical preconditions the engines assume.
    ///
    /// Bounds may be given in either order; the check applies to the normalized section.
    pub fn validate(&self) -> Result<(), InductanceError> {
        let fields = [
            ("r1", self.r1),
            ("r2", self.r2),
            ("z1", self.z1),
            ("z2", self.z2),
            ("turns", self.n),
            ("current density", self.j),
            ("window height", self.window_ht),
            ("core radius", self.core_radius),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InductanceError::InvalidSection(format!(
                "{name} must be finite, got {value}"
            )));
        }

        let s = self.normalized();
        if s.n <= 0.0 {
            return Err(InductanceError::InvalidSection(format!(
                "turns must be positive, got {}",
                s.n
            )));
        }
        if s.window_ht <= 0.0 {
            return Err(InductanceError::InvalidSection(format!(
                "window height must be positive, got {}",
                s.window_ht
            )));
        }
        if s.core_radius < 0.0 {
            return Err(InductanceError::InvalidSection(format!(
                "core radius must be non-negative, got {}",
                s.core_radius
            )));
        }
        if s.r1 < s.core_radius {
            return Err(InductanceError::InvalidSection(format!(
                "inner radius {} lies inside the core (radius {})",
                s.r1, s.core_radius
            )));
        }
        if s.r2 == s.r1 || s.z2 == s.z1 {
            return Err(InductanceError::InvalidSection(
                "cross-section has zero area".to_string(),
            ));
        }
        if s.j == 0.0 {
            return Err(InductanceError::InvalidSection(
                "section carries no current".to_string(),
            ));
        }

        Ok(())
    }
}
