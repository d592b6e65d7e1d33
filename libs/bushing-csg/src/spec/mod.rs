//! Bushing parameters and their derived dimensions.
//!
//! A [`BushingSpec`] holds the five literal dimensions of the part plus the
//! facet count. Everything else (outer diameter, shoulder diameter, total
//! length) is computed on demand and never stored.

use std::fmt;

use config::constants::{BORE_HEIGHT_FACTOR, DEFAULT_CIRCLE_FACETS, MIN_CIRCLE_FACETS};
use serde::{Deserialize, Serialize};

use crate::error::BushingError;

/// Dimensions of a bushing with a stepped shoulder, in millimeters.
///
/// # Examples
/// ```
/// use bushing_csg::BushingSpec;
/// let spec = BushingSpec::new(20.0, 1.5, 0.5, 10.0, 4.0);
/// assert_eq!(spec.outer_diameter(), 21.5);
/// assert_eq!(spec.shoulder_diameter(), 20.5);
/// assert_eq!(spec.total_length(), 14.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BushingSpec {
    /// Bore diameter.
    pub inner_diameter: f64,
    /// Added to the bore to get the outer body diameter.
    pub wall_thickness: f64,
    /// Added to the bore to get the shoulder diameter.
    pub shoulder_thickness: f64,
    /// Length of the main body below the shoulder.
    pub body_length: f64,
    /// Height of the shoulder region at the top of the part.
    pub shoulder_support_height: f64,
    /// Segments approximating each circular cross-section.
    #[serde(default = "default_circle_facets")]
    pub circle_facets: u32,
}

fn default_circle_facets() -> u32 {
    DEFAULT_CIRCLE_FACETS
}

impl BushingSpec {
    /// Creates a spec using the default facet count.
    pub const fn new(
        inner_diameter: f64,
        wall_thickness: f64,
        shoulder_thickness: f64,
        body_length: f64,
        shoulder_support_height: f64,
    ) -> Self {
        Self {
            inner_diameter,
            wall_thickness,
            shoulder_thickness,
            body_length,
            shoulder_support_height,
            circle_facets: DEFAULT_CIRCLE_FACETS,
        }
    }

    /// Returns a copy with a different facet count.
    pub fn with_circle_facets(mut self, circle_facets: u32) -> Self {
        self.circle_facets = circle_facets;
        self
    }

    /// Parses a spec from JSON and validates it.
    ///
    /// `circle_facets` may be omitted and falls back to the default.
    ///
    /// # Examples
    /// ```
    /// use bushing_csg::BushingSpec;
    /// let spec = BushingSpec::from_json(r#"{
    ///     "inner_diameter": 20.0,
    ///     "wall_thickness": 1.5,
    ///     "shoulder_thickness": 0.5,
    ///     "body_length": 10.0,
    ///     "shoulder_support_height": 4.0
    /// }"#).unwrap();
    /// assert_eq!(spec.circle_facets, 64);
    /// ```
    pub fn from_json(source: &str) -> Result<Self, BushingError> {
        let spec: BushingSpec = serde_json::from_str(source).map_err(|err| {
            tracing::warn!("failed to decode bushing spec: {}", err);
            BushingError::from(err)
        })?;
        spec.validate()?;
        Ok(spec)
    }

    // =========================================================================
    // DERIVED DIMENSIONS
    // =========================================================================

    /// Outer body diameter: `inner_diameter + wall_thickness`.
    pub fn outer_diameter(&self) -> f64 {
        self.inner_diameter + self.wall_thickness
    }

    /// Shoulder diameter: `inner_diameter + shoulder_thickness`.
    pub fn shoulder_diameter(&self) -> f64 {
        self.inner_diameter + self.shoulder_thickness
    }

    /// Total solid length: `body_length + shoulder_support_height`.
    pub fn total_length(&self) -> f64 {
        self.body_length + self.shoulder_support_height
    }

    /// Z offset at which the shoulder cut starts.
    pub fn shoulder_offset(&self) -> f64 {
        self.total_length() - self.shoulder_support_height
    }

    /// Height of the centered bore cylinder.
    pub fn bore_height(&self) -> f64 {
        BORE_HEIGHT_FACTOR * self.total_length()
    }

    // =========================================================================
    // CHECKS
    // =========================================================================

    /// Rejects non-positive or non-finite dimensions and too few facets.
    ///
    /// The diameter ordering is not checked here; see
    /// [`BushingSpec::sizing_warnings`].
    pub fn validate(&self) -> Result<(), BushingError> {
        for (field, value) in self.dimensions() {
            if !value.is_finite() || value <= 0.0 {
                return Err(BushingError::non_positive(field, value));
            }
        }
        if self.circle_facets < MIN_CIRCLE_FACETS {
            return Err(BushingError::TooFewFacets {
                facets: self.circle_facets,
                min: MIN_CIRCLE_FACETS,
            });
        }
        Ok(())
    }

    /// Reports violations of the `outer > shoulder > inner` sizing contract.
    ///
    /// These never block generation; the resulting solid is merely not a
    /// useful part.
    pub fn sizing_warnings(&self) -> Vec<SizingWarning> {
        let outer_diameter = self.outer_diameter();
        let shoulder_diameter = self.shoulder_diameter();
        let mut warnings = Vec::new();
        if shoulder_diameter >= outer_diameter {
            warnings.push(SizingWarning::ShoulderNotRecessed {
                shoulder_diameter,
                outer_diameter,
            });
        }
        if shoulder_diameter <= self.inner_diameter {
            warnings.push(SizingWarning::ShoulderInsideBore {
                shoulder_diameter,
                inner_diameter: self.inner_diameter,
            });
        }
        warnings
    }

    /// Returns true if the diameters are strictly ordered outer > shoulder > inner.
    pub fn is_well_formed(&self) -> bool {
        self.sizing_warnings().is_empty()
    }

    /// Named dimensional fields in declaration order.
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        [
            ("inner_diameter", self.inner_diameter),
            ("wall_thickness", self.wall_thickness),
            ("shoulder_thickness", self.shoulder_thickness),
            ("body_length", self.body_length),
            ("shoulder_support_height", self.shoulder_support_height),
        ]
    }
}

/// A sizing contract violation that still yields a (degenerate) solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingWarning {
    /// The shoulder is at least as wide as the body, so nothing is cut.
    ShoulderNotRecessed {
        shoulder_diameter: f64,
        outer_diameter: f64,
    },
    /// The shoulder is no wider than the bore, so it removes the whole wall.
    ShoulderInsideBore {
        shoulder_diameter: f64,
        inner_diameter: f64,
    },
}

impl fmt::Display for SizingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingWarning::ShoulderNotRecessed {
                shoulder_diameter,
                outer_diameter,
            } => write!(
                f,
                "shoulder diameter {} is not smaller than outer diameter {}",
                shoulder_diameter, outer_diameter
            ),
            SizingWarning::ShoulderInsideBore {
                shoulder_diameter,
                inner_diameter,
            } => write!(
                f,
                "shoulder diameter {} is not larger than inner diameter {}",
                shoulder_diameter, inner_diameter
            ),
        }
    }
}

#[cfg(test)]
mod tests;
