//! # Bushing Errors
//!
//! Error types for spec validation and loading.

use thiserror::Error;

/// Errors that can occur while loading or validating a bushing spec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BushingError {
    /// A dimension is zero, negative or not a finite number.
    #[error("Invalid spec: {field} must be a positive number, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    /// Too few facets to close a circular cross-section.
    #[error("Invalid spec: circle_facets must be at least {min}, got {facets}")]
    TooFewFacets { facets: u32, min: u32 },

    /// Spec input could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No preset with the requested name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl BushingError {
    /// Creates a non-positive dimension error.
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositiveDimension { field, value }
    }

    /// Returns true for errors that reject the spec's values themselves.
    pub fn is_invalid_spec(&self) -> bool {
        matches!(
            self,
            BushingError::NonPositiveDimension { .. } | BushingError::TooFewFacets { .. }
        )
    }
}

impl From<serde_json::Error> for BushingError {
    fn from(err: serde_json::Error) -> Self {
        BushingError::Parse(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
