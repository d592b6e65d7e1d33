//! # Configuration Constants
//!
//! Centralized constants for the bushing generator. Facet counts,
//! construction factors and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Facet counts used for circular cross-sections ($fn)
//! - **Construction**: Fixed factors of the bushing geometry

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Derived dimensions are sums of user-supplied decimals, so tests and
/// sizing checks compare them within this tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let outer = 32.5_f64 + 3.0;
/// assert!((outer - 35.5).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RESOLUTION CONSTANTS ($fn)
// =============================================================================

/// Default number of facets approximating each circle.
///
/// Emitted as `$fn` on every cylinder when a spec does not override it.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CIRCLE_FACETS;
///
/// assert_eq!(DEFAULT_CIRCLE_FACETS, 64);
/// ```
pub const DEFAULT_CIRCLE_FACETS: u32 = 64;

/// Minimum number of facets for a circular cross-section.
///
/// Three segments give a triangular prism, the smallest closed polygon.
pub const MIN_CIRCLE_FACETS: u32 = 3;

// =============================================================================
// CONSTRUCTION CONSTANTS
// =============================================================================

/// Bore cylinder height as a multiple of the total part length.
///
/// The bore is centered on the origin, so it reaches `1.5 * total_length`
/// past the top face and the same distance below the base.
///
/// # Example
///
/// ```rust
/// use config::constants::BORE_HEIGHT_FACTOR;
///
/// let total_length = 29.0;
/// assert!(BORE_HEIGHT_FACTOR * total_length > total_length);
/// ```
pub const BORE_HEIGHT_FACTOR: f64 = 4.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
