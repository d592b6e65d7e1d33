//! # Bushing CSG
//!
//! Parametric bushing solid as a constructive solid geometry tree.
//!
//! ## Architecture
//!
//! ```text
//! BushingSpec → validate → generate (CsgNode) → printer (OpenSCAD) → renderer
//! ```
//!
//! The crate only describes the solid. Meshing and boolean evaluation are
//! left to whichever CSG tool consumes the tree.
//!
//! ## Example
//!
//! ```rust
//! use bushing_csg::{build, presets, printer};
//!
//! let solid = build(&presets::BORE_20).unwrap();
//! assert!(solid.is_well_formed());
//! let scad = printer::print(&solid.geometry);
//! assert!(scad.starts_with("difference() {"));
//! ```

pub mod csg;
pub mod error;
pub mod generator;
pub mod presets;
pub mod printer;
pub mod spec;

// Re-export public API
pub use csg::CsgNode;
pub use error::BushingError;
pub use generator::{generate, generate_with, GenerateOptions, GeneratedSolid};
pub use spec::{BushingSpec, SizingWarning};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Validates a spec and generates its CSG tree.
///
/// Sizing contract violations are logged and returned alongside the tree;
/// only invalid dimensions or facet counts fail.
///
/// ## Example
///
/// ```rust
/// use bushing_csg::{build, BushingSpec};
///
/// let result = build(&BushingSpec::new(20.0, 1.5, 0.5, 10.0, 4.0)).unwrap();
/// assert_eq!(result.geometry.child_count(), 3);
/// ```
pub fn build(spec: &BushingSpec) -> Result<GeneratedSolid, BushingError> {
    build_with(spec, &GenerateOptions::default())
}

/// Like [`build`], with explicit generation options.
pub fn build_with(
    spec: &BushingSpec,
    options: &GenerateOptions,
) -> Result<GeneratedSolid, BushingError> {
    spec.validate()?;

    let warnings = spec.sizing_warnings();
    for warning in &warnings {
        tracing::warn!("bushing sizing: {}", warning);
    }

    let geometry = generate_with(spec, options);
    tracing::debug!(
        outer_diameter = spec.outer_diameter(),
        shoulder_diameter = spec.shoulder_diameter(),
        total_length = spec.total_length(),
        nodes = geometry.node_count(),
        "generated bushing tree"
    );

    Ok(GeneratedSolid {
        spec: *spec,
        geometry,
        warnings,
    })
}

/// Builds a named preset.
pub fn build_preset(name: &str) -> Result<GeneratedSolid, BushingError> {
    let spec = presets::by_name(name)?;
    build(&spec)
}

// =============================================================================
// TESTS
// =============================================================================
