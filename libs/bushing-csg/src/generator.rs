//! # Bushing Generator
//!
//! Builds the CSG tree of a bushing: an outer body cylinder, minus a
//! shoulder cylinder raised to the top of the part, minus a centered bore.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::csg::CsgNode;
use crate::spec::{BushingSpec, SizingWarning};

// =============================================================================
// GENERATED SOLID
// =============================================================================

/// Result of a checked build.
///
/// Holds the spec it came from, the CSG tree and any sizing warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSolid {
    /// Spec the tree was generated from.
    pub spec: BushingSpec,
    /// Root CSG node.
    pub geometry: CsgNode,
    /// Sizing contract violations found in the spec.
    pub warnings: Vec<SizingWarning>,
}

impl GeneratedSolid {
    /// Returns true if the spec produced no sizing warnings.
    pub fn is_well_formed(&self) -> bool {
        self.warnings.is_empty()
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Options controlling the shape of the emitted tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Wrap the bore cylinder in a one-element union, matching the scene
    /// graph produced by the hand-written OpenSCAD models.
    pub preserve_bore_group: bool,
}

impl GenerateOptions {
    /// Options reproducing the hand-written scene graph node for node.
    pub fn structural_parity() -> Self {
        Self {
            preserve_bore_group: true,
        }
    }
}

/// Generates the bushing CSG tree with default options.
///
/// The spec is not validated here; see [`crate::build`] for the checked
/// entry point.
///
/// # Examples
/// ```
/// use bushing_csg::{generate, BushingSpec, CsgNode};
/// let tree = generate(&BushingSpec::new(20.0, 1.5, 0.5, 10.0, 4.0));
/// assert!(matches!(tree, CsgNode::Difference { ref children } if children.len() == 3));
/// ```
pub fn generate(spec: &BushingSpec) -> CsgNode {
    generate_with(spec, &GenerateOptions::default())
}

/// Generates the bushing CSG tree.
///
/// Children of the root difference, in order:
///
/// 1. body: `total_length` high, `outer_diameter` wide, based at z=0
/// 2. shoulder: `total_length` high, `shoulder_diameter` wide, based at
///    `total_length - shoulder_support_height`
/// 3. bore: `4 * total_length` high, `inner_diameter` wide, centered
pub fn generate_with(spec: &BushingSpec, options: &GenerateOptions) -> CsgNode {
    let total_length = spec.total_length();
    let segments = spec.circle_facets;

    let body = CsgNode::cylinder(total_length, spec.outer_diameter(), false, segments);

    let shoulder = CsgNode::translate(
        DVec3::new(0.0, 0.0, spec.shoulder_offset()),
        CsgNode::cylinder(total_length, spec.shoulder_diameter(), false, segments),
    );

    let bore = CsgNode::cylinder(spec.bore_height(), spec.inner_diameter, true, segments);
    let bore = if options.preserve_bore_group {
        CsgNode::Union {
            children: vec![bore],
        }
    } else {
        bore
    };

    CsgNode::Difference {
        children: vec![body, shoulder, bore],
    }
}
