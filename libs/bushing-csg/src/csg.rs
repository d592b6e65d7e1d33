//! # CSG Tree
//!
//! The constructive solid geometry tree handed to an external renderer.
//! All parameters are concrete values; nothing here evaluates geometry.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A node in a CSG expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CsgNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Cylinder along the Z axis.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=14, d=21.5, center=false, $fn=64);
    /// ```
    Cylinder {
        /// Height along Z.
        height: f64,
        /// Diameter of the circular cross-section.
        diameter: f64,
        /// Centered on the origin along Z rather than based at z=0.
        center: bool,
        /// Number of facets approximating the circle ($fn).
        segments: u32,
    },

    // =========================================================================
    // TRANSFORMATIONS
    // =========================================================================

    /// Translation applied to a single child.
    Translate {
        offset: DVec3,
        child: Box<CsgNode>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Combine all children into one shape.
    Union { children: Vec<CsgNode> },

    /// Subtract each subsequent child from the first, in order.
    Difference { children: Vec<CsgNode> },
}

impl CsgNode {
    /// Creates a cylinder primitive.
    pub fn cylinder(height: f64, diameter: f64, center: bool, segments: u32) -> Self {
        CsgNode::Cylinder {
            height,
            diameter,
            center,
            segments,
        }
    }

    /// Wraps `child` in a translation.
    pub fn translate(offset: DVec3, child: CsgNode) -> Self {
        CsgNode::Translate {
            offset,
            child: Box::new(child),
        }
    }

    /// Returns the direct children of this node.
    pub fn children(&self) -> &[CsgNode] {
        match self {
            CsgNode::Cylinder { .. } => &[],
            CsgNode::Translate { child, .. } => std::slice::from_ref(&**child),
            CsgNode::Union { children } | CsgNode::Difference { children } => children,
        }
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Returns true for leaf primitives.
    pub fn is_primitive(&self) -> bool {
        matches!(self, CsgNode::Cylinder { .. })
    }

    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(CsgNode::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(CsgNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Cylinder primitives in pre-order.
    pub fn cylinders(&self) -> Vec<&CsgNode> {
        let mut found = Vec::new();
        self.collect_cylinders(&mut found);
        found
    }

    fn collect_cylinders<'a>(&'a self, found: &mut Vec<&'a CsgNode>) {
        if self.is_primitive() {
            found.push(self);
        }
        for child in self.children() {
            child.collect_cylinders(found);
        }
    }

    /// Replaces every single-child union with its child, recursively.
    ///
    /// A one-element union only groups; removing it leaves the solid
    /// unchanged.
    pub fn flatten_singleton_unions(self) -> CsgNode {
        match self {
            CsgNode::Union { children } if children.len() == 1 => {
                let mut children = children;
                match children.pop() {
                    Some(only) => only.flatten_singleton_unions(),
                    None => CsgNode::Union { children },
                }
            }
            CsgNode::Union { children } => CsgNode::Union {
                children: flatten_all(children),
            },
            CsgNode::Difference { children } => CsgNode::Difference {
                children: flatten_all(children),
            },
            CsgNode::Translate { offset, child } => {
                CsgNode::translate(offset, child.flatten_singleton_unions())
            }
            cylinder @ CsgNode::Cylinder { .. } => cylinder,
        }
    }
}

fn flatten_all(children: Vec<CsgNode>) -> Vec<CsgNode> {
    children
        .into_iter()
        .map(CsgNode::flatten_singleton_unions)
        .collect()
}
