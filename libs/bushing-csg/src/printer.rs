//! OpenSCAD source output for CSG trees.

use std::fmt::Write;

use crate::csg::CsgNode;
use crate::generator::GeneratedSolid;

const INDENT: &str = "    ";

/// Prints a CSG tree as OpenSCAD source, without a trailing newline.
///
/// # Examples
/// ```
/// use bushing_csg::{printer, CsgNode};
/// let node = CsgNode::cylinder(14.0, 21.5, false, 64);
/// assert_eq!(printer::print(&node), "cylinder(h=14, d=21.5, center=false, $fn=64);");
/// ```
pub fn print(node: &CsgNode) -> String {
    let mut out = String::new();
    print_node(&mut out, node, 0);
    out
}

/// Prints a generated solid as a complete `.scad` document.
///
/// The tree is preceded by comments listing parameters, derived
/// dimensions and sizing warnings.
pub fn print_document(solid: &GeneratedSolid) -> String {
    let spec = &solid.spec;
    let mut out = String::from("// Bushing (all dimensions in mm)\n");
    for (field, value) in spec.dimensions() {
        let _ = writeln!(out, "// {} = {}", field, value);
    }
    let _ = writeln!(out, "// circle_facets = {}", spec.circle_facets);
    let _ = writeln!(out, "// outer_diameter = {}", spec.outer_diameter());
    let _ = writeln!(out, "// shoulder_diameter = {}", spec.shoulder_diameter());
    let _ = writeln!(out, "// total_length = {}", spec.total_length());
    for warning in &solid.warnings {
        let _ = writeln!(out, "// WARNING: {}", warning);
    }
    out.push('\n');
    print_node(&mut out, &solid.geometry, 0);
    out.push('\n');
    out
}

fn print_node(out: &mut String, node: &CsgNode, depth: usize) {
    match node {
        CsgNode::Cylinder {
            height,
            diameter,
            center,
            segments,
        } => {
            let _ = write!(
                out,
                "cylinder(h={}, d={}, center={}, $fn={});",
                height, diameter, center, segments
            );
        }
        CsgNode::Translate { offset, child } => {
            let _ = write!(out, "translate([{}, {}, {}]) ", offset.x, offset.y, offset.z);
            print_node(out, child, depth);
        }
        CsgNode::Union { children } => print_block(out, "union", children, depth),
        CsgNode::Difference { children } => print_block(out, "difference", children, depth),
    }
}

fn print_block(out: &mut String, name: &str, children: &[CsgNode], depth: usize) {
    let _ = writeln!(out, "{}() {{", name);
    for child in children {
        out.push_str(&INDENT.repeat(depth + 1));
        print_node(out, child, depth + 1);
        out.push('\n');
    }
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}
