//! Tests for bushing parameters and validation.

use super::*;
use config::constants::approx_equal;

fn small() -> BushingSpec {
    BushingSpec::new(20.0, 1.5, 0.5, 10.0, 4.0)
}

// =============================================================================
// DERIVED DIMENSIONS
// =============================================================================

#[test]
fn derived_dimensions_follow_sums() {
    let spec = small();
    assert_eq!(spec.outer_diameter(), 21.5);
    assert_eq!(spec.shoulder_diameter(), 20.5);
    assert_eq!(spec.total_length(), 14.0);
    assert_eq!(spec.shoulder_offset(), 10.0);
    assert_eq!(spec.bore_height(), 56.0);
}

#[test]
fn total_length_is_exact_sum() {
    for (body, support) in [(25.0, 4.0), (10.0, 4.0), (0.1, 0.2), (1e-3, 7.25)] {
        let spec = BushingSpec::new(20.0, 1.5, 0.5, body, support);
        assert_eq!(spec.total_length(), body + support);
    }
}

#[test]
fn diameters_are_monotonic_when_wall_exceeds_shoulder() {
    for (wall, shoulder) in [(1.5, 0.5), (3.0, 2.9), (10.0, 0.01)] {
        let spec = BushingSpec::new(12.0, wall, shoulder, 5.0, 2.0);
        assert!(spec.outer_diameter() > spec.shoulder_diameter());
        assert!(spec.shoulder_diameter() > spec.inner_diameter);
        assert!(spec.is_well_formed());
    }
}

#[test]
fn bore_height_exceeds_total_length() {
    for length in [0.5, 14.0, 29.0, 1000.0] {
        let spec = BushingSpec::new(5.0, 1.0, 0.5, length, 1.0);
        assert!(spec.bore_height() > spec.total_length());
    }
}

#[test]
fn shoulder_offset_matches_body_length() {
    let spec = BushingSpec::new(32.5, 3.0, 4.5, 25.0, 4.0);
    assert!(approx_equal(spec.shoulder_offset(), spec.body_length));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn valid_spec_passes() {
    assert!(small().validate().is_ok());
}

#[test]
fn triangle_facets_are_valid() {
    assert!(small().with_circle_facets(3).validate().is_ok());
}

#[test]
fn rejects_too_few_facets() {
    let err = small().with_circle_facets(2).validate().unwrap_err();
    assert_eq!(err, BushingError::TooFewFacets { facets: 2, min: 3 });
}

#[test]
fn rejects_zero_dimension() {
    let mut spec = small();
    spec.body_length = 0.0;
    let err = spec.validate().unwrap_err();
    assert_eq!(err, BushingError::non_positive("body_length", 0.0));
}

#[test]
fn rejects_negative_dimension() {
    let mut spec = small();
    spec.wall_thickness = -1.0;
    match spec.validate() {
        Err(BushingError::NonPositiveDimension { field, .. }) => {
            assert_eq!(field, "wall_thickness");
        }
        other => panic!("Expected NonPositiveDimension, got {:?}", other),
    }
}

#[test]
fn rejects_non_finite_dimension() {
    let mut spec = small();
    spec.inner_diameter = f64::NAN;
    assert!(spec.validate().unwrap_err().is_invalid_spec());

    let mut spec = small();
    spec.shoulder_support_height = f64::INFINITY;
    assert!(spec.validate().is_err());
}

#[test]
fn reports_first_bad_field() {
    let spec = BushingSpec::new(0.0, 0.0, 0.5, 10.0, 4.0);
    match spec.validate() {
        Err(BushingError::NonPositiveDimension { field, .. }) => {
            assert_eq!(field, "inner_diameter");
        }
        other => panic!("Expected NonPositiveDimension, got {:?}", other),
    }
}

// =============================================================================
// SIZING CONTRACT
// =============================================================================

#[test]
fn wide_shoulder_is_not_recessed() {
    let spec = BushingSpec::new(32.5, 3.0, 4.5, 25.0, 4.0);
    assert!(spec.validate().is_ok());
    let warnings = spec.sizing_warnings();
    assert_eq!(warnings.len(), 1);
    match warnings[0] {
        SizingWarning::ShoulderNotRecessed {
            shoulder_diameter,
            outer_diameter,
        } => {
            assert_eq!(shoulder_diameter, 37.0);
            assert_eq!(outer_diameter, 35.5);
        }
        other => panic!("Expected ShoulderNotRecessed, got {:?}", other),
    }
    assert!(!spec.is_well_formed());
}

#[test]
fn equal_shoulder_and_wall_is_not_recessed() {
    let spec = BushingSpec::new(10.0, 2.0, 2.0, 5.0, 1.0);
    assert!(matches!(
        spec.sizing_warnings().as_slice(),
        [SizingWarning::ShoulderNotRecessed { .. }]
    ));
}

#[test]
fn negative_shoulder_falls_inside_bore() {
    // Unvalidated spec: sizing checks still run on raw values
    let spec = BushingSpec::new(20.0, 1.5, -0.5, 10.0, 4.0);
    assert!(spec.validate().is_err());
    assert_eq!(
        spec.sizing_warnings(),
        vec![SizingWarning::ShoulderInsideBore {
            shoulder_diameter: 19.5,
            inner_diameter: 20.0,
        }]
    );
}

#[test]
fn warning_display_names_diameters() {
    let warning = SizingWarning::ShoulderNotRecessed {
        shoulder_diameter: 37.0,
        outer_diameter: 35.5,
    };
    assert_eq!(
        warning.to_string(),
        "shoulder diameter 37 is not smaller than outer diameter 35.5"
    );
}

// =============================================================================
// JSON LOADING
// =============================================================================

#[test]
fn from_json_defaults_facets() {
    let spec = BushingSpec::from_json(
        r#"{"inner_diameter": 20, "wall_thickness": 1.5, "shoulder_thickness": 0.5,
            "body_length": 10, "shoulder_support_height": 4}"#,
    )
    .unwrap();
    assert_eq!(spec, small());
}

#[test]
fn from_json_reads_facets() {
    let spec = BushingSpec::from_json(
        r#"{"inner_diameter": 20, "wall_thickness": 1.5, "shoulder_thickness": 0.5,
            "body_length": 10, "shoulder_support_height": 4, "circle_facets": 3}"#,
    )
    .unwrap();
    assert_eq!(spec.circle_facets, 3);
}

#[test]
fn from_json_validates() {
    let err = BushingSpec::from_json(
        r#"{"inner_diameter": -20, "wall_thickness": 1.5, "shoulder_thickness": 0.5,
            "body_length": 10, "shoulder_support_height": 4}"#,
    )
    .unwrap_err();
    assert!(err.is_invalid_spec());
}

#[test]
fn from_json_rejects_missing_field() {
    let err = BushingSpec::from_json(r#"{"inner_diameter": 20}"#).unwrap_err();
    assert!(matches!(err, BushingError::Parse(_)));
}

#[test]
fn from_json_rejects_unknown_field() {
    let err = BushingSpec::from_json(
        r#"{"inner_diameter": 20, "wall_thickness": 1.5, "shoulder_thickness": 0.5,
            "body_length": 10, "shoulder_support_height": 4, "color": "red"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, BushingError::Parse(_)));
}

#[test]
fn json_round_trip_preserves_spec() {
    let spec = small().with_circle_facets(48);
    let json = serde_json::to_string(&spec).unwrap();
    assert_eq!(BushingSpec::from_json(&json).unwrap(), spec);
}
