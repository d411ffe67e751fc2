//! End-to-end alignment scenarios through the public entry points.

use approx::assert_abs_diff_eq;

use align_kernel::{
    compute_alignment, compute_alignment_with, transforms_equal, AlignConfig, AlignError, AlignmentRequest,
    AlignmentResult, AlignmentStrategy, ApplyOutcome, PlaneDescriptor, PlaneRole, Point3d, PointCloud,
    RigidTransform, Vec3,
};

fn desc(origin: [f64; 3], normal: [f64; 3], u: [f64; 3]) -> PlaneDescriptor {
    PlaneDescriptor::new(Point3d::from_array(origin), Vec3::from_array(normal), Vec3::from_array(u))
}

#[test]
fn translation_scenario_moves_point() {
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([5.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    );
    let result = compute_alignment(&request).unwrap();
    let expected = RigidTransform::from_translation(Vec3::new(5.0, 0.0, 0.0));
    assert!(transforms_equal(&result.base_transform, &expected, 1e-9));
    let p = result.base_transform.transform_point(&Point3d::new(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(p, Point3d::new(6.0, 1.0, 1.0), epsilon = 1e-12);
}

#[test]
fn tilt_scenario_is_pure_rotation() {
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    );
    let result = compute_alignment(&request).unwrap();
    assert_abs_diff_eq!(result.base_transform.translation(), Vec3::ZERO, epsilon = 1e-12);
    let p = result.base_transform.transform_point(&Point3d::new(0.0, 0.0, 1.0));
    assert_abs_diff_eq!(p, Point3d::new(0.0, 1.0, 0.0), epsilon = 1e-9);
    assert!((result.report.rotation_angle_deg - 90.0).abs() < 1e-9);
}

#[test]
fn two_plane_does_not_place_plane_two_origin() {
    // Same orientations, different plane-2 offsets: plane 1 already matches,
    // so the transform is a no-op and plane 2's origin stays put.
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    )
    .with_second_pair(
        desc([4.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        desc([9.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    );
    let result = compute_alignment(&request).unwrap();
    assert_eq!(result.report.strategy, AlignmentStrategy::TwoPlane);
    assert!(result.identity);
    let predicted = result.report.predicted_source2.unwrap();
    assert_abs_diff_eq!(predicted.origin, Point3d::new(4.0, 0.0, 0.0), epsilon = 1e-9);
    assert_abs_diff_eq!(predicted.normal, Vec3::X, epsilon = 1e-9);
}

#[test]
fn two_plane_ignores_plane_one_u_direction() {
    // Only plane-1's normal and origin enter the two-plane frame.
    let base = |u1: [f64; 3]| {
        let request = AlignmentRequest::new(
            desc([1.0, 2.0, 3.0], [0.0, 0.0, 1.0], u1),
            desc([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        )
        .with_second_pair(
            desc([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            desc([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        );
        compute_alignment(&request).unwrap().base_transform
    };
    assert!(transforms_equal(&base([1.0, 0.0, 0.0]), &base([1.0, 1.0, 0.0]), 1e-9));
}

#[test]
fn flip_after_alignment_reverses_normal_and_lifts_origin() {
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([5.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    )
    .with_flip(true);
    let result = compute_alignment(&request).unwrap();
    let flip = result.flip_transform.unwrap();

    let mut cloud = PointCloud::new(vec![Point3d::ORIGIN]);
    let Ok(outcome) = result.apply_to(&mut cloud);
    assert_eq!(outcome, ApplyOutcome::Moved { flipped: true });
    // Hinge 10 units above (5,0,0): the origin swings to (5,0,20).
    assert_abs_diff_eq!(cloud.points[0], Point3d::new(5.0, 0.0, 20.0), epsilon = 1e-9);
    assert_abs_diff_eq!(flip.transform_vector(&Vec3::Z), -Vec3::Z, epsilon = 1e-9);
}

#[test]
fn custom_hinge_offset_changes_flip_only() {
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 3.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    )
    .with_flip(true);
    let default = compute_alignment(&request).unwrap();
    let custom = compute_alignment_with(&request, &AlignConfig::default().with_hinge_offset(1.0)).unwrap();
    assert!(transforms_equal(&default.base_transform, &custom.base_transform, 1e-12));
    assert!(!transforms_equal(
        &default.flip_transform.unwrap(),
        &custom.flip_transform.unwrap(),
        1e-6
    ));
}

#[test]
fn missing_geometry_is_distinct_from_already_aligned() {
    let degenerate = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 2.0]),
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    );
    match compute_alignment(&degenerate).unwrap_err() {
        AlignError::MissingGeometry { role, .. } => assert_eq!(role, PlaneRole::Source1),
        other => panic!("unexpected error {other:?}"),
    }

    let aligned = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    );
    assert!(compute_alignment(&aligned).unwrap().identity);
}

#[test]
fn report_text_covers_two_plane_flip_run() {
    let request = AlignmentRequest::new(
        desc([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    )
    .with_second_pair(
        desc([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        desc([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    )
    .with_flip(true);
    let text = compute_alignment(&request).unwrap().report.to_string();
    for section in [
        "SOURCE PLANE 1 (Before):",
        "TARGET PLANE 1:",
        "SOURCE PLANE 2 (Before):",
        "TARGET PLANE 2:",
        "Source planes intersection axis:",
        "Target planes intersection axis:",
        "Using TWO-PLANE alignment",
        "Computed 180° FLIP transform around uDirection axis",
        "PREDICTED SOURCE PLANE 1 (After flip):",
        "PREDICTED SOURCE PLANE 2 (After transform):",
        "Translation distance:",
    ] {
        assert!(text.contains(section), "missing {section:?} in\n{text}");
    }
}

#[test]
fn result_survives_json() {
    let request = AlignmentRequest::new(
        desc([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        desc([0.0, 2.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    )
    .with_flip(true);
    let result = compute_alignment(&request).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: AlignmentResult = serde_json::from_str(&json).unwrap();
    assert!(transforms_equal(&result.base_transform, &back.base_transform, 1e-12));
    assert_eq!(back.report.strategy, AlignmentStrategy::SinglePlane);
    assert_eq!(back.identity, result.identity);
}
