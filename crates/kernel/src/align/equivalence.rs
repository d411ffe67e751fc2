use approx::AbsDiffEq;

use crate::geometry::{Point3d, RigidTransform};

/// Origin plus the three unit-axis points: affinely independent, so agreement
/// on all four pins down an affine map in 3D.
pub const PROBE_POINTS: [Point3d; 4] = [
    Point3d { x: 0.0, y: 0.0, z: 0.0 },
    Point3d { x: 1.0, y: 0.0, z: 0.0 },
    Point3d { x: 0.0, y: 1.0, z: 0.0 },
    Point3d { x: 0.0, y: 0.0, z: 1.0 },
];

/// Whether `a` and `b` are the same map, comparing images of
/// [`PROBE_POINTS`] coordinate by coordinate within `tolerance`.
///
/// Advisory only: anything non-finite (including the tolerance) yields
/// `false` rather than an error.
pub fn transforms_equal(a: &RigidTransform, b: &RigidTransform, tolerance: f64) -> bool {
    if !tolerance.is_finite() || tolerance < 0.0 || !a.is_finite() || !b.is_finite() {
        return false;
    }
    PROBE_POINTS.iter().all(|p| {
        let pa = a.transform_point(p);
        let pb = b.transform_point(p);
        pa.is_finite() && pb.is_finite() && pa.abs_diff_eq(&pb, tolerance)
    })
}

/// Whether `t` moves nothing within `tolerance`.
pub fn is_identity(t: &RigidTransform, tolerance: f64) -> bool {
    transforms_equal(t, &RigidTransform::identity(), tolerance)
}
