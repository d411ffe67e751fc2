use tracing::debug;

use super::report::IntersectionAxes;
use crate::config::EPSILON;
use crate::error::{AlignError, PairSide, Result};
use crate::geometry::{Frame, OrientedPlane, RigidTransform, Vec3};

/// Direction of the line along which two planes meet: `normalize(n1 × n2)`.
pub fn intersection_axis(plane1: &OrientedPlane, plane2: &OrientedPlane, side: PairSide) -> Result<Vec3> {
    let axis = plane1.normal().cross(&plane2.normal());
    let magnitude = axis.length();
    if magnitude < EPSILON {
        return Err(AlignError::ParallelPlanes { side, magnitude });
    }
    Ok(axis / magnitude)
}

/// Frame with `x` along the intersection axis and `y` along plane-1's normal,
/// anchored at plane-1's origin.
///
/// For nearly parallel normals the computed axis carries a small component
/// along the normal; it is projected out so the basis stays orthonormal.
fn axis_frame(primary: &OrientedPlane, axis: Vec3) -> Result<Frame> {
    let y = primary.normal();
    let x = (axis - y.scaled(axis.dot(&y))).normalize()?;
    let z = x.cross(&y).normalize()?;
    Ok(Frame::new(primary.origin(), x, y, z))
}

/// Align two plane pairs at once.
///
/// Plane-1 is the anchor: its origin and normal land exactly on target
/// plane-1, and the source intersection line is carried onto the target
/// intersection line. Plane-2 only steers the rotation through that shared
/// axis; its origin is not guaranteed to reach target plane-2's origin.
pub fn align_two_planes(
    src1: &OrientedPlane,
    tgt1: &OrientedPlane,
    src2: &OrientedPlane,
    tgt2: &OrientedPlane,
) -> Result<RigidTransform> {
    align_two_planes_with_axes(src1, tgt1, src2, tgt2).map(|(transform, _)| transform)
}

/// [`align_two_planes`] plus the intersection axes it aligned.
pub(crate) fn align_two_planes_with_axes(
    src1: &OrientedPlane,
    tgt1: &OrientedPlane,
    src2: &OrientedPlane,
    tgt2: &OrientedPlane,
) -> Result<(RigidTransform, IntersectionAxes)> {
    let axes = IntersectionAxes {
        source: intersection_axis(src1, src2, PairSide::Source)?,
        target: intersection_axis(tgt1, tgt2, PairSide::Target)?,
    };
    debug!(?axes, "intersection axes");

    let src_frame = axis_frame(src1, axes.source)?;
    let tgt_frame = axis_frame(tgt1, axes.target)?;
    Ok((RigidTransform::between_frames(&src_frame, &tgt_frame), axes))
}
