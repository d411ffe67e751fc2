use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlignError, Result};
use crate::geometry::{OrientedPlane, Point3d, RigidTransform, Vec3};

/// A half-turn about an axis lying in the target plane, hinged away from the
/// body so the rotation also relocates the body's origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HingeFlip {
    /// Unit rotation axis (target plane-1 uDirection).
    pub axis: Vec3,
    /// Point the axis passes through.
    pub center: Point3d,
    pub transform: RigidTransform,
}

/// Build the hinge flip for a body whose plane-1 origin has already been
/// aligned to `aligned_source_origin`.
///
/// The rotation center sits `hinge_offset` units along the target normal from
/// that origin: a half-turn about an axis through the origin itself would
/// leave the origin where it is.
pub fn hinge_flip(target: &OrientedPlane, aligned_source_origin: Point3d, hinge_offset: f64) -> Result<HingeFlip> {
    if !hinge_offset.is_finite() {
        return Err(AlignError::InvalidHingeOffset { offset: hinge_offset });
    }
    let axis = target.u_direction().normalize()?;
    let offset = target.normal().normalize()?.scaled(hinge_offset);
    let center = aligned_source_origin.translated(&offset);
    let transform = RigidTransform::rotation_about_axis(axis, PI, center)?;
    debug!(?axis, ?center, hinge_offset, "hinge flip");
    Ok(HingeFlip {
        axis,
        center,
        transform,
    })
}

/// Transform-only form of [`hinge_flip`]. Apply it after the base alignment,
/// never folded into it.
pub fn compute_flip(target: &OrientedPlane, aligned_source_origin: Point3d, hinge_offset: f64) -> Result<RigidTransform> {
    hinge_flip(target, aligned_source_origin, hinge_offset).map(|flip| flip.transform)
}
