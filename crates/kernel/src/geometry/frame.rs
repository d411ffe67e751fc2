use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::plane::OrientedPlane;
use super::point::Point3d;
use super::vector::Vec3;
use crate::error::Result;

/// An orthonormal coordinate frame anchored at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point3d,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Frame {
    pub fn new(origin: Point3d, x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Axes as matrix columns: maps frame-local coordinates to world directions.
    pub fn basis(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[
            Vector3::from(self.x_axis),
            Vector3::from(self.y_axis),
            Vector3::from(self.z_axis),
        ])
    }
}

/// Frame of a single plane: `x = uDirection`, `y = normal`,
/// `z = normalize(normal × uDirection)`.
///
/// The `normal × uDirection` order is fixed for every aligner; both sides of
/// an alignment are built the same way so the resulting rotation is proper.
pub fn build_frame(plane: &OrientedPlane) -> Result<Frame> {
    Ok(Frame::new(
        plane.origin(),
        plane.u_direction(),
        plane.normal(),
        plane.frame_z_axis()?,
    ))
}
