use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use super::frame::Frame;
use super::point::Point3d;
use super::vector::Vec3;
use crate::error::Result;

/// A distance-preserving affine map `p' = R·p + t`.
///
/// Points pick up the translation; free vectors only see the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl RigidTransform {
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    pub fn from_translation(offset: Vec3) -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: offset.into(),
        }
    }

    /// Rotation by `angle` radians about the line through `center` along `axis`.
    ///
    /// Unless `center` lies at the world origin the result also translates.
    pub fn rotation_about_axis(axis: Vec3, angle: f64, center: Point3d) -> Result<Self> {
        let axis = Unit::new_unchecked(Vector3::from(axis.normalize()?));
        let rotation = Rotation3::from_axis_angle(&axis, angle).into_inner();
        let c: Vector3<f64> = center.to_vec3().into();
        Ok(Self {
            rotation,
            translation: c - rotation * c,
        })
    }

    /// The transform carrying `src` onto `tgt`: origin onto origin and each
    /// source axis onto the matching target axis.
    ///
    /// Both bases are orthonormal, so `B_src⁻¹ = B_srcᵀ`.
    pub fn between_frames(src: &Frame, tgt: &Frame) -> Self {
        let rotation = tgt.basis() * src.basis().transpose();
        let src_origin: Vector3<f64> = src.origin.to_vec3().into();
        let tgt_origin: Vector3<f64> = tgt.origin.to_vec3().into();
        Self {
            rotation,
            translation: tgt_origin - rotation * src_origin,
        }
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    pub fn translation(&self) -> Vec3 {
        self.translation.into()
    }

    /// Rotation angle in radians, in `[0, π]`.
    pub fn rotation_angle(&self) -> f64 {
        ((self.rotation.trace() - 1.0) * 0.5).clamp(-1.0, 1.0).acos()
    }

    /// Transform a point (applies translation).
    pub fn transform_point(&self, p: &Point3d) -> Point3d {
        let v = self.rotation * Vector3::from(p.to_vec3()) + self.translation;
        Point3d::new(v.x, v.y, v.z)
    }

    /// Transform a vector (no translation).
    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        (self.rotation * Vector3::from(*v)).into()
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(&self, next: &RigidTransform) -> RigidTransform {
        RigidTransform {
            rotation: next.rotation * self.rotation,
            translation: next.rotation * self.translation + next.translation,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.rotation.iter().all(|v| v.is_finite()) && self.translation.iter().all(|v| v.is_finite())
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}
