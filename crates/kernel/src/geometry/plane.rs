use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;
use crate::config::EPSILON;
use crate::error::{AlignError, Result};

/// Raw plane pose as read from the host: nothing is validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneDescriptor {
    pub origin: Point3d,
    pub normal: Vec3,
    pub u_direction: Vec3,
}

impl PlaneDescriptor {
    pub fn new(origin: Point3d, normal: Vec3, u_direction: Vec3) -> Self {
        Self {
            origin,
            normal,
            u_direction,
        }
    }

    pub fn resolve(&self) -> Result<OrientedPlane> {
        OrientedPlane::new(self.origin, self.normal, self.u_direction)
    }
}

/// A validated plane pose: origin, unit normal and unit in-plane reference
/// direction orthogonal to the normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrientedPlane {
    origin: Point3d,
    normal: Vec3,
    u_direction: Vec3,
}

impl OrientedPlane {
    /// Both directions are normalized and `u_direction` loses any component
    /// along the normal, so near-orthogonal input still yields an exact
    /// orthonormal pair.
    pub fn new(origin: Point3d, normal: Vec3, u_direction: Vec3) -> Result<Self> {
        let normal = normal.normalize()?;
        let u = u_direction.normalize()?;
        let magnitude = normal.cross(&u).length();
        if magnitude < EPSILON {
            return Err(AlignError::DegeneratePlane { magnitude });
        }
        let u_direction = (u - normal * u.dot(&normal)).normalize()?;
        Ok(Self {
            origin,
            normal,
            u_direction,
        })
    }

    pub fn origin(&self) -> Point3d {
        self.origin
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn u_direction(&self) -> Vec3 {
        self.u_direction
    }

    /// `uDirection × normal`: the in-plane orthogonal axis shown in reports.
    ///
    /// Opposite in sign to [`OrientedPlane::frame_z_axis`]; the two are not
    /// interchangeable.
    pub fn display_v_direction(&self) -> Result<Vec3> {
        self.u_direction.cross(&self.normal).normalize()
    }

    /// `normal × uDirection`: the third axis of the alignment frame.
    pub fn frame_z_axis(&self) -> Result<Vec3> {
        let z = self.normal.cross(&self.u_direction);
        let magnitude = z.length();
        if magnitude < EPSILON {
            return Err(AlignError::DegeneratePlane { magnitude });
        }
        Ok(z / magnitude)
    }
}

impl TryFrom<PlaneDescriptor> for OrientedPlane {
    type Error = AlignError;

    fn try_from(descriptor: PlaneDescriptor) -> Result<Self> {
        descriptor.resolve()
    }
}
