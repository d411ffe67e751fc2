pub mod point;
pub mod vector;
pub mod transform;
pub mod plane;
pub mod frame;

pub use frame::{build_frame, Frame};
pub use plane::{OrientedPlane, PlaneDescriptor};
pub use point::Point3d;
pub use transform::RigidTransform;
pub use vector::Vec3;
