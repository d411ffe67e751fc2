//! Closed-form rigid alignment of a body's reference planes onto target planes.
//!
//! The kernel is pure: it takes plane descriptors and returns transforms plus
//! a report. Applying those transforms to real geometry is the host's job,
//! through [`BodyMover`].

pub mod align;
pub mod config;
pub mod error;
pub mod geometry;
pub mod traits;

// Re-export the host-facing surface at crate root for convenience.
pub use align::{
    compute_alignment, compute_alignment_with, transforms_equal, AlignmentReport, AlignmentRequest, AlignmentResult,
    AlignmentStrategy,
};
pub use config::AlignConfig;
pub use error::{AlignError, PairSide, PlaneRole, Result};
pub use geometry::{OrientedPlane, PlaneDescriptor, Point3d, RigidTransform, Vec3};
pub use traits::{ApplyOutcome, BodyMover, PointCloud};
