//! Plane-to-plane alignment: aligners, hinge flip, equivalence check and the
//! orchestrator that ties them together.

pub mod equivalence;
pub mod flip;
pub mod orchestrator;
pub mod report;
pub mod request;
pub mod single;
pub mod two_plane;

pub use equivalence::{is_identity, transforms_equal, PROBE_POINTS};
pub use flip::{compute_flip, hinge_flip, HingeFlip};
pub use orchestrator::{compute_alignment, compute_alignment_with, AlignmentResult};
pub use report::{AlignmentReport, AlignmentStrategy, FlipSummary, IntersectionAxes, PlaneSummary, PredictedPose};
pub use request::AlignmentRequest;
pub use single::align_single_plane;
pub use two_plane::{align_two_planes, intersection_axis};
