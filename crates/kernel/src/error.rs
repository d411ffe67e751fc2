use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which plane slot of an alignment request a failure relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneRole {
    Source1,
    Target1,
    Source2,
    Target2,
}

impl fmt::Display for PlaneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaneRole::Source1 => "source plane 1",
            PlaneRole::Target1 => "target plane 1",
            PlaneRole::Source2 => "source plane 2",
            PlaneRole::Target2 => "target plane 2",
        };
        f.write_str(name)
    }
}

/// Side of a two-plane pair whose normals failed to define an intersection axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairSide {
    Source,
    Target,
}

impl fmt::Display for PairSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSide::Source => f.write_str("source"),
            PairSide::Target => f.write_str("target"),
        }
    }
}

/// Failures of the alignment kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    #[error("Cannot normalize near-zero vector (magnitude: {magnitude:e})")]
    DegenerateVector { magnitude: f64 },

    #[error("Plane normal and uDirection are parallel (cross magnitude: {magnitude:e})")]
    DegeneratePlane { magnitude: f64 },

    #[error("The {side} plane normals are parallel, no intersection axis (cross magnitude: {magnitude:e})")]
    ParallelPlanes { side: PairSide, magnitude: f64 },

    #[error("Hinge offset must be finite (got {offset})")]
    InvalidHingeOffset { offset: f64 },

    #[error("Missing geometry for {role}: {reason}")]
    MissingGeometry {
        role: PlaneRole,
        reason: Box<AlignError>,
    },
}

pub type Result<T> = std::result::Result<T, AlignError>;
