//! The seam between the kernel and the host that owns the real body.
//!
//! The kernel only produces transforms; a [`BodyMover`] applies them. Hosts
//! implement it over their own mesh or scene types.

use std::convert::Infallible;

use tracing::debug;

use crate::align::AlignmentResult;
use crate::geometry::{Point3d, RigidTransform};

/// Applies one rigid move to a body, as a single host operation.
pub trait BodyMover {
    type Error;

    fn apply_move(&mut self, transform: &RigidTransform) -> Result<(), Self::Error>;
}

/// What [`AlignmentResult::apply_to`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The base transform was a no-op; nothing was applied.
    AlreadyAligned,
    /// The base move was applied, followed by the flip when `flipped`.
    Moved { flipped: bool },
}

impl AlignmentResult {
    /// Apply the base move, then the flip as a second independent move.
    ///
    /// Skips everything, flip included, when the body is already aligned.
    pub fn apply_to<M: BodyMover>(&self, mover: &mut M) -> Result<ApplyOutcome, M::Error> {
        if self.identity {
            debug!("already aligned, no move applied");
            return Ok(ApplyOutcome::AlreadyAligned);
        }
        mover.apply_move(&self.base_transform)?;
        if let Some(flip) = &self.flip_transform {
            mover.apply_move(flip)?;
        }
        Ok(ApplyOutcome::Moved {
            flipped: self.flip_transform.is_some(),
        })
    }
}

/// A body represented by its vertex positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point3d>,
}

impl PointCloud {
    pub fn new(points: Vec<Point3d>) -> Self {
        Self { points }
    }
}

impl BodyMover for PointCloud {
    type Error = Infallible;

    fn apply_move(&mut self, transform: &RigidTransform) -> Result<(), Infallible> {
        for p in &mut self.points {
            *p = p.transformed(transform);
        }
        Ok(())
    }
}
