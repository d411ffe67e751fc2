use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::equivalence::is_identity;
use super::flip::hinge_flip;
use super::report::{AlignmentReport, AlignmentStrategy, FlipSummary, PlaneSummary, PredictedPose};
use super::request::AlignmentRequest;
use super::single::align_single_plane;
use super::two_plane::align_two_planes_with_axes;
use crate::config::AlignConfig;
use crate::error::{AlignError, PlaneRole, Result};
use crate::geometry::{build_frame, OrientedPlane, PlaneDescriptor, RigidTransform};

/// Outcome of [`compute_alignment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub base_transform: RigidTransform,
    /// Applied after `base_transform` as a separate move.
    pub flip_transform: Option<RigidTransform>,
    /// The base transform is a no-op: the body is already aligned.
    pub identity: bool,
    pub report: AlignmentReport,
}

impl AlignmentResult {
    /// Moves the host should apply, in order. Empty when already aligned.
    pub fn transforms_to_apply(&self) -> Vec<RigidTransform> {
        if self.identity {
            return Vec::new();
        }
        std::iter::once(self.base_transform).chain(self.flip_transform).collect()
    }
}

/// Run an alignment with default configuration.
pub fn compute_alignment(request: &AlignmentRequest) -> Result<AlignmentResult> {
    compute_alignment_with(request, &AlignConfig::default())
}

/// Choose the aligner, add the optional hinge flip and build the report.
///
/// Plane 1 (source and target) is required; a degenerate one is reported as
/// `MissingGeometry`. An incomplete or degenerate second pair falls back to
/// single-plane alignment. Aligner errors are returned unchanged.
#[instrument(skip_all, fields(flip = request.flip_requested))]
pub fn compute_alignment_with(request: &AlignmentRequest, config: &AlignConfig) -> Result<AlignmentResult> {
    let src1 = resolve_required(&request.source_plane1, PlaneRole::Source1)?;
    let tgt1 = resolve_required(&request.target_plane1, PlaneRole::Target1)?;
    let src2 = request.source_plane2.as_ref().map(PlaneDescriptor::resolve);
    let tgt2 = request.target_plane2.as_ref().map(PlaneDescriptor::resolve);

    let (base, strategy, intersection_axes) = match (&src2, &tgt2) {
        (Some(Ok(s2)), Some(Ok(t2))) => {
            let (base, axes) = align_two_planes_with_axes(&src1, &tgt1, s2, t2)?;
            (base, AlignmentStrategy::TwoPlane, Some(axes))
        }
        (None, None) => (align_single_plane(&src1, &tgt1)?, AlignmentStrategy::SinglePlane, None),
        _ => {
            let reason = fallback_reason(&src2, &tgt2);
            warn!(%reason, "second plane pair unusable, using single-plane alignment");
            (
                align_single_plane(&src1, &tgt1)?,
                AlignmentStrategy::SinglePlaneFallback { reason },
                None,
            )
        }
    };

    let predicted_source1 = PredictedPose::of(&src1, &base);

    let flip = if request.flip_requested {
        Some(hinge_flip(&tgt1, predicted_source1.origin, config.hinge_offset)?)
    } else {
        None
    };

    let identity = is_identity(&base, config.equivalence_tolerance);

    let report = AlignmentReport {
        source_plane1: PlaneSummary::of(&src1)?,
        target_plane1: PlaneSummary::of(&tgt1)?,
        source_plane2: summarize_valid(&src2)?,
        target_plane2: summarize_valid(&tgt2)?,
        intersection_axes,
        strategy,
        predicted_source1,
        predicted_source2: valid(&src2).map(|plane| PredictedPose::of(plane, &base)),
        flip: flip.as_ref().map(|f| FlipSummary {
            axis: f.axis,
            center: f.center,
            predicted: predicted_source1.then(&f.transform),
        }),
        translation_distance: src1.origin().distance_to(&predicted_source1.origin),
        rotation_angle_deg: base.rotation_angle().to_degrees(),
    };

    info!(
        strategy = %report.strategy,
        identity,
        translation = report.translation_distance,
        rotation_deg = report.rotation_angle_deg,
        "alignment computed"
    );

    Ok(AlignmentResult {
        base_transform: base,
        flip_transform: flip.map(|f| f.transform),
        identity,
        report,
    })
}

fn resolve_required(descriptor: &PlaneDescriptor, role: PlaneRole) -> Result<OrientedPlane> {
    descriptor
        .resolve()
        .and_then(|plane| build_frame(&plane).map(|_| plane))
        .map_err(|reason| AlignError::MissingGeometry {
            role,
            reason: Box::new(reason),
        })
}

fn valid(slot: &Option<Result<OrientedPlane>>) -> Option<&OrientedPlane> {
    match slot {
        Some(Ok(plane)) => Some(plane),
        _ => None,
    }
}

fn summarize_valid(slot: &Option<Result<OrientedPlane>>) -> Result<Option<PlaneSummary>> {
    valid(slot).map(PlaneSummary::of).transpose()
}

fn fallback_reason(src2: &Option<Result<OrientedPlane>>, tgt2: &Option<Result<OrientedPlane>>) -> String {
    if let Some(Err(err)) = src2 {
        return format!("{} is degenerate: {err}", PlaneRole::Source2);
    }
    if let Some(Err(err)) = tgt2 {
        return format!("{} is degenerate: {err}", PlaneRole::Target2);
    }
    let missing = if src2.is_none() {
        PlaneRole::Source2
    } else {
        PlaneRole::Target2
    };
    format!("{missing} missing")
}
