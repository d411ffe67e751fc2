//! Observability record of an alignment run.
//!
//! Nothing in the kernel branches on the report; hosts print or persist it
//! when the request's debug flag is set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{OrientedPlane, Point3d, RigidTransform, Vec3};

const RULE_WIDTH: usize = 50;

/// Pre-transform description of one plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneSummary {
    pub origin: Point3d,
    pub normal: Vec3,
    pub u_direction: Vec3,
    /// `uDirection × normal`, the display convention.
    pub v_direction: Vec3,
}

impl PlaneSummary {
    pub fn of(plane: &OrientedPlane) -> Result<Self> {
        Ok(Self {
            origin: plane.origin(),
            normal: plane.normal(),
            u_direction: plane.u_direction(),
            v_direction: plane.display_v_direction()?,
        })
    }
}

/// Where a plane's origin and normal end up under a transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPose {
    pub origin: Point3d,
    pub normal: Vec3,
}

impl PredictedPose {
    pub fn of(plane: &OrientedPlane, transform: &RigidTransform) -> Self {
        Self {
            origin: plane.origin().transformed(transform),
            normal: transform.transform_vector(&plane.normal()),
        }
    }

    pub fn then(&self, transform: &RigidTransform) -> Self {
        Self {
            origin: self.origin.transformed(transform),
            normal: transform.transform_vector(&self.normal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionAxes {
    pub source: Vec3,
    pub target: Vec3,
}

/// Which aligner produced the base transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignmentStrategy {
    SinglePlane,
    TwoPlane,
    /// A second pair was supplied but incomplete or degenerate.
    SinglePlaneFallback { reason: String },
}

impl fmt::Display for AlignmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentStrategy::SinglePlane => f.write_str("SINGLE-PLANE"),
            AlignmentStrategy::TwoPlane => f.write_str("TWO-PLANE"),
            AlignmentStrategy::SinglePlaneFallback { reason } => write!(f, "SINGLE-PLANE ({reason})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlipSummary {
    pub axis: Vec3,
    pub center: Point3d,
    /// Source plane 1 after the base transform and then the flip.
    pub predicted: PredictedPose,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub source_plane1: PlaneSummary,
    pub target_plane1: PlaneSummary,
    pub source_plane2: Option<PlaneSummary>,
    pub target_plane2: Option<PlaneSummary>,
    pub intersection_axes: Option<IntersectionAxes>,
    pub strategy: AlignmentStrategy,
    pub predicted_source1: PredictedPose,
    pub predicted_source2: Option<PredictedPose>,
    pub flip: Option<FlipSummary>,
    /// Distance travelled by source plane 1's origin under the base transform.
    pub translation_distance: f64,
    pub rotation_angle_deg: f64,
}

fn write_point(f: &mut fmt::Formatter<'_>, label: &str, p: &Point3d) -> fmt::Result {
    writeln!(f, "  {label}: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
}

fn write_direction(f: &mut fmt::Formatter<'_>, label: &str, v: &Vec3) -> fmt::Result {
    writeln!(f, "  {label}: ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn write_plane(f: &mut fmt::Formatter<'_>, title: &str, plane: &PlaneSummary) -> fmt::Result {
    writeln!(f, "{title}:")?;
    write_point(f, "Origin", &plane.origin)?;
    write_direction(f, "Normal", &plane.normal)?;
    write_direction(f, "uDirection", &plane.u_direction)?;
    write_direction(f, "vDirection", &plane.v_direction)?;
    writeln!(f)
}

fn write_pose(f: &mut fmt::Formatter<'_>, title: &str, pose: &PredictedPose) -> fmt::Result {
    writeln!(f, "{title}:")?;
    write_point(f, "Origin", &pose.origin)?;
    write_direction(f, "Normal", &pose.normal)?;
    writeln!(f)
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "DEBUG INFO")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        write_plane(f, "SOURCE PLANE 1 (Before)", &self.source_plane1)?;
        write_plane(f, "TARGET PLANE 1", &self.target_plane1)?;
        if let Some(plane) = &self.source_plane2 {
            write_plane(f, "SOURCE PLANE 2 (Before)", plane)?;
        }
        if let Some(plane) = &self.target_plane2 {
            write_plane(f, "TARGET PLANE 2", plane)?;
        }
        if let Some(axes) = &self.intersection_axes {
            let (s, t) = (axes.source, axes.target);
            writeln!(f, "Source planes intersection axis: ({:.3}, {:.3}, {:.3})", s.x, s.y, s.z)?;
            writeln!(f, "Target planes intersection axis: ({:.3}, {:.3}, {:.3})", t.x, t.y, t.z)?;
            writeln!(f)?;
        }

        writeln!(f, "Using {} alignment", self.strategy)?;
        writeln!(f)?;

        if let Some(flip) = &self.flip {
            writeln!(f, "Computed 180° FLIP transform around uDirection axis")?;
            write_direction(f, "Flip axis", &flip.axis)?;
            write_point(f, "Rotation center (offset)", &flip.center)?;
            writeln!(f)?;
        }

        write_pose(f, "PREDICTED SOURCE PLANE 1 (After transform)", &self.predicted_source1)?;
        if let Some(flip) = &self.flip {
            write_pose(f, "PREDICTED SOURCE PLANE 1 (After flip)", &flip.predicted)?;
        }
        if let Some(pose) = &self.predicted_source2 {
            write_pose(f, "PREDICTED SOURCE PLANE 2 (After transform)", pose)?;
        }

        writeln!(f, "Translation distance: {:.2}", self.translation_distance)?;
        writeln!(f, "Rotation angle: {:.2}°", self.rotation_angle_deg)?;
        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(plane: &OrientedPlane) -> PlaneSummary {
        PlaneSummary::of(plane).unwrap()
    }

    fn sample_report() -> AlignmentReport {
        let src = OrientedPlane::new(Point3d::ORIGIN, Vec3::Z, Vec3::X).unwrap();
        let tgt = OrientedPlane::new(Point3d::new(5.0, 0.0, 0.0), Vec3::Z, Vec3::X).unwrap();
        let shift = RigidTransform::from_translation(Vec3::new(5.0, 0.0, 0.0));
        AlignmentReport {
            source_plane1: summary(&src),
            target_plane1: summary(&tgt),
            source_plane2: None,
            target_plane2: None,
            intersection_axes: None,
            strategy: AlignmentStrategy::SinglePlane,
            predicted_source1: PredictedPose::of(&src, &shift),
            predicted_source2: None,
            flip: None,
            translation_distance: 5.0,
            rotation_angle_deg: 0.0,
        }
    }

    #[test]
    fn test_summary_uses_display_v_direction() {
        let plane = OrientedPlane::new(Point3d::ORIGIN, Vec3::Z, Vec3::X).unwrap();
        assert_eq!(summary(&plane).v_direction, -Vec3::Y);
    }

    #[test]
    fn test_predicted_pose_moves_origin_not_normal() {
        let plane = OrientedPlane::new(Point3d::new(1.0, 1.0, 1.0), Vec3::Z, Vec3::X).unwrap();
        let pose = PredictedPose::of(&plane, &RigidTransform::from_translation(Vec3::X));
        assert_eq!(pose.origin, Point3d::new(2.0, 1.0, 1.0));
        assert_eq!(pose.normal, Vec3::Z);
    }

    #[test]
    fn test_display_sections() {
        let text = sample_report().to_string();
        assert!(text.starts_with("DEBUG INFO\n"));
        assert!(text.contains("SOURCE PLANE 1 (Before):\n  Origin: (0.00, 0.00, 0.00)"));
        assert!(text.contains("  vDirection: (0.000, -1.000, 0.000)"));
        assert!(text.contains("Using SINGLE-PLANE alignment"));
        assert!(text.contains("PREDICTED SOURCE PLANE 1 (After transform):\n  Origin: (5.00, 0.00, 0.00)"));
        assert!(text.contains("Translation distance: 5.00"));
        assert!(!text.contains("FLIP"));
        assert!(!text.contains("PLANE 2"));
    }

    #[test]
    fn test_fallback_strategy_shows_reason() {
        let strategy = AlignmentStrategy::SinglePlaneFallback {
            reason: "target plane 2 missing".into(),
        };
        assert_eq!(strategy.to_string(), "SINGLE-PLANE (target plane 2 missing)");
    }

    #[test]
    fn test_strategy_json_is_tagged() {
        let json = serde_json::to_string(&AlignmentStrategy::TwoPlane).unwrap();
        assert_eq!(json, r#"{"kind":"two_plane"}"#);
    }
}
