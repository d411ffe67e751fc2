//! Numeric thresholds and tunables for plane alignment.

use serde::{Deserialize, Serialize};

/// Vectors (and cross products) shorter than this are treated as zero.
///
/// Shared by normalization, the frame builder and the two-plane parallel
/// check so every degeneracy decision uses the same threshold.
pub const EPSILON: f64 = 1e-9;

/// Default per-coordinate tolerance for transform equivalence.
pub const DEFAULT_EQUIVALENCE_TOLERANCE: f64 = 1e-6;

/// Default distance from the aligned origin to the flip hinge (model units).
pub const DEFAULT_HINGE_OFFSET: f64 = 10.0;

/// Tunables for an alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Per-coordinate tolerance used to detect a no-op alignment.
    pub equivalence_tolerance: f64,
    /// Distance along the target normal from the aligned origin to the
    /// 180° flip hinge.
    pub hinge_offset: f64,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            equivalence_tolerance: DEFAULT_EQUIVALENCE_TOLERANCE,
            hinge_offset: DEFAULT_HINGE_OFFSET,
        }
    }
}

impl AlignConfig {
    pub fn with_hinge_offset(self, hinge_offset: f64) -> Self {
        Self {
            hinge_offset,
            ..self
        }
    }

    pub fn with_equivalence_tolerance(self, equivalence_tolerance: f64) -> Self {
        Self {
            equivalence_tolerance,
            ..self
        }
    }
}
