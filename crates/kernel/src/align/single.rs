use tracing::debug;

use crate::error::Result;
use crate::geometry::{build_frame, OrientedPlane, RigidTransform};

/// Rigid transform carrying `src` onto `tgt`: origin onto origin, normal onto
/// normal and uDirection onto uDirection.
///
/// Three corresponding orthonormal directions pin the rotation down
/// completely, so this is a closed-form frame-to-frame map.
pub fn align_single_plane(src: &OrientedPlane, tgt: &OrientedPlane) -> Result<RigidTransform> {
    let src_frame = build_frame(src)?;
    let tgt_frame = build_frame(tgt)?;
    debug!(?src_frame, ?tgt_frame, "single-plane frames");
    Ok(RigidTransform::between_frames(&src_frame, &tgt_frame))
}
