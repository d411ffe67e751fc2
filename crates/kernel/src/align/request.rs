use serde::{Deserialize, Serialize};

use crate::geometry::PlaneDescriptor;

/// One alignment invocation as handed over by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentRequest {
    pub source_plane1: PlaneDescriptor,
    pub target_plane1: PlaneDescriptor,
    #[serde(default)]
    pub source_plane2: Option<PlaneDescriptor>,
    #[serde(default)]
    pub target_plane2: Option<PlaneDescriptor>,
    /// Add a 180° hinge flip on plane 1 after the base alignment.
    #[serde(default)]
    pub flip_requested: bool,
    /// Host hint to persist or display the report. The kernel ignores it.
    #[serde(default)]
    pub debug: bool,
}

impl AlignmentRequest {
    pub fn new(source_plane1: PlaneDescriptor, target_plane1: PlaneDescriptor) -> Self {
        Self {
            source_plane1,
            target_plane1,
            source_plane2: None,
            target_plane2: None,
            flip_requested: false,
            debug: false,
        }
    }

    pub fn with_second_pair(mut self, source_plane2: PlaneDescriptor, target_plane2: PlaneDescriptor) -> Self {
        self.source_plane2 = Some(source_plane2);
        self.target_plane2 = Some(target_plane2);
        self
    }

    pub fn with_flip(mut self, flip_requested: bool) -> Self {
        self.flip_requested = flip_requested;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
