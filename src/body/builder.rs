//! Builder for assembling body records from sensor readouts.

use crate::body::clipped_edges::ClippedEdges;
use crate::body::frame::BodyRecord;
use crate::body::hand_state::HandState;
use crate::body::joint::{JointSample, JointType};

/// Builder for creating `BodyRecord` objects field by field.
///
/// Frame acquisition layers read joints out of vendor buffers one at a
/// time; the builder collects them without exposing the record's joint
/// table layout.
#[derive(Debug, Clone)]
pub struct BodyRecordBuilder {
    record: BodyRecord,
}

impl BodyRecordBuilder {
    /// Start a tracked record for the given sensor identifier.
    pub fn new(tracking_id: u64) -> Self {
        Self {
            record: BodyRecord::new(tracking_id),
        }
    }

    /// Mark the record as not currently tracked.
    pub fn untracked(mut self) -> Self {
        self.record.is_tracked = false;
        self
    }

    /// Add one joint sample.
    pub fn joint(mut self, joint: JointType, sample: JointSample) -> Self {
        self.record.set_joint(joint, sample);
        self
    }

    /// Set both hand states.
    pub fn hands(mut self, left: HandState, right: HandState) -> Self {
        self.record.hand_left = left;
        self.record.hand_right = right;
        self
    }

    /// Set the clipped-edge flags.
    pub fn clipped_edges(mut self, edges: ClippedEdges) -> Self {
        self.record.clipped_edges = edges;
        self
    }

    /// Build the final `BodyRecord`.
    pub fn build(self) -> BodyRecord {
        self.record
    }
}
