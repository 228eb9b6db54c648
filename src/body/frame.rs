//! Per-tick body frames and the records they carry.

use crate::body::clipped_edges::ClippedEdges;
use crate::body::hand_state::HandState;
use crate::body::joint::{JointSample, JointType};

/// Maximum number of bodies the sensor tracks simultaneously.
pub const MAX_BODIES: usize = 6;

/// One detected body in a single frame.
///
/// `tracking_id` is assigned by the sensor and is only meaningful while the
/// body stays continuously tracked; `0` is reserved to mean "absent".
#[derive(Debug, Clone)]
pub struct BodyRecord {
    /// Sensor-assigned identifier, unique among bodies tracked in one frame
    pub tracking_id: u64,
    /// Whether the sensor considers this body tracked
    pub is_tracked: bool,
    /// Left hand pose
    pub hand_left: HandState,
    /// Right hand pose
    pub hand_right: HandState,
    /// View edges this body is clipped by
    pub clipped_edges: ClippedEdges,
    joints: [Option<JointSample>; JointType::COUNT],
}

impl BodyRecord {
    /// Create a tracked body record with an empty joint table.
    pub fn new(tracking_id: u64) -> Self {
        Self {
            tracking_id,
            is_tracked: true,
            hand_left: HandState::default(),
            hand_right: HandState::default(),
            clipped_edges: ClippedEdges::NONE,
            joints: [None; JointType::COUNT],
        }
    }

    /// Create an untracked placeholder record (the sensor pads its body
    /// array with these).
    pub fn untracked() -> Self {
        let mut record = Self::new(0);
        record.is_tracked = false;
        record
    }

    /// Look up one joint sample.
    #[inline]
    pub fn joint(&self, joint: JointType) -> Option<JointSample> {
        self.joints[joint as usize]
    }

    /// Store or replace one joint sample.
    pub fn set_joint(&mut self, joint: JointType, sample: JointSample) {
        self.joints[joint as usize] = Some(sample);
    }

    /// Iterate the populated joints in table order.
    pub fn joints(&self) -> impl Iterator<Item = (JointType, JointSample)> + '_ {
        JointType::ALL
            .into_iter()
            .filter_map(|joint| self.joints[joint as usize].map(|sample| (joint, sample)))
    }
}

/// One sensor tick's worth of body records.
///
/// A frame is ephemeral: it is consumed by the tracker and superseded
/// entirely by the next tick.
#[derive(Debug, Clone, Default)]
pub struct BodyFrame {
    bodies: Vec<BodyRecord>,
}

impl BodyFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(MAX_BODIES),
        }
    }

    /// Create a frame from a prepared set of records.
    pub fn from_records(bodies: Vec<BodyRecord>) -> Self {
        Self { bodies }
    }

    /// Append a record, preserving sensor delivery order.
    pub fn push(&mut self, record: BodyRecord) {
        self.bodies.push(record);
    }

    /// All records, tracked or not, in delivery order.
    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    /// Records the sensor currently tracks, in delivery order.
    ///
    /// Placeholder records (`tracking_id == 0`) never count as tracked.
    pub fn tracked(&self) -> impl Iterator<Item = &BodyRecord> {
        self.bodies
            .iter()
            .filter(|body| body.is_tracked && body.tracking_id != 0)
    }

    /// Number of records in the frame.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the frame carries no records at all.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
