//! Serialized skeleton records for the telemetry sink.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::body::{BodyRecord, TrackingState};

/// One persisted joint observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub tracking_state: TrackingState,
}

/// One tracked body at one sensor tick.
///
/// Joints are keyed by joint name; a `BTreeMap` keeps the serialized
/// output in a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonSnapshot {
    pub camera_id: String,
    pub timestamp: DateTime<Local>,
    pub body_id: u64,
    pub joints: BTreeMap<String, JointSnapshot>,
}

impl SkeletonSnapshot {
    /// Capture a body's full joint set under the given sensor id and
    /// wall-clock timestamp.
    pub fn capture(camera_id: &str, timestamp: DateTime<Local>, body: &BodyRecord) -> Self {
        let joints = body
            .joints()
            .map(|(joint, sample)| {
                (
                    joint.name().to_string(),
                    JointSnapshot {
                        x: sample.position.x,
                        y: sample.position.y,
                        z: sample.position.z,
                        tracking_state: sample.state,
                    },
                )
            })
            .collect();
        Self {
            camera_id: camera_id.to_string(),
            timestamp,
            body_id: body.tracking_id,
            joints,
        }
    }
}
