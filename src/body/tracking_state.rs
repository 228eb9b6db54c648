use serde::{Deserialize, Serialize};

/// Tracking confidence reported by the sensor for a single joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingState {
    /// Joint was not observed in this frame
    #[default]
    NotTracked,
    /// Position estimated from neighboring joints
    Inferred,
    /// Joint directly observed by the sensor
    Tracked,
}
