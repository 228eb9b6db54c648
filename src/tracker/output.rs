//! Per-frame tracker output consumed by the presentation layer.

use nalgebra::Point2;

use crate::tracker::slot::SlotColor;

/// Visual state for one occupied slot after a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotUpdate {
    /// Slot index, `0..capacity`
    pub slot: usize,
    /// Sensor identifier currently occupying the slot
    pub tracking_id: u64,
    /// Position on the plan-view overlay
    pub position: Point2<f32>,
    /// Shoulder-line heading in whole degrees, `0.0` when a shoulder is missing
    pub orientation_degrees: f32,
    /// Display color fixed to this slot
    pub color: SlotColor,
    /// Raw ground-plane coordinates as table text
    pub coordinates: String,
    /// True the first frame this identifier occupies the slot
    pub newly_assigned: bool,
}

/// Result of processing one body frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSummary {
    /// One entry per tracked body that produced a visual update this frame
    pub updates: Vec<SlotUpdate>,
    /// Slots still occupied after the frame
    pub occupied: usize,
    /// Lifetime visit counter
    pub total_visits: u64,
}

impl FrameSummary {
    /// True when no slot holds a body; the sink clears its visuals and
    /// resets the occupancy overlay.
    pub fn all_clear(&self) -> bool {
        self.occupied == 0
    }
}
