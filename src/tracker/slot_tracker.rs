//! Fixed-capacity slot assignment across body frames.

use std::collections::HashSet;

use log::{debug, warn};

use crate::body::{BodyFrame, BodyRecord, JointType, MAX_BODIES};
use crate::tracker::geometry;
use crate::tracker::output::{FrameSummary, SlotUpdate};
use crate::tracker::slot::slot_color;

/// Configuration for the SlotTracker.
#[derive(Debug, Clone)]
pub struct SlotTrackerConfig {
    /// Number of identity slots; matches the sensor's simultaneous-body limit
    pub capacity: usize,
    /// Height of the plan-view overlay in display units
    pub view_height: f32,
}

impl Default for SlotTrackerConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_BODIES,
            view_height: 424.0,
        }
    }
}

/// Maintains a stable slot per tracked body across frames.
///
/// The sensor hands out volatile tracking identifiers; the tracker pins
/// each identifier to the lowest free slot index and keeps it there for as
/// long as the identifier stays present. Slot index decides display color
/// and table row, so a body keeps its on-screen identity frame to frame.
pub struct SlotTracker {
    /// Occupant identifier per slot, `0` = empty
    slots: Vec<u64>,
    total_visits: u64,
    config: SlotTrackerConfig,
}

impl SlotTracker {
    pub fn new(config: SlotTrackerConfig) -> Self {
        let slots = vec![0; config.capacity];
        Self {
            slots,
            total_visits: 0,
            config,
        }
    }

    /// Process one frame and return the per-slot output.
    ///
    /// Runs synchronously to completion; callers must feed frames one at a
    /// time, in sensor order.
    pub fn process_frame(&mut self, frame: &BodyFrame) -> FrameSummary {
        let present: HashSet<u64> = frame.tracked().map(|body| body.tracking_id).collect();

        // Release pass: a slot frees only when its occupant's identifier
        // left the frame.
        for occupant in self.slots.iter_mut() {
            if *occupant != 0 && !present.contains(occupant) {
                debug!("slot released: id {}", *occupant);
                *occupant = 0;
            }
        }

        // Update/assign pass, in sensor delivery order.
        let mut updates = Vec::new();
        for body in frame.tracked() {
            // Missing reference joint: no slot change, no visual update
            let Some(spine) = body.joint(JointType::SpineMid) else {
                continue;
            };
            let position = geometry::plan_position(
                spine.position.x,
                spine.position.z,
                self.config.view_height,
            );

            if let Some(slot) = self.find_slot(body.tracking_id) {
                updates.push(self.slot_update(slot, body, position, false));
            } else if let Some(slot) = self.first_empty_slot() {
                self.slots[slot] = body.tracking_id;
                self.total_visits += 1;
                debug!(
                    "slot {} assigned to id {} (visit {})",
                    slot, body.tracking_id, self.total_visits
                );
                updates.push(self.slot_update(slot, body, position, true));
            } else {
                // More simultaneous bodies than slots; drop the overflow
                warn!(
                    "no free slot for tracking id {}, dropping body",
                    body.tracking_id
                );
            }
        }

        FrameSummary {
            updates,
            occupied: self.occupied_slots(),
            total_visits: self.total_visits,
        }
    }

    /// Empty every slot and zero the visit counter (new sensor session).
    pub fn reset(&mut self) {
        self.slots.fill(0);
        self.total_visits = 0;
    }

    /// Lifetime count of slot grants.
    pub fn total_visits(&self) -> u64 {
        self.total_visits
    }

    /// Number of slots currently holding a body.
    pub fn occupied_slots(&self) -> usize {
        self.slots.iter().filter(|&&id| id != 0).count()
    }

    /// Identifier occupying a slot, if any.
    pub fn slot_occupant(&self, slot: usize) -> Option<u64> {
        match self.slots.get(slot) {
            Some(&id) if id != 0 => Some(id),
            _ => None,
        }
    }

    /// Number of identity slots.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn find_slot(&self, tracking_id: u64) -> Option<usize> {
        self.slots.iter().position(|&id| id == tracking_id)
    }

    fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|&id| id == 0)
    }

    fn slot_update(
        &self,
        slot: usize,
        body: &BodyRecord,
        position: nalgebra::Point2<f32>,
        newly_assigned: bool,
    ) -> SlotUpdate {
        SlotUpdate {
            slot,
            tracking_id: body.tracking_id,
            position,
            orientation_degrees: orientation_of(body),
            color: slot_color(slot),
            coordinates: coordinates_text(body),
            newly_assigned,
        }
    }
}

/// Shoulder-line heading for a body, `0.0` when either shoulder is absent.
fn orientation_of(body: &BodyRecord) -> f32 {
    let (Some(right), Some(left)) = (
        body.joint(JointType::ShoulderRight),
        body.joint(JointType::ShoulderLeft),
    ) else {
        return 0.0;
    };
    geometry::body_orientation(
        (right.position.x, right.position.z),
        (left.position.x, left.position.z),
    )
}

/// Raw ground-plane coordinates as shown in the detail table.
///
/// Depth reads as Y here: seen from above, the sensor's Z axis is the
/// vertical axis of a Cartesian plane.
fn coordinates_text(body: &BodyRecord) -> String {
    match body.joint(JointType::SpineMid) {
        Some(spine) => format!("X: {:.2} Y: {:.2}", spine.position.x, spine.position.z),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::JointSample;

    fn body_at(id: u64, x: f32, z: f32) -> BodyRecord {
        let mut record = BodyRecord::new(id);
        record.set_joint(JointType::SpineMid, JointSample::tracked(x, 0.9, z));
        record.set_joint(
            JointType::ShoulderRight,
            JointSample::tracked(x + 0.2, 1.4, z),
        );
        record.set_joint(
            JointType::ShoulderLeft,
            JointSample::tracked(x - 0.2, 1.4, z),
        );
        record
    }

    fn frame_of(ids: &[u64]) -> BodyFrame {
        BodyFrame::from_records(
            ids.iter()
                .map(|&id| body_at(id, 0.1 * id as f32, 2.0))
                .collect(),
        )
    }

    #[test]
    fn test_assigns_lowest_free_slot() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        let summary = tracker.process_frame(&frame_of(&[10, 20, 30]));

        assert_eq!(summary.occupied, 3);
        assert_eq!(tracker.slot_occupant(0), Some(10));
        assert_eq!(tracker.slot_occupant(1), Some(20));
        assert_eq!(tracker.slot_occupant(2), Some(30));
        assert_eq!(summary.total_visits, 3);
        assert!(summary.updates.iter().all(|u| u.newly_assigned));
    }

    #[test]
    fn test_same_id_keeps_slot() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10, 20]));

        for _ in 0..5 {
            let summary = tracker.process_frame(&frame_of(&[20, 10]));
            assert_eq!(tracker.slot_occupant(0), Some(10));
            assert_eq!(tracker.slot_occupant(1), Some(20));
            assert_eq!(summary.total_visits, 2);
            assert!(summary.updates.iter().all(|u| !u.newly_assigned));
        }
    }

    #[test]
    fn test_release_frees_slot_for_reuse() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10, 20, 30]));

        // 20 disappears; its slot (index 1) is the lowest free slot
        tracker.process_frame(&frame_of(&[10, 30]));
        assert_eq!(tracker.slot_occupant(1), None);
        assert_eq!(tracker.slot_occupant(2), Some(30));

        let summary = tracker.process_frame(&frame_of(&[10, 30, 40]));
        assert_eq!(tracker.slot_occupant(1), Some(40));
        assert_eq!(summary.total_visits, 4);
    }

    #[test]
    fn test_reappearing_id_counts_as_new_visit() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10]));
        assert_eq!(tracker.total_visits(), 1);

        tracker.process_frame(&frame_of(&[]));
        assert_eq!(tracker.occupied_slots(), 0);

        tracker.process_frame(&frame_of(&[10]));
        assert_eq!(tracker.total_visits(), 2);
    }

    #[test]
    fn test_empty_frame_releases_all_and_signals_clear() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10, 20, 30]));

        let summary = tracker.process_frame(&frame_of(&[]));
        assert!(summary.all_clear());
        assert_eq!(summary.occupied, 0);
        assert!(summary.updates.is_empty());
        // Counter survives the clear
        assert_eq!(summary.total_visits, 3);
    }

    #[test]
    fn test_overflow_drops_silently() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        let summary = tracker.process_frame(&frame_of(&[1, 2, 3, 4, 5, 6, 7]));

        assert_eq!(summary.occupied, MAX_BODIES);
        assert_eq!(summary.updates.len(), MAX_BODIES);
        assert_eq!(summary.total_visits, MAX_BODIES as u64);
        // The seventh body got no slot
        assert!(!summary.updates.iter().any(|u| u.tracking_id == 7));
    }

    #[test]
    fn test_occupied_never_exceeds_capacity() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig {
            capacity: 2,
            ..SlotTrackerConfig::default()
        });
        for ids in [&[1u64, 2, 3][..], &[4, 5], &[1, 2, 3, 4, 5]] {
            let summary = tracker.process_frame(&frame_of(ids));
            assert!(summary.occupied <= 2);
        }
    }

    #[test]
    fn test_missing_reference_joint_skips_record() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        let mut no_spine = BodyRecord::new(50);
        no_spine.set_joint(JointType::Head, JointSample::tracked(0.0, 1.7, 2.0));
        let frame = BodyFrame::from_records(vec![no_spine, body_at(60, 0.0, 2.0)]);

        let summary = tracker.process_frame(&frame);
        assert_eq!(summary.updates.len(), 1);
        assert_eq!(summary.updates[0].tracking_id, 60);
        assert_eq!(summary.total_visits, 1);
        // The skipped body holds no slot
        assert_eq!(tracker.slot_occupant(0), Some(60));
    }

    #[test]
    fn test_skipped_record_keeps_existing_slot() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10]));

        // Same id stays in the frame but loses its reference joint: the
        // release pass still sees it as present, so the slot is retained
        let mut degraded = BodyRecord::new(10);
        degraded.set_joint(JointType::Head, JointSample::tracked(0.0, 1.7, 2.0));
        let summary = tracker.process_frame(&BodyFrame::from_records(vec![degraded]));

        assert!(summary.updates.is_empty());
        assert_eq!(summary.occupied, 1);
        assert_eq!(tracker.slot_occupant(0), Some(10));
        assert_eq!(summary.total_visits, 1);
    }

    #[test]
    fn test_visit_counter_is_monotonic() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        let sequences: [&[u64]; 6] = [&[1], &[1, 2], &[2], &[], &[3, 1], &[3]];
        let mut last = 0;
        for ids in sequences {
            let summary = tracker.process_frame(&frame_of(ids));
            assert!(summary.total_visits >= last);
            last = summary.total_visits;
        }
        // 1, 2, 3, and the re-entry of 1 after its gap
        assert_eq!(last, 4);
    }

    #[test]
    fn test_reset_clears_slots_and_counter() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        tracker.process_frame(&frame_of(&[10, 20]));
        tracker.reset();
        assert_eq!(tracker.occupied_slots(), 0);
        assert_eq!(tracker.total_visits(), 0);
    }

    #[test]
    fn test_update_carries_slot_color_and_coordinates() {
        let mut tracker = SlotTracker::new(SlotTrackerConfig::default());
        let summary = tracker.process_frame(&frame_of(&[10]));
        let update = &summary.updates[0];

        assert_eq!(update.slot, 0);
        assert_eq!(update.color, crate::tracker::slot::slot_color(0));
        assert_eq!(update.coordinates, "X: 1.00 Y: 2.00");
        assert_eq!(update.orientation_degrees, 90.0);
    }
}
