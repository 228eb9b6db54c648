mod geometry;
mod output;
mod slot;
mod slot_tracker;

pub use geometry::{FOV_HALF_ANGLE_DEG, body_orientation, plan_position};
pub use output::{FrameSummary, SlotUpdate};
pub use slot::{
    CLIP_BOUNDS_THICKNESS, HAND_SIZE, INFERRED_JOINT_COLOR, JOINT_THICKNESS, SLOT_COLORS,
    SlotColor, TRACKED_JOINT_COLOR, slot_color,
};
pub use slot_tracker::{SlotTracker, SlotTrackerConfig};
