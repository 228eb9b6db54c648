mod builder;
mod clipped_edges;
mod frame;
mod hand_state;
mod joint;
mod tracking_state;

pub use builder::BodyRecordBuilder;
pub use clipped_edges::ClippedEdges;
pub use frame::{BodyFrame, BodyRecord, MAX_BODIES};
pub use hand_state::HandState;
pub use joint::{BONES, JointSample, JointType};
pub use tracking_state::TrackingState;
