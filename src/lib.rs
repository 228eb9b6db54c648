//! Slot-based multi-body tracking for depth sensor skeleton streams.
//!
//! A depth sensor reports up to six bodies per frame, each under a
//! volatile hardware tracking identifier. This crate pins every
//! identifier to a stable slot index for as long as it stays tracked,
//! derives the plan-view position and shoulder heading the presentation
//! layer draws from, counts lifetime visits, and periodically persists
//! raw skeleton data as JSON.
//!
//! The core lives in [`tracker::SlotTracker`]; sensor readout and
//! rendering stay behind the [`integration::FrameSource`] and
//! [`integration::PresentationSink`] seams.

pub mod body;
pub mod integration;
pub mod persist;
pub mod tracker;

pub use body::{
    BONES, BodyFrame, BodyRecord, BodyRecordBuilder, ClippedEdges, HandState, JointSample,
    JointType, MAX_BODIES, TrackingState,
};
pub use integration::{FrameSource, PresentationSink, TrackingPipeline};
pub use persist::{
    PeriodicRecorder, PersistError, RecorderConfig, SkeletonSnapshot, SnapshotBuffer,
};
pub use tracker::{FrameSummary, SlotTracker, SlotTrackerConfig, SlotUpdate};
