//! Integration module for connecting sensor frame sources with the slot tracker.
//!
//! This module provides traits at the two external seams (frame acquisition
//! and presentation) plus a pipeline that wires a source, the tracker, and
//! the snapshot buffer together.

mod pipeline;
mod sink;
mod source;

pub use pipeline::TrackingPipeline;
pub use sink::PresentationSink;
pub use source::FrameSource;
