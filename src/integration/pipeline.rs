//! TrackingPipeline for combining frame acquisition with slot tracking.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;

use crate::persist::SnapshotBuffer;
use crate::tracker::{FrameSummary, SlotTracker, SlotTrackerConfig};

use super::{FrameSource, PresentationSink};

/// A combined tracker that bundles frame acquisition with slot tracking.
///
/// This struct provides a convenient way to run end-to-end tracking by
/// combining any `FrameSource` with the `SlotTracker`, optionally
/// recording every frame into a shared snapshot buffer on the way.
pub struct TrackingPipeline<S: FrameSource> {
    source: S,
    tracker: SlotTracker,
    buffer: Option<Arc<Mutex<SnapshotBuffer>>>,
}

impl<S: FrameSource> TrackingPipeline<S> {
    /// Create a new tracking pipeline with the given source and tracker config.
    pub fn new(source: S, config: SlotTrackerConfig) -> Self {
        Self {
            source,
            tracker: SlotTracker::new(config),
            buffer: None,
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(source: S) -> Self {
        Self::new(source, SlotTrackerConfig::default())
    }

    /// Attach the shared snapshot buffer frames are recorded into
    /// (typically [`PeriodicRecorder::buffer`](crate::persist::PeriodicRecorder::buffer)).
    pub fn with_snapshot_buffer(mut self, buffer: Arc<Mutex<SnapshotBuffer>>) -> Self {
        self.buffer = Some(buffer);
        self
    }

    /// Pull and process the next frame.
    ///
    /// Records the frame's tracked bodies into the snapshot buffer, then
    /// updates the slot table. Frames are processed serially, each one to
    /// completion before the next is pulled.
    ///
    /// # Returns
    /// The frame's per-slot output, `Ok(None)` when the source has no
    /// frame, or an acquisition error.
    pub fn process_next(&mut self) -> Result<Option<FrameSummary>, S::Error> {
        let Some(frame) = self.source.next_frame()? else {
            return Ok(None);
        };

        if let Some(buffer) = &self.buffer {
            buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .record_frame(self.source.sensor_id(), &frame, Local::now());
        }

        Ok(Some(self.tracker.process_frame(&frame)))
    }

    /// Pull and process the next frame, handing the output to a sink.
    ///
    /// # Returns
    /// `Ok(true)` while frames keep coming, `Ok(false)` once the source
    /// runs dry.
    pub fn process_into<P: PresentationSink>(&mut self, sink: &mut P) -> Result<bool, S::Error> {
        match self.process_next()? {
            Some(summary) => {
                sink.present(&summary);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &SlotTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut SlotTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyFrame, BodyRecord, JointSample, JointType};

    struct MockSource {
        frames: Vec<BodyFrame>,
    }

    impl FrameSource for MockSource {
        type Error = std::convert::Infallible;

        fn sensor_id(&self) -> &str {
            "mock-sensor"
        }

        fn next_frame(&mut self) -> Result<Option<BodyFrame>, Self::Error> {
            if self.frames.is_empty() {
                Ok(None)
            } else {
                Ok(Some(self.frames.remove(0)))
            }
        }
    }

    fn frame_with(id: u64) -> BodyFrame {
        let mut body = BodyRecord::new(id);
        body.set_joint(JointType::SpineMid, JointSample::tracked(0.2, 0.9, 2.4));
        BodyFrame::from_records(vec![body])
    }

    #[test]
    fn test_pipeline_processes_until_source_dry() {
        let source = MockSource {
            frames: vec![frame_with(5), frame_with(5)],
        };
        let mut pipeline = TrackingPipeline::with_default_config(source);

        let first = pipeline.process_next().unwrap().unwrap();
        assert_eq!(first.updates.len(), 1);
        assert!(first.updates[0].newly_assigned);

        let second = pipeline.process_next().unwrap().unwrap();
        assert!(!second.updates[0].newly_assigned);

        assert!(pipeline.process_next().unwrap().is_none());
        assert_eq!(pipeline.tracker().total_visits(), 1);
    }

    #[test]
    fn test_pipeline_records_into_buffer() {
        let source = MockSource {
            frames: vec![frame_with(5), frame_with(6)],
        };
        let buffer = Arc::new(Mutex::new(SnapshotBuffer::new()));
        let mut pipeline =
            TrackingPipeline::with_default_config(source).with_snapshot_buffer(Arc::clone(&buffer));

        while pipeline.process_next().unwrap().is_some() {}

        let buffer = buffer.lock().unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.records()[0].camera_id, "mock-sensor");
    }
}
