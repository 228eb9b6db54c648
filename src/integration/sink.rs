//! Trait for presentation consumers of per-frame tracker output.

use crate::tracker::FrameSummary;

/// Trait for presentation consumers of per-frame tracker output.
///
/// One call per processed frame; the summary carries every occupied
/// slot's visual state, the lifetime visit counter, and the all-clear
/// signal via [`FrameSummary::all_clear`].
pub trait PresentationSink {
    /// Consume one frame's slot updates.
    fn present(&mut self, summary: &FrameSummary);

    /// Sensor availability changed; refresh the displayed identifier.
    ///
    /// Tracker state is unaffected; this is display-only.
    fn sensor_available(&mut self, sensor_id: &str) {
        let _ = sensor_id;
    }
}
