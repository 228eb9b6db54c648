//! Trait for sensor frame acquisition backends.

use crate::body::BodyFrame;

/// Trait for sensor frame acquisition backends.
///
/// Implement this trait to connect any body-frame producer to the slot
/// tracker.
///
/// # Example
///
/// ```ignore
/// use slottrack_rs::{BodyFrame, FrameSource};
///
/// struct MySensor {
///     // Your reader here
/// }
///
/// impl FrameSource for MySensor {
///     type Error = std::io::Error;
///
///     fn sensor_id(&self) -> &str {
///         "my-sensor-001"
///     }
///
///     fn next_frame(&mut self) -> Result<Option<BodyFrame>, Self::Error> {
///         // Read the next body frame from the device
///         Ok(None)
///     }
/// }
/// ```
pub trait FrameSource {
    /// Error type for acquisition failures.
    type Error;

    /// Stable identifier of the sensor delivering frames.
    fn sensor_id(&self) -> &str;

    /// Pull the next body frame.
    ///
    /// Returns `Ok(None)` when no frame is available (source exhausted or
    /// sensor currently unavailable); the caller decides whether to retry.
    fn next_frame(&mut self) -> Result<Option<BodyFrame>, Self::Error>;
}
