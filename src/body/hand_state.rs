/// Hand pose classification reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandState {
    /// Sensor could not classify the hand
    #[default]
    Unknown,
    /// Hand not found in this frame
    NotTracked,
    /// Open palm
    Open,
    /// Closed fist
    Closed,
    /// Pointing gesture (lasso)
    Lasso,
}
