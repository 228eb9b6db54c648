//! Skeletal joint enumeration and per-joint samples.

use nalgebra::Point3;

use crate::body::tracking_state::TrackingState;

/// The 25 skeletal joints reported by the sensor.
///
/// Variant order fixes the index used by [`BodyRecord`](crate::body::BodyRecord)
/// joint tables and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointType {
    SpineBase,
    SpineMid,
    Neck,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
    SpineShoulder,
    HandTipLeft,
    ThumbLeft,
    HandTipRight,
    ThumbRight,
}

impl JointType {
    /// Number of joint variants.
    pub const COUNT: usize = 25;

    /// Every joint, in table order.
    pub const ALL: [JointType; Self::COUNT] = [
        JointType::SpineBase,
        JointType::SpineMid,
        JointType::Neck,
        JointType::Head,
        JointType::ShoulderLeft,
        JointType::ElbowLeft,
        JointType::WristLeft,
        JointType::HandLeft,
        JointType::ShoulderRight,
        JointType::ElbowRight,
        JointType::WristRight,
        JointType::HandRight,
        JointType::HipLeft,
        JointType::KneeLeft,
        JointType::AnkleLeft,
        JointType::FootLeft,
        JointType::HipRight,
        JointType::KneeRight,
        JointType::AnkleRight,
        JointType::FootRight,
        JointType::SpineShoulder,
        JointType::HandTipLeft,
        JointType::ThumbLeft,
        JointType::HandTipRight,
        JointType::ThumbRight,
    ];

    /// Stable display name, also used as the JSON key when persisting.
    pub fn name(self) -> &'static str {
        match self {
            JointType::SpineBase => "SpineBase",
            JointType::SpineMid => "SpineMid",
            JointType::Neck => "Neck",
            JointType::Head => "Head",
            JointType::ShoulderLeft => "ShoulderLeft",
            JointType::ElbowLeft => "ElbowLeft",
            JointType::WristLeft => "WristLeft",
            JointType::HandLeft => "HandLeft",
            JointType::ShoulderRight => "ShoulderRight",
            JointType::ElbowRight => "ElbowRight",
            JointType::WristRight => "WristRight",
            JointType::HandRight => "HandRight",
            JointType::HipLeft => "HipLeft",
            JointType::KneeLeft => "KneeLeft",
            JointType::AnkleLeft => "AnkleLeft",
            JointType::FootLeft => "FootLeft",
            JointType::HipRight => "HipRight",
            JointType::KneeRight => "KneeRight",
            JointType::AnkleRight => "AnkleRight",
            JointType::FootRight => "FootRight",
            JointType::SpineShoulder => "SpineShoulder",
            JointType::HandTipLeft => "HandTipLeft",
            JointType::ThumbLeft => "ThumbLeft",
            JointType::HandTipRight => "HandTipRight",
            JointType::ThumbRight => "ThumbRight",
        }
    }
}

/// A single joint observation in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSample {
    /// Position in meters, sensor/camera space
    pub position: Point3<f32>,
    /// Sensor confidence for this joint
    pub state: TrackingState,
}

impl JointSample {
    /// Create a sample from camera-space coordinates and a tracking state.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, state: TrackingState) -> Self {
        Self {
            position: Point3::new(x, y, z),
            state,
        }
    }

    /// Create a directly observed sample.
    #[inline]
    pub fn tracked(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, TrackingState::Tracked)
    }

    /// Create an inferred sample.
    #[inline]
    pub fn inferred(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, TrackingState::Inferred)
    }
}

/// Bone topology: joint pairs rendered as line segments.
///
/// Torso first, then arms and legs, matching the order a skeleton
/// is usually drawn in.
pub const BONES: [(JointType, JointType); 24] = [
    // Torso
    (JointType::Head, JointType::Neck),
    (JointType::Neck, JointType::SpineShoulder),
    (JointType::SpineShoulder, JointType::SpineMid),
    (JointType::SpineMid, JointType::SpineBase),
    (JointType::SpineShoulder, JointType::ShoulderRight),
    (JointType::SpineShoulder, JointType::ShoulderLeft),
    (JointType::SpineBase, JointType::HipRight),
    (JointType::SpineBase, JointType::HipLeft),
    // Right arm
    (JointType::ShoulderRight, JointType::ElbowRight),
    (JointType::ElbowRight, JointType::WristRight),
    (JointType::WristRight, JointType::HandRight),
    (JointType::HandRight, JointType::HandTipRight),
    (JointType::WristRight, JointType::ThumbRight),
    // Left arm
    (JointType::ShoulderLeft, JointType::ElbowLeft),
    (JointType::ElbowLeft, JointType::WristLeft),
    (JointType::WristLeft, JointType::HandLeft),
    (JointType::HandLeft, JointType::HandTipLeft),
    (JointType::WristLeft, JointType::ThumbLeft),
    // Right leg
    (JointType::HipRight, JointType::KneeRight),
    (JointType::KneeRight, JointType::AnkleRight),
    (JointType::AnkleRight, JointType::FootRight),
    // Left leg
    (JointType::HipLeft, JointType::KneeLeft),
    (JointType::KneeLeft, JointType::AnkleLeft),
    (JointType::AnkleLeft, JointType::FootLeft),
];
