//! Plan-view position and body orientation math.
//!
//! Pure functions over camera-space joint coordinates; no tracker state
//! is involved.

use nalgebra::Point2;

/// Horizontal field-of-view half-angle of the sensor, in degrees.
///
/// The sensor opens 70 degrees side to side; the plan-view overlay draws a
/// triangle spanning 35 degrees either side of the optical axis.
pub const FOV_HALF_ANGLE_DEG: f32 = 35.0;

/// Display scale denominator applied to the overlay height.
const PLAN_SCALE_DIVISOR: f32 = 5000.0;

/// Camera space is meters; overlay coordinates are millimeter-scaled.
const METERS_TO_DISPLAY: f32 = 1000.0;

/// Map a camera-space (x, z) ground-plane position onto the plan-view
/// overlay.
///
/// X keeps its sign relative to the optical axis (centering on the canvas
/// is the presentation layer's concern). Depth is mirrored so that a body
/// far from the sensor lands near the top of the overlay.
pub fn plan_position(joint_x: f32, joint_z: f32, view_height: f32) -> Point2<f32> {
    let scale = view_height / PLAN_SCALE_DIVISOR * METERS_TO_DISPLAY;
    let x = joint_x * scale;
    let z = view_height - joint_z * scale;
    Point2::new(x, z)
}

/// Coronal-plane heading from the two shoulder joints, in whole degrees.
///
/// Arguments are the camera-space (x, z) of the right and left shoulder.
/// Uses the two-argument arctangent so the heading stays finite when the
/// shoulders share an X coordinate; a plain tangent ratio is undefined
/// there. Result is in (-180, 180].
pub fn body_orientation(shoulder_right: (f32, f32), shoulder_left: (f32, f32)) -> f32 {
    let dx = shoulder_right.0 - shoulder_left.0;
    let dz = shoulder_right.1 - shoulder_left.1;
    // +90 re-bases the shoulder line onto the facing direction; rounding
    // happens before the fold so 180.000004 stays 180 instead of -180
    normalize_degrees((dz.atan2(dx).to_degrees() + 90.0).round())
}

/// Fold an angle into (-180, 180].
fn normalize_degrees(angle: f32) -> f32 {
    let mut folded = angle % 360.0;
    if folded > 180.0 {
        folded -= 360.0;
    } else if folded <= -180.0 {
        folded += 360.0;
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_position_scales_and_mirrors() {
        // view_height 500 -> scale = 500 / 5000 * 1000 = 100 display units per meter
        let p = plan_position(0.5, 2.0, 500.0);
        assert!((p.x - 50.0).abs() < 1e-4);
        assert!((p.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_plan_position_far_body_near_top() {
        let near = plan_position(0.0, 1.0, 500.0);
        let far = plan_position(0.0, 4.0, 500.0);
        assert!(far.y < near.y);
    }

    #[test]
    fn test_orientation_facing_sensor() {
        // Shoulders level in depth, right shoulder to the camera's right
        let angle = body_orientation((1.0, 0.0), (-1.0, 0.0));
        assert_eq!(angle, 90.0);
    }

    #[test]
    fn test_orientation_mirrored_differs_by_180() {
        let facing = body_orientation((1.0, 0.0), (-1.0, 0.0));
        let turned = body_orientation((-1.0, 0.0), (1.0, 0.0));
        assert!(facing.is_finite() && turned.is_finite());
        let diff = normalize_degrees(facing - turned).abs();
        assert_eq!(diff, 180.0);
    }

    #[test]
    fn test_orientation_defined_at_equal_x() {
        // Shoulders stacked in depth: the naive tangent ratio divides by zero
        let angle = body_orientation((0.0, 0.5), (0.0, -0.5));
        assert!(angle.is_finite());
        assert_eq!(angle, 180.0);

        let reversed = body_orientation((0.0, -0.5), (0.0, 0.5));
        assert!(reversed.is_finite());
        assert_eq!(reversed, 0.0);
    }

    #[test]
    fn test_orientation_quarter_turns() {
        // Slight rotation away from square-on stays near the base heading
        let angle = body_orientation((1.0, 0.1), (-1.0, -0.1));
        assert!((angle - 96.0).abs() <= 1.0);
    }
}
