//! Joint angle calculation using the law of cosines
//!
//! Lengths are measured in the x/y plane only. Depth is left out on
//! purpose: every threshold downstream was tuned against planar lengths.

use crate::skeleton::{JointType, Skeleton};

/// Planar distance between two joints (z ignored)
///
/// Works on whatever positions are present, Inferred joints included.
pub fn distance(skeleton: &Skeleton, j1: JointType, j2: JointType) -> f32 {
    let p1 = skeleton.position(j1);
    let p2 = skeleton.position(j2);

    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;

    (dx * dx + dy * dy).sqrt()
}

/// Angle at `j2` between the rays to `j1` and `j3`, in degrees
///
/// cos(θ) = (a² + b² - c²) / (2ab) with a = |j2 j3|, b = |j1 j2|, c = |j1 j3|
///
/// Returns a value in [0°, 180°], or NaN when `j2` coincides with `j1` or
/// `j3`. NaN fails every threshold comparison, so callers read it as
/// "condition not met".
pub fn angle_at_vertex(skeleton: &Skeleton, j1: JointType, j2: JointType, j3: JointType) -> f32 {
    let a = distance(skeleton, j2, j3);
    let b = distance(skeleton, j1, j2);
    let c = distance(skeleton, j1, j3);

    // Rounding can push a straight line a hair past -1; NaN survives clamp
    let cos_angle = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::JointType::*;

    fn arm(shoulder: (f32, f32, f32), elbow: (f32, f32, f32), wrist: (f32, f32, f32)) -> Skeleton {
        Skeleton::new(0, true)
            .with_tracked(ShoulderLeft, shoulder.0, shoulder.1, shoulder.2)
            .with_tracked(ElbowLeft, elbow.0, elbow.1, elbow.2)
            .with_tracked(WristLeft, wrist.0, wrist.1, wrist.2)
    }

    #[test]
    fn test_distance_ignores_depth() {
        let skeleton = arm((0.0, 0.0, 0.0), (3.0, 4.0, 50.0), (0.0, 0.0, 0.0));
        assert!((distance(&skeleton, ShoulderLeft, ElbowLeft) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_straight_arm() {
        let skeleton = arm((0.0, 0.0, 2.0), (0.5, 0.0, 2.0), (1.0, 0.0, 2.0));
        let angle = angle_at_vertex(&skeleton, ShoulderLeft, ElbowLeft, WristLeft);
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_bent_arm() {
        let skeleton = arm((0.0, 0.0, 2.0), (0.5, 0.0, 2.0), (0.5, 0.5, 2.0));
        let angle = angle_at_vertex(&skeleton, ShoulderLeft, ElbowLeft, WristLeft);
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_translation_invariant() {
        let base = arm((0.0, 0.0, 0.0), (1.0, 0.2, 0.0), (1.4, 1.1, 0.0));
        let moved = arm((10.0, -7.0, 3.0), (11.0, -6.8, 3.0), (11.4, -5.9, 3.0));
        let a = angle_at_vertex(&base, ShoulderLeft, ElbowLeft, WristLeft);
        let b = angle_at_vertex(&moved, ShoulderLeft, ElbowLeft, WristLeft);
        assert!((a - b).abs() < 0.01);
    }

    #[test]
    fn test_angle_is_unsigned() {
        // Mirror image across the x axis gives the same angle
        let up = arm((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.5, 0.8, 0.0));
        let down = arm((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.5, -0.8, 0.0));
        let a = angle_at_vertex(&up, ShoulderLeft, ElbowLeft, WristLeft);
        let b = angle_at_vertex(&down, ShoulderLeft, ElbowLeft, WristLeft);
        assert!((a - b).abs() < 0.01);
        assert!((0.0..=180.0).contains(&a));
    }

    #[test]
    fn test_coincident_joints_give_nan() {
        let skeleton = arm((1.0, 1.0, 0.0), (1.0, 1.0, 0.0), (2.0, 1.0, 0.0));
        let angle = angle_at_vertex(&skeleton, ShoulderLeft, ElbowLeft, WristLeft);
        assert!(angle.is_nan());
        assert!(angle.partial_cmp(&180.0).is_none());
    }
}
