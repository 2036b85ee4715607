//! Pose classifiers built on the angle kernel
//!
//! All tolerances are in degrees. A NaN angle (coincident joints) makes
//! every predicate here return false.

use super::kernel::angle_at_vertex;
use crate::skeleton::{JointType, Skeleton};

/// True when the joint triple reads as a straight line within `tolerance`
pub fn is_straight(
    skeleton: &Skeleton,
    tolerance: f32,
    j1: JointType,
    j2: JointType,
    j3: JointType,
) -> bool {
    (180.0 - angle_at_vertex(skeleton, j1, j2, j3)).abs() < tolerance
}

/// True when the angle at `j2` is MORE than `tolerance` away from `target`
///
/// Note the direction: this reports "far from target", not "at target".
/// The exercise automata gate their phase transitions on this exact
/// comparison, so it must not be flipped in isolation.
pub fn is_at_angle(
    skeleton: &Skeleton,
    tolerance: f32,
    target: f32,
    j1: JointType,
    j2: JointType,
    j3: JointType,
) -> bool {
    (target - angle_at_vertex(skeleton, j1, j2, j3)).abs() > tolerance
}

/// True when the angle at `j2` is strictly within `tolerance` of `target`
pub fn is_within_angle(
    skeleton: &Skeleton,
    tolerance: f32,
    target: f32,
    j1: JointType,
    j2: JointType,
    j3: JointType,
) -> bool {
    (target - angle_at_vertex(skeleton, j1, j2, j3)).abs() < tolerance
}

/// Loose spine check: upper OR lower spine segment straight
pub fn is_spine_straight(skeleton: &Skeleton, tolerance: f32) -> bool {
    is_straight(
        skeleton,
        tolerance,
        JointType::Neck,
        JointType::SpineShoulder,
        JointType::SpineMid,
    ) || is_straight(
        skeleton,
        tolerance,
        JointType::SpineShoulder,
        JointType::SpineMid,
        JointType::SpineBase,
    )
}

/// Head-Neck-SpineShoulder straight within `tolerance`
pub fn is_neck_straight(skeleton: &Skeleton, tolerance: f32) -> bool {
    is_straight(
        skeleton,
        tolerance,
        JointType::Head,
        JointType::Neck,
        JointType::SpineShoulder,
    )
}
