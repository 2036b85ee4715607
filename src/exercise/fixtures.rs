//! Skeleton builders shared by the exercise tests

use super::Side;
use crate::skeleton::{JointSample, JointType, Position, Skeleton, TrackingState};

/// Upright body: vertical spine through the origin, shoulders one unit out
pub fn upright(body_id: u32) -> Skeleton {
    Skeleton::new(body_id, true)
        .with_tracked(JointType::Head, 0.0, 2.0, 2.0)
        .with_tracked(JointType::Neck, 0.0, 1.0, 2.0)
        .with_tracked(JointType::SpineShoulder, 0.0, 0.0, 2.0)
        .with_tracked(JointType::SpineMid, 0.0, -1.0, 2.0)
        .with_tracked(JointType::SpineBase, 0.0, -2.0, 2.0)
        .with_tracked(JointType::ShoulderLeft, -1.0, 0.0, 2.0)
        .with_tracked(JointType::ShoulderRight, 1.0, 0.0, 2.0)
}

/// Straight arm at `angle` degrees from the SpineShoulder direction,
/// swung below (`raised == false`) or above the shoulder line
pub fn with_straight_arm(skeleton: Skeleton, side: Side, angle: f32, raised: bool) -> Skeleton {
    let s = side.outward_sign();
    let shoulder = skeleton.position(side.shoulder());
    let theta = angle.to_radians();
    let vertical = if raised { theta.sin() } else { -theta.sin() };
    let dir = (-s * theta.cos(), vertical);

    skeleton
        .with_tracked(side.elbow(), shoulder.x + dir.0, shoulder.y + dir.1, shoulder.z)
        .with_tracked(side.wrist(), shoulder.x + 2.0 * dir.0, shoulder.y + 2.0 * dir.1, shoulder.z)
}

/// Upper arm straight out sideways, forearm bent by `elbow_angle` degrees
/// (180 = straight), hanging below (`down == true`) or above the elbow
pub fn with_bent_arm(skeleton: Skeleton, side: Side, elbow_angle: f32, down: bool) -> Skeleton {
    let s = side.outward_sign();
    let shoulder = skeleton.position(side.shoulder());
    let elbow = (shoulder.x + s, shoulder.y);
    let phi = (180.0 - elbow_angle).to_radians();
    let vertical = if down { -phi.sin() } else { phi.sin() };

    skeleton
        .with_tracked(side.elbow(), elbow.0, elbow.1, shoulder.z)
        .with_tracked(side.wrist(), elbow.0 + s * phi.cos(), elbow.1 + vertical, shoulder.z)
}

pub fn with_state(mut skeleton: Skeleton, joint: JointType, tracking: TrackingState) -> Skeleton {
    let position: Position = skeleton.position(joint);
    skeleton.set_joint(joint, JointSample { position, tracking });
    skeleton
}
