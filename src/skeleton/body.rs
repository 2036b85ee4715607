//! Skeleton - one detected person in one frame

use super::joint::{JointSample, JointType, Position, TrackingState};

/// Full set of joints for one body, immutable once the frame is decoded
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    /// Body slot reported by the tracking provider
    pub body_id: u32,
    /// Whether the provider is actively tracking this body
    pub is_tracked: bool,
    joints: [JointSample; JointType::COUNT],
}

impl Skeleton {
    /// Every joint starts NotTracked at the origin
    pub fn new(body_id: u32, is_tracked: bool) -> Self {
        Self {
            body_id,
            is_tracked,
            joints: [JointSample::default(); JointType::COUNT],
        }
    }

    pub fn set_joint(&mut self, joint: JointType, sample: JointSample) {
        self.joints[joint.index()] = sample;
    }

    /// Builder-style variant of `set_joint` for fully tracked joints
    pub fn with_tracked(mut self, joint: JointType, x: f32, y: f32, z: f32) -> Self {
        self.set_joint(joint, JointSample::tracked(x, y, z));
        self
    }

    pub fn joint(&self, joint: JointType) -> &JointSample {
        &self.joints[joint.index()]
    }

    pub fn position(&self, joint: JointType) -> Position {
        self.joints[joint.index()].position
    }

    pub fn tracking(&self, joint: JointType) -> TrackingState {
        self.joints[joint.index()].tracking
    }

    /// True when every listed joint is fully Tracked (Inferred does not count)
    pub fn all_tracked(&self, required: &[JointType]) -> bool {
        required.iter().all(|j| self.joint(*j).is_tracked())
    }
}
