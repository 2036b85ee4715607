//! Single-arm raise automaton
//!
//! One implementation for both arms; the side only picks the joints.
//!
//! Per frame (y is camera y, up positive):
//! 1. any required joint not Tracked        → Untracked
//! 2. spine not straight                    → NeedsSpineStraight
//! 3. shoulder-elbow-wrist not straight     → NeedsArmStraight
//! 4. in motion, end angle + wrist higher   → Completed (back to awaiting start)
//! 5. in motion                             → AwaitingEndPose
//! 6. awaiting, start angle + wrist lower   → start; AwaitingStartPose either way

use super::params::RaiseParams;
use super::state::{ExerciseState, Side};
use super::status::ExerciseStatus;
use crate::form::{is_at_angle, is_spine_straight, is_straight};
use crate::skeleton::{JointType, Skeleton};

/// Raise a straight arm from the start angle to the end angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmRaise {
    side: Side,
    params: RaiseParams,
}

impl ArmRaise {
    pub fn new(side: Side, params: RaiseParams) -> Self {
        Self { side, params }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn params(&self) -> &RaiseParams {
        &self.params
    }

    pub fn required_joints(&self) -> [JointType; 4] {
        self.side.arm_joints()
    }

    /// Classify one frame and advance `state`
    pub fn evaluate(&self, state: &mut ExerciseState, skeleton: &Skeleton) -> ExerciseStatus {
        let p = &self.params;
        let shoulder = self.side.shoulder();
        let elbow = self.side.elbow();
        let wrist = self.side.wrist();

        if !skeleton.all_tracked(&self.required_joints()) {
            return ExerciseStatus::Untracked;
        }

        if !is_spine_straight(skeleton, p.tolerance) {
            return ExerciseStatus::NeedsSpineStraight;
        }

        if !is_straight(skeleton, p.arm_tolerance, shoulder, elbow, wrist) {
            return ExerciseStatus::NeedsArmStraight;
        }

        let wrist_y = skeleton.position(wrist).y;
        let shoulder_y = skeleton.position(shoulder).y;

        if state.is_started() {
            let at_end = is_at_angle(
                skeleton,
                p.tolerance,
                p.end_angle,
                JointType::SpineShoulder,
                shoulder,
                elbow,
            );
            if at_end && wrist_y > shoulder_y {
                state.reset();
                return ExerciseStatus::Completed;
            }
            return ExerciseStatus::AwaitingEndPose;
        }

        let at_start = is_at_angle(
            skeleton,
            p.tolerance,
            p.start_angle,
            JointType::SpineShoulder,
            shoulder,
            elbow,
        );
        if at_start && wrist_y < shoulder_y {
            state.start();
        }
        ExerciseStatus::AwaitingStartPose
    }
}
