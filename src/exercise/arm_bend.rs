//! Arm bend automaton
//!
//! Start pose: upper arm held straight out from the shoulder line.
//! End pose: upper arm still straight, elbow bent to 90° with the wrist
//! above the shoulder in camera y.

use super::params::BendParams;
use super::state::{ExerciseState, Side};
use super::status::ExerciseStatus;
use crate::form::{is_spine_straight, is_straight, is_within_angle};
use crate::skeleton::{JointType, Skeleton};

/// Target elbow angle for the end pose
pub const BEND_TARGET_ANGLE: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmBend {
    side: Side,
    params: BendParams,
}

impl ArmBend {
    pub fn new(side: Side, params: BendParams) -> Self {
        Self { side, params }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn params(&self) -> &BendParams {
        &self.params
    }

    pub fn required_joints(&self) -> [JointType; 4] {
        self.side.arm_joints()
    }

    /// SpineShoulder-Shoulder-Elbow straight within the arm tolerance
    fn upper_arm_straight(&self, skeleton: &Skeleton) -> bool {
        is_straight(
            skeleton,
            self.params.arm_tolerance,
            JointType::SpineShoulder,
            self.side.shoulder(),
            self.side.elbow(),
        )
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

        if state.is_started() {
            let bent = is_within_angle(skeleton, p.tolerance, BEND_TARGET_ANGLE, shoulder, elbow, wrist);
            let wrist_higher = skeleton.position(wrist).y > skeleton.position(shoulder).y;

            if self.upper_arm_straight(skeleton) && bent && wrist_higher {
                state.reset();
                return ExerciseStatus::Completed;
            }
            return ExerciseStatus::AwaitingEndPose;
        }

        if self.upper_arm_straight(skeleton) {
            state.start();
        }
        ExerciseStatus::AwaitingStartPose
    }
}
