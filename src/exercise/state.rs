//! Exercise phase - the only state that survives between frames

use crate::skeleton::JointType;

/// Position in the two-phase repetition cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingStart,
    InMotion,
}

/// Persistent "started" flag for one exercise instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ExerciseState {
    phase: Phase,
}

impl ExerciseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase == Phase::InMotion
    }

    /// Start pose reached
    pub fn start(&mut self) {
        self.phase = Phase::InMotion;
    }

    /// End pose reached, or the exercise was switched away
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingStart;
    }
}

/// Which arm an exercise is performed with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(&self) -> JointType {
        match self {
            Side::Left => JointType::ShoulderLeft,
            Side::Right => JointType::ShoulderRight,
        }
    }

    pub fn elbow(&self) -> JointType {
        match self {
            Side::Left => JointType::ElbowLeft,
            Side::Right => JointType::ElbowRight,
        }
    }

    pub fn wrist(&self) -> JointType {
        match self {
            Side::Left => JointType::WristLeft,
            Side::Right => JointType::WristRight,
        }
    }

    /// SpineShoulder plus this side's shoulder, elbow and wrist
    pub fn arm_joints(&self) -> [JointType; 4] {
        [JointType::SpineShoulder, self.shoulder(), self.elbow(), self.wrist()]
    }

    /// Horizontal direction pointing away from the body in display space
    pub fn outward_sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
