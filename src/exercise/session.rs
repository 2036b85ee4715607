//! Exercise session - mode selection and per-body progress
//!
//! Progress is keyed by body id, so two people in front of the sensor
//! never advance each other's repetition.

use std::collections::HashMap;

use super::arm_bend::ArmBend;
use super::arm_raise::ArmRaise;
use super::params::ExerciseConfig;
use super::state::{ExerciseState, Side};
use super::status::ExerciseStatus;
use crate::guide::{
    bend_end_guide, bend_start_guide, raise_end_guide, raise_start_guide, CoordinateMapper, Guide,
    GuideAnchors,
};
use crate::skeleton::Skeleton;

/// Active exercise selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Neutral,
    /// Left and right arm raise, evaluated side by side
    ArmRaiseBilateral,
    ArmBend,
}

impl Mode {
    pub fn from_index(idx: u32) -> Option<Self> {
        match idx {
            0 => Some(Mode::Neutral),
            1 => Some(Mode::ArmRaiseBilateral),
            2 => Some(Mode::ArmBend),
            _ => None,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            Mode::Neutral => 0,
            Mode::ArmRaiseBilateral => 1,
            Mode::ArmBend => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Neutral => "neutral",
            Mode::ArmRaiseBilateral => "arm raise",
            Mode::ArmBend => "arm bend",
        }
    }
}

/// Which automaton produced a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseKind {
    ArmRaise(Side),
    ArmBend(Side),
}

impl ExerciseKind {
    pub fn side(&self) -> Side {
        match self {
            ExerciseKind::ArmRaise(side) | ExerciseKind::ArmBend(side) => *side,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExerciseKind::ArmRaise(_) => "arm raise",
            ExerciseKind::ArmBend(_) => "arm bend",
        }
    }
}

/// One exercise's verdict for one body
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseResult {
    pub exercise: ExerciseKind,
    pub status: ExerciseStatus,
    /// Present for pending statuses when a mapper was supplied
    pub guide: Option<Guide>,
}

/// Everything evaluated for one body in one frame
#[derive(Clone, Debug, PartialEq)]
pub struct BodyReport {
    pub body_id: u32,
    pub results: Vec<ExerciseResult>,
}

/// Per-body exercise state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyProgress {
    pub left_raise: ExerciseState,
    pub right_raise: ExerciseState,
    pub bend: ExerciseState,
    /// Raise repetitions finished this session, per arm
    pub left_done: bool,
    pub right_done: bool,
}

/// Mode plus all persistent exercise state
pub struct ExerciseSession {
    mode: Mode,
    config: ExerciseConfig,
    bend_side: Side,
    /// Kept across frames a body is missing from; only a reset or
    /// `forget_body` removes an entry
    bodies: HashMap<u32, BodyProgress>,
}

impl ExerciseSession {
    pub fn new(config: ExerciseConfig) -> Self {
        Self {
            mode: Mode::Neutral,
            config,
            bend_side: Side::Left,
            bodies: HashMap::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ExerciseConfig {
        &mut self.config
    }

    /// Switch exercise; every change (and every Neutral) clears progress
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == Mode::Neutral || mode != self.mode {
            self.reset_progress();
        }
        self.mode = mode;
    }

    /// Return-to-neutral reset of every body's flags
    pub fn reset_progress(&mut self) {
        self.bodies.clear();
    }

    /// Drop one body's state (e.g. the provider lost that person)
    pub fn forget_body(&mut self, body_id: u32) {
        self.bodies.remove(&body_id);
    }

    pub fn progress(&self, body_id: u32) -> Option<&BodyProgress> {
        self.bodies.get(&body_id)
    }

    pub fn arm_raise(&self, side: Side) -> ArmRaise {
        ArmRaise::new(side, self.config.raise)
    }

    pub fn arm_bend(&self) -> ArmBend {
        ArmBend::new(self.bend_side, self.config.bend)
    }

    /// Evaluate one tracked skeleton against the active mode
    ///
    /// Untracked skeletons and Neutral mode produce no report.
    pub fn evaluate_body(
        &mut self,
        skeleton: &Skeleton,
        mapper: Option<&dyn CoordinateMapper>,
    ) -> Option<BodyReport> {
        if !skeleton.is_tracked || self.mode == Mode::Neutral {
            return None;
        }

        let results = match self.mode {
            Mode::Neutral => Vec::new(),
            Mode::ArmRaiseBilateral => self.evaluate_raises(skeleton, mapper),
            Mode::ArmBend => self.evaluate_bend(skeleton, mapper),
        };

        Some(BodyReport {
            body_id: skeleton.body_id,
            results,
        })
    }

    /// Evaluate every skeleton of one frame, in arrival order
    pub fn evaluate_frame(
        &mut self,
        skeletons: &[Skeleton],
        mapper: Option<&dyn CoordinateMapper>,
    ) -> Vec<BodyReport> {
        skeletons
            .iter()
            .filter_map(|skeleton| self.evaluate_body(skeleton, mapper))
            .collect()
    }

    fn evaluate_raises(
        &mut self,
        skeleton: &Skeleton,
        mapper: Option<&dyn CoordinateMapper>,
    ) -> Vec<ExerciseResult> {
        let exercises = [self.arm_raise(Side::Left), self.arm_raise(Side::Right)];
        let mut results = Vec::with_capacity(exercises.len());
        let progress = self.bodies.entry(skeleton.body_id).or_default();

        for exercise in exercises {
            let side = exercise.side();
            let params = exercise.params();
            let state = match side {
                Side::Left => &mut progress.left_raise,
                Side::Right => &mut progress.right_raise,
            };
            let status = exercise.evaluate(state, skeleton);

            if status == ExerciseStatus::Completed {
                match side {
                    Side::Left => progress.left_done = true,
                    Side::Right => progress.right_done = true,
                }
            }

            let guide = match mapper {
                Some(m) if status.wants_guide() => {
                    let anchors = GuideAnchors::from_skeleton(skeleton, side, m);
                    Some(if status == ExerciseStatus::AwaitingStartPose {
                        raise_start_guide(&anchors, side, params.start_angle)
                    } else {
                        raise_end_guide(&anchors, side, params.end_angle)
                    })
                }
                _ => None,
            };

            results.push(ExerciseResult {
                exercise: ExerciseKind::ArmRaise(side),
                status,
                guide,
            });
        }

        if progress.left_done && progress.right_done {
            self.set_mode(Mode::Neutral);
        }

        results
    }

    fn evaluate_bend(
        &mut self,
        skeleton: &Skeleton,
        mapper: Option<&dyn CoordinateMapper>,
    ) -> Vec<ExerciseResult> {
        let exercise = self.arm_bend();
        let side = exercise.side();
        let progress = self.bodies.entry(skeleton.body_id).or_default();
        let status = exercise.evaluate(&mut progress.bend, skeleton);

        let guide = match mapper {
            Some(m) if status.wants_guide() => {
                let anchors = GuideAnchors::from_skeleton(skeleton, side, m);
                Some(if status == ExerciseStatus::AwaitingStartPose {
                    bend_start_guide(&anchors, side)
                } else {
                    bend_end_guide(&anchors, side)
                })
            }
            _ => None,
        };

        if status == ExerciseStatus::Completed {
            self.set_mode(Mode::Neutral);
        }

        vec![ExerciseResult {
            exercise: ExerciseKind::ArmBend(side),
            status,
            guide,
        }]
    }
}

impl Default for ExerciseSession {
    fn default() -> Self {
        Self::new(ExerciseConfig::default())
    }
}
