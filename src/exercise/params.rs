//! Exercise parameters
//!
//! Defaults are the values the clinic build shipped with.

/// Single-arm raise tuning (all degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaiseParams {
    /// Spine and shoulder-angle tolerance
    pub tolerance: f32,
    /// Straightness tolerance for shoulder-elbow-wrist
    pub arm_tolerance: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Default for RaiseParams {
    fn default() -> Self {
        Self {
            tolerance: 5.0,
            arm_tolerance: 15.0,
            start_angle: 120.0,
            end_angle: 110.0,
        }
    }
}

/// Arm bend tuning (all degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BendParams {
    /// Spine and elbow-bend tolerance
    pub tolerance: f32,
    /// Straightness tolerance for the upper arm
    pub arm_tolerance: f32,
}

impl Default for BendParams {
    fn default() -> Self {
        Self {
            tolerance: 5.0,
            arm_tolerance: 15.0,
        }
    }
}

/// Parameters for every exercise the session can run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExerciseConfig {
    pub raise: RaiseParams,
    pub bend: BendParams,
}
