//! Per-frame exercise outcome

/// Result of evaluating one exercise against one skeleton frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseStatus {
    /// A required joint is not fully tracked
    Untracked,
    NeedsSpineStraight,
    NeedsArmStraight,
    /// Form is fine, waiting for the start pose
    AwaitingStartPose,
    /// Start pose seen, waiting for the end pose
    AwaitingEndPose,
    /// End pose reached, one repetition done
    Completed,
}

/// Coarse grouping of statuses for the feedback layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Untracked,
    FormViolation,
    PhasePending,
    Completed,
}

impl ExerciseStatus {
    /// Stable integer code shared with the front end
    pub fn code(&self) -> i32 {
        match self {
            ExerciseStatus::Untracked => -72,
            ExerciseStatus::NeedsSpineStraight => -1,
            ExerciseStatus::NeedsArmStraight => -2,
            ExerciseStatus::AwaitingStartPose => -100,
            ExerciseStatus::AwaitingEndPose => -45,
            ExerciseStatus::Completed => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -72 => Some(ExerciseStatus::Untracked),
            -1 => Some(ExerciseStatus::NeedsSpineStraight),
            -2 => Some(ExerciseStatus::NeedsArmStraight),
            -100 => Some(ExerciseStatus::AwaitingStartPose),
            -45 => Some(ExerciseStatus::AwaitingEndPose),
            1 => Some(ExerciseStatus::Completed),
            _ => None,
        }
    }

    pub fn class(&self) -> StatusClass {
        match self {
            ExerciseStatus::Untracked => StatusClass::Untracked,
            ExerciseStatus::NeedsSpineStraight | ExerciseStatus::NeedsArmStraight => {
                StatusClass::FormViolation
            }
            ExerciseStatus::AwaitingStartPose | ExerciseStatus::AwaitingEndPose => {
                StatusClass::PhasePending
            }
            ExerciseStatus::Completed => StatusClass::Completed,
        }
    }

    /// Whether the front end should draw a directional guide
    pub fn wants_guide(&self) -> bool {
        self.class() == StatusClass::PhasePending
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStatus::Untracked => "untracked",
            ExerciseStatus::NeedsSpineStraight => "straighten spine",
            ExerciseStatus::NeedsArmStraight => "straighten arm",
            ExerciseStatus::AwaitingStartPose => "move to start pose",
            ExerciseStatus::AwaitingEndPose => "move to end pose",
            ExerciseStatus::Completed => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ExerciseStatus; 6] = [
        ExerciseStatus::Untracked,
        ExerciseStatus::NeedsSpineStraight,
        ExerciseStatus::NeedsArmStraight,
        ExerciseStatus::AwaitingStartPose,
        ExerciseStatus::AwaitingEndPose,
        ExerciseStatus::Completed,
    ];

    #[test]
    fn test_codes_are_distinct_and_stable() {
        for status in ALL {
            assert_eq!(ExerciseStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ExerciseStatus::from_code(0), None);
        assert_eq!(ExerciseStatus::Completed.code(), 1);
        assert_eq!(ExerciseStatus::Untracked.code(), -72);
    }

    #[test]
    fn test_only_pending_states_want_guide() {
        let with_guide: Vec<_> = ALL.iter().filter(|s| s.wants_guide()).collect();
        assert_eq!(
            with_guide,
            vec![&ExerciseStatus::AwaitingStartPose, &ExerciseStatus::AwaitingEndPose]
        );
        assert_eq!(ExerciseStatus::NeedsArmStraight.class(), StatusClass::FormViolation);
    }
}
