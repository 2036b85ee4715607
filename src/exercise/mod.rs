//! Exercise module - per-exercise start/complete automata
//!
//! Re-exports only. All logic in submodules.

mod status;
mod state;
mod params;
mod arm_raise;
mod arm_bend;
mod session;

#[cfg(test)]
mod fixtures;

pub use status::{ExerciseStatus, StatusClass};
pub use state::{ExerciseState, Phase, Side};
pub use params::{RaiseParams, BendParams, ExerciseConfig};
pub use arm_raise::ArmRaise;
pub use arm_bend::{ArmBend, BEND_TARGET_ANGLE};
pub use session::{ExerciseSession, Mode, ExerciseKind, ExerciseResult, BodyReport, BodyProgress};
