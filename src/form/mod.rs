//! Form module - joint geometry and posture predicates
//!
//! Re-exports only. All logic in submodules.

mod kernel;
mod checks;

pub use kernel::{distance, angle_at_vertex};
pub use checks::{is_straight, is_at_angle, is_within_angle, is_spine_straight, is_neck_straight};
