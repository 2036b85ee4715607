//! Skeleton module - joint model delivered by the tracking provider
//!
//! Re-exports only. All logic in submodules.

mod joint;
mod body;

pub use joint::{JointType, TrackingState, Position, JointSample, BONES};
pub use body::Skeleton;
