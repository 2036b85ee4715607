//! Guide module - on-screen directional cues for the next pose
//!
//! Re-exports only. All logic in submodules.

mod mapper;
mod projection;

pub use mapper::{CoordinateMapper, DisplayPoint, OrthographicMapper};
pub use projection::{
    Guide, GuideSegment, GuideAnchors,
    raise_start_guide, raise_end_guide,
    bend_start_guide, bend_end_guide,
};
