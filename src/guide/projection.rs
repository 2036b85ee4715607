//! Guide projection - where the arm should go, in display space
//!
//! Every guide hangs off the active shoulder and is scaled by the
//! SpineShoulder→SpineBase drop on screen, which stands in for arm length.
//! Angles follow the shoulder-angle convention of the raise exercise:
//! measured from the SpineShoulder direction, 90° = arm along the torso,
//! 180° = arm straight out sideways.

use super::mapper::{CoordinateMapper, DisplayPoint};
use crate::exercise::Side;
use crate::skeleton::{JointType, Skeleton};

/// Share of the reference length drawn for the upper arm of a bent arm
const UPPER_ARM_SHARE: f32 = 0.5;

/// Share of the reference length drawn for the forearm of a bent arm
const FOREARM_SHARE: f32 = 0.5;

/// One straight guide line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideSegment {
    pub start: DisplayPoint,
    pub end: DisplayPoint,
}

impl GuideSegment {
    pub fn new(start: DisplayPoint, end: DisplayPoint) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Overlay handed to the rendering layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Guide {
    /// Straight arm (two points)
    Line(GuideSegment),
    /// Upper arm then forearm (four points)
    Path([GuideSegment; 2]),
}

impl Guide {
    pub fn segments(&self) -> &[GuideSegment] {
        match self {
            Guide::Line(segment) => std::slice::from_ref(segment),
            Guide::Path(segments) => segments,
        }
    }

    /// [x1, y1, x2, y2, ...] for the JS side
    pub fn flatten(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.segments().len() * 4);
        for s in self.segments() {
            out.extend_from_slice(&[s.start.x, s.start.y, s.end.x, s.end.y]);
        }
        out
    }
}

/// Display-space joints a guide is built from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideAnchors {
    pub shoulder: DisplayPoint,
    pub spine_shoulder: DisplayPoint,
    pub spine_base: DisplayPoint,
}

impl GuideAnchors {
    pub fn from_skeleton(skeleton: &Skeleton, side: Side, mapper: &dyn CoordinateMapper) -> Self {
        Self {
            shoulder: mapper.to_display(skeleton.position(side.shoulder())),
            spine_shoulder: mapper.to_display(skeleton.position(JointType::SpineShoulder)),
            spine_base: mapper.to_display(skeleton.position(JointType::SpineBase)),
        }
    }

    /// Vertical SpineShoulder→SpineBase separation on screen
    pub fn reference_length(&self) -> f32 {
        (self.spine_base.y - self.spine_shoulder.y).abs()
    }
}

/// Point at `length` from the shoulder, rotated by (angle - 90°) off the
/// torso line; `raised` swings it above the shoulder instead of below
fn project(anchors: &GuideAnchors, side: Side, angle: f32, length: f32, raised: bool) -> DisplayPoint {
    let theta = (angle - 90.0).to_radians();
    let vertical = if raised { -theta.cos() } else { theta.cos() };

    DisplayPoint {
        x: anchors.shoulder.x + side.outward_sign() * length * theta.sin(),
        y: anchors.shoulder.y + length * vertical,
    }
}

/// Start pose of a raise: arm below the shoulder at `start_angle`
pub fn raise_start_guide(anchors: &GuideAnchors, side: Side, start_angle: f32) -> Guide {
    let end = project(anchors, side, start_angle, anchors.reference_length(), false);
    Guide::Line(GuideSegment::new(anchors.shoulder, end))
}

/// End pose of a raise: arm above the shoulder at `end_angle`
pub fn raise_end_guide(anchors: &GuideAnchors, side: Side, end_angle: f32) -> Guide {
    let end = project(anchors, side, end_angle, anchors.reference_length(), true);
    Guide::Line(GuideSegment::new(anchors.shoulder, end))
}

/// Start pose of a bend: whole arm straight out sideways
pub fn bend_start_guide(anchors: &GuideAnchors, side: Side) -> Guide {
    let end = project(anchors, side, 180.0, anchors.reference_length(), false);
    Guide::Line(GuideSegment::new(anchors.shoulder, end))
}

/// End pose of a bend: upper arm out sideways, forearm pointing up
pub fn bend_end_guide(anchors: &GuideAnchors, side: Side) -> Guide {
    let length = anchors.reference_length();
    let elbow = project(anchors, side, 180.0, length * UPPER_ARM_SHARE, false);
    let wrist = DisplayPoint::new(elbow.x, elbow.y - length * FOREARM_SHARE);

    Guide::Path([
        GuideSegment::new(anchors.shoulder, elbow),
        GuideSegment::new(elbow, wrist),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn anchors(shoulder_x: f32) -> GuideAnchors {
        GuideAnchors {
            shoulder: DisplayPoint::new(shoulder_x, 100.0),
            spine_shoulder: DisplayPoint::new(200.0, 100.0),
            spine_base: DisplayPoint::new(200.0, 250.0),
        }
    }

    fn close(a: DisplayPoint, b: DisplayPoint) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_reference_length_is_vertical_drop() {
        let mut a = anchors(150.0);
        assert!((a.reference_length() - 150.0).abs() < EPS);
        a.spine_base.x = 900.0;
        assert!((a.reference_length() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_ninety_degrees_points_down() {
        let a = anchors(150.0);
        let Guide::Line(s) = raise_start_guide(&a, Side::Left, 90.0) else {
            panic!("raise guide is a single line");
        };
        assert!(close(s.start, a.shoulder));
        assert!(close(s.end, DisplayPoint::new(150.0, 250.0)));
    }

    #[test]
    fn test_sides_mirror_horizontally() {
        let left = raise_start_guide(&anchors(150.0), Side::Left, 120.0).segments()[0];
        let right = raise_start_guide(&anchors(250.0), Side::Right, 120.0).segments()[0];

        let left_dx = left.end.x - left.start.x;
        let right_dx = right.end.x - right.start.x;
        assert!(left_dx < 0.0);
        assert!((left_dx + right_dx).abs() < EPS);
        assert!((left.end.y - right.end.y).abs() < EPS);
        assert!((left.length() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_end_guide_swings_above_shoulder() {
        let a = anchors(250.0);
        let s = raise_end_guide(&a, Side::Right, 120.0).segments()[0];
        // 30° past horizontal-down, mirrored upward
        let expected = DisplayPoint::new(250.0 + 150.0 * 0.5, 100.0 - 150.0 * 3f32.sqrt() / 2.0);
        assert!(close(s.end, expected));
    }

    #[test]
    fn test_bend_guides() {
        let a = anchors(150.0);

        let start = bend_start_guide(&a, Side::Left);
        assert_eq!(start.segments().len(), 1);
        assert!(close(start.segments()[0].end, DisplayPoint::new(0.0, 100.0)));

        let end = bend_end_guide(&a, Side::Left);
        let flat = end.flatten();
        assert_eq!(flat.len(), 8);
        let [upper, fore] = match end {
            Guide::Path(segments) => segments,
            Guide::Line(_) => panic!("bend end guide has two segments"),
        };
        assert!(close(upper.end, DisplayPoint::new(75.0, 100.0)));
        assert!(close(fore.start, upper.end));
        assert!(close(fore.end, DisplayPoint::new(75.0, 25.0)));
    }
}
