//! Frame decoding - flat Float32Array from JS → skeletons
//!
//! Per body: [body_id, is_tracked, (x, y, z, state) × 25] in JointType order.
//! State uses the provider numbering: 0 NotTracked, 1 Inferred, 2 Tracked.

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::skeleton::{JointSample, JointType, Position, Skeleton, TrackingState};

/// Floats per joint (x, y, z, state)
pub const JOINT_STRIDE: usize = 4;

/// Floats per body (id, tracked flag, joints)
pub const BODY_STRIDE: usize = 2 + JointType::COUNT * JOINT_STRIDE;

/// Largest body id that survives the f32 frame and the i32 status codes
pub const MAX_BODY_ID: u32 = 1 << 24;

/// Reasons a frame is rejected as a whole
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("invalid frame length: {len} (expected a multiple of {stride})", stride = BODY_STRIDE)]
    BadLength { len: usize },

    #[error("invalid body id: {value}")]
    InvalidBodyId { value: f32 },

    #[error("body {body_id} appears twice in one frame")]
    DuplicateBodyId { body_id: u32 },

    #[error("unknown tracking state {value} for joint {joint}")]
    UnknownTrackingState { joint: &'static str, value: f32 },

    #[error("unknown exercise mode: {0}")]
    UnknownMode(u32),
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn decode_body_id(value: f32) -> Result<u32, FrameError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_BODY_ID as f32 {
        Ok(value as u32)
    } else {
        Err(FrameError::InvalidBodyId { value })
    }
}

fn decode_tracking(joint: JointType, value: f32) -> Result<TrackingState, FrameError> {
    let state = if value.fract() == 0.0 && value >= 0.0 {
        TrackingState::from_code(value as u32)
    } else {
        None
    };
    state.ok_or(FrameError::UnknownTrackingState {
        joint: joint.name(),
        value,
    })
}

/// Decode one body from exactly `BODY_STRIDE` floats
fn decode_body(data: &[f32]) -> Result<Skeleton, FrameError> {
    let body_id = decode_body_id(data[0])?;
    let mut skeleton = Skeleton::new(body_id, data[1] != 0.0);

    for (joint, chunk) in JointType::ALL.iter().zip(data[2..].chunks_exact(JOINT_STRIDE)) {
        skeleton.set_joint(
            *joint,
            JointSample {
                position: Position::new(chunk[0], chunk[1], chunk[2]),
                tracking: decode_tracking(*joint, chunk[3])?,
            },
        );
    }

    Ok(skeleton)
}

/// Decode a whole frame; an empty slice is a frame with no bodies
pub fn decode_frame(data: &[f32]) -> Result<Vec<Skeleton>, FrameError> {
    if data.len() % BODY_STRIDE != 0 {
        return Err(FrameError::BadLength { len: data.len() });
    }

    let mut skeletons: Vec<Skeleton> = Vec::with_capacity(data.len() / BODY_STRIDE);
    for body in data.chunks_exact(BODY_STRIDE) {
        let skeleton = decode_body(body)?;
        if skeletons.iter().any(|s| s.body_id == skeleton.body_id) {
            return Err(FrameError::DuplicateBodyId {
                body_id: skeleton.body_id,
            });
        }
        skeletons.push(skeleton);
    }

    Ok(skeletons)
}

/// Inverse of `decode_frame`, used to build frames in tests
#[cfg(test)]
pub fn encode_frame(skeletons: &[Skeleton]) -> Vec<f32> {
    let mut data = Vec::with_capacity(skeletons.len() * BODY_STRIDE);
    for s in skeletons {
        data.push(s.body_id as f32);
        data.push(if s.is_tracked { 1.0 } else { 0.0 });
        for joint in JointType::ALL {
            let sample = s.joint(joint);
            data.extend_from_slice(&[
                sample.position.x,
                sample.position.y,
                sample.position.z,
                sample.tracking.code() as f32,
            ]);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body(body_id: u32) -> Skeleton {
        let mut skeleton = Skeleton::new(body_id, true)
            .with_tracked(JointType::SpineShoulder, 0.0, 0.4, 2.1)
            .with_tracked(JointType::WristRight, 0.5, -0.1, 1.9);
        skeleton.set_joint(
            JointType::ElbowLeft,
            JointSample {
                position: Position::new(-0.3, 0.1, 2.0),
                tracking: TrackingState::Inferred,
            },
        );
        skeleton
    }

    #[test]
    fn test_stride() {
        assert_eq!(BODY_STRIDE, 102);
    }

    #[test]
    fn test_empty_frame_has_no_bodies() {
        assert_eq!(decode_frame(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_decodes_two_bodies() {
        let bodies = vec![sample_body(0), sample_body(4)];
        let decoded = decode_frame(&encode_frame(&bodies)).unwrap();
        assert_eq!(decoded, bodies);
        assert_eq!(decoded[1].tracking(JointType::ElbowLeft), TrackingState::Inferred);
        assert_eq!(decoded[1].tracking(JointType::Head), TrackingState::NotTracked);
    }

    #[test]
    fn test_rejects_bad_length() {
        let mut data = encode_frame(&[sample_body(0)]);
        data.pop();
        assert_eq!(decode_frame(&data), Err(FrameError::BadLength { len: BODY_STRIDE - 1 }));
    }

    #[test]
    fn test_rejects_bad_body_id() {
        for bad in [-1.0, 1.5, f32::NAN, f32::INFINITY, 16_777_218.0, 3.0e9, 4_294_967_296.0] {
            let mut data = encode_frame(&[sample_body(0)]);
            data[0] = bad;
            assert!(matches!(decode_frame(&data), Err(FrameError::InvalidBodyId { .. })));
        }
    }

    #[test]
    fn test_largest_body_id_is_accepted() {
        let data = encode_frame(&[sample_body(MAX_BODY_ID)]);
        let decoded = decode_frame(&data).unwrap();
        assert_eq!(decoded[0].body_id, MAX_BODY_ID);
    }

    #[test]
    fn test_rejects_duplicate_body() {
        let data = encode_frame(&[sample_body(2), sample_body(2)]);
        assert_eq!(decode_frame(&data), Err(FrameError::DuplicateBodyId { body_id: 2 }));
    }

    #[test]
    fn test_rejects_unknown_tracking_state() {
        let mut data = encode_frame(&[sample_body(0)]);
        // State slot of the fourth joint (Head)
        data[2 + JointType::Head.index() * JOINT_STRIDE + 3] = 7.0;
        let err = decode_frame(&data).unwrap_err();
        assert_eq!(
            err,
            FrameError::UnknownTrackingState {
                joint: "Head",
                value: 7.0
            }
        );
        assert_eq!(err.to_string(), "unknown tracking state 7 for joint Head");
    }
}
