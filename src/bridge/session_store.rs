//! Session storage and JS bridge
//!
//! Holds the exercise session between frames and exposes the frame
//! callback, mode selector and tuning setters to JavaScript.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::frame::{decode_frame, FrameError};
use crate::exercise::{BodyReport, ExerciseSession, ExerciseStatus, Mode};
use crate::guide::OrthographicMapper;
use crate::skeleton::BONES;

/// Session, display mapping and the last frame's reports
#[derive(Default)]
struct SessionStore {
    session: ExerciseSession,
    mapper: OrthographicMapper,
    last_reports: Vec<BodyReport>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionStore> = RefCell::new(SessionStore::default());
}

// ============================================================================
// REPORT ENCODING
// ============================================================================

/// [body_id, n, code × n] per reported body
pub fn encode_status_codes(reports: &[BodyReport]) -> Vec<i32> {
    let mut out = Vec::new();
    for report in reports {
        out.push(report.body_id as i32);
        out.push(report.results.len() as i32);
        out.extend(report.results.iter().map(|r| r.status.code()));
    }
    out
}

/// [body_id, segment_count, x1, y1, x2, y2, ...] per guide
pub fn encode_guide_lines(reports: &[BodyReport]) -> Vec<f32> {
    let mut out = Vec::new();
    for report in reports {
        for guide in report.results.iter().filter_map(|r| r.guide.as_ref()) {
            out.push(report.body_id as f32);
            out.push(guide.segments().len() as f32);
            out.extend(guide.flatten());
        }
    }
    out
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per body frame
///
/// Returns the encoded status codes; a malformed frame is skipped whole
/// and reported as an error without touching any exercise state.
///
/// Progress of a body missing from the frame is kept, so a person who
/// briefly drops out resumes mid-repetition. Call `forget_body` once the
/// provider reports that body as gone.
#[wasm_bindgen]
pub fn process_frame(data: &[f32]) -> Result<Vec<i32>, JsValue> {
    let skeletons = match decode_frame(data) {
        Ok(skeletons) => skeletons,
        Err(err) => {
            web_sys::console::warn_1(&format!("Frame skipped: {}", err).into());
            return Err(err.into());
        }
    };

    SESSION.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        let mode_before = store.session.mode();

        let mapper = store.mapper;
        let reports = store.session.evaluate_frame(&skeletons, Some(&mapper));

        for report in &reports {
            for result in &report.results {
                if result.status == ExerciseStatus::Completed {
                    console_log!(
                        "✅ Body {} completed {} {}",
                        report.body_id,
                        result.exercise.side().name(),
                        result.exercise.name()
                    );
                }
            }
        }
        if store.session.mode() != mode_before {
            console_log!("Session finished, back to {}", store.session.mode().name());
        }

        let codes = encode_status_codes(&reports);
        store.last_reports = reports;
        Ok(codes)
    })
}

/// Guide overlays for the last processed frame
#[wasm_bindgen]
pub fn get_guide_lines() -> Vec<f32> {
    SESSION.with(|store_cell| encode_guide_lines(&store_cell.borrow().last_reports))
}

/// Mode selector: 0 neutral, 1 bilateral arm raise, 2 arm bend
#[wasm_bindgen]
pub fn set_mode(index: u32) -> Result<(), JsValue> {
    let mode = Mode::from_index(index).ok_or(FrameError::UnknownMode(index))?;

    SESSION.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.session.set_mode(mode);
        store.last_reports.clear();
    });
    console_log!("Mode: {}", mode.name());
    Ok(())
}

#[wasm_bindgen]
pub fn get_mode() -> u32 {
    SESSION.with(|store_cell| store_cell.borrow().session.mode().index())
}

/// Clear every body's progress without changing mode
#[wasm_bindgen]
pub fn reset_progress() {
    SESSION.with(|store_cell| store_cell.borrow_mut().session.reset_progress());
}

/// Drop the progress of a body the page no longer sees
#[wasm_bindgen]
pub fn forget_body(body_id: u32) {
    SESSION.with(|store_cell| store_cell.borrow_mut().session.forget_body(body_id));
}

/// Tune the arm raise (degrees)
#[wasm_bindgen]
pub fn set_raise_params(tolerance: f32, arm_tolerance: f32, start_angle: f32, end_angle: f32) {
    SESSION.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        let raise = &mut store.session.config_mut().raise;
        raise.tolerance = tolerance;
        raise.arm_tolerance = arm_tolerance;
        raise.start_angle = start_angle;
        raise.end_angle = end_angle;
    });
}

/// Tune the arm bend (degrees)
#[wasm_bindgen]
pub fn set_bend_params(tolerance: f32, arm_tolerance: f32) {
    SESSION.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        let bend = &mut store.session.config_mut().bend;
        bend.tolerance = tolerance;
        bend.arm_tolerance = arm_tolerance;
    });
}

/// Canvas size and scale used to place guides
#[wasm_bindgen]
pub fn set_display_mapping(width: f32, height: f32, pixels_per_unit: f32) {
    SESSION.with(|store_cell| {
        store_cell.borrow_mut().mapper = OrthographicMapper::new(width, height, pixels_per_unit);
    });
}

/// Bone pairs as flat joint indices [parent, child, ...] for drawing
#[wasm_bindgen]
pub fn get_bones() -> Vec<u32> {
    BONES
        .iter()
        .flat_map(|(parent, child)| [parent.index() as u32, child.index() as u32])
        .collect()
}

/// Instruction text for a status code (None for unknown codes)
#[wasm_bindgen]
pub fn status_message(code: i32) -> Option<String> {
    ExerciseStatus::from_code(code).map(|status| status.as_str().to_string())
}
