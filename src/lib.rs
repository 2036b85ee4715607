//! Physio Form - per-frame physiotherapy exercise checking
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Console logging
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page owns the body tracker and the canvas. Each body frame goes
//! through `process_frame`; the returned status codes drive the on-screen
//! messages and `get_guide_lines` supplies the directional overlays.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod skeleton;
pub mod form;
pub mod exercise;
pub mod guide;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_frame,
    get_guide_lines,
    set_mode,
    get_mode,
    reset_progress,
    forget_body,
    set_raise_params,
    set_bend_params,
    set_display_mapping,
    status_message,
    get_bones,
    encode_status_codes,
    encode_guide_lines,
    decode_frame,
    FrameError,
    BODY_STRIDE,
    JOINT_STRIDE,
    MAX_BODY_ID,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Announce the module and its frame layout to the page
#[wasm_bindgen]
pub fn init() {
    console_log!("✅ Physio form checker ready ({} floats per body)", BODY_STRIDE);
}
