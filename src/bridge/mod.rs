//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frame;
mod session_store;

pub use frame::{
    decode_frame,
    FrameError,
    BODY_STRIDE,
    JOINT_STRIDE,
    MAX_BODY_ID,
};

pub use session_store::{
    // WASM entry points
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
    // Internal API
    encode_status_codes,
    encode_guide_lines,
};
