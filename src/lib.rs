//! Dance Web - Real-time Dance Grading Engine
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! JavaScript owns the camera, the reference video and MediaPipe pose
//! detection; this module owns framing/alignment, skeleton normalization,
//! frame-by-frame grading and the session state machine.

mod bridge;
pub mod grading;
pub mod session;

use wasm_bindgen::prelude::*;

// Core value types
pub use bridge::{Landmark, Skeleton};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    begin_frame, countdown_tick, end_frame, get_alignment_feedback, get_final_score,
    get_grade_counts, get_session_phase, get_total_evals, push_live_missing, push_live_skeleton,
    push_reference_skeleton, reference_ended, reset_session, set_webcam_running,
    take_finalized_grade,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
