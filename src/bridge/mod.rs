//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session_api;

pub use landmarks::{
    // Value types
    Landmark,
    Skeleton,
    // Payload shape
    FLAT_LEN,
    LANDMARK_COUNT,
    VALUES_PER_LANDMARK,
    // Landmark indices
    LEFT_ANKLE,
    LEFT_ELBOW,
    LEFT_FOOT_INDEX,
    LEFT_HIP,
    LEFT_KNEE,
    LEFT_SHOULDER,
    LEFT_WRIST,
    NOSE,
    RIGHT_ANKLE,
    RIGHT_ELBOW,
    RIGHT_FOOT_INDEX,
    RIGHT_HIP,
    RIGHT_KNEE,
    RIGHT_SHOULDER,
    RIGHT_WRIST,
};

pub use session_api::{
    begin_frame, countdown_tick, end_frame, get_alignment_feedback, get_final_score,
    get_grade_counts, get_session_phase, get_total_evals, push_live_missing, push_live_skeleton,
    push_reference_skeleton, reference_ended, reset_session, set_webcam_running,
    take_finalized_grade,
};
