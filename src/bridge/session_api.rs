//! Session control surface and display getters
//!
//! Everything the JS frame loop and UI touch lives here. State is
//! thread-local (WASM is single-threaded); the session and the frame
//! coordinator are only ever mutated from within one loop iteration.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::grading::SessionStats;
use crate::session::{FrameCoordinator, FramePlan, Session};
use super::landmarks::{Skeleton, FLAT_LEN};

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
    static FRAME_LOOP: RefCell<FrameCoordinator> = RefCell::new(FrameCoordinator::new());
}

fn warn_bad_payload(stream: &str, len: usize) {
    web_sys::console::warn_1(
        &format!(
            "Invalid {} landmark payload: {} values (expected {})",
            stream, len, FLAT_LEN
        )
        .into(),
    );
}

// ============================================================================
// FRAME LOOP
// ============================================================================

/// Start one frame-loop iteration.
///
/// `live_time` / `ref_time` are the current media timestamps of the webcam
/// and reference video. Returns the detection plan; when `run` is false the
/// iteration was dropped and JS should just schedule the next frame.
#[wasm_bindgen]
pub fn begin_frame(live_time: f64, ref_time: f64, ref_playing: bool) -> FramePlan {
    let phase = SESSION.with(|session| session.borrow().phase());
    FRAME_LOOP.with(|coordinator| {
        coordinator
            .borrow_mut()
            .begin(live_time, ref_time, ref_playing, phase)
    })
}

/// End the iteration started by `begin_frame`. Runs the scoring tail and
/// releases the in-flight flag; JS must call this from a `finally` so a
/// throwing detector cannot stall the loop.
#[wasm_bindgen]
pub fn end_frame() {
    SESSION.with(|session| session.borrow_mut().end_frame());
    FRAME_LOOP.with(|coordinator| coordinator.borrow_mut().finish());
}

/// Live-stream toggle (webcam enable/disable button)
#[wasm_bindgen]
pub fn set_webcam_running(running: bool) {
    FRAME_LOOP.with(|coordinator| coordinator.borrow_mut().set_webcam_running(running));
}

// ============================================================================
// DETECTION RESULTS
// ============================================================================

/// Called with a flat Float32Array of 132 values (33 landmarks x
/// x, y, z, visibility) when live detection found a pose
#[wasm_bindgen]
pub fn push_live_skeleton(data: &[f32]) {
    match Skeleton::from_flat(data) {
        Some(skeleton) => SESSION.with(|session| session.borrow_mut().on_live_skeleton(skeleton)),
        None => warn_bad_payload("live", data.len()),
    }
}

/// Live detection succeeded but found nobody in frame
#[wasm_bindgen]
pub fn push_live_missing() {
    SESSION.with(|session| session.borrow_mut().on_live_missing());
}

/// Reference-video detection result (same payload shape as live).
/// On a reference detector error, JS skips the push for that frame; the
/// loop carries on either way.
#[wasm_bindgen]
pub fn push_reference_skeleton(data: &[f32]) {
    match Skeleton::from_flat(data) {
        Some(skeleton) => {
            SESSION.with(|session| session.borrow_mut().on_reference_skeleton(skeleton))
        }
        None => warn_bad_payload("reference", data.len()),
    }
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Advance the pre-scan countdown (called by a 1 Hz JS interval).
/// Returns the overlay label; `None` means the interval should stop.
#[wasm_bindgen]
pub fn countdown_tick() -> Option<String> {
    SESSION.with(|session| session.borrow_mut().countdown_tick().map(str::to_owned))
}

/// The reference video fired its `ended` event: flush any partial grade
/// window and freeze the session
#[wasm_bindgen]
pub fn reference_ended() {
    SESSION.with(|session| session.borrow_mut().on_reference_ended());
    web_sys::console::log_1(&"Reference playback ended, session finished".into());
}

/// Full reset back to the aligning phase; clears all accumulated stats and
/// the reference clock (JS rewinds the video alongside this)
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|session| session.borrow_mut().reset());
    FRAME_LOOP.with(|coordinator| coordinator.borrow_mut().reset_reference_clock());
    web_sys::console::log_1(&"Session reset, waiting for alignment".into());
}

// ============================================================================
// DISPLAY GETTERS (polled by JS)
// ============================================================================

/// Current phase: "ALIGNING" | "COUNTDOWN" | "SCANNING" | "FINISHED".
/// JS starts reference playback when it observes the SCANNING transition.
#[wasm_bindgen]
pub fn get_session_phase() -> String {
    SESSION.with(|session| session.borrow().phase().as_str().to_owned())
}

/// Framing feedback text for the alignment overlay
#[wasm_bindgen]
pub fn get_alignment_feedback() -> String {
    SESSION.with(|session| session.borrow().feedback().to_owned())
}

/// One-shot: the latest finalized window verdict ("S" / "A" / "B" / "MISS"),
/// cleared on read so each verdict animates exactly once
#[wasm_bindgen]
pub fn take_finalized_grade() -> Option<String> {
    SESSION.with(|session| {
        session
            .borrow_mut()
            .take_verdict()
            .map(|verdict| verdict.label().to_owned())
    })
}

/// Final session score in [0, 100]
#[wasm_bindgen]
pub fn get_final_score() -> u32 {
    SESSION.with(|session| session.borrow().final_score())
}

/// Finalized verdict counts as [S, A, B, MISS]
#[wasm_bindgen]
pub fn get_grade_counts() -> Vec<u32> {
    let stats: SessionStats = SESSION.with(|session| session.borrow().stats());
    vec![stats.s, stats.a, stats.b, stats.miss]
}

/// Number of finalized windows this session
#[wasm_bindgen]
pub fn get_total_evals() -> u32 {
    SESSION.with(|session| session.borrow().stats().total_evals)
}
