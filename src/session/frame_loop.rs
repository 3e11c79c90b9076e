//! Frame loop coordination
//!
//! The JS side runs one requestAnimationFrame loop; each iteration asks this
//! coordinator what to do, performs the (async) detections, then reports
//! back. The coordinator enforces the loop's two rules:
//! - at most one iteration in flight; a request while one is active is
//!   dropped, never queued
//! - a stream is only detected when its timestamp has actually advanced, so
//!   a paused or stalled source is never re-processed

use wasm_bindgen::prelude::*;

use super::state::SessionPhase;

/// What the JS loop should do this iteration
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct FramePlan {
    /// False when the iteration was dropped (one already in flight, or the
    /// session is finished): skip straight to the next animation frame
    pub run: bool,
    pub detect_live: bool,
    pub detect_reference: bool,
}

impl FramePlan {
    fn skipped() -> Self {
        Self {
            run: false,
            detect_live: false,
            detect_reference: false,
        }
    }
}

/// Single-writer frame loop state
pub struct FrameCoordinator {
    in_flight: bool,
    webcam_running: bool,
    last_live_time: f64,
    last_ref_time: f64,
}

impl FrameCoordinator {
    pub fn new() -> Self {
        Self {
            in_flight: false,
            webcam_running: false,
            last_live_time: -1.0,
            last_ref_time: -1.0,
        }
    }

    /// Live-stream toggle. Stopping also releases any in-flight iteration,
    /// since its results will never be consumed.
    pub fn set_webcam_running(&mut self, running: bool) {
        self.webcam_running = running;
        if !running {
            self.in_flight = false;
        }
    }

    pub fn webcam_running(&self) -> bool {
        self.webcam_running
    }

    /// Start an iteration and decide which streams to detect.
    ///
    /// Timestamps are recorded at planning time, so the same source frame is
    /// never handed to the detector twice even if detection later fails.
    pub fn begin(
        &mut self,
        live_time: f64,
        ref_time: f64,
        ref_playing: bool,
        phase: SessionPhase,
    ) -> FramePlan {
        if self.in_flight {
            return FramePlan::skipped();
        }
        // Finished sessions keep the loop alive but do no detection work
        if phase == SessionPhase::Finished {
            return FramePlan::skipped();
        }

        let detect_live = self.webcam_running && live_time != self.last_live_time;
        if detect_live {
            self.last_live_time = live_time;
        }

        let detect_reference = phase == SessionPhase::Scanning
            && ref_playing
            && ref_time > 0.0
            && ref_time != self.last_ref_time;
        if detect_reference {
            self.last_ref_time = ref_time;
        }

        self.in_flight = true;
        FramePlan {
            run: true,
            detect_live,
            detect_reference,
        }
    }

    /// End the iteration. Must run even when a detector threw on the JS
    /// side, so the loop can never stall permanently.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Forget the last observed reference timestamp (session reset rewinds
    /// the video, so the next frame must pass the advance check again)
    pub fn reset_reference_clock(&mut self) {
        self.last_ref_time = -1.0;
    }
}

impl Default for FrameCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_coordinator() -> FrameCoordinator {
        let mut coordinator = FrameCoordinator::new();
        coordinator.set_webcam_running(true);
        coordinator
    }

    #[test]
    fn test_reentrant_begin_is_dropped() {
        let mut coordinator = running_coordinator();

        let first = coordinator.begin(1.0, 0.0, false, SessionPhase::Aligning);
        assert!(first.run);
        assert!(first.detect_live);

        let second = coordinator.begin(2.0, 0.0, false, SessionPhase::Aligning);
        assert!(!second.run);

        coordinator.finish();
        let third = coordinator.begin(2.0, 0.0, false, SessionPhase::Aligning);
        assert!(third.run);
        assert!(third.detect_live);
    }

    #[test]
    fn test_stationary_live_timestamp_is_not_redetected() {
        let mut coordinator = running_coordinator();

        assert!(coordinator.begin(1.0, 0.0, false, SessionPhase::Aligning).detect_live);
        coordinator.finish();
        assert!(!coordinator.begin(1.0, 0.0, false, SessionPhase::Aligning).detect_live);
    }

    #[test]
    fn test_reference_detected_only_while_scanning_and_playing() {
        let mut coordinator = running_coordinator();

        let aligning = coordinator.begin(1.0, 0.5, true, SessionPhase::Aligning);
        assert!(!aligning.detect_reference);
        coordinator.finish();

        let paused = coordinator.begin(2.0, 0.5, false, SessionPhase::Scanning);
        assert!(!paused.detect_reference);
        coordinator.finish();

        let scanning = coordinator.begin(3.0, 0.5, true, SessionPhase::Scanning);
        assert!(scanning.detect_reference);
        coordinator.finish();

        // Same reference timestamp: already processed
        let repeat = coordinator.begin(4.0, 0.5, true, SessionPhase::Scanning);
        assert!(!repeat.detect_reference);
    }

    #[test]
    fn test_reference_time_zero_is_skipped() {
        let mut coordinator = running_coordinator();
        let plan = coordinator.begin(1.0, 0.0, true, SessionPhase::Scanning);
        assert!(!plan.detect_reference);
    }

    #[test]
    fn test_finished_phase_plans_nothing() {
        let mut coordinator = running_coordinator();
        let plan = coordinator.begin(1.0, 1.0, true, SessionPhase::Finished);
        assert!(!plan.run);
        assert!(!plan.detect_live);
        assert!(!plan.detect_reference);

        // Dropped plan did not set the in-flight flag
        assert!(coordinator.begin(2.0, 1.0, true, SessionPhase::Aligning).run);
    }

    #[test]
    fn test_stopping_webcam_releases_in_flight_iteration() {
        let mut coordinator = running_coordinator();
        assert!(coordinator.begin(1.0, 0.0, false, SessionPhase::Aligning).run);

        coordinator.set_webcam_running(false);
        coordinator.set_webcam_running(true);

        // A fresh iteration can start without the old one finishing
        let plan = coordinator.begin(2.0, 0.0, false, SessionPhase::Aligning);
        assert!(plan.run);
    }

    #[test]
    fn test_reset_reference_clock_allows_rescan() {
        let mut coordinator = running_coordinator();
        assert!(coordinator.begin(1.0, 0.5, true, SessionPhase::Scanning).detect_reference);
        coordinator.finish();

        coordinator.reset_reference_clock();
        assert!(coordinator.begin(2.0, 0.5, true, SessionPhase::Scanning).detect_reference);
    }
}
