//! Session state machine
//!
//! Owns the lifecycle of one grading session: waits for the user to frame
//! themselves, counts down, scores live frames against the reference while
//! it plays, and freezes into a final result when it ends. All transitions
//! happen here; nothing else mutates the phase.

use crate::bridge::Skeleton;
use crate::grading::{frame_error, normalize, FrameGrade, GradeAggregator, SessionStats};
use super::alignment::check_alignment;
use super::countdown::{Countdown, CountdownTick};

/// Session lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Aligning,
    Countdown,
    Scanning,
    Finished,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Aligning => "ALIGNING",
            SessionPhase::Countdown => "COUNTDOWN",
            SessionPhase::Scanning => "SCANNING",
            SessionPhase::Finished => "FINISHED",
        }
    }
}

/// One grading session: phase, cached per-stream skeletons, grade totals
pub struct Session {
    phase: SessionPhase,
    aggregator: GradeAggregator,
    countdown: Countdown,
    live_skeleton: Option<Skeleton>,
    reference_skeleton: Option<Skeleton>,
    /// Set when a live skeleton arrives, cleared once the scoring tail has
    /// looked at it; scoring runs at most once per new live frame
    live_fresh: bool,
    feedback: &'static str,
    /// Last finalized verdict, held until the display layer takes it
    pending_verdict: Option<FrameGrade>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Aligning,
            aggregator: GradeAggregator::new(),
            countdown: Countdown::new(),
            live_skeleton: None,
            reference_skeleton: None,
            live_fresh: false,
            feedback: "",
            pending_verdict: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn feedback(&self) -> &'static str {
        self.feedback
    }

    /// A live detection produced a skeleton.
    ///
    /// While aligning this doubles as the framing check. The phase guard is
    /// load-bearing: every camera frame lands here, and two ready frames in
    /// a row must still start exactly one countdown.
    pub fn on_live_skeleton(&mut self, skeleton: Skeleton) {
        if self.phase == SessionPhase::Aligning {
            let status = check_alignment(&skeleton);
            self.feedback = status.feedback;
            if status.ready {
                self.begin_countdown();
                return;
            }
        }
        self.live_skeleton = Some(skeleton);
        self.live_fresh = true;
    }

    /// Live detection succeeded but saw nobody. The last-known skeleton is
    /// kept (it is simply not fresh), so there is nothing to score and
    /// nothing to clear.
    pub fn on_live_missing(&mut self) {}

    /// A reference detection produced a skeleton
    pub fn on_reference_skeleton(&mut self, skeleton: Skeleton) {
        self.reference_skeleton = Some(skeleton);
    }

    fn begin_countdown(&mut self) {
        self.phase = SessionPhase::Countdown;
        self.countdown = Countdown::new();
        // Drop anything detected before the countdown; scoring starts from
        // a clean slate when the reference begins playing
        self.live_skeleton = None;
        self.reference_skeleton = None;
        self.live_fresh = false;
    }

    /// Advance the countdown by one tick (driven by a 1 Hz JS interval).
    ///
    /// Returns the overlay label to show, or `None` when the tick source
    /// should stop. The GO tick transitions to scanning; the JS side
    /// observes the phase change and starts reference playback.
    pub fn countdown_tick(&mut self) -> Option<&'static str> {
        if self.phase != SessionPhase::Countdown {
            return None;
        }
        match self.countdown.tick() {
            CountdownTick::Display(label) => Some(label),
            CountdownTick::Go => {
                self.phase = SessionPhase::Scanning;
                Some("GO!")
            }
            CountdownTick::Finished => None,
        }
    }

    /// Scoring tail of one frame-loop iteration, after both detections have
    /// settled. Runs the normalize -> error -> classify -> record chain when
    /// scanning and a new live skeleton arrived this iteration.
    pub fn end_frame(&mut self) {
        if self.phase != SessionPhase::Scanning || !self.live_fresh {
            return;
        }
        self.live_fresh = false;

        let (reference, live) = match (&self.reference_skeleton, &self.live_skeleton) {
            (Some(reference), Some(live)) => (reference, live),
            _ => return,
        };

        let error = frame_error(&normalize(reference), &normalize(live));
        self.aggregator.record(FrameGrade::from_error(error));
        if let Some(verdict) = self.aggregator.maybe_finalize(false) {
            self.pending_verdict = Some(verdict);
        }
    }

    /// The reference stream signalled end-of-playback: flush any partial
    /// window and freeze the session. Idempotent; only a scanning session
    /// can finish.
    pub fn on_reference_ended(&mut self) {
        if self.phase != SessionPhase::Scanning {
            return;
        }
        self.phase = SessionPhase::Finished;
        if let Some(verdict) = self.aggregator.maybe_finalize(true) {
            self.pending_verdict = Some(verdict);
        }
    }

    /// Take the latest finalized verdict for transient display
    pub fn take_verdict(&mut self) -> Option<FrameGrade> {
        self.pending_verdict.take()
    }

    pub fn final_score(&self) -> u32 {
        self.aggregator.final_score()
    }

    pub fn stats(&self) -> SessionStats {
        self.aggregator.stats()
    }

    pub fn buffered_grades(&self) -> usize {
        self.aggregator.buffered()
    }

    /// Return to a fresh aligning session; the only way accumulated stats
    /// are ever cleared
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Aligning;
        self.aggregator.reset();
        self.countdown = Countdown::new();
        self.live_skeleton = None;
        self.reference_skeleton = None;
        self.live_fresh = false;
        self.feedback = "";
        self.pending_verdict = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
