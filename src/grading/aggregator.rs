//! Windowed grade aggregation and session totals
//!
//! Per-frame grades are noisy, so they are batched: every 30 grades (about
//! one second of scoring) collapse into a single verdict - the statistical
//! mode of the window - which is what the player actually sees and what the
//! final score is computed from.

use super::classify::FrameGrade;

/// Grades per aggregation window
pub const EVAL_WINDOW: usize = 30;

/// Finalized-verdict counters for one session.
///
/// Mutated only by `GradeAggregator`; the per-grade counts always sum to
/// `total_evals`.
#[derive(Clone, Copy, Default, Debug)]
pub struct SessionStats {
    pub s: u32,
    pub a: u32,
    pub b: u32,
    pub miss: u32,
    pub total_points: u32,
    pub total_evals: u32,
}

/// Batches per-frame grades into per-window verdicts and accumulates totals
pub struct GradeAggregator {
    buffer: Vec<FrameGrade>,
    stats: SessionStats,
}

impl GradeAggregator {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(EVAL_WINDOW),
            stats: SessionStats::default(),
        }
    }

    /// Append one per-frame grade to the current window
    pub fn record(&mut self, grade: FrameGrade) {
        self.buffer.push(grade);
    }

    /// Finalize the window if it is full, or unconditionally when `force`
    /// is set and anything is buffered (used when the reference video ends
    /// mid-window).
    ///
    /// Returns the finalized verdict for display, if one was produced.
    pub fn maybe_finalize(&mut self, force: bool) -> Option<FrameGrade> {
        if (self.buffer.len() < EVAL_WINDOW && !force) || self.buffer.is_empty() {
            return None;
        }

        let verdict = buffer_mode(&self.buffer);
        match verdict {
            FrameGrade::S => self.stats.s += 1,
            FrameGrade::A => self.stats.a += 1,
            FrameGrade::B => self.stats.b += 1,
            FrameGrade::C => self.stats.miss += 1,
        }
        self.stats.total_points += verdict.points();
        self.stats.total_evals += 1;
        self.buffer.clear();

        Some(verdict)
    }

    /// Session score in [0, 100]: mean points per finalized window, rounded
    pub fn final_score(&self) -> u32 {
        if self.stats.total_evals == 0 {
            return 0;
        }
        let avg = self.stats.total_points as f32 / self.stats.total_evals as f32;
        (avg.round() as i64).clamp(0, 100) as u32
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Zero all counters and drop any buffered grades
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.stats = SessionStats::default();
    }
}

impl Default for GradeAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Most frequent grade in the buffer.
///
/// Ties break to the grade whose first occurrence comes earliest in the
/// buffer; scanning in insertion order with a strict `>` gives exactly that.
fn buffer_mode(buffer: &[FrameGrade]) -> FrameGrade {
    let mut counts = [0u32; 4];
    for grade in buffer {
        counts[grade.index()] += 1;
    }

    let mut best = buffer[0];
    for grade in buffer {
        if counts[grade.index()] > counts[best.index()] {
            best = *grade;
        }
    }
    best
}
