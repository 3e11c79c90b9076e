//! Frame grade classification
//!
//! Maps a frame's spatial error to a discrete grade with fixed thresholds.
//! C is the "miss" bucket and is displayed as MISS.

/// Errors below this are an S
const S_THRESHOLD: f32 = 0.15;
/// Errors below this (and at least S_THRESHOLD) are an A
const A_THRESHOLD: f32 = 0.25;
/// Errors below this (and at least A_THRESHOLD) are a B; everything else is C
const B_THRESHOLD: f32 = 0.35;

/// Per-frame grade, best to worst
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameGrade {
    S,
    A,
    B,
    C,
}

impl FrameGrade {
    /// Classify a spatial error (torso-length units).
    ///
    /// Boundaries are half-open on the lower bound: exactly 0.15 is an A,
    /// exactly 0.35 is a C.
    pub fn from_error(error: f32) -> Self {
        if error < S_THRESHOLD {
            FrameGrade::S
        } else if error < A_THRESHOLD {
            FrameGrade::A
        } else if error < B_THRESHOLD {
            FrameGrade::B
        } else {
            FrameGrade::C
        }
    }

    /// Score points awarded when a window finalizes to this grade
    pub fn points(&self) -> u32 {
        match self {
            FrameGrade::S => 100,
            FrameGrade::A => 80,
            FrameGrade::B => 60,
            FrameGrade::C => 0,
        }
    }

    /// Display label; C reads as MISS
    pub fn label(&self) -> &'static str {
        match self {
            FrameGrade::S => "S",
            FrameGrade::A => "A",
            FrameGrade::B => "B",
            FrameGrade::C => "MISS",
        }
    }

    /// Stable index for counting (S=0 .. C=3)
    pub fn index(&self) -> usize {
        match self {
            FrameGrade::S => 0,
            FrameGrade::A => 1,
            FrameGrade::B => 2,
            FrameGrade::C => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(FrameGrade::from_error(0.0), FrameGrade::S);
        assert_eq!(FrameGrade::from_error(0.1), FrameGrade::S);
        assert_eq!(FrameGrade::from_error(0.2), FrameGrade::A);
        assert_eq!(FrameGrade::from_error(0.3), FrameGrade::B);
        assert_eq!(FrameGrade::from_error(0.5), FrameGrade::C);
    }

    #[test]
    fn test_boundaries_are_half_open() {
        // Exactly on a boundary falls into the worse band
        assert_eq!(FrameGrade::from_error(0.15), FrameGrade::A);
        assert_eq!(FrameGrade::from_error(0.25), FrameGrade::B);
        assert_eq!(FrameGrade::from_error(0.35), FrameGrade::C);
    }

    #[test]
    fn test_points_and_labels() {
        assert_eq!(FrameGrade::S.points(), 100);
        assert_eq!(FrameGrade::A.points(), 80);
        assert_eq!(FrameGrade::B.points(), 60);
        assert_eq!(FrameGrade::C.points(), 0);
        assert_eq!(FrameGrade::C.label(), "MISS");
    }
}
