//! Alignment detection - is the user correctly framed?
//!
//! Scoring against the reference only makes sense once the whole body is in
//! shot, so the session waits until head, hips and feet are all confidently
//! visible. Pure check, no state.

use crate::bridge::{Skeleton, LEFT_FOOT_INDEX, LEFT_HIP, NOSE, RIGHT_FOOT_INDEX, RIGHT_HIP};

/// Joints that must be visible before a session can start
pub const ALIGNMENT_JOINTS: [usize; 5] =
    [NOSE, LEFT_HIP, RIGHT_HIP, LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX];

/// Minimum visibility for each required joint (strictly greater-than)
pub const ALIGNMENT_VISIBILITY: f32 = 0.6;

const READY_FEEDBACK: &str = "Ready! Keep your pose...";
const FRAMING_FEEDBACK: &str = "Please show your full body (Head, Hips, Feet)";

/// Result of one alignment check
#[derive(Clone, Copy, Debug)]
pub struct AlignmentStatus {
    pub ready: bool,
    /// Human-readable framing feedback for the display layer
    pub feedback: &'static str,
}

/// Check whether the live skeleton satisfies the ready condition
pub fn check_alignment(skeleton: &Skeleton) -> AlignmentStatus {
    let ready = ALIGNMENT_JOINTS
        .iter()
        .all(|&idx| skeleton.joint(idx).visibility > ALIGNMENT_VISIBILITY);

    AlignmentStatus {
        ready,
        feedback: if ready { READY_FEEDBACK } else { FRAMING_FEEDBACK },
    }
}
