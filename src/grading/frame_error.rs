//! Frame error - scalar dissimilarity between two normalized skeletons
//!
//! Mean planar distance over a fixed 12-joint subset. Head/face and feet
//! are excluded to keep the metric from chasing detector noise; z is
//! normalized upstream but intentionally left out of the distance.

use nalgebra::Point2;

use crate::bridge::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use super::normalize::NormalizedSkeleton;

/// Joints compared between reference and live pose (shoulders, elbows,
/// wrists, hips, knees, ankles - covers all major full-body motion)
pub const SCORING_JOINTS: [usize; 12] = [
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    LEFT_ELBOW,
    RIGHT_ELBOW,
    LEFT_WRIST,
    RIGHT_WRIST,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_ANKLE,
    RIGHT_ANKLE,
];

/// Mean Euclidean (x, y) distance across the scoring joints.
///
/// Non-negative, in torso-length units; 0 means a perfect match.
pub fn frame_error(reference: &NormalizedSkeleton, live: &NormalizedSkeleton) -> f32 {
    let total: f32 = SCORING_JOINTS
        .iter()
        .map(|&idx| {
            let r = reference.joint(idx);
            let l = live.joint(idx);
            nalgebra::distance(&Point2::new(r.x, r.y), &Point2::new(l.x, l.y))
        })
        .sum();

    total / SCORING_JOINTS.len() as f32
}
