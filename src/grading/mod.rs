//! Grading module - the per-frame comparison pipeline
//!
//! Normalizer -> frame error -> grade classification -> windowed aggregation.
//! Re-exports only. All logic in submodules.

mod aggregator;
mod classify;
mod frame_error;
mod normalize;

pub use aggregator::{GradeAggregator, SessionStats, EVAL_WINDOW};
pub use classify::FrameGrade;
pub use frame_error::{frame_error, SCORING_JOINTS};
pub use normalize::{normalize, NormalizedSkeleton, TORSO_SCALE_FLOOR};
