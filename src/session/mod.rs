//! Session module - alignment, countdown, frame loop and the state machine
//!
//! Re-exports only. All logic in submodules.

mod alignment;
mod countdown;
mod frame_loop;
mod state;

pub use alignment::{check_alignment, AlignmentStatus, ALIGNMENT_JOINTS, ALIGNMENT_VISIBILITY};
pub use countdown::{Countdown, CountdownTick};
pub use frame_loop::{FrameCoordinator, FramePlan};
pub use state::{Session, SessionPhase};
