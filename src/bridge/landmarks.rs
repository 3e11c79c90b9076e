//! Skeleton value types and JS payload parsing
//!
//! MediaPipe Pose landmarks arrive from JavaScript as a flat Float32Array.
//! Malformed detector output is rejected here, at the boundary; everything
//! past this module works with a validated `Skeleton`.

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Total landmarks per detection result
pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark in the flat JS payload: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

/// Expected flat payload length (33 landmarks x 4 values)
pub const FLAT_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

// ============================================================================
// VALUE TYPES
// ============================================================================

/// A single pose landmark (normalized image-fraction coordinates)
#[derive(Clone, Copy, Default, Debug)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth, same scale as x/y
    pub visibility: f32, // Detector confidence, 0-1
}

/// One detected subject at one timestamp: 33 fixed-role joints.
///
/// Immutable after construction and owned by the stream that requested the
/// detection; the live and reference streams never share one.
#[derive(Clone, Copy, Debug)]
pub struct Skeleton {
    joints: [Landmark; LANDMARK_COUNT],
}

impl Skeleton {
    pub fn new(joints: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { joints }
    }

    /// Parse a flat Float32Array payload from JS.
    ///
    /// Returns `None` for anything other than exactly 132 values.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != FLAT_LEN {
            return None;
        }

        let mut joints = [Landmark::default(); LANDMARK_COUNT];
        for (i, joint) in joints.iter_mut().enumerate() {
            let base = i * VALUES_PER_LANDMARK;
            *joint = Landmark {
                x: data[base],
                y: data[base + 1],
                z: data[base + 2],
                visibility: data[base + 3],
            };
        }

        Some(Self { joints })
    }

    pub fn joint(&self, index: usize) -> &Landmark {
        &self.joints[index]
    }

    pub fn joints(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.joints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_valid() {
        let mut data = vec![0.0f32; FLAT_LEN];
        // Landmark 5: x=0.1, y=0.2, z=0.3, visibility=0.9
        data[20] = 0.1;
        data[21] = 0.2;
        data[22] = 0.3;
        data[23] = 0.9;

        let skeleton = Skeleton::from_flat(&data).unwrap();
        let joint = skeleton.joint(5);
        assert_eq!(joint.x, 0.1);
        assert_eq!(joint.y, 0.2);
        assert_eq!(joint.z, 0.3);
        assert_eq!(joint.visibility, 0.9);
    }

    #[test]
    fn test_from_flat_rejects_wrong_length() {
        assert!(Skeleton::from_flat(&[0.0; 99]).is_none());
        assert!(Skeleton::from_flat(&[]).is_none());
        assert!(Skeleton::from_flat(&[0.0; FLAT_LEN + 1]).is_none());
    }
}
