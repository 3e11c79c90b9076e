//! Skeleton normalization into a pose-invariant coordinate space
//!
//! Translates every joint so the hip midpoint becomes the origin, then
//! scales by torso length (shoulder midpoint to hip midpoint). Two people
//! standing at different spots or different distances from their cameras
//! end up directly comparable.

use nalgebra::Point2;

use crate::bridge::{
    Landmark, Skeleton, LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER,
};

/// Minimum torso length accepted as a scale divisor.
///
/// Below this the subject is not fully framed and dividing would blow
/// coordinates up; a fixed scale of 1.0 is substituted instead.
pub const TORSO_SCALE_FLOOR: f32 = 0.1;

/// A skeleton in hip-origin, torso-length units. Derived, never stored.
#[derive(Clone, Copy, Debug)]
pub struct NormalizedSkeleton {
    joints: [Landmark; LANDMARK_COUNT],
}

impl NormalizedSkeleton {
    pub fn joint(&self, index: usize) -> &Landmark {
        &self.joints[index]
    }
}

fn midpoint(a: &Landmark, b: &Landmark) -> Point2<f32> {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Normalize a skeleton: hip midpoint to origin, torso length to 1.
pub fn normalize(skeleton: &Skeleton) -> NormalizedSkeleton {
    let origin = midpoint(skeleton.joint(LEFT_HIP), skeleton.joint(RIGHT_HIP));
    let shoulder_mid = midpoint(skeleton.joint(LEFT_SHOULDER), skeleton.joint(RIGHT_SHOULDER));

    let torso = nalgebra::distance(&shoulder_mid, &origin);
    let scale = if torso > TORSO_SCALE_FLOOR { torso } else { 1.0 };

    let mut joints = [Landmark::default(); LANDMARK_COUNT];
    for (out, joint) in joints.iter_mut().zip(skeleton.joints().iter()) {
        *out = Landmark {
            x: (joint.x - origin.x) / scale,
            y: (joint.y - origin.y) / scale,
            z: joint.z / scale,
            visibility: joint.visibility,
        };
    }

    NormalizedSkeleton { joints }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Upright pose: hips at y=0.6, shoulders at y=0.2, torso length 0.4
    fn posed_skeleton() -> Skeleton {
        let mut joints = [Landmark {
            x: 0.5,
            y: 0.4,
            z: 0.0,
            visibility: 1.0,
        }; LANDMARK_COUNT];
        joints[LEFT_HIP] = Landmark { x: 0.4, y: 0.6, z: 0.0, visibility: 1.0 };
        joints[RIGHT_HIP] = Landmark { x: 0.6, y: 0.6, z: 0.0, visibility: 1.0 };
        joints[LEFT_SHOULDER] = Landmark { x: 0.4, y: 0.2, z: 0.0, visibility: 1.0 };
        joints[RIGHT_SHOULDER] = Landmark { x: 0.6, y: 0.2, z: 0.0, visibility: 1.0 };
        Skeleton::new(joints)
    }

    #[test]
    fn test_hip_midpoint_maps_to_origin() {
        let normalized = normalize(&posed_skeleton());
        let left = normalized.joint(LEFT_HIP);
        let right = normalized.joint(RIGHT_HIP);
        assert!(((left.x + right.x) / 2.0).abs() < 1e-6);
        assert!(((left.y + right.y) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_invariance() {
        let skeleton = posed_skeleton();

        // Same pose, twice as large in the image
        let mut scaled_joints = *skeleton.joints();
        for joint in scaled_joints.iter_mut() {
            joint.x *= 2.0;
            joint.y *= 2.0;
            joint.z *= 2.0;
        }
        let scaled = Skeleton::new(scaled_joints);

        let a = normalize(&skeleton);
        let b = normalize(&scaled);
        for i in 0..LANDMARK_COUNT {
            assert!((a.joint(i).x - b.joint(i).x).abs() < 1e-5);
            assert!((a.joint(i).y - b.joint(i).y).abs() < 1e-5);
            assert!((a.joint(i).z - b.joint(i).z).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_torso_uses_default_scale() {
        use crate::bridge::NOSE;

        // Shoulders collapsed onto hips: torso length 0, below the floor
        let mut joints = [Landmark { x: 0.5, y: 0.5, z: 0.0, visibility: 1.0 }; LANDMARK_COUNT];
        joints[NOSE] = Landmark { x: 0.7, y: 0.5, z: 0.0, visibility: 1.0 };
        let normalized = normalize(&Skeleton::new(joints));

        // Scale 1.0: pure translation by the hip midpoint
        assert!((normalized.joint(NOSE).x - 0.2).abs() < 1e-6);
        assert!(normalized.joint(NOSE).y.abs() < 1e-6);
    }

    #[test]
    fn test_visibility_passes_through() {
        let mut skeleton = posed_skeleton();
        let mut joints = *skeleton.joints();
        joints[5].visibility = 0.37;
        skeleton = Skeleton::new(joints);
        assert_eq!(normalize(&skeleton).joint(5).visibility, 0.37);
    }
}
