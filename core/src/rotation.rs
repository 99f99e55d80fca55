//! The committed orientation of the cube.

use crate::math::clamp_pitch;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Orientation of the cube as turntable angles, in degrees.
///
/// `pitch` tips the cube toward/away from the viewer and is clamped to
/// [-90°, 90°] so the top face can never invert. `yaw` spins the cube
/// left/right and is unbounded: it stores the accumulated value, so it can
/// run indefinitely positive or negative as the user keeps rotating one way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Rotation about the horizontal axis, degrees.
    pub pitch: f32,
    /// Rotation about the vertical axis, degrees.
    pub yaw: f32,
}

impl Rotation {
    /// Create a rotation, clamping pitch to the vertical limits.
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch: clamp_pitch(pitch),
            yaw,
        }
    }

    /// The scene transform for this orientation.
    ///
    /// Convention: the viewer looks down -Z (+Z points at the viewer, Y up).
    /// Yaw is applied first, then pitch about the world X axis, so the cube
    /// behaves like a turntable. The signs are chosen so each face's target
    /// pose in [`Face::target_rotation`](crate::Face::target_rotation) brings
    /// that face's outward normal to +Z.
    pub fn scene_matrix(&self) -> Mat4 {
        let rx = nalgebra::Rotation3::from_axis_angle(
            &nalgebra::Vector3::x_axis(),
            (-self.pitch).to_radians(),
        );
        let ry = nalgebra::Rotation3::from_axis_angle(
            &nalgebra::Vector3::y_axis(),
            (-self.yaw).to_radians(),
        );
        (rx * ry).to_homogeneous()
    }
}

impl Default for Rotation {
    /// The widget's stock starting pose: slightly tipped and turned so three
    /// faces are visible.
    fn default() -> Self {
        Self {
            pitch: -20.0,
            yaw: -30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transformed(rotation: Rotation, v: Vec3) -> Vec3 {
        (rotation.scene_matrix() * v.push(0.0)).xyz()
    }

    #[test]
    fn new_clamps_pitch() {
        let r = Rotation::new(140.0, 500.0);
        assert_eq!(r.pitch, 90.0);
        assert_eq!(r.yaw, 500.0);
    }

    #[test]
    fn identity_pose_keeps_front_normal_toward_viewer() {
        let z = transformed(Rotation::new(0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!((z - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn yaw_90_brings_right_face_toward_viewer() {
        // The right face's outward normal is +X.
        let n = transformed(Rotation::new(0.0, 90.0), Vec3::new(1.0, 0.0, 0.0));
        assert!((n - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn pitch_neg_90_brings_top_face_toward_viewer() {
        // The top face's outward normal is +Y.
        let n = transformed(Rotation::new(-90.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!((n - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn yaw_180_brings_back_face_toward_viewer() {
        let n = transformed(Rotation::new(0.0, 180.0), Vec3::new(0.0, 0.0, -1.0));
        assert!((n - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }
}
