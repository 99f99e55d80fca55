//! Controller configuration.

use crate::rotation::Rotation;

/// Configuration for a [`ViewCube`](crate::ViewCube) controller.
///
/// All values have sensible defaults; override with the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCubeConfig {
    /// Cube edge length in logical pixels. The engine never draws, but the
    /// rendering surface needs it for face placement ([`Face::placement_matrix`]
    /// takes half of this) and the host usually sizes its viewport from it.
    ///
    /// [`Face::placement_matrix`]: crate::Face::placement_matrix
    pub size: f32,
    /// Duration of the rendering surface's eased transition, in seconds.
    pub transition_duration: f64,
    /// Extra slack added to the completion deadline so the animating flag
    /// does not drop before the visual transition finishes, in seconds.
    pub guard_margin: f64,
    /// Pose the controller starts at and returns to on reset.
    pub initial_pose: Rotation,
    /// Drag sensitivity in degrees per pixel, shared by pointer and touch.
    pub drag_sensitivity: f32,
}

impl Default for ViewCubeConfig {
    fn default() -> Self {
        Self {
            size: 120.0,
            transition_duration: 0.5,
            guard_margin: 0.02,
            initial_pose: Rotation::default(),
            drag_sensitivity: 0.5,
        }
    }
}

impl ViewCubeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cube edge length in logical pixels.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the transition duration in seconds.
    pub fn with_transition_duration(mut self, seconds: f64) -> Self {
        self.transition_duration = seconds;
        self
    }

    /// Set the initial (and reset) pose.
    pub fn with_initial_pose(mut self, pose: Rotation) -> Self {
        self.initial_pose = pose;
        self
    }

    /// Set the drag sensitivity in degrees per pixel.
    pub fn with_drag_sensitivity(mut self, degrees_per_pixel: f32) -> Self {
        self.drag_sensitivity = degrees_per_pixel;
        self
    }
}
