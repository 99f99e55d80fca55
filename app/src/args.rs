//! Command line arguments for ViewCube binaries.
//!
//! Uses clap for proper CLI parsing with help text, validation and clear
//! error messages.

use clap::Parser;
use viewcube_core::{Rotation, ViewCubeConfig};

/// ViewCube application arguments.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./cube_demo --help
///
/// # Bigger cube, slower transitions
/// ./cube_demo --cube-size 200 --transition-duration 1.0
///
/// # Start looking at the right face
/// ./cube_demo --pitch 0 --yaw 90
///
/// # Run for 100 frames then exit (useful for testing)
/// ./cube_demo --max-frames 100
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "ViewCube", about = "3D orientation cube widget", version)]
pub struct ViewCubeArgs {
    /// Initial window width in pixels.
    #[arg(long, default_value = "960")]
    pub width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Cube widget size in pixels.
    #[arg(long, default_value = "120.0")]
    pub cube_size: f32,

    /// Animated transition duration in seconds.
    #[arg(long, default_value = "0.5")]
    pub transition_duration: f64,

    /// Drag sensitivity in degrees per pixel.
    #[arg(long, default_value = "0.5")]
    pub sensitivity: f32,

    /// Initial pitch in degrees (clamped to [-90, 90]).
    #[arg(long, default_value = "-20.0", allow_hyphen_values = true)]
    pub pitch: f32,

    /// Initial yaw in degrees.
    #[arg(long, default_value = "-30.0", allow_hyphen_values = true)]
    pub yaw: f32,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl ViewCubeArgs {
    /// Build the engine configuration these arguments describe.
    pub fn config(&self) -> ViewCubeConfig {
        ViewCubeConfig::new()
            .with_size(self.cube_size)
            .with_transition_duration(self.transition_duration)
            .with_drag_sensitivity(self.sensitivity)
            .with_initial_pose(Rotation::new(self.pitch, self.yaw))
    }
}

impl Default for ViewCubeArgs {
    fn default() -> Self {
        Self {
            width: 960,
            height: 600,
            cube_size: 120.0,
            transition_duration: 0.5,
            sensitivity: 0.5,
            pitch: -20.0,
            yaw: -30.0,
            max_frames: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_defaults() {
        let args = ViewCubeArgs::default();
        let config = args.config();
        assert_eq!(config, ViewCubeConfig::default());
    }

    #[test]
    fn out_of_range_pitch_is_clamped() {
        let args = ViewCubeArgs {
            pitch: -200.0,
            ..Default::default()
        };
        assert_eq!(args.config().initial_pose.pitch, -90.0);
    }
}
