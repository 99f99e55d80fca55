//! Render surface contract.
//!
//! The engine does no rendering and no hit-testing of its own: both belong
//! to whatever draws the cube. A renderer plugs in by implementing
//! [`RenderSurface`]; the shell pushes orientation changes to it and asks it
//! to resolve click positions.

use viewcube_core::{Corner, Face, Rotation};

/// What a click position resolved to on the rendered cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Face(Face),
    Corner(Corner),
}

/// Contract between the shell and whatever renders the cube.
pub trait RenderSurface {
    /// The cube's orientation changed. With `animated` set the surface
    /// should ease toward the new pose over its configured transition
    /// duration; otherwise it snaps (drag updates arrive every frame).
    fn apply_rotation(&mut self, rotation: Rotation, animated: bool);

    /// Resolve a click position (window coordinates, physical pixels) to the
    /// face or corner under it, if any.
    fn pick(&self, x: f32, y: f32) -> Option<PickTarget>;

    /// The window was resized.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// The configured animated-transition duration, pushed once at startup
    /// so the surface's easing matches the engine's completion deadline.
    fn set_transition_duration(&mut self, _seconds: f64) {}
}

/// No-op surface for tests and headless runs: draws nothing, picks nothing.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn apply_rotation(&mut self, rotation: Rotation, animated: bool) {
        log::trace!(
            "apply_rotation pitch {:.1} yaw {:.1} animated={}",
            rotation.pitch,
            rotation.yaw,
            animated
        );
    }

    fn pick(&self, _x: f32, _y: f32) -> Option<PickTarget> {
        None
    }
}
