//! Orthographic software surface.
//!
//! A minimal [`RenderSurface`] that keeps no GPU state at all: it projects
//! the cube orthographically into window coordinates and answers picks by
//! point-in-quad tests against the front-facing faces, with a proximity check
//! for the visible corners. It draws nothing; the demo logs orientation
//! changes instead. It doubles as a reference for how a real renderer would
//! use [`Face::placement_matrix`] and [`Rotation::scene_matrix`].

use viewcube_app::{PickTarget, RenderSurface};
use viewcube_core::{Corner, Face, Rotation};

/// Fraction of the half extent around a projected vertex that counts as a
/// corner hit.
const CORNER_RADIUS_FACTOR: f32 = 0.25;

pub struct FlatSurface {
    half_extent: f32,
    center: [f32; 2],
    rotation: Rotation,
}

impl FlatSurface {
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent,
            center: [0.0, 0.0],
            rotation: Rotation::default(),
        }
    }

    /// Project a cube-local point into window coordinates (y down, cube
    /// centered in the window).
    fn project(&self, point: viewcube_core::Vec3) -> [f32; 2] {
        let v = (self.rotation.scene_matrix() * point.push(1.0)).xyz();
        [self.center[0] + v.x, self.center[1] - v.y]
    }

    /// Depth of a cube-local point toward the viewer; positive is in front.
    fn depth(&self, point: viewcube_core::Vec3) -> f32 {
        (self.rotation.scene_matrix() * point.push(1.0)).z
    }

    fn pick_corner(&self, x: f32, y: f32) -> Option<Corner> {
        let radius = self.half_extent * CORNER_RADIUS_FACTOR;
        let mut best: Option<(f32, Corner)> = None;
        for corner in Corner::ALL {
            let position = corner.position(self.half_extent);
            if self.depth(position) < 0.0 {
                continue;
            }
            let screen = self.project(position);
            let distance = ((screen[0] - x).powi(2) + (screen[1] - y).powi(2)).sqrt();
            if distance <= radius && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, corner));
            }
        }
        best.map(|(_, corner)| corner)
    }

    fn pick_face(&self, x: f32, y: f32) -> Option<Face> {
        let m = self.rotation.scene_matrix();
        for face in Face::ALL {
            let normal = (m * face.normal().push(0.0)).xyz();
            if normal.z <= 0.0 {
                continue;
            }
            let quad = face
                .corners()
                .map(|corner| self.project(corner.position(self.half_extent)));
            if point_in_convex_quad([x, y], &quad) {
                return Some(face);
            }
        }
        None
    }
}

impl RenderSurface for FlatSurface {
    fn apply_rotation(&mut self, rotation: Rotation, animated: bool) {
        self.rotation = rotation;
        log::debug!(
            "pose: pitch {:.1} yaw {:.1} ({})",
            rotation.pitch,
            rotation.yaw,
            if animated { "easing" } else { "direct" }
        );
    }

    fn pick(&self, x: f32, y: f32) -> Option<PickTarget> {
        if let Some(corner) = self.pick_corner(x, y) {
            return Some(PickTarget::Corner(corner));
        }
        self.pick_face(x, y).map(PickTarget::Face)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.center = [width as f32 / 2.0, height as f32 / 2.0];
    }
}

/// Same-side test against all four edges. Boundary points count as inside.
fn point_in_convex_quad(point: [f32; 2], quad: &[[f32; 2]; 4]) -> bool {
    let mut sign = 0.0f32;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = (b[0] - a[0]) * (point[1] - a[1]) - (b[1] - a[1]) * (point[0] - a[0]);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    sign != 0.0
}
