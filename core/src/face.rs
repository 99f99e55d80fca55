//! Static face and corner tables.
//!
//! Faces carry a canonical "facing the viewer" target pose and an ordered
//! list of the four corners visible on that face. Corners are shared cube
//! vertices, so the same identifier appears on several faces' lists. All of
//! this is read-only data, not mutable state.

use crate::rotation::{Mat4, Rotation, Vec3};

/// One of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// One of the eight cube vertices, named by the three faces it joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopFrontLeft,
    TopFrontRight,
    TopBackLeft,
    TopBackRight,
    BottomFrontLeft,
    BottomFrontRight,
    BottomBackLeft,
    BottomBackRight,
}

impl Face {
    /// All faces, in declaration order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// The pose that brings this face toward the viewer.
    ///
    /// Signs follow the scene convention in
    /// [`Rotation::scene_matrix`]: under the face's target pose the face's
    /// outward normal lands on +Z.
    pub fn target_rotation(self) -> Rotation {
        match self {
            Face::Front => Rotation { pitch: 0.0, yaw: 0.0 },
            Face::Back => Rotation { pitch: 0.0, yaw: 180.0 },
            Face::Left => Rotation { pitch: 0.0, yaw: -90.0 },
            Face::Right => Rotation { pitch: 0.0, yaw: 90.0 },
            Face::Top => Rotation { pitch: -90.0, yaw: 0.0 },
            Face::Bottom => Rotation { pitch: 90.0, yaw: 0.0 },
        }
    }

    /// Outward unit normal of this face in cube-local space.
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::new(0.0, 0.0, 1.0),
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
            Face::Top => Vec3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// The four corners of this face in fixed visual order: top-left,
    /// top-right, bottom-right, bottom-left, as seen when the face is at its
    /// target pose.
    pub fn corners(self) -> [Corner; 4] {
        use Corner::*;
        match self {
            Face::Front => [TopFrontLeft, TopFrontRight, BottomFrontRight, BottomFrontLeft],
            Face::Back => [TopBackRight, TopBackLeft, BottomBackLeft, BottomBackRight],
            Face::Left => [TopBackLeft, TopFrontLeft, BottomFrontLeft, BottomBackLeft],
            Face::Right => [TopFrontRight, TopBackRight, BottomBackRight, BottomFrontRight],
            Face::Top => [TopBackLeft, TopBackRight, TopFrontRight, TopFrontLeft],
            Face::Bottom => [BottomFrontLeft, BottomFrontRight, BottomBackRight, BottomBackLeft],
        }
    }

    /// Placement transform for this face's plane: the rotation mapping +Z to
    /// the face normal, followed by a translation of `half_extent` along the
    /// face's local +Z. Together with [`Rotation::scene_matrix`] this is all
    /// the geometry a rendering surface needs to assemble the cube from six
    /// planes.
    pub fn placement_matrix(self, half_extent: f32) -> Mat4 {
        let rotation = match self {
            Face::Front => nalgebra::Rotation3::identity(),
            Face::Back => nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::y_axis(),
                std::f32::consts::PI,
            ),
            Face::Right => nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::y_axis(),
                std::f32::consts::FRAC_PI_2,
            ),
            Face::Left => nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::y_axis(),
                -std::f32::consts::FRAC_PI_2,
            ),
            Face::Top => nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::x_axis(),
                -std::f32::consts::FRAC_PI_2,
            ),
            Face::Bottom => nalgebra::Rotation3::from_axis_angle(
                &nalgebra::Vector3::x_axis(),
                std::f32::consts::FRAC_PI_2,
            ),
        };
        let push_out = nalgebra::Translation3::new(0.0, 0.0, half_extent);
        rotation.to_homogeneous() * push_out.to_homogeneous()
    }
}

impl Corner {
    /// All corners, in declaration order.
    pub const ALL: [Corner; 8] = [
        Corner::TopFrontLeft,
        Corner::TopFrontRight,
        Corner::TopBackLeft,
        Corner::TopBackRight,
        Corner::BottomFrontLeft,
        Corner::BottomFrontRight,
        Corner::BottomBackLeft,
        Corner::BottomBackRight,
    ];

    /// Cube-local position of this vertex for a cube of the given half
    /// extent. Axis signs follow the face normals: Right +X, Top +Y,
    /// Front +Z.
    pub fn position(self, half_extent: f32) -> Vec3 {
        let (x, y, z) = match self {
            Corner::TopFrontLeft => (-1.0, 1.0, 1.0),
            Corner::TopFrontRight => (1.0, 1.0, 1.0),
            Corner::TopBackLeft => (-1.0, 1.0, -1.0),
            Corner::TopBackRight => (1.0, 1.0, -1.0),
            Corner::BottomFrontLeft => (-1.0, -1.0, 1.0),
            Corner::BottomFrontRight => (1.0, -1.0, 1.0),
            Corner::BottomBackLeft => (-1.0, -1.0, -1.0),
            Corner::BottomBackRight => (1.0, -1.0, -1.0),
        };
        Vec3::new(x, y, z) * half_extent
    }
}
