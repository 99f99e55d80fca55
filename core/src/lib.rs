//! # ViewCube Core
//!
//! Platform-agnostic model of a 3D orientation-cube widget: angle math,
//! face/corner geometry, the animated rotation state machine and unified
//! pointer/touch gesture handling. Window-system bindings live in the
//! companion `viewcube-app` crate.

pub mod config;
pub mod controller;
pub mod face;
pub mod gesture;
pub mod math;
pub mod rotation;

pub use config::ViewCubeConfig;
pub use controller::ViewCube;
pub use face::{Corner, Face};
pub use gesture::{GestureEvent, GestureHandler, PointerButton};
pub use rotation::{Mat4, Rotation, Vec3};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init() {
    log::info!("ViewCube Core v{} initialized", VERSION);
}
