//! # ViewCube Demos
//!
//! Runnable demos for the ViewCube orientation widget.
//!
//! ## Available Demos
//!
//! - `cube_demo` - Windowed cube with drag rotation and click-to-face picking

pub mod flat_surface;

pub use flat_surface::FlatSurface;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
