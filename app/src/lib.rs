//! # ViewCube App
//!
//! Windowed shell for the ViewCube orientation widget: winit event loop,
//! platform input mapping, CLI arguments and the [`RenderSurface`] contract
//! a renderer implements to plug in.
//!
//! ## Overview
//!
//! - [`App`] - Window and event-loop owner; forwards input to the engine
//! - [`RenderSurface`] - Drawing and hit-testing contract
//! - [`ViewCubeArgs`] - clap arguments for binaries
//!
//! ## Example
//!
//! ```ignore
//! use clap::Parser;
//! use viewcube_app::{App, NullSurface, ViewCubeArgs};
//!
//! fn main() -> Result<(), viewcube_app::AppError> {
//!     let args = ViewCubeArgs::parse();
//!     App::new(NullSurface, args).run()
//! }
//! ```

mod app;
mod args;
mod error;
mod input;
mod surface;

pub use app::App;
pub use args::ViewCubeArgs;
pub use error::AppError;
pub use input::map_mouse_button;
pub use surface::{NullSurface, PickTarget, RenderSurface};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init() {
    log::info!("ViewCube App v{} initialized", VERSION);
}
