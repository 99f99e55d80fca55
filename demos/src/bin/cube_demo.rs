//! # Cube Demo
//!
//! Windowed orientation cube. Right-drag (or two-finger drag) rotates it,
//! left-click snaps to the clicked face, clicks near a vertex report the
//! corner. Press R to reset, Escape to quit.
//!
//! Picking is done by the orthographic software surface; orientation changes
//! show up in the log (`RUST_LOG=debug` to watch every drag step).

use clap::Parser;
use viewcube_app::{App, AppError, ViewCubeArgs};
use viewcube_demos::FlatSurface;

fn main() -> Result<(), AppError> {
    let args = ViewCubeArgs::parse();
    let surface = FlatSurface::new(args.cube_size / 2.0);

    let mut app = App::new(surface, args);
    app.view_cube().on_rotation_change(|rotation| {
        log::info!(
            "rotation changed: pitch {:.1} yaw {:.1}",
            rotation.pitch,
            rotation.yaw
        );
    });
    app.view_cube().on_corner_click(|corner| {
        log::info!("corner clicked: {:?}", corner);
    });

    app.run()
}
