//! Main application struct and event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use viewcube_core::{Rotation, ViewCube};

use crate::args::ViewCubeArgs;
use crate::error::AppError;
use crate::input::map_mouse_button;
use crate::surface::{PickTarget, RenderSurface};

/// Windowed shell around a [`ViewCube`] and a [`RenderSurface`].
///
/// The shell owns the winit event loop plumbing: it creates the window,
/// translates window and device events into engine calls, polls the engine's
/// transition deadline every redraw and pushes orientation changes to the
/// surface.
///
/// # Example
///
/// ```ignore
/// use viewcube_app::{App, NullSurface, ViewCubeArgs};
///
/// fn main() -> Result<(), viewcube_app::AppError> {
///     let args = ViewCubeArgs::parse();
///     let mut app = App::new(NullSurface, args);
///     app.view_cube().on_corner_click(|corner| log::info!("{corner:?}"));
///     app.run()
/// }
/// ```
pub struct App<S>
where
    S: RenderSurface,
{
    args: ViewCubeArgs,
    surface: S,
    cube: ViewCube,
    window: Option<Window>,
    start_time: Instant,
    cursor: [f32; 2],
    last_pushed: Option<(Rotation, bool)>,
    frame_number: u64,
    fatal: Option<AppError>,
}

impl<S> App<S>
where
    S: RenderSurface + 'static,
{
    /// Create a new application. The engine is configured from `args`;
    /// register observers through [`Self::view_cube`] before running.
    pub fn new(surface: S, args: ViewCubeArgs) -> Self {
        let cube = ViewCube::new(args.config());
        Self {
            args,
            surface,
            cube,
            window: None,
            start_time: Instant::now(),
            cursor: [0.0, 0.0],
            last_pushed: None,
            frame_number: 0,
            fatal: None,
        }
    }

    /// Access the engine, e.g. to register callbacks or set the pose before
    /// the loop starts.
    pub fn view_cube(&mut self) -> &mut ViewCube {
        &mut self.cube
    }

    /// Run the application.
    ///
    /// This is the main entry point: it initializes logging, creates the
    /// event loop and window, and runs until the window closes.
    pub fn run(mut self) -> Result<(), AppError> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        viewcube_core::init();
        crate::init();

        self.surface
            .set_transition_duration(self.cube.config().transition_duration);

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;

        match self.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Seconds since the application started; the engine's timebase.
    fn now(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// A primary click or tap completed: ask the surface what is under it.
    fn resolve_click(&mut self, position: [f32; 2]) {
        match self.surface.pick(position[0], position[1]) {
            Some(PickTarget::Face(face)) => self.cube.click_face(face, self.now()),
            Some(PickTarget::Corner(corner)) => self.cube.click_corner(corner),
            None => {}
        }
    }

    /// Push the engine's pose to the surface when it changed since the last
    /// frame.
    fn push_rotation(&mut self) {
        let current = (self.cube.rotation(), self.cube.is_animating());
        if self.last_pushed != Some(current) {
            self.last_pushed = Some(current);
            self.surface.apply_rotation(current.0, current.1);
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        if self.cube.advance(self.now()) {
            log::debug!("transition finished");
        }
        self.push_rotation();

        self.frame_number += 1;
        if let Some(max_frames) = self.args.max_frames {
            if self.frame_number >= max_frames {
                log::info!("Reached max frames limit ({}), exiting", max_frames);
                event_loop.exit();
            }
        }
    }
}

impl<S> ApplicationHandler for App<S>
where
    S: RenderSurface + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("ViewCube")
                .with_inner_size(winit::dpi::LogicalSize::new(self.args.width, self.args.height));

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    log::info!("Window created");
                    let size = window.inner_size();
                    self.surface.resize(size.width, size.height);
                    self.window = Some(window);
                }
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    self.fatal = Some(AppError::WindowCreation(e));
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.surface.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }

            WindowEvent::Focused(false) => {
                self.cube.focus_lost();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        PhysicalKey::Code(KeyCode::KeyR) => self.cube.reset(self.now()),
                        _ => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = [position.x as f32, position.y as f32];
                // Drags are fed from device motion instead; window positions
                // go stale when the cursor leaves mid-drag.
                if !self.cube.is_dragging() {
                    self.cube.pointer_move(self.cursor[0], self.cursor[1]);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_mouse_button(button);
                match state {
                    ElementState::Pressed => {
                        self.cube
                            .pointer_down(button, self.cursor[0], self.cursor[1]);
                    }
                    ElementState::Released => {
                        if let Some(position) = self.cube.pointer_up(button) {
                            self.resolve_click(position);
                        }
                    }
                }
            }

            WindowEvent::Touch(touch) => {
                let x = touch.location.x as f32;
                let y = touch.location.y as f32;
                match touch.phase {
                    TouchPhase::Started => self.cube.touch_start(touch.id, x, y),
                    TouchPhase::Moved => self.cube.touch_move(touch.id, x, y),
                    TouchPhase::Ended => {
                        if let Some(position) = self.cube.touch_end(touch.id) {
                            self.resolve_click(position);
                        }
                    }
                    TouchPhase::Cancelled => {
                        self.cube.touch_end(touch.id);
                    }
                }
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        // Device-level events arrive even when the cursor has left the
        // window: motion keeps a drag tracking, releases keep it from
        // sticking.
        match event {
            DeviceEvent::MouseMotion { delta } => {
                if self.cube.is_dragging() {
                    self.cube.pointer_delta(delta.0 as f32, delta.1 as f32);
                }
            }
            DeviceEvent::Button {
                state: ElementState::Released,
                ..
            } => {
                self.cube.global_release();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
