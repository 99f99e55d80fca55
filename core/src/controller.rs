//! Rotation state machine and the widget's control surface.
//!
//! [`ViewCube`] owns the current orientation, the animated-transition state
//! and the gesture session, and exposes the full programmatic API. It is
//! clock-agnostic: every mutating entry point that can start a transition
//! takes the caller's monotonic time in seconds, and the host polls
//! [`ViewCube::advance`] (typically once per frame) to retire finished
//! transitions. There is never more than one pending transition: arming a new
//! one replaces the previous deadline, so a stale completion can not fire.

use log::debug;

use crate::config::ViewCubeConfig;
use crate::face::{Corner, Face};
use crate::gesture::{GestureEvent, GestureHandler, PointerButton};
use crate::math::{clamp_pitch, shortest_signed_delta};
use crate::rotation::Rotation;

type RotationCallback = Box<dyn FnMut(Rotation)>;
type CornerCallback = Box<dyn FnMut(Corner)>;

struct Transition {
    /// Monotonic time at which the visual transition is guaranteed to be
    /// over (duration plus guard margin).
    deadline: f64,
}

/// The orientation-cube widget model.
pub struct ViewCube {
    config: ViewCubeConfig,
    rotation: Rotation,
    transition: Option<Transition>,
    gestures: GestureHandler,
    on_rotation_change: Option<RotationCallback>,
    on_corner_click: Option<CornerCallback>,
}

impl ViewCube {
    pub fn new(config: ViewCubeConfig) -> Self {
        let rotation = config.initial_pose;
        Self {
            config,
            rotation,
            transition: None,
            gestures: GestureHandler::new(),
            on_rotation_change: None,
            on_corner_click: None,
        }
    }

    pub fn config(&self) -> &ViewCubeConfig {
        &self.config
    }

    /// Current orientation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether an animated transition is still running. While this is true
    /// the host should keep interpolating toward [`Self::rotation`].
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether a rotation drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Deadline of the pending transition, if any, for hosts that schedule
    /// wakeups instead of polling every frame.
    pub fn next_deadline(&self) -> Option<f64> {
        self.transition.as_ref().map(|t| t.deadline)
    }

    /// Register the orientation-change observer. Replaces any previous one.
    pub fn on_rotation_change(&mut self, callback: impl FnMut(Rotation) + 'static) {
        self.on_rotation_change = Some(Box::new(callback));
    }

    /// Register the corner-click observer. Replaces any previous one.
    pub fn on_corner_click(&mut self, callback: impl FnMut(Corner) + 'static) {
        self.on_corner_click = Some(Box::new(callback));
    }

    // ----- programmatic rotation -----

    /// Rotate to the given pose with an animated transition. The stored yaw
    /// moves by the shortest signed delta, so a host interpolating between
    /// the old and new values always takes the short way around. Setting the
    /// pose the widget is already in does nothing: no callback, no
    /// transition.
    pub fn set_rotation(&mut self, pitch: f32, yaw: f32, now: f64) {
        let new_pitch = clamp_pitch(pitch);
        let yaw_delta = shortest_signed_delta(self.rotation.yaw, yaw);
        if new_pitch == self.rotation.pitch && yaw_delta == 0.0 {
            return;
        }
        self.rotation = Rotation {
            pitch: new_pitch,
            yaw: self.rotation.yaw + yaw_delta,
        };
        debug!(
            "animating to pitch {:.1} yaw {:.1}",
            self.rotation.pitch, self.rotation.yaw
        );
        self.transition = Some(Transition {
            deadline: now + self.config.transition_duration + self.config.guard_margin,
        });
        self.notify_rotation();
    }

    /// Animate back to the configured initial pose.
    pub fn reset(&mut self, now: f64) {
        let initial = self.config.initial_pose;
        self.set_rotation(initial.pitch, initial.yaw, now);
    }

    /// A primary click resolved to a face: animate to that face's head-on
    /// pose.
    pub fn click_face(&mut self, face: Face, now: f64) {
        let target = face.target_rotation();
        debug!("face {:?} clicked", face);
        self.set_rotation(target.pitch, target.yaw, now);
    }

    /// A primary click resolved to a corner: notify the host. Corner clicks
    /// do not rotate the cube; the host decides what the diagonal view means
    /// for its own camera.
    pub fn click_corner(&mut self, corner: Corner) {
        debug!("corner {:?} clicked", corner);
        if let Some(callback) = self.on_corner_click.as_mut() {
            callback(corner);
        }
    }

    /// Retire the pending transition if its deadline has passed. Returns
    /// true when a transition finished on this call.
    pub fn advance(&mut self, now: f64) -> bool {
        match &self.transition {
            Some(transition) if now >= transition.deadline => {
                self.transition = None;
                true
            }
            _ => false,
        }
    }

    // ----- input forwarding -----

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        let event = self.gestures.on_pointer_down(button, x, y);
        self.apply_gesture(event);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let event = self.gestures.on_pointer_move(x, y);
        self.apply_gesture(event);
    }

    /// Relative pointer motion from a device-level source. Preferred over
    /// [`Self::pointer_move`] while dragging: it does not depend on window
    /// coordinates, so a cursor that leaves and re-enters the window cannot
    /// produce a spurious jump. Ignored outside a drag.
    pub fn pointer_delta(&mut self, dx: f32, dy: f32) {
        let event = self.gestures.on_pointer_delta(dx, dy);
        self.apply_gesture(event);
    }

    /// Widget-level button release. A completed primary click is returned as
    /// its press position so the host can hit-test it against the rendered
    /// cube and call [`Self::click_face`] or [`Self::click_corner`].
    pub fn pointer_up(&mut self, button: PointerButton) -> Option<[f32; 2]> {
        let event = self.gestures.on_pointer_up(button);
        self.apply_gesture(event)
    }

    /// Device-level button release, delivered even when the cursor has left
    /// the widget. Ends an active drag.
    pub fn global_release(&mut self) {
        let event = self.gestures.on_global_release();
        self.apply_gesture(event);
    }

    pub fn touch_start(&mut self, id: u64, x: f32, y: f32) {
        let event = self.gestures.on_touch_start(id, x, y);
        self.apply_gesture(event);
    }

    pub fn touch_move(&mut self, id: u64, x: f32, y: f32) {
        let event = self.gestures.on_touch_move(id, x, y);
        self.apply_gesture(event);
    }

    /// Touch lift. Like [`Self::pointer_up`], a completed tap is returned as
    /// a position for the host to hit-test.
    pub fn touch_end(&mut self, id: u64) -> Option<[f32; 2]> {
        let event = self.gestures.on_touch_end(id);
        self.apply_gesture(event)
    }

    /// The window lost focus: abandon the gesture session so a missed
    /// release can not leave a drag stuck.
    pub fn focus_lost(&mut self) {
        self.gestures.cancel();
    }

    fn apply_gesture(&mut self, event: Option<GestureEvent>) -> Option<[f32; 2]> {
        match event? {
            GestureEvent::DragStarted => {
                // A drag preempts whatever transition was running; the pose
                // it was heading to stays.
                self.transition = None;
                None
            }
            GestureEvent::DragMoved { dx, dy } => {
                self.apply_drag_delta(dx, dy);
                None
            }
            GestureEvent::DragEnded => None,
            GestureEvent::Clicked { x, y } => Some([x, y]),
        }
    }

    fn apply_drag_delta(&mut self, dx: f32, dy: f32) {
        let sensitivity = self.config.drag_sensitivity;
        let updated = Rotation {
            pitch: clamp_pitch(self.rotation.pitch - dy * sensitivity),
            yaw: self.rotation.yaw + dx * sensitivity,
        };
        if updated == self.rotation {
            return;
        }
        self.rotation = updated;
        self.notify_rotation();
    }

    fn notify_rotation(&mut self) {
        if let Some(callback) = self.on_rotation_change.as_mut() {
            callback(self.rotation);
        }
    }
}

impl Default for ViewCube {
    fn default() -> Self {
        Self::new(ViewCubeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{PITCH_MAX, PITCH_MIN};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_initial_pose() {
        let cube = ViewCube::default();
        assert_eq!(cube.rotation(), Rotation { pitch: -20.0, yaw: -30.0 });
        assert!(!cube.is_animating());
    }

    #[test]
    fn set_rotation_animates_and_retires_on_deadline() {
        let mut cube = ViewCube::default();
        cube.set_rotation(0.0, -90.0, 1.0);
        assert_eq!(cube.rotation(), Rotation { pitch: 0.0, yaw: -90.0 });
        assert!(cube.is_animating());
        // Default duration 0.5 s plus 0.02 s guard.
        assert!(!cube.advance(1.5));
        assert!(cube.is_animating());
        assert!(cube.advance(1.53));
        assert!(!cube.is_animating());
        assert!(!cube.advance(2.0));
    }

    #[test]
    fn setting_the_current_pose_is_a_no_op() {
        let mut cube = ViewCube::default();
        let notified = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&notified);
        cube.on_rotation_change(move |_| *sink.borrow_mut() += 1);

        cube.set_rotation(-20.0, -30.0, 0.0);
        assert!(!cube.is_animating());
        assert_eq!(*notified.borrow(), 0);

        // Congruent yaw counts as the same pose.
        cube.set_rotation(-20.0, 330.0, 0.0);
        assert!(!cube.is_animating());
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn yaw_takes_the_short_way() {
        let mut cube = ViewCube::default();
        cube.set_rotation(0.0, 0.0, 0.0);
        cube.set_rotation(0.0, 170.0, 0.5);
        cube.click_face(Face::Back, 1.0);
        // 170 -> 180 moves +10, not -350.
        assert_eq!(cube.rotation(), Rotation { pitch: 0.0, yaw: 180.0 });
    }

    #[test]
    fn antipodal_yaw_breaks_the_tie_positive() {
        let mut cube = ViewCube::default();
        cube.set_rotation(0.0, 0.0, 0.0);
        cube.click_face(Face::Back, 1.0);
        assert_eq!(cube.rotation().yaw, 180.0);
    }

    #[test]
    fn face_clicks_reach_their_target_poses() {
        let cases = [
            (Face::Front, 0.0, 0.0),
            (Face::Right, 0.0, 90.0),
            (Face::Top, -90.0, 0.0),
            (Face::Bottom, 90.0, 0.0),
        ];
        for (face, pitch, yaw) in cases {
            let mut cube = ViewCube::default();
            cube.set_rotation(0.0, 0.0, 0.0);
            cube.click_face(face, 1.0);
            assert_eq!(cube.rotation(), Rotation { pitch, yaw }, "{:?}", face);
        }
    }

    #[test]
    fn new_transition_replaces_the_pending_deadline() {
        let mut cube = ViewCube::default();
        cube.set_rotation(0.0, 90.0, 0.0);
        cube.set_rotation(0.0, 180.0, 0.3);
        // The first deadline (0.52) has passed, but it was replaced.
        assert!(!cube.advance(0.6));
        assert!(cube.is_animating());
        assert!(cube.advance(0.83));
    }

    #[test]
    fn reset_returns_to_initial_pose() {
        let mut cube = ViewCube::default();
        cube.set_rotation(45.0, 120.0, 0.0);
        cube.advance(1.0);
        cube.reset(2.0);
        assert_eq!(cube.rotation(), Rotation { pitch: -20.0, yaw: -30.0 });
        assert!(cube.is_animating());
        // Resetting while already there does nothing.
        cube.advance(3.0);
        cube.reset(4.0);
        assert!(!cube.is_animating());
    }

    #[test]
    fn drag_applies_sensitivity_and_notifies() {
        let mut cube = ViewCube::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cube.on_rotation_change(move |rotation| sink.borrow_mut().push(rotation));

        cube.pointer_down(PointerButton::Secondary, 100.0, 100.0);
        cube.pointer_move(110.0, 96.0);
        // dx 10 -> yaw +5, dy -4 -> pitch +2, at 0.5 deg/px.
        assert_eq!(cube.rotation(), Rotation { pitch: -18.0, yaw: -25.0 });
        assert_eq!(cube.pointer_up(PointerButton::Secondary), None);
        assert_eq!(seen.borrow().len(), 1);
        assert!(!cube.is_animating());
    }

    #[test]
    fn device_deltas_survive_a_window_exit_and_reentry() {
        let mut cube = ViewCube::default();
        cube.pointer_down(PointerButton::Secondary, 800.0, 100.0);
        cube.pointer_delta(10.0, 0.0);
        assert_eq!(cube.rotation().yaw, -25.0);
        // The cursor left at x=800 and re-entered at x=200; relative motion
        // keeps the drag continuous instead of jumping -300 px worth of yaw.
        cube.pointer_delta(10.0, 0.0);
        assert_eq!(cube.rotation().yaw, -20.0);

        cube.pointer_up(PointerButton::Secondary);
        cube.pointer_delta(600.0, 0.0);
        assert_eq!(cube.rotation().yaw, -20.0);
    }

    #[test]
    fn drag_clamps_pitch_at_the_poles() {
        let mut cube = ViewCube::default();
        cube.pointer_down(PointerButton::Secondary, 0.0, 0.0);
        cube.pointer_move(0.0, 1000.0);
        assert_eq!(cube.rotation().pitch, PITCH_MIN);
        cube.pointer_move(0.0, -2000.0);
        assert_eq!(cube.rotation().pitch, PITCH_MAX);
    }

    #[test]
    fn drag_preempts_a_running_transition() {
        let mut cube = ViewCube::default();
        cube.set_rotation(0.0, 90.0, 0.0);
        assert!(cube.is_animating());
        cube.pointer_down(PointerButton::Secondary, 0.0, 0.0);
        assert!(!cube.is_animating());
        // The stale deadline never fires.
        assert!(!cube.advance(10.0));
    }

    #[test]
    fn primary_click_is_surfaced_for_hit_testing() {
        let mut cube = ViewCube::default();
        cube.pointer_down(PointerButton::Primary, 42.0, 7.0);
        assert_eq!(cube.pointer_up(PointerButton::Primary), Some([42.0, 7.0]));
    }

    #[test]
    fn corner_click_notifies_the_host() {
        let mut cube = ViewCube::default();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        cube.on_corner_click(move |corner| *sink.borrow_mut() = Some(corner));
        cube.click_corner(Corner::TopFrontLeft);
        assert_eq!(*seen.borrow(), Some(Corner::TopFrontLeft));
        // The pose is untouched.
        assert_eq!(cube.rotation(), Rotation { pitch: -20.0, yaw: -30.0 });
    }

    #[test]
    fn focus_loss_abandons_the_drag() {
        let mut cube = ViewCube::default();
        cube.pointer_down(PointerButton::Secondary, 0.0, 0.0);
        cube.focus_lost();
        assert!(!cube.is_dragging());
        let before = cube.rotation();
        cube.pointer_move(50.0, 50.0);
        assert_eq!(cube.rotation(), before);
    }

    #[test]
    fn two_finger_touch_drags_the_cube() {
        let mut cube = ViewCube::default();
        cube.touch_start(1, 0.0, 0.0);
        cube.touch_start(2, 10.0, 10.0);
        // Midpoint moves +10 px in x: yaw +5.
        cube.touch_move(1, 20.0, 0.0);
        assert_eq!(cube.rotation(), Rotation { pitch: -20.0, yaw: -25.0 });
        assert_eq!(cube.touch_end(1), None);
        assert_eq!(cube.touch_end(2), None);
    }

    #[test]
    fn single_tap_is_surfaced_for_hit_testing() {
        let mut cube = ViewCube::default();
        cube.touch_start(9, 12.0, 34.0);
        assert_eq!(cube.touch_end(9), Some([12.0, 34.0]));
    }
}
