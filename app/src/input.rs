//! Input conversion utilities.
//!
//! Maps platform-specific (winit) mouse buttons to engine-agnostic
//! [`viewcube_core::PointerButton`] values.

use viewcube_core::PointerButton;
use winit::event::MouseButton;

/// Convert a winit [`MouseButton`] to an engine [`PointerButton`].
///
/// Left selects, right drags, everything else is lumped together as
/// auxiliary and ignored by the engine.
pub fn map_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Auxiliary,
    }
}
