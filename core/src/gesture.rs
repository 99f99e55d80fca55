//! Gesture input handling.
//!
//! Unifies mouse and touch into one logical "secondary drag" signal plus a
//! click/tap signal, without depending on any windowing crate. The binding
//! layer forwards platform events via the `on_*` methods and reacts to the
//! returned [`GestureEvent`]s.
//!
//! Rules:
//! - Only the **secondary** pointer button arms dragging; primary presses are
//!   reserved for face/corner selection. The binding layer must suppress any
//!   native context menu on the secondary button so it cannot interrupt a
//!   drag.
//! - Exactly **two** touch contacts arm dragging, tracked by their midpoint.
//!   One contact is a tap; three or more stop the drag — the current contact
//!   count is always authoritative.
//! - Release events must be wired to the *global* input surface (device
//!   level, not widget level), since the pointer can leave the widget bounds
//!   mid-drag. A release with no matching press is a no-op.

/// Logical pointer button, mapped from the platform's mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Selection button (usually left). Arms click/tap handling.
    Primary,
    /// Drag button (usually right). Arms rotation dragging.
    Secondary,
    /// Any other button. Ignored.
    Auxiliary,
}

/// What a forwarded input event amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A rotation drag began; any running animation must be preempted.
    DragStarted,
    /// Drag movement, in pixels since the previous update.
    DragMoved { dx: f32, dy: f32 },
    /// The drag ended (button up / contacts below two).
    DragEnded,
    /// A primary click or single tap completed at this position. The host
    /// resolves it to a face or corner via its own hit-testing.
    Clicked { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ClickSource {
    Pointer,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    ClickPending { source: ClickSource, start: [f32; 2] },
    PointerDragging { last: [f32; 2] },
    TouchDragging { last_midpoint: [f32; 2] },
}

/// Transient interaction session: exists logically per gesture, recreated on
/// every pointer/touch down and destroyed on release.
#[derive(Debug)]
pub struct GestureHandler {
    phase: Phase,
    /// Active touch contacts, in arrival order.
    touches: Vec<(u64, [f32; 2])>,
}

impl GestureHandler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            touches: Vec::new(),
        }
    }

    /// Whether a rotation drag (pointer or touch) is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self.phase,
            Phase::PointerDragging { .. } | Phase::TouchDragging { .. }
        )
    }

    /// Reset the session from any state. The binding layer calls this on
    /// focus loss so a drag never sticks across a missed release.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.touches.clear();
    }

    // ----- pointer -----

    pub fn on_pointer_down(
        &mut self,
        button: PointerButton,
        x: f32,
        y: f32,
    ) -> Option<GestureEvent> {
        match button {
            PointerButton::Secondary => {
                // Drag always takes over, including from a running animation
                // or a half-finished click.
                self.phase = Phase::PointerDragging { last: [x, y] };
                Some(GestureEvent::DragStarted)
            }
            PointerButton::Primary => {
                if matches!(self.phase, Phase::Idle) {
                    self.phase = Phase::ClickPending {
                        source: ClickSource::Pointer,
                        start: [x, y],
                    };
                }
                None
            }
            PointerButton::Auxiliary => None,
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<GestureEvent> {
        if let Phase::PointerDragging { last } = &mut self.phase {
            let dx = x - last[0];
            let dy = y - last[1];
            *last = [x, y];
            return Some(GestureEvent::DragMoved { dx, dy });
        }
        None
    }

    /// Relative pointer motion, e.g. from a device-level motion source.
    /// Position-independent, so it stays correct when the cursor leaves and
    /// re-enters the window mid-drag; a binding that has device motion
    /// available should prefer it over [`Self::on_pointer_move`] while a
    /// drag is active. Ignored outside a pointer drag.
    pub fn on_pointer_delta(&mut self, dx: f32, dy: f32) -> Option<GestureEvent> {
        if let Phase::PointerDragging { last } = &mut self.phase {
            last[0] += dx;
            last[1] += dy;
            return Some(GestureEvent::DragMoved { dx, dy });
        }
        None
    }

    pub fn on_pointer_up(&mut self, button: PointerButton) -> Option<GestureEvent> {
        match (self.phase, button) {
            (Phase::PointerDragging { .. }, PointerButton::Secondary) => {
                self.phase = Phase::Idle;
                Some(GestureEvent::DragEnded)
            }
            (
                Phase::ClickPending {
                    source: ClickSource::Pointer,
                    start,
                },
                PointerButton::Primary,
            ) => {
                self.phase = Phase::Idle;
                Some(GestureEvent::Clicked {
                    x: start[0],
                    y: start[1],
                })
            }
            // Release without a matching press, or a button that is not part
            // of the current session: ignore.
            _ => None,
        }
    }

    /// A device-level button release, regardless of which button or where the
    /// cursor is. Ends an active pointer drag unconditionally; click-pending
    /// state is left for the widget-level release to resolve.
    pub fn on_global_release(&mut self) -> Option<GestureEvent> {
        if let Phase::PointerDragging { .. } = self.phase {
            self.phase = Phase::Idle;
            return Some(GestureEvent::DragEnded);
        }
        None
    }

    // ----- touch -----

    pub fn on_touch_start(&mut self, id: u64, x: f32, y: f32) -> Option<GestureEvent> {
        if let Some(contact) = self.touches.iter_mut().find(|(cid, _)| *cid == id) {
            contact.1 = [x, y];
        } else {
            self.touches.push((id, [x, y]));
        }
        self.reconcile_contacts(Some(id))
    }

    pub fn on_touch_move(&mut self, id: u64, x: f32, y: f32) -> Option<GestureEvent> {
        let Some(contact) = self.touches.iter_mut().find(|(cid, _)| *cid == id) else {
            // Move for a contact we never saw start: contact set is
            // authoritative, ignore.
            return None;
        };
        contact.1 = [x, y];

        if let Phase::TouchDragging { last_midpoint } = &mut self.phase {
            if self.touches.len() == 2 {
                let midpoint = Self::midpoint(&self.touches);
                let dx = midpoint[0] - last_midpoint[0];
                let dy = midpoint[1] - last_midpoint[1];
                *last_midpoint = midpoint;
                return Some(GestureEvent::DragMoved { dx, dy });
            }
        }
        None
    }

    pub fn on_touch_end(&mut self, id: u64) -> Option<GestureEvent> {
        let Some(index) = self.touches.iter().position(|(cid, _)| *cid == id) else {
            return None;
        };
        let (_, position) = self.touches.remove(index);

        if let Phase::ClickPending {
            source: ClickSource::Touch(pending),
            ..
        } = self.phase
        {
            if pending == id {
                self.phase = Phase::Idle;
                return Some(GestureEvent::Clicked {
                    x: position[0],
                    y: position[1],
                });
            }
        }
        if let Phase::TouchDragging { .. } = self.phase {
            if self.touches.len() != 2 {
                // A finger lifted mid-drag. Any leftover contact is spent; it
                // must not turn into a tap on release.
                self.phase = Phase::Idle;
                return Some(GestureEvent::DragEnded);
            }
        }
        // The count may have dropped back to exactly two.
        self.reconcile_contacts(None)
    }

    /// Apply the arming rules after the contact set changed.
    fn reconcile_contacts(&mut self, new_contact: Option<u64>) -> Option<GestureEvent> {
        match self.touches.len() {
            2 => {
                if !matches!(self.phase, Phase::TouchDragging { .. }) {
                    self.phase = Phase::TouchDragging {
                        last_midpoint: Self::midpoint(&self.touches),
                    };
                    return Some(GestureEvent::DragStarted);
                }
                None
            }
            1 => {
                if matches!(self.phase, Phase::Idle) {
                    if let Some(id) = new_contact {
                        let position = self.touches[0].1;
                        self.phase = Phase::ClickPending {
                            source: ClickSource::Touch(id),
                            start: position,
                        };
                    }
                }
                None
            }
            _ => {
                // Zero or three-plus contacts: no drag, no pending tap.
                if let Phase::TouchDragging { .. } = self.phase {
                    self.phase = Phase::Idle;
                    return Some(GestureEvent::DragEnded);
                }
                if let Phase::ClickPending {
                    source: ClickSource::Touch(_),
                    ..
                } = self.phase
                {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }

    fn midpoint(touches: &[(u64, [f32; 2])]) -> [f32; 2] {
        let a = touches[0].1;
        let b = touches[1].1;
        [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
    }
}

impl Default for GestureHandler {
    fn default() -> Self {
        Self::new()
    }
}
