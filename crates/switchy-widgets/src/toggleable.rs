//! The interaction surface shared by every switch.
//!
//! A press starts with a left mouse-down inside the bounds and activates on a
//! mouse-up that is still inside. A focused surface also activates on `Space`
//! or `Enter`. Activation never flips the switch itself: it reports `!checked`
//! to the callback and leaves it to the owner to push the new value back.

use switchy_core::{Event, MouseButton, Rect};
use tracing::debug;

/// Change callback installed on a switch.
pub type OnCheckedChange = Box<dyn FnMut(bool) + Send + Sync>;

/// Message emitted when a switch is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchToggled {
    /// The value passed to the callback
    pub checked: bool,
}

/// Press and focus tracking without any notion of checked state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressTracker {
    pressed: bool,
    focused: bool,
}

impl PressTracker {
    /// Feed an event. Returns `true` when it completes an activation.
    pub fn track(&mut self, event: &Event, bounds: Rect) -> bool {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                self.pressed = bounds.contains_point(position);
                false
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => std::mem::take(&mut self.pressed) && bounds.contains_point(position),
            Event::MouseLeave => {
                self.pressed = false;
                false
            }
            Event::FocusIn => {
                self.focused = true;
                false
            }
            Event::FocusOut => {
                self.focused = false;
                self.pressed = false;
                false
            }
            Event::KeyDown { key } => self.focused && key.is_activation(),
            _ => false,
        }
    }

    /// Whether a pointer press is in progress.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the surface has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Drop any press and focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Toggle gesture region with an optional change callback.
#[derive(Default)]
pub struct Toggleable {
    on_change: Option<OnCheckedChange>,
    tracker: PressTracker,
}

impl std::fmt::Debug for Toggleable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toggleable")
            .field("has_callback", &self.has_callback())
            .field("tracker", &self.tracker)
            .finish()
    }
}

impl Toggleable {
    /// Surface reporting to `on_change`.
    #[must_use]
    pub fn new(on_change: Option<OnCheckedChange>) -> Self {
        Self {
            on_change,
            tracker: PressTracker::default(),
        }
    }

    /// Replace the callback. `None` makes the surface read-only.
    pub fn set_callback(&mut self, on_change: Option<OnCheckedChange>) {
        self.on_change = on_change;
        if self.on_change.is_none() {
            self.tracker.reset();
        }
    }

    /// Whether a callback is installed.
    #[must_use]
    pub const fn has_callback(&self) -> bool {
        self.on_change.is_some()
    }

    /// Whether activation would reach the callback.
    #[must_use]
    pub const fn is_active(&self, enabled: bool) -> bool {
        enabled && self.has_callback()
    }

    /// Whether a press is in progress. Always false while inactive.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.tracker.is_pressed()
    }

    /// Report a change that happened outside the gesture tracker.
    pub(crate) fn notify(&mut self, checked: bool) {
        debug!(checked, "switch change reported");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(checked);
        }
    }

    /// Feed an event for a switch currently showing `checked`.
    pub fn handle(
        &mut self,
        event: &Event,
        bounds: Rect,
        checked: bool,
        enabled: bool,
    ) -> Option<SwitchToggled> {
        if !self.is_active(enabled) {
            let activated = self.tracker.track(event, bounds);
            self.tracker = PressTracker {
                pressed: false,
                ..self.tracker
            };
            if activated || matches!(event, Event::MouseUp { position, .. } if bounds.contains_point(position))
            {
                debug!(
                    enabled,
                    has_callback = self.has_callback(),
                    "switch activation suppressed"
                );
            }
            return None;
        }
        if !self.tracker.track(event, bounds) {
            return None;
        }
        let next = !checked;
        debug!(checked = next, "switch activated");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
        Some(SwitchToggled { checked: next })
    }
}
