//! The controlled-switch contract and the state every variant carries.

use crate::toggleable::{OnCheckedChange, Toggleable};
use std::any::Any;
use switchy_core::{Constraints, Event, Rect, Size, ToggleState, Widget};

/// A two-state control whose `checked` value is owned by the caller.
pub trait Switch: Widget {
    /// The `checked` prop currently shown.
    fn is_checked(&self) -> bool;

    /// Push a new `checked` prop.
    fn set_checked(&mut self, checked: bool);

    /// Push a new `enabled` prop.
    fn set_enabled(&mut self, enabled: bool);

    /// Replace the change callback. `None` makes the switch read-only.
    fn set_on_checked_change(&mut self, on_change: Option<OnCheckedChange>);
}

/// Props and interaction state common to all variants.
#[derive(Debug, Default)]
pub(crate) struct SwitchBase {
    pub checked: bool,
    pub enabled: bool,
    pub toggle: Toggleable,
    pub bounds: Rect,
    pub mounted: bool,
    pub test_id: Option<String>,
    pub accessible_name: Option<String>,
}

impl SwitchBase {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            enabled: true,
            ..Self::default()
        }
    }

    /// Route an event through the toggle surface.
    pub fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.toggle
            .handle(event, self.bounds, self.checked, self.enabled)
            .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }

    pub fn toggle_state(&self) -> Option<ToggleState> {
        self.toggle
            .has_callback()
            .then_some(ToggleState::from(self.checked))
    }

    pub const fn is_interactive(&self) -> bool {
        self.toggle.is_active(self.enabled)
    }
}

/// Size of a track with a default minimum and a preferred height.
pub(crate) fn track_size(constraints: Constraints, min: Size, preferred: Size) -> Size {
    constraints.with_default_min(min).constrain(preferred)
}

/// Builder methods shared by every controlled variant.
macro_rules! switch_builders {
    ($($base:ident).+) => {
        /// Set whether the switch accepts input.
        #[must_use]
        pub fn enabled(mut self, enabled: bool) -> Self {
            self.$($base).+.enabled = enabled;
            self
        }

        /// Set the change callback. Without one the switch is read-only.
        #[must_use]
        pub fn on_checked_change(mut self, on_change: impl FnMut(bool) + Send + Sync + 'static) -> Self {
            self.$($base).+.toggle.set_callback(Some(Box::new(on_change)));
            self
        }

        /// Set the accessible name.
        #[must_use]
        pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
            self.$($base).+.accessible_name = Some(name.into());
            self
        }

        /// Set the test ID.
        #[must_use]
        pub fn test_id(mut self, id: impl Into<String>) -> Self {
            self.$($base).+.test_id = Some(id.into());
            self
        }
    };
}

/// `Widget` methods that only read [`SwitchBase`].
macro_rules! switch_widget_common {
    ($($base:ident).+) => {
        fn event(&mut self, event: &switchy_core::Event) -> Option<Box<dyn std::any::Any + Send>> {
            let msg = self.$($base).+.event(event);
            self.pressed_changed();
            msg
        }

        fn children(&self) -> &[Box<dyn switchy_core::Widget>] {
            &[]
        }

        fn children_mut(&mut self) -> &mut [Box<dyn switchy_core::Widget>] {
            &mut []
        }

        fn is_interactive(&self) -> bool {
            self.$($base).+.is_interactive()
        }

        fn is_focusable(&self) -> bool {
            self.$($base).+.is_interactive()
        }

        fn is_enabled(&self) -> bool {
            self.$($base).+.enabled
        }

        fn toggle_state(&self) -> Option<switchy_core::ToggleState> {
            self.$($base).+.toggle_state()
        }

        fn accessible_name(&self) -> Option<&str> {
            self.$($base).+.accessible_name.as_deref()
        }

        fn accessible_role(&self) -> switchy_core::AccessibleRole {
            switchy_core::AccessibleRole::Switch
        }

        fn test_id(&self) -> Option<&str> {
            self.$($base).+.test_id.as_deref()
        }

        fn bounds(&self) -> switchy_core::Rect {
            self.$($base).+.bounds
        }
    };
}

/// [`Switch`] for a variant with a `sync` method that re-derives targets.
macro_rules! impl_switch {
    ($ty:ty, $($base:ident).+) => {
        impl $crate::switch::Switch for $ty {
            fn is_checked(&self) -> bool {
                self.$($base).+.checked
            }

            fn set_checked(&mut self, checked: bool) {
                self.$($base).+.checked = checked;
                self.sync();
            }

            fn set_enabled(&mut self, enabled: bool) {
                self.$($base).+.enabled = enabled;
                self.sync();
            }

            fn set_on_checked_change(&mut self, on_change: Option<$crate::toggleable::OnCheckedChange>) {
                self.$($base).+.toggle.set_callback(on_change);
                self.sync();
            }
        }
    };
}

pub(crate) use {impl_switch, switch_builders, switch_widget_common};

#[cfg(test)]
mod tests {
    use super::*;
    use switchy_core::{MouseButton, Point};

    // ===== SwitchBase Tests =====

    #[test]
    fn test_base_defaults() {
        let base = SwitchBase::new(true);
        assert!(base.checked);
        assert!(base.enabled);
        assert!(!base.mounted);
        assert!(base.toggle_state().is_none());
        assert!(!base.is_interactive());
    }

    #[test]
    fn test_base_toggle_state_with_callback() {
        let mut base = SwitchBase::new(false);
        base.toggle.set_callback(Some(Box::new(|_| {})));
        assert_eq!(base.toggle_state(), Some(ToggleState::Off));
        assert!(base.is_interactive());
        base.enabled = false;
        assert!(!base.is_interactive());
        assert_eq!(base.toggle_state(), Some(ToggleState::Off));
    }

    #[test]
    fn test_base_event_emits_message() {
        let mut base = SwitchBase::new(false);
        base.bounds = Rect::new(0.0, 0.0, 80.0, 40.0);
        base.toggle.set_callback(Some(Box::new(|_| {})));
        let p = Point::new(10.0, 10.0);
        assert!(base
            .event(&Event::MouseDown {
                position: p,
                button: MouseButton::Left
            })
            .is_none());
        let msg = base
            .event(&Event::MouseUp {
                position: p,
                button: MouseButton::Left,
            })
            .unwrap();
        let toggled = msg.downcast::<crate::SwitchToggled>().unwrap();
        assert!(toggled.checked);
        assert!(!base.checked);
    }

    #[test]
    fn test_track_size_default_min() {
        let size = track_size(
            Constraints::loose(Size::new(400.0, 300.0)),
            Size::new(80.0, 40.0),
            Size::new(80.0, 40.0),
        );
        assert_eq!(size, Size::new(80.0, 40.0));
        let forced = track_size(
            Constraints::tight(Size::new(200.0, 40.0)),
            Size::new(80.0, 40.0),
            Size::new(80.0, 40.0),
        );
        assert_eq!(forced, Size::new(200.0, 40.0));
    }
}
