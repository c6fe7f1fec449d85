//! Caller-owned switch state.
//!
//! Every switch is controlled: it shows the `checked` prop and reports
//! activations without flipping itself. [`SwitchState`] is the shared value a
//! caller hoists out of the widget, and [`Bound`] wires the two together so a
//! reported change is written to the state and pushed back into the widget on
//! the next pass, the same round trip a recomposing host would make.

use crate::switch::Switch;
use crate::toggleable::OnCheckedChange;
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use switchy_core::{
    AccessibleRole, Canvas, Constraints, Event, LayoutResult, Rect, Size, ToggleState, TypeId,
    Widget,
};
use tracing::trace;

/// Shared `checked` value. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct SwitchState {
    checked: Arc<AtomicBool>,
}

impl SwitchState {
    /// State starting at `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Arc::new(AtomicBool::new(checked)),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    /// Overwrite the value.
    pub fn set(&self, checked: bool) {
        self.checked.store(checked, Ordering::SeqCst);
    }

    /// Flip the value and return the new one.
    pub fn toggle(&self) -> bool {
        !self.checked.fetch_xor(true, Ordering::SeqCst)
    }

    /// Callback that writes reported values into this state.
    #[must_use]
    pub fn setter(&self) -> OnCheckedChange {
        let state = self.clone();
        Box::new(move |checked| state.set(checked))
    }
}

/// A switch whose `checked` prop follows a [`SwitchState`].
///
/// The switch's callback is replaced by one that stores the reported value,
/// optionally forwarding it to an observer installed with
/// [`Bound::on_change`].
pub struct Bound<W> {
    widget: W,
    state: SwitchState,
}

impl<W: Switch + std::fmt::Debug> std::fmt::Debug for Bound<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("widget", &self.widget)
            .field("state", &self.state.get())
            .finish()
    }
}

impl<W: Switch> Bound<W> {
    /// Bind `widget` to `state`. The widget takes the state's current value.
    #[must_use]
    pub fn new(mut widget: W, state: SwitchState) -> Self {
        widget.set_on_checked_change(Some(state.setter()));
        widget.set_checked(state.get());
        Self { widget, state }
    }

    /// Also call `observer` with every reported value, after the state is written.
    #[must_use]
    pub fn on_change(mut self, mut observer: impl FnMut(bool) + Send + Sync + 'static) -> Self {
        let state = self.state.clone();
        self.widget.set_on_checked_change(Some(Box::new(move |checked| {
            state.set(checked);
            observer(checked);
        })));
        self
    }

    /// The shared state.
    #[must_use]
    pub const fn state(&self) -> &SwitchState {
        &self.state
    }

    /// The wrapped switch.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// Push the state's value into the switch if it moved.
    fn recompose(&mut self) {
        let checked = self.state.get();
        if self.widget.is_checked() != checked {
            trace!(checked, "bound switch recomposed");
            self.widget.set_checked(checked);
        }
    }
}

impl<W: Switch + 'static> Widget for Bound<W> {
    fn type_id(&self) -> TypeId {
        Widget::type_id(&self.widget)
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.widget.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.recompose();
        self.widget.layout(bounds)
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.widget.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let msg = self.widget.event(event);
        self.recompose();
        msg
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        self.widget.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        self.widget.children_mut()
    }

    fn animate(&mut self, dt: f64) -> bool {
        self.recompose();
        self.widget.animate(dt)
    }

    fn is_interactive(&self) -> bool {
        self.widget.is_interactive()
    }

    fn is_focusable(&self) -> bool {
        self.widget.is_focusable()
    }

    fn is_enabled(&self) -> bool {
        self.widget.is_enabled()
    }

    fn toggle_state(&self) -> Option<ToggleState> {
        self.widget.toggle_state()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.widget.accessible_name()
    }

    fn accessible_role(&self) -> AccessibleRole {
        self.widget.accessible_role()
    }

    fn test_id(&self) -> Option<&str> {
        self.widget.test_id()
    }

    fn bounds(&self) -> Rect {
        self.widget.bounds()
    }
}

impl<W: Switch + 'static> Switch for Bound<W> {
    fn is_checked(&self) -> bool {
        self.widget.is_checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.state.set(checked);
        self.widget.set_checked(checked);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.widget.set_enabled(enabled);
    }

    /// Installs `on_change` as the observer; the state is still written first.
    fn set_on_checked_change(&mut self, on_change: Option<OnCheckedChange>) {
        match on_change {
            Some(mut observer) => {
                let state = self.state.clone();
                self.widget.set_on_checked_change(Some(Box::new(move |checked| {
                    state.set(checked);
                    observer(checked);
                })));
            }
            None => self.widget.set_on_checked_change(Some(self.state.setter())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ISwitch;
    use std::sync::Mutex;
    use switchy_core::{MouseButton, Point};

    fn click(widget: &mut dyn Widget, at: Point) -> Option<Box<dyn Any + Send>> {
        widget.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        });
        widget.event(&Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        })
    }

    // ===== SwitchState Tests =====

    #[test]
    fn test_state_shared_between_clones() {
        let a = SwitchState::new(false);
        let b = a.clone();
        b.set(true);
        assert!(a.get());
        assert!(!a.toggle());
        assert!(!b.get());
    }

    #[test]
    fn test_state_setter() {
        let state = SwitchState::default();
        let mut setter = state.setter();
        setter(true);
        assert!(state.get());
    }

    // ===== Bound Tests =====

    #[test]
    fn test_bound_click_round_trip() {
        let state = SwitchState::new(false);
        let mut bound = Bound::new(ISwitch::new(true), state.clone());
        assert!(!bound.is_checked());
        bound.layout(Rect::new(0.0, 0.0, 80.0, 40.0));

        let msg = click(&mut bound, Point::new(20.0, 20.0));
        assert!(msg.is_some());
        assert!(state.get());
        assert!(bound.is_checked());

        click(&mut bound, Point::new(20.0, 20.0));
        assert!(!state.get());
        assert!(!bound.is_checked());
    }

    #[test]
    fn test_bound_external_change_applied_on_next_pass() {
        let state = SwitchState::new(false);
        let mut bound = Bound::new(ISwitch::new(false), state.clone());
        bound.layout(Rect::new(0.0, 0.0, 80.0, 40.0));
        state.set(true);
        assert!(!bound.is_checked());
        bound.animate(1.0 / 60.0);
        assert!(bound.is_checked());
    }

    #[test]
    fn test_bound_observer_sees_value_after_store() {
        let state = SwitchState::new(false);
        let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let probe = state.clone();
        let mut bound = Bound::new(ISwitch::new(false), state.clone()).on_change(move |v| {
            sink.lock().unwrap().push((v, probe.get()));
        });
        bound.layout(Rect::new(0.0, 0.0, 80.0, 40.0));
        click(&mut bound, Point::new(20.0, 20.0));
        assert_eq!(*seen.lock().unwrap(), vec![(true, true)]);
    }

    #[test]
    fn test_bound_disabled_keeps_state() {
        let state = SwitchState::new(true);
        let mut bound = Bound::new(ISwitch::new(true).enabled(false), state.clone());
        bound.layout(Rect::new(0.0, 0.0, 80.0, 40.0));
        assert!(click(&mut bound, Point::new(20.0, 20.0)).is_none());
        assert!(state.get());
        assert!(!bound.is_enabled());
    }

    #[test]
    fn test_bound_delegates_semantics() {
        let bound = Bound::new(ISwitch::new(false).test_id("wifi"), SwitchState::new(true));
        assert_eq!(bound.test_id(), Some("wifi"));
        assert_eq!(bound.toggle_state(), Some(ToggleState::On));
        assert_eq!(bound.accessible_role(), AccessibleRole::Switch);
        assert_eq!(Widget::type_id(&bound), TypeId::of::<ISwitch>());
    }
}
