//! Platform switch controls behind one capability trait.
//!
//! [`NativeSwitch`] keeps the controlled contract on top of a stateful
//! platform control: props are pushed down on every update pass, and user
//! changes read back from the control are forwarded to the callback once.

mod cupertino;
mod desktop;
mod material;

pub use cupertino::CupertinoSwitch;
pub use desktop::DesktopToggleButton;
pub use material::MaterialSwitch;

use crate::switch::{impl_switch, switch_builders, SwitchBase};
use crate::toggleable::{PressTracker, SwitchToggled};
use std::any::Any;
use std::fmt;
use switchy_core::{
    AccessibleRole, Animated, AnimationSpec, Canvas, Constraints, Event, LayoutResult, Rect, Size,
    ToggleState, TypeId, Widget,
};
use tracing::debug;

/// Intrinsic size of a platform switch.
pub const NATIVE_SIZE: Size = Size::new(51.0, 31.0);

/// A stateful platform switch.
///
/// `set_on` is programmatic and never reports a change; only
/// [`handle_event`](Self::handle_event) does.
pub trait NativeControl: fmt::Debug + Send + Sync {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Value the control currently shows.
    fn is_on(&self) -> bool;

    /// Set the shown value.
    fn set_on(&mut self, on: bool, animated: bool);

    /// Whether the control accepts input.
    fn is_enabled(&self) -> bool;

    /// Enable or disable input.
    fn set_enabled(&mut self, enabled: bool);

    /// Feed user input. Returns the new value when the user flipped it.
    fn handle_event(&mut self, event: &Event, bounds: Rect) -> Option<bool>;

    /// Advance control-owned animations.
    fn animate(&mut self, _dt: f64) -> bool {
        false
    }

    /// Draw into `bounds`.
    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect);

    /// Preferred size.
    fn intrinsic_size(&self) -> Size {
        NATIVE_SIZE
    }
}

/// Which platform control family to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativePlatform {
    /// iOS switch
    Cupertino,
    /// Desktop toggle button
    Desktop,
    /// Material switch (Android, web)
    Material,
}

impl NativePlatform {
    /// Platform of the compilation target.
    #[must_use]
    #[allow(unreachable_code)]
    pub const fn current() -> Self {
        #[cfg(target_os = "ios")]
        {
            return Self::Cupertino;
        }

        #[cfg(any(target_os = "android", target_arch = "wasm32"))]
        {
            return Self::Material;
        }

        Self::Desktop
    }

    /// A fresh control for this platform.
    #[must_use]
    pub fn control(self) -> Box<dyn NativeControl> {
        match self {
            Self::Cupertino => Box::new(CupertinoSwitch::new()),
            Self::Desktop => Box::new(DesktopToggleButton::new()),
            Self::Material => Box::new(MaterialSwitch::new()),
        }
    }

    /// Name of the platform family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cupertino => "cupertino",
            Self::Desktop => "desktop",
            Self::Material => "material",
        }
    }
}

/// On/enabled state and input tracking shared by the backends.
#[derive(Debug, Clone)]
pub(crate) struct ControlState {
    pub on: bool,
    pub enabled: bool,
    pub tracker: PressTracker,
    /// Knob position, 0 (off) to 1 (on).
    pub knob: Animated<f32>,
}

impl ControlState {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            on: false,
            enabled: true,
            tracker: PressTracker::default(),
            knob: Animated::new(0.0, spec),
        }
    }

    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.on = on;
        let target = if on { 1.0 } else { 0.0 };
        if animated {
            self.knob.animate_to(target);
        } else {
            self.knob.snap_to(target);
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracker.reset();
        }
    }

    /// Flip on a completed activation, like a real control would.
    pub fn handle(&mut self, event: &Event, bounds: Rect) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        if self.tracker.track(event, bounds) {
            self.set_on(!self.on, true);
            Some(self.on)
        } else {
            None
        }
    }
}

/// Switch rendered by the platform's own control.
///
/// ```
/// use switchy_widgets::native::{NativePlatform, NativeSwitch};
///
/// let switch = NativeSwitch::new(true).with_platform(NativePlatform::Material);
/// assert_eq!(switch.control().name(), "material");
/// ```
pub struct NativeSwitch {
    base: SwitchBase,
    control: Box<dyn NativeControl>,
}

impl fmt::Debug for NativeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeSwitch")
            .field("base", &self.base)
            .field("control", &self.control)
            .finish()
    }
}

impl NativeSwitch {
    /// Create a switch backed by the current platform's control.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self::with_control(checked, NativePlatform::current().control())
    }

    /// Create a switch backed by `control`.
    #[must_use]
    pub fn with_control(checked: bool, control: Box<dyn NativeControl>) -> Self {
        let mut switch = Self {
            base: SwitchBase::new(checked),
            control,
        };
        switch.sync();
        switch
    }

    /// Swap in the control for `platform`.
    #[must_use]
    pub fn with_platform(mut self, platform: NativePlatform) -> Self {
        self.control = platform.control();
        self.base.mounted = false;
        self.sync();
        self
    }

    /// The backing control.
    #[must_use]
    pub fn control(&self) -> &dyn NativeControl {
        self.control.as_ref()
    }

    switch_builders!(base);

    /// Update pass: push props down to the control.
    fn sync(&mut self) {
        let checked = self.base.checked;
        if self.control.is_on() != checked {
            debug!(
                backend = self.control.name(),
                checked,
                animated = self.base.mounted,
                "native switch value pushed"
            );
            self.control.set_on(checked, self.base.mounted);
        }
        self.control.set_enabled(self.base.enabled);
    }
}

impl Widget for NativeSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.control.intrinsic_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.control.paint(canvas, self.base.bounds);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let changed = self.control.handle_event(event, self.base.bounds)?;
        debug!(backend = self.control.name(), changed, "native switch read back");
        if self.base.toggle.has_callback() {
            self.base.toggle.notify(changed);
            Some(Box::new(SwitchToggled { checked: changed }))
        } else {
            // Read-only: the prop wins.
            self.control.set_on(self.base.checked, false);
            None
        }
    }

    fn animate(&mut self, dt: f64) -> bool {
        self.control.animate(dt)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        self.base.is_interactive()
    }

    fn is_focusable(&self) -> bool {
        self.base.is_interactive()
    }

    fn is_enabled(&self) -> bool {
        self.base.enabled
    }

    fn toggle_state(&self) -> Option<ToggleState> {
        self.base.toggle_state()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.base.accessible_name.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.base.test_id.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.base.bounds
    }
}

impl_switch!(NativeSwitch, base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Switch;
    use std::sync::{Arc, Mutex};
    use switchy_core::{Key, MouseButton, RecordingCanvas};

    fn mounted(switch: NativeSwitch) -> NativeSwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    fn click(switch: &mut NativeSwitch) -> Option<Box<dyn Any + Send>> {
        let p = switch.bounds().center();
        switch.event(&Event::MouseDown {
            position: p,
            button: MouseButton::Left,
        });
        switch.event(&Event::MouseUp {
            position: p,
            button: MouseButton::Left,
        })
    }

    fn all_platforms() -> [NativePlatform; 3] {
        [
            NativePlatform::Cupertino,
            NativePlatform::Desktop,
            NativePlatform::Material,
        ]
    }

    // ===== NativePlatform Tests =====

    #[test]
    fn test_platform_current_is_desktop_on_host() {
        #[cfg(not(any(target_os = "ios", target_os = "android", target_arch = "wasm32")))]
        assert_eq!(NativePlatform::current(), NativePlatform::Desktop);
        assert_eq!(
            NativePlatform::current().control().name(),
            NativePlatform::current().name()
        );
    }

    // ===== NativeSwitch Tests =====

    #[test]
    fn test_native_intrinsic_size() {
        for platform in all_platforms() {
            let switch = mounted(NativeSwitch::new(false).with_platform(platform));
            assert_eq!(switch.bounds().size(), NATIVE_SIZE);
        }
    }

    #[test]
    fn test_native_initial_props_pushed() {
        for platform in all_platforms() {
            let switch = NativeSwitch::new(true)
                .with_platform(platform)
                .enabled(false);
            let switch = mounted(switch);
            assert!(switch.control().is_on());
            assert!(!switch.control().is_enabled());
        }
    }

    #[test]
    fn test_native_user_change_reported_once() {
        for platform in all_platforms() {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let sink = calls.clone();
            let mut switch = mounted(
                NativeSwitch::new(false)
                    .with_platform(platform)
                    .on_checked_change(move |v| sink.lock().unwrap().push(v)),
            );
            let msg = click(&mut switch).unwrap();
            assert!(msg.downcast::<SwitchToggled>().unwrap().checked);
            assert_eq!(*calls.lock().unwrap(), vec![true]);

            // Owner accepts: pushing the same value reports nothing.
            switch.set_checked(true);
            assert_eq!(calls.lock().unwrap().len(), 1);
            assert!(switch.control().is_on());
        }
    }

    #[test]
    fn test_native_programmatic_set_never_reports() {
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        let mut switch = mounted(
            NativeSwitch::new(false)
                .with_platform(NativePlatform::Desktop)
                .on_checked_change(move |_| *sink.lock().unwrap() += 1),
        );
        switch.set_checked(true);
        switch.set_checked(false);
        switch.set_checked(true);
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(switch.control().is_on());
    }

    #[test]
    fn test_native_rejected_change_reverts_on_update() {
        let mut switch = mounted(
            NativeSwitch::new(false)
                .with_platform(NativePlatform::Cupertino)
                .on_checked_change(|_| {}),
        );
        click(&mut switch);
        assert!(switch.control().is_on());
        // Owner ignores the change; the next update pass restores the prop.
        switch.layout(switch.bounds());
        assert!(!switch.control().is_on());
    }

    #[test]
    fn test_native_without_callback_reverts() {
        let mut switch = mounted(NativeSwitch::new(false).with_platform(NativePlatform::Material));
        assert!(click(&mut switch).is_none());
        assert!(!switch.control().is_on());
        assert!(switch.toggle_state().is_none());
    }

    #[test]
    fn test_native_disabled_ignores_input() {
        let calls = Arc::new(Mutex::new(0));
        let sink = calls.clone();
        let mut switch = mounted(
            NativeSwitch::new(true)
                .with_platform(NativePlatform::Cupertino)
                .enabled(false)
                .on_checked_change(move |_| *sink.lock().unwrap() += 1),
        );
        assert!(click(&mut switch).is_none());
        assert_eq!(*calls.lock().unwrap(), 0);
        assert!(switch.control().is_on());
    }

    #[test]
    fn test_native_keyboard_activation() {
        let mut switch = mounted(
            NativeSwitch::new(false)
                .with_platform(NativePlatform::Desktop)
                .on_checked_change(|_| {}),
        );
        switch.event(&Event::FocusIn);
        let msg = switch.event(&Event::KeyDown { key: Key::Space });
        assert!(msg.is_some());
    }

    #[test]
    fn test_native_paint_is_non_empty() {
        for platform in all_platforms() {
            let switch = mounted(NativeSwitch::new(true).with_platform(platform));
            let mut canvas = RecordingCanvas::new();
            switch.paint(&mut canvas);
            assert!(!canvas.resolved().is_empty(), "{platform:?}");
        }
    }
}
