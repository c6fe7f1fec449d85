use super::{ControlState, NativeControl};
use switchy_core::{AnimationSpec, Canvas, Color, CornerRadius, Easing, Event, Rect};

const FACE: u32 = 0xFFEE_EEEE;
const SELECTED_FACE: u32 = 0xFFB8_CFE5;
const PRESSED_FACE: u32 = 0xFFA3_B8CC;
const BORDER: u32 = 0xFF7A_8A99;
const DISABLED_BORDER: u32 = 0xFFB8_B8B8;
const RADIUS: f32 = 3.0;

/// Desktop toggle button: a push button that stays down while selected.
///
/// Selection changes are immediate; there is no knob to animate.
#[derive(Debug, Clone)]
pub struct DesktopToggleButton {
    state: ControlState,
}

impl Default for DesktopToggleButton {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopToggleButton {
    /// An enabled, unselected button.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ControlState::new(AnimationSpec::tween(0, Easing::Linear)),
        }
    }

    /// Face color for the current state.
    #[must_use]
    pub fn face_color(&self) -> Color {
        let argb = if self.state.tracker.is_pressed() {
            PRESSED_FACE
        } else if self.state.on {
            SELECTED_FACE
        } else {
            FACE
        };
        Color::from_argb(argb)
    }
}

impl NativeControl for DesktopToggleButton {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn is_on(&self) -> bool {
        self.state.on
    }

    fn set_on(&mut self, on: bool, _animated: bool) {
        // Setting the selection directly does not go through the listener.
        self.state.set_on(on, false);
    }

    fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state.set_enabled(enabled);
    }

    fn handle_event(&mut self, event: &Event, bounds: Rect) -> Option<bool> {
        let changed = self.state.handle(event, bounds);
        if changed.is_some() {
            self.state.knob.snap_to(*self.state.knob.target());
        }
        changed
    }

    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let radius = CornerRadius::uniform(RADIUS).clamped_to(&bounds);
        let border = if self.state.enabled { BORDER } else { DISABLED_BORDER };
        canvas.fill_rounded_rect(bounds, radius, self.face_color());
        canvas.stroke_rounded_rect(bounds, radius, Color::from_argb(border), 1.0);
    }
}
