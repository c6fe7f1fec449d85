use super::{ControlState, NativeControl};
use crate::thumb::thumb_spring;
use switchy_core::{Canvas, Color, CornerRadius, Event, Rect, Shadow};

const ON_COLOR: u32 = 0xFF34_C759;
const OFF_COLOR: u32 = 0xFFE9_E9EA;
const KNOB_INSET: f32 = 2.0;
/// Extra knob width while pressed.
const KNOB_STRETCH: f32 = 7.0;
const DISABLED_OPACITY: f32 = 0.5;

/// iOS-style switch: colored pill with a round white knob.
#[derive(Debug, Clone)]
pub struct CupertinoSwitch {
    state: ControlState,
}

impl Default for CupertinoSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl CupertinoSwitch {
    /// An enabled, off switch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ControlState::new(thumb_spring()),
        }
    }

    /// Knob rectangle inside `bounds` at the current position.
    #[must_use]
    pub fn knob_rect(&self, bounds: Rect) -> Rect {
        let size = 2.0f32.mul_add(-KNOB_INSET, bounds.height).max(0.0);
        let width = if self.state.tracker.is_pressed() {
            size + KNOB_STRETCH
        } else {
            size
        };
        let travel = 2.0f32.mul_add(-KNOB_INSET, bounds.width - width).max(0.0);
        Rect::new(
            travel.mul_add(self.state.knob.value(), bounds.x + KNOB_INSET),
            bounds.y + KNOB_INSET,
            width,
            size,
        )
    }
}

impl NativeControl for CupertinoSwitch {
    fn name(&self) -> &'static str {
        "cupertino"
    }

    fn is_on(&self) -> bool {
        self.state.on
    }

    fn set_on(&mut self, on: bool, animated: bool) {
        self.state.set_on(on, animated);
    }

    fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state.set_enabled(enabled);
    }

    fn handle_event(&mut self, event: &Event, bounds: Rect) -> Option<bool> {
        self.state.handle(event, bounds)
    }

    fn animate(&mut self, dt: f64) -> bool {
        self.state.knob.tick(dt)
    }

    fn paint(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let pill = CornerRadius::uniform(bounds.height / 2.0).clamped_to(&bounds);
        let progress = self.state.knob.value();
        let track = Color::from_argb(OFF_COLOR).lerp(&Color::from_argb(ON_COLOR), progress);

        canvas.push_opacity(if self.state.enabled {
            1.0
        } else {
            DISABLED_OPACITY
        });
        canvas.fill_rounded_rect(bounds, pill, track);
        let knob = self.knob_rect(bounds);
        let knob_radius = CornerRadius::uniform(knob.height / 2.0).clamped_to(&knob);
        canvas.draw_shadow(knob, knob_radius, &Shadow::elevation(2.0));
        canvas.fill_rounded_rect(knob, knob_radius, Color::WHITE);
        canvas.pop_opacity();
    }
}
