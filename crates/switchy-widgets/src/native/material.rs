use super::{ControlState, NativeControl};
use crate::palette::DISABLED_ALPHA;
use crate::thumb::thumb_spring;
use switchy_core::{Canvas, Color, CornerRadius, Event, Point, Rect};

const PRIMARY: u32 = 0xFF67_50A4;
const ON_PRIMARY: u32 = 0xFFFF_FFFF;
const SURFACE_HIGHEST: u32 = 0xFFE6_E0E9;
const OUTLINE: u32 = 0xFF79_747E;

// Design sizes on a 32px-high track.
const DESIGN_HEIGHT: f32 = 32.0;
const HANDLE_OFF: f32 = 16.0;
const HANDLE_ON: f32 = 24.0;
const HANDLE_PRESSED: f32 = 28.0;
const OUTLINE_WIDTH: f32 = 2.0;

/// Material 3 switch: outlined track when off, filled when on, with a
/// handle that grows as it moves.
#[derive(Debug, Clone)]
pub struct MaterialSwitch {
    state: ControlState,
}

impl Default for MaterialSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialSwitch {
    /// An enabled, off switch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ControlState::new(thumb_spring()),
        }
    }

    /// Handle center and diameter inside `bounds`.
    #[must_use]
    pub fn handle(&self, bounds: Rect) -> (Point, f32) {
        let scale = bounds.height / DESIGN_HEIGHT;
        let progress = self.state.knob.value();
        let design = if self.state.tracker.is_pressed() {
            HANDLE_PRESSED
        } else {
            (HANDLE_ON - HANDLE_OFF).mul_add(progress, HANDLE_OFF)
        };
        let diameter = design * scale;
        let half = bounds.height / 2.0;
        let travel = (bounds.width - bounds.height).max(0.0);
        let center = Point::new(
            travel.mul_add(progress, bounds.x + half),
            bounds.y + half,
        );
        (center, diameter)
    }
}

impl NativeControl for MaterialSwitch {
    fn name(&self) -> &'static str {
        "material"
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
        let (track, handle) = if self.state.on {
            (PRIMARY, ON_PRIMARY)
        } else {
            (SURFACE_HIGHEST, OUTLINE)
        };

        canvas.push_opacity(if self.state.enabled {
            1.0
        } else {
            DISABLED_ALPHA
        });
        canvas.fill_rounded_rect(bounds, pill, Color::from_argb(track));
        if !self.state.on {
            let width = OUTLINE_WIDTH * bounds.height / DESIGN_HEIGHT;
            canvas.stroke_rounded_rect(bounds, pill, Color::from_argb(OUTLINE), width);
        }
        let (center, diameter) = self.handle(bounds);
        canvas.fill_circle(center, diameter / 2.0, Color::from_argb(handle));
        canvas.pop_opacity();
    }
}
