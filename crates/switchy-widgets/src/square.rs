//! Square block sliding over a thin centered bar.

use crate::block::{radius_for, SlidingBlock};
use crate::palette::{disabled, drive, primary_container, COLOR_TWEEN};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{
    Animated, AnimationSpec, Canvas, Color, Constraints, LayoutResult, Rect, Size, TypeId, Widget,
};

/// Default corner radius.
pub const CORNER_RADIUS: f32 = 2.0;
/// Opacity of the bar relative to the square color.
pub const CONTAINER_ALPHA: f32 = 0.6;

/// Square switch. Colors follow `enabled` only; position shows `checked`.
#[derive(Debug)]
pub struct SquareSwitch {
    base: SwitchBase,
    block: SlidingBlock,
    corner_radius: f32,
    square_color: Color,
    container_color: Color,
    disabled_square_color: Option<Color>,
    disabled_container_color: Option<Color>,
    square: Animated<Color>,
    container: Animated<Color>,
}

impl SquareSwitch {
    /// Create a switch showing `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let square = primary_container();
        let container = square.with_alpha(CONTAINER_ALPHA);
        Self {
            base: SwitchBase::new(checked),
            block: SlidingBlock::default(),
            corner_radius: CORNER_RADIUS,
            square_color: square,
            container_color: container,
            disabled_square_color: None,
            disabled_container_color: None,
            square: Animated::new(square, AnimationSpec::Tween(COLOR_TWEEN)),
            container: Animated::new(container, AnimationSpec::Tween(COLOR_TWEEN)),
        }
    }

    /// Set the corner radius of bar and square.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the square color. The bar keeps its own color.
    #[must_use]
    pub const fn square_color(mut self, color: Color) -> Self {
        self.square_color = color;
        self
    }

    /// Set the bar color.
    #[must_use]
    pub const fn container_color(mut self, color: Color) -> Self {
        self.container_color = color;
        self
    }

    /// Set the square color while disabled.
    #[must_use]
    pub const fn disabled_square_color(mut self, color: Color) -> Self {
        self.disabled_square_color = Some(color);
        self
    }

    /// Set the bar color while disabled.
    #[must_use]
    pub const fn disabled_container_color(mut self, color: Color) -> Self {
        self.disabled_container_color = Some(color);
        self
    }

    fn target_colors(&self) -> (Color, Color) {
        if self.base.enabled {
            (self.square_color, self.container_color)
        } else {
            (
                self.disabled_square_color
                    .unwrap_or_else(|| self.square_color.multiply_alpha(0.38)),
                self.disabled_container_color
                    .unwrap_or_else(|| disabled(self.container_color)),
            )
        }
    }

    /// Current (animated) square color.
    #[must_use]
    pub fn current_square_color(&self) -> Color {
        self.square.value()
    }

    /// Current (animated) bar color.
    #[must_use]
    pub fn current_container_color(&self) -> Color {
        self.container.value()
    }

    /// Current square offset.
    #[must_use]
    pub fn block_offset(&self) -> f32 {
        self.block.offset()
    }

    /// The centered bar inside `bounds`.
    fn bar_rect(bounds: Rect) -> Rect {
        bounds.centered(Size::new(bounds.width / 1.3, bounds.height / 2.0))
    }

    switch_builders!(base);

    fn sync(&mut self) {
        let animate = self.base.mounted;
        self.block.update(self.base.checked);
        let (square, container) = self.target_colors();
        drive(&mut self.square, square, animate);
        drive(&mut self.container, container, animate);
    }

    #[allow(clippy::unused_self)]
    const fn pressed_changed(&self) {}
}

impl Widget for SquareSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        self.block.measure(constraints)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.block.record(bounds);
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn animate(&mut self, dt: f64) -> bool {
        let block = self.block.tick(dt);
        let square = self.square.tick(dt);
        let container = self.container.tick(dt);
        block || square || container
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        canvas.push_clip(bounds, radius_for(self.corner_radius, &bounds));
        let bar = Self::bar_rect(bounds);
        canvas.fill_rounded_rect(bar, radius_for(self.corner_radius, &bar), self.container.value());
        let square = self.block.block_rect(bounds);
        canvas.fill_rounded_rect(
            square,
            radius_for(self.corner_radius, &square),
            self.square.value(),
        );
        canvas.pop_clip();
    }

    switch_widget_common!(base);
}

impl_switch!(SquareSwitch, base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Switch;
    use switchy_core::RecordingCanvas;

    fn mounted(switch: SquareSwitch) -> SquareSwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    // ===== SquareSwitch Tests =====

    #[test]
    fn test_square_default_colors() {
        let switch = mounted(SquareSwitch::new(false));
        assert_eq!(switch.current_square_color(), primary_container());
        assert!((switch.current_container_color().a - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_square_colors_ignore_checked() {
        let mut switch = mounted(SquareSwitch::new(false));
        let before = switch.current_square_color();
        switch.set_checked(true);
        while switch.animate(1.0 / 60.0) {}
        assert_eq!(switch.current_square_color(), before);
        assert_eq!(switch.block_offset(), 40.0);
    }

    #[test]
    fn test_square_disabled_colors() {
        let switch = mounted(SquareSwitch::new(true).enabled(false));
        assert!((switch.current_square_color().a - 0.38).abs() < 1e-6);
        assert!((switch.current_container_color().a - 0.38).abs() < 1e-6);
    }

    #[test]
    fn test_square_paint_bar_then_square() {
        let switch = mounted(SquareSwitch::new(true));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let leaves = canvas.resolved();
        assert_eq!(leaves.len(), 2);
        let bar = leaves[0].device_bounds().unwrap();
        assert!((bar.width - 80.0 / 1.3).abs() < 1e-3);
        assert_eq!(bar.height, 20.0);
        assert_eq!(
            leaves[1].device_bounds(),
            Some(Rect::new(40.0, 0.0, 40.0, 40.0))
        );
    }

    #[test]
    fn test_square_custom_disabled_override() {
        let switch = mounted(
            SquareSwitch::new(false)
                .square_color(Color::BLUE)
                .disabled_square_color(Color::BLACK)
                .enabled(false),
        );
        assert_eq!(switch.current_square_color(), Color::BLACK);
    }
}
