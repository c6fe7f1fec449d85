//! Two-tone switch: a colored block slides across a bordered track.

use crate::block::{radius_for, SlidingBlock, BORDER_WIDTH, CORNER_RADIUS};
use crate::palette::{primary_container, ColorModel, StateColors};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{Canvas, Color, Constraints, LayoutResult, Rect, Size, TypeId, Widget};

/// Bordered track with a half-width block colored by state.
///
/// The border fades with the disabled opacity; the block itself is drawn with
/// its resolved color.
#[derive(Debug)]
pub struct ColoredSwitch {
    base: SwitchBase,
    block: SlidingBlock,
    corner_radius: f32,
    colors: StateColors,
    border_color: Color,
    fill: ColorModel,
}

impl ColoredSwitch {
    /// Create a switch showing `checked`: green when on, red when off.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let colors = StateColors::new(Color::GREEN, Color::RED);
        Self {
            base: SwitchBase::new(checked),
            block: SlidingBlock::default(),
            corner_radius: CORNER_RADIUS,
            colors,
            border_color: primary_container(),
            fill: ColorModel::new(colors.resolve(checked, true)),
        }
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the block color when checked.
    #[must_use]
    pub const fn positive_color(mut self, color: Color) -> Self {
        self.colors.checked = color;
        self
    }

    /// Set the block color when unchecked.
    #[must_use]
    pub const fn negative_color(mut self, color: Color) -> Self {
        self.colors.unchecked = color;
        self
    }

    /// Set the block color when checked and disabled.
    #[must_use]
    pub const fn disabled_positive_color(mut self, color: Color) -> Self {
        self.colors.disabled_checked = Some(color);
        self
    }

    /// Set the block color when unchecked and disabled.
    #[must_use]
    pub const fn disabled_negative_color(mut self, color: Color) -> Self {
        self.colors.disabled_unchecked = Some(color);
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Current (animated) block color.
    #[must_use]
    pub fn block_color(&self) -> Color {
        self.fill.color()
    }

    /// Current block offset.
    #[must_use]
    pub fn block_offset(&self) -> f32 {
        self.block.offset()
    }

    switch_builders!(base);

    fn sync(&mut self) {
        let (checked, enabled) = (self.base.checked, self.base.enabled);
        self.block.update(checked);
        self.fill
            .update(self.colors.resolve(checked, enabled), enabled, self.base.mounted);
    }

    #[allow(clippy::unused_self)]
    const fn pressed_changed(&self) {}
}

impl Widget for ColoredSwitch {
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
        let fill = self.fill.tick(dt);
        block || fill
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        let radius = radius_for(self.corner_radius, &bounds);
        canvas.push_clip(bounds, radius);
        let block = self.block.block_rect(bounds);
        canvas.fill_rounded_rect(block, radius_for(self.corner_radius, &block), self.fill.color());
        canvas.stroke_rounded_rect(
            bounds,
            radius,
            self.border_color.with_alpha(self.fill.alpha()),
            BORDER_WIDTH,
        );
        canvas.pop_clip();
    }

    switch_widget_common!(base);
}

impl_switch!(ColoredSwitch, base);
