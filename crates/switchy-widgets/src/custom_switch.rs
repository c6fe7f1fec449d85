//! Block switch with caller-supplied content on each side.

use crate::block::{paint_halves, radius_for, SlidingBlock, BORDER_WIDTH, CORNER_RADIUS};
use crate::content::SwitchContent;
use crate::palette::{on_surface, primary_container, ColorModel, StateColors};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{
    Canvas, Color, Constraints, LayoutResult, Rect, Size, TextStyle, TypeId, Widget,
};

/// Like [`TextSwitch`](crate::TextSwitch), with arbitrary content.
#[derive(Debug)]
pub struct CustomSwitch {
    base: SwitchBase,
    block: SlidingBlock,
    corner_radius: f32,
    colors: StateColors,
    border_color: Color,
    content_color: Color,
    text_style: TextStyle,
    positive: SwitchContent,
    negative: SwitchContent,
    fill: ColorModel,
}

impl CustomSwitch {
    /// Create a switch with `negative` drawn on the left and `positive` on
    /// the right.
    #[must_use]
    pub fn new(
        checked: bool,
        positive: impl Into<SwitchContent>,
        negative: impl Into<SwitchContent>,
    ) -> Self {
        let colors = StateColors::uniform(primary_container());
        Self {
            base: SwitchBase::new(checked),
            block: SlidingBlock::default(),
            corner_radius: CORNER_RADIUS,
            colors,
            border_color: primary_container(),
            content_color: on_surface(),
            text_style: TextStyle::default(),
            positive: positive.into(),
            negative: negative.into(),
            fill: ColorModel::new(colors.resolve(checked, true)),
        }
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Replace the block colors.
    #[must_use]
    pub const fn colors(mut self, colors: StateColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set the tint passed to the content.
    #[must_use]
    pub const fn content_color(mut self, color: Color) -> Self {
        self.content_color = color;
        self
    }

    /// Set the style of text content.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Content of the checked side.
    #[must_use]
    pub const fn positive(&self) -> &SwitchContent {
        &self.positive
    }

    /// Content of the unchecked side.
    #[must_use]
    pub const fn negative(&self) -> &SwitchContent {
        &self.negative
    }

    /// Current block offset.
    #[must_use]
    pub fn block_offset(&self) -> f32 {
        self.block.offset()
    }

    /// Current (animated) block color.
    #[must_use]
    pub fn block_color(&self) -> Color {
        self.fill.color()
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

impl Widget for CustomSwitch {
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
        paint_halves(
            canvas,
            bounds,
            &self.negative,
            &self.positive,
            self.content_color,
            &self.text_style,
        );
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

impl_switch!(CustomSwitch, base);
