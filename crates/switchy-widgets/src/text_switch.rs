//! Labeled switch: a block slides over "No" / "Yes" labels.

use crate::block::{paint_halves, radius_for, SlidingBlock, BORDER_WIDTH, CORNER_RADIUS};
use crate::content::SwitchContent;
use crate::palette::{disabled, drive, on_primary_container, primary_container, COLOR_TWEEN};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{
    Animated, AnimationSpec, Canvas, Color, Constraints, LayoutResult, Rect, Size, TextStyle,
    TypeId, Widget,
};

/// An enabled color plus an optional disabled override.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tone {
    enabled: Color,
    disabled: Option<Color>,
}

impl Tone {
    const fn new(color: Color) -> Self {
        Self {
            enabled: color,
            disabled: None,
        }
    }

    fn resolve(self, enabled: bool) -> Color {
        if enabled {
            self.enabled
        } else {
            self.disabled.unwrap_or_else(|| disabled(self.enabled))
        }
    }
}

/// Switch with a text label on each side of the track.
///
/// The block covers the label of the inactive side: unchecked shows the
/// block on the left, revealing the positive label on the right.
#[derive(Debug)]
pub struct TextSwitch {
    base: SwitchBase,
    block: SlidingBlock,
    corner_radius: f32,
    positive_text: String,
    negative_text: String,
    text_style: TextStyle,
    block_tone: Tone,
    border_tone: Tone,
    text_tone: Tone,
    block_color: Animated<Color>,
    border_color: Animated<Color>,
    text_color: Animated<Color>,
}

impl TextSwitch {
    /// Create a switch labeled "Yes" / "No".
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let spec = AnimationSpec::Tween(COLOR_TWEEN);
        Self {
            base: SwitchBase::new(checked),
            block: SlidingBlock::default(),
            corner_radius: CORNER_RADIUS,
            positive_text: "Yes".to_string(),
            negative_text: "No".to_string(),
            text_style: TextStyle::default(),
            block_tone: Tone::new(primary_container()),
            border_tone: Tone::new(primary_container()),
            text_tone: Tone::new(on_primary_container()),
            block_color: Animated::new(primary_container(), spec),
            border_color: Animated::new(primary_container(), spec),
            text_color: Animated::new(on_primary_container(), spec),
        }
    }

    /// Set the label shown for the checked side.
    #[must_use]
    pub fn positive_text(mut self, text: impl Into<String>) -> Self {
        self.positive_text = text.into();
        self
    }

    /// Set the label shown for the unchecked side.
    #[must_use]
    pub fn negative_text(mut self, text: impl Into<String>) -> Self {
        self.negative_text = text.into();
        self
    }

    /// Set the label style. Its color is replaced by the text color.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Set the corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the block color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.block_tone.enabled = color;
        self
    }

    /// Set the block color while disabled.
    #[must_use]
    pub const fn disabled_color(mut self, color: Color) -> Self {
        self.block_tone.disabled = Some(color);
        self
    }

    /// Set the border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_tone.enabled = color;
        self
    }

    /// Set the border color while disabled.
    #[must_use]
    pub const fn disabled_border_color(mut self, color: Color) -> Self {
        self.border_tone.disabled = Some(color);
        self
    }

    /// Set the label color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_tone.enabled = color;
        self
    }

    /// Set the label color while disabled.
    #[must_use]
    pub const fn disabled_text_color(mut self, color: Color) -> Self {
        self.text_tone.disabled = Some(color);
        self
    }

    /// Current block offset.
    #[must_use]
    pub fn block_offset(&self) -> f32 {
        self.block.offset()
    }

    /// Current (animated) label color.
    #[must_use]
    pub fn current_text_color(&self) -> Color {
        self.text_color.value()
    }

    /// Current (animated) border color.
    #[must_use]
    pub fn current_border_color(&self) -> Color {
        self.border_color.value()
    }

    switch_builders!(base);

    fn sync(&mut self) {
        let (animate, enabled) = (self.base.mounted, self.base.enabled);
        self.block.update(self.base.checked);
        drive(&mut self.block_color, self.block_tone.resolve(enabled), animate);
        drive(&mut self.border_color, self.border_tone.resolve(enabled), animate);
        drive(&mut self.text_color, self.text_tone.resolve(enabled), animate);
    }

    #[allow(clippy::unused_self)]
    const fn pressed_changed(&self) {}
}

impl Widget for TextSwitch {
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
        let fill = self.block_color.tick(dt);
        let border = self.border_color.tick(dt);
        let text = self.text_color.tick(dt);
        block || fill || border || text
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        let radius = radius_for(self.corner_radius, &bounds);
        canvas.push_clip(bounds, radius);
        let block = self.block.block_rect(bounds);
        canvas.fill_rounded_rect(
            block,
            radius_for(self.corner_radius, &block),
            self.block_color.value(),
        );
        paint_halves(
            canvas,
            bounds,
            &SwitchContent::text(self.negative_text.as_str()),
            &SwitchContent::text(self.positive_text.as_str()),
            self.text_color.value(),
            &self.text_style,
        );
        canvas.stroke_rounded_rect(bounds, radius, self.border_color.value(), BORDER_WIDTH);
        canvas.pop_clip();
    }

    switch_widget_common!(base);
}

impl_switch!(TextSwitch, base);

#[cfg(test)]
mod tests {
    use super::*;
    use switchy_core::{DrawCommand, RecordingCanvas};

    fn mounted(switch: TextSwitch) -> TextSwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    fn labels(canvas: &RecordingCanvas) -> Vec<(String, f32)> {
        canvas
            .resolved()
            .iter()
            .filter_map(|leaf| match leaf.command {
                DrawCommand::Text {
                    content, position, ..
                } => Some((content.clone(), position.x)),
                _ => None,
            })
            .collect()
    }

    // ===== TextSwitch Tests =====

    #[test]
    fn test_text_switch_labels_negative_left() {
        let switch = mounted(TextSwitch::new(false));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let labels = labels(&canvas);
        assert_eq!(labels[0].0, "No");
        assert_eq!(labels[1].0, "Yes");
        assert!(labels[0].1 < 40.0 && labels[1].1 > 40.0);
    }

    #[test]
    fn test_text_switch_paint_order() {
        let switch = mounted(TextSwitch::new(true));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let leaves = canvas.resolved();
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves[0].effective_fill(), Some(primary_container()));
        assert_eq!(leaves[1].effective_fill(), Some(on_primary_container()));
        assert_eq!(leaves[3].effective_stroke(), Some(primary_container()));
    }

    #[test]
    fn test_text_switch_disabled_text_color() {
        let switch = mounted(TextSwitch::new(true).enabled(false));
        assert!((switch.current_text_color().a - 0.38).abs() < 1e-6);
        assert!((switch.current_border_color().a - 0.38).abs() < 1e-6);
        let custom = mounted(
            TextSwitch::new(true)
                .disabled_text_color(Color::RED)
                .enabled(false),
        );
        assert_eq!(custom.current_text_color(), Color::RED);
    }

    #[test]
    fn test_text_switch_custom_labels() {
        let switch = mounted(TextSwitch::new(true).positive_text("On").negative_text("Off"));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let labels = labels(&canvas);
        assert_eq!(labels[0].0, "Off");
        assert_eq!(labels[1].0, "On");
        assert_eq!(switch.block_offset(), 40.0);
    }
}
