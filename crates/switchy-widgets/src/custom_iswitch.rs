//! Pill switch whose thumb carries caller-supplied content.

use crate::content::SwitchContent;
use crate::iswitch::{pill_builders, pill_widget, PillTrack, ThumbDecoration};
use crate::switch::switch_builders;
use switchy_core::{Color, TextStyle};

/// Pill switch with arbitrary content in the thumb.
///
/// The thumb grows to fit its content (plus padding on both sides) and never
/// shrinks below the button height.
#[derive(Debug)]
pub struct CustomISwitch {
    track: PillTrack,
}

impl CustomISwitch {
    /// Create a switch showing `checked` with content for each state.
    #[must_use]
    pub fn new(
        checked: bool,
        positive: impl Into<SwitchContent>,
        negative: impl Into<SwitchContent>,
    ) -> Self {
        Self {
            track: PillTrack::new(
                checked,
                ThumbDecoration::Content {
                    positive: positive.into(),
                    negative: negative.into(),
                },
            ),
        }
    }

    /// Set the tint passed to the content.
    #[must_use]
    pub const fn content_color(mut self, color: Color) -> Self {
        self.track.content_color = color;
        self
    }

    /// Set the style used for text content.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.track.text_style = style;
        self
    }

    /// Current thumb width.
    #[must_use]
    pub fn thumb_width(&self) -> f32 {
        self.track.thumb_width()
    }

    switch_builders!(track.base);
    pill_builders!();
}

pill_widget!(CustomISwitch);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Icon, Switch};
    use switchy_core::{Constraints, DrawCommand, RecordingCanvas, Rect, Size, Widget};

    fn mounted(switch: CustomISwitch) -> CustomISwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    // ===== Thumb Width Tests =====

    #[test]
    fn test_thumb_min_is_button_height() {
        let switch = CustomISwitch::new(false, Icon::Done, "OFF");
        // "OFF" is 25.2 wide, plus 7 padding: still under 40.
        assert_eq!(switch.thumb_width(), 40.0);
    }

    #[test]
    fn test_thumb_grows_with_content() {
        let switch = CustomISwitch::new(false, Icon::Done, "DISABLED");
        let expected = 8.0f32.mul_add(14.0 * 0.6, 7.0);
        assert!((switch.thumb_width() - expected).abs() < 0.01);
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        assert_eq!(size.width, 80.0);
    }

    #[test]
    fn test_thumb_target_uses_thumb_width() {
        let mut switch = mounted(CustomISwitch::new(false, "ON", "OFF"));
        switch.set_checked(true);
        while switch.animate(1.0 / 60.0) {}
        assert_eq!(switch.thumb_offset(), 80.0 - switch.thumb_width());
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paints_current_content() {
        let switch = mounted(CustomISwitch::new(false, "ON", "OFF").content_color(Color::BLUE));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let text = canvas
            .resolved()
            .iter()
            .find_map(|leaf| match leaf.command {
                DrawCommand::Text { content, style, .. } => Some((content.clone(), style.color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(text, ("OFF".to_string(), Color::BLUE));
    }
}
