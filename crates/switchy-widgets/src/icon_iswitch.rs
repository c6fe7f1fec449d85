//! Pill switch whose thumb shows an icon for each state.

use crate::content::Icon;
use crate::iswitch::{pill_builders, pill_widget, PillTrack, ThumbDecoration};
use crate::switch::switch_builders;

/// Pill switch with a check/cross icon in the thumb, tinted with the track color.
#[derive(Debug)]
pub struct IconISwitch {
    track: PillTrack,
}

impl IconISwitch {
    /// Create a switch showing `checked`, with `Done`/`Close` icons.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            track: PillTrack::new(
                checked,
                ThumbDecoration::Icons {
                    positive: Icon::Done,
                    negative: Icon::Close,
                },
            ),
        }
    }

    /// Set the icon shown while checked.
    #[must_use]
    pub fn positive_icon(mut self, icon: Icon) -> Self {
        if let ThumbDecoration::Icons { positive, .. } = &mut self.track.decoration {
            *positive = icon;
        }
        self
    }

    /// Set the icon shown while unchecked.
    #[must_use]
    pub fn negative_icon(mut self, icon: Icon) -> Self {
        if let ThumbDecoration::Icons { negative, .. } = &mut self.track.decoration {
            *negative = icon;
        }
        self
    }

    /// Icon for the current `checked` prop.
    #[must_use]
    pub fn current_icon(&self) -> Option<Icon> {
        match self.track.decoration {
            ThumbDecoration::Icons { positive, negative } => {
                Some(if self.track.base.checked { positive } else { negative })
            }
            _ => None,
        }
    }

    switch_builders!(track.base);
    pill_builders!();
}

pill_widget!(IconISwitch);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Switch;
    use switchy_core::{Constraints, DrawCommand, RecordingCanvas, Rect, Size, Widget};

    fn mounted(switch: IconISwitch) -> IconISwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    fn icon_paths(canvas: &RecordingCanvas) -> usize {
        canvas
            .resolved()
            .iter()
            .filter(|leaf| matches!(leaf.command, DrawCommand::Path { .. }))
            .count()
    }

    // ===== IconISwitch Tests =====

    #[test]
    fn test_icon_swaps_with_checked() {
        let mut switch = mounted(IconISwitch::new(false));
        assert_eq!(switch.current_icon(), Some(Icon::Close));
        switch.set_checked(true);
        assert_eq!(switch.current_icon(), Some(Icon::Done));
    }

    #[test]
    fn test_custom_icons() {
        let switch = IconISwitch::new(true)
            .positive_icon(Icon::Close)
            .negative_icon(Icon::Done);
        assert_eq!(switch.current_icon(), Some(Icon::Close));
    }

    #[test]
    fn test_icon_tinted_with_track_color() {
        let switch = mounted(IconISwitch::new(true));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert_eq!(icon_paths(&canvas), 1);
        let tint = canvas
            .resolved()
            .iter()
            .find_map(|leaf| match leaf.command {
                DrawCommand::Path { style, .. } => Some(style.color),
                _ => None,
            })
            .unwrap();
        assert_eq!(tint, switch.track_color());
    }

    #[test]
    fn test_close_icon_two_strokes() {
        let switch = mounted(IconISwitch::new(false));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        assert_eq!(icon_paths(&canvas), 2);
    }
}
