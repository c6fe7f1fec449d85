//! iOS-style pill switch with a white thumb.
//!
//! The same track drives [`IconISwitch`](crate::IconISwitch) and
//! [`CustomISwitch`](crate::CustomISwitch); they differ only in what the thumb
//! carries.

use crate::content::{Icon, SwitchContent};
use crate::palette::{on_surface, ColorModel, StateColors};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, track_size, SwitchBase};
use crate::thumb::{ThumbModel, TrackMeasure};
use switchy_core::{
    Canvas, Color, Constraints, CornerRadius, LayoutResult, Rect, Shadow, Size, TextStyle,
    TypeId, Widget,
};

/// Default track height.
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Default gap between thumb and track edge.
pub const INNER_PADDING: f32 = 3.5;
/// Default corner radius; clamps to a pill.
pub const CORNER_RADIUS: f32 = 45.0;
/// Default checked color.
pub const POSITIVE: u32 = 0xFF35_C759;
/// Default unchecked color.
pub const NEGATIVE: u32 = 0xFFE9_E9EA;

const THUMB_ELEVATION: f32 = 5.0;

/// What the thumb carries.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ThumbDecoration {
    Plain,
    Icons { positive: Icon, negative: Icon },
    Content {
        positive: SwitchContent,
        negative: SwitchContent,
    },
}

/// Track, thumb and color state shared by the pill switches.
#[derive(Debug)]
pub(crate) struct PillTrack {
    pub base: SwitchBase,
    pub button_height: f32,
    pub inner_padding: f32,
    pub corner_radius: f32,
    pub colors: StateColors,
    pub decoration: ThumbDecoration,
    pub content_color: Color,
    pub text_style: TextStyle,
    track: TrackMeasure,
    thumb: ThumbModel,
    fill: ColorModel,
}

impl PillTrack {
    pub fn new(checked: bool, decoration: ThumbDecoration) -> Self {
        let colors = StateColors::new(Color::from_argb(POSITIVE), Color::from_argb(NEGATIVE));
        Self {
            base: SwitchBase::new(checked),
            button_height: BUTTON_HEIGHT,
            inner_padding: INNER_PADDING,
            corner_radius: CORNER_RADIUS,
            colors,
            decoration,
            content_color: on_surface(),
            text_style: TextStyle::default(),
            track: TrackMeasure::default(),
            thumb: ThumbModel::default(),
            fill: ColorModel::new(colors.resolve(checked, true)),
        }
    }

    fn current_content(&self) -> Option<&SwitchContent> {
        match &self.decoration {
            ThumbDecoration::Content { positive, negative } => {
                Some(if self.base.checked { positive } else { negative })
            }
            _ => None,
        }
    }

    /// Thumb width: the button height, or wider to fit custom content.
    pub fn thumb_width(&self) -> f32 {
        self.current_content().map_or(self.button_height, |content| {
            let fit = 2.0f32.mul_add(
                self.inner_padding,
                content.intrinsic_size(&self.text_style).width,
            );
            fit.max(self.button_height)
        })
    }

    pub fn thumb_offset(&self) -> f32 {
        self.thumb.offset()
    }

    pub fn fill_color(&self) -> Color {
        self.fill.color()
    }

    pub fn alpha(&self) -> f32 {
        self.fill.alpha()
    }

    pub fn sync(&mut self) {
        let animate = self.base.mounted;
        let (checked, enabled) = (self.base.checked, self.base.enabled);
        self.thumb
            .update(checked, self.track.width(), self.thumb_width());
        self.fill
            .update(self.colors.resolve(checked, enabled), enabled, animate);
    }

    pub fn measure(&self, constraints: Constraints) -> Size {
        let h = self.button_height;
        track_size(
            constraints,
            Size::new(h * 2.0, h),
            Size::new(self.thumb_width().max(h * 2.0), h),
        )
    }

    pub fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.track.record(bounds.size());
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    pub fn animate(&mut self, dt: f64) -> bool {
        let thumb = self.thumb.tick(dt);
        let fill = self.fill.tick(dt);
        thumb || fill
    }

    /// Knob rectangle: the thumb box inset by the padding.
    pub fn knob_rect(&self) -> Rect {
        let b = self.base.bounds;
        Rect::new(
            b.x + self.thumb.offset(),
            b.y,
            self.thumb_width(),
            self.button_height.min(b.height),
        )
        .inset(self.inner_padding)
    }

    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        let radius = CornerRadius::uniform(self.corner_radius);
        let track_radius = radius.clamped_to(&bounds);

        canvas.push_clip(bounds, track_radius);
        canvas.fill_rounded_rect(bounds, track_radius, self.fill.color());
        canvas.push_opacity(self.fill.alpha());

        let knob = self.knob_rect();
        let knob_radius = radius.clamped_to(&knob);
        canvas.draw_shadow(knob, knob_radius, &Shadow::elevation(THUMB_ELEVATION));
        canvas.push_clip(knob, knob_radius);
        canvas.fill_rounded_rect(knob, knob_radius, Color::WHITE);
        match &self.decoration {
            ThumbDecoration::Plain => {}
            ThumbDecoration::Icons { positive, negative } => {
                let icon = if self.base.checked { positive } else { negative };
                let rect = knob.centered(Size::new(Icon::SIZE, Icon::SIZE));
                icon.paint(canvas, rect, self.fill.color());
            }
            ThumbDecoration::Content { .. } => {
                if let Some(content) = self.current_content() {
                    content.paint(canvas, knob, self.content_color, &self.text_style);
                }
            }
        }
        canvas.pop_clip();

        canvas.pop_opacity();
        canvas.pop_clip();
    }
}

/// Builder methods for the track appearance of the pill switches.
macro_rules! pill_builders {
    () => {
        /// Set the track height (and default thumb size).
        #[must_use]
        pub fn button_height(mut self, height: f32) -> Self {
            self.track.button_height = height.max(0.0);
            self
        }

        /// Set the gap between thumb and track edge.
        #[must_use]
        pub fn inner_padding(mut self, padding: f32) -> Self {
            self.track.inner_padding = padding.max(0.0);
            self
        }

        /// Set the corner radius of track and thumb.
        #[must_use]
        pub fn corner_radius(mut self, radius: f32) -> Self {
            self.track.corner_radius = radius.max(0.0);
            self
        }

        /// Set the checked track color.
        #[must_use]
        pub const fn positive_color(mut self, color: switchy_core::Color) -> Self {
            self.track.colors.checked = color;
            self
        }

        /// Set the unchecked track color.
        #[must_use]
        pub const fn negative_color(mut self, color: switchy_core::Color) -> Self {
            self.track.colors.unchecked = color;
            self
        }

        /// Set the checked track color while disabled.
        #[must_use]
        pub const fn disabled_positive_color(mut self, color: switchy_core::Color) -> Self {
            self.track.colors.disabled_checked = Some(color);
            self
        }

        /// Set the unchecked track color while disabled.
        #[must_use]
        pub const fn disabled_negative_color(mut self, color: switchy_core::Color) -> Self {
            self.track.colors.disabled_unchecked = Some(color);
            self
        }

        /// Replace all four track colors.
        #[must_use]
        pub const fn colors(mut self, colors: $crate::palette::StateColors) -> Self {
            self.track.colors = colors;
            self
        }

        /// Current thumb offset from the track start.
        #[must_use]
        pub fn thumb_offset(&self) -> f32 {
            self.track.thumb_offset()
        }

        /// Current (animated) track color.
        #[must_use]
        pub fn track_color(&self) -> switchy_core::Color {
            self.track.fill_color()
        }

        fn sync(&mut self) {
            self.track.sync();
        }

        #[allow(clippy::unused_self)]
        const fn pressed_changed(&self) {}
    };
}

/// `Widget` impl forwarding to the inner [`PillTrack`].
macro_rules! pill_widget {
    ($ty:ty) => {
        impl switchy_core::Widget for $ty {
            fn type_id(&self) -> switchy_core::TypeId {
                switchy_core::TypeId::of::<Self>()
            }

            fn measure(&self, constraints: switchy_core::Constraints) -> switchy_core::Size {
                self.track.measure(constraints)
            }

            fn layout(&mut self, bounds: switchy_core::Rect) -> switchy_core::LayoutResult {
                self.track.layout(bounds)
            }

            fn paint(&self, canvas: &mut dyn switchy_core::Canvas) {
                self.track.paint(canvas);
            }

            fn animate(&mut self, dt: f64) -> bool {
                self.track.animate(dt)
            }

            $crate::switch::switch_widget_common!(track.base);
        }

        $crate::switch::impl_switch!($ty, track.base);
    };
}

pub(crate) use {pill_builders, pill_widget};

/// Pill switch with a plain white thumb.
///
/// ```
/// use switchy_widgets::ISwitch;
///
/// let switch = ISwitch::new(true)
///     .on_checked_change(|checked| println!("now {checked}"))
///     .test_id("wifi");
/// ```
#[derive(Debug)]
pub struct ISwitch {
    track: PillTrack,
}

impl ISwitch {
    /// Create a switch showing `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self {
            track: PillTrack::new(checked, ThumbDecoration::Plain),
        }
    }

    switch_builders!(track.base);
    pill_builders!();
}

pill_widget!(ISwitch);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Switch;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use switchy_core::{DrawCommand, Event, MouseButton, Point, RecordingCanvas, ToggleState};

    fn mounted(switch: ISwitch) -> ISwitch {
        let mut switch = switch;
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        switch.layout(Rect::from_size(size));
        switch
    }

    fn click(switch: &mut ISwitch) {
        let p = switch.bounds().center();
        switch.event(&Event::MouseDown {
            position: p,
            button: MouseButton::Left,
        });
        switch.event(&Event::MouseUp {
            position: p,
            button: MouseButton::Left,
        });
    }

    // ===== Construction Tests =====

    #[test]
    fn test_iswitch_defaults() {
        let switch = ISwitch::new(false);
        assert!(!switch.is_checked());
        assert!(switch.is_enabled());
        assert_eq!(switch.track.button_height, 40.0);
        assert_eq!(switch.track.inner_padding, 3.5);
        assert_eq!(switch.track.colors.checked.to_argb(), POSITIVE);
        assert_eq!(switch.track.colors.unchecked.to_argb(), NEGATIVE);
    }

    #[test]
    fn test_iswitch_builder_colors() {
        let switch = ISwitch::new(true)
            .positive_color(Color::BLUE)
            .disabled_positive_color(Color::BLACK)
            .enabled(false);
        assert_eq!(switch.track.colors.resolve(true, false), Color::BLACK);
    }

    // ===== Layout Tests =====

    #[test]
    fn test_iswitch_default_min_size() {
        let switch = ISwitch::new(false);
        let size = switch.measure(Constraints::loose(Size::new(400.0, 300.0)));
        assert_eq!(size, Size::new(80.0, 40.0));
    }

    #[test]
    fn test_iswitch_parent_width_wins() {
        let switch = ISwitch::new(false);
        let size = switch.measure(Constraints::new(200.0, 200.0, 0.0, 300.0));
        assert_eq!(size, Size::new(200.0, 40.0));
    }

    #[test]
    fn test_iswitch_checked_thumb_at_end() {
        let switch = mounted(ISwitch::new(true));
        assert_eq!(switch.thumb_offset(), 40.0);
        assert_eq!(switch.track.knob_rect(), Rect::new(43.5, 3.5, 33.0, 33.0));
    }

    #[test]
    fn test_iswitch_unmounted_offset_zero() {
        let switch = ISwitch::new(true);
        assert_eq!(switch.thumb_offset(), 0.0);
    }

    // ===== Interaction Tests =====

    #[test]
    fn test_iswitch_click_invokes_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let mut switch = mounted(ISwitch::new(false).on_checked_change(move |v| {
            assert!(v);
            c.fetch_add(1, Ordering::SeqCst);
        }));
        click(&mut switch);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Controlled: nothing changes until the owner pushes the value.
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_iswitch_without_callback_not_toggleable() {
        let mut switch = mounted(ISwitch::new(false));
        assert!(switch.toggle_state().is_none());
        assert!(!switch.is_interactive());
        click(&mut switch);
        assert!(!switch.is_checked());
    }

    #[test]
    fn test_iswitch_set_checked_animates_thumb() {
        let mut switch = mounted(ISwitch::new(false).on_checked_change(|_| {}));
        switch.set_checked(true);
        assert_eq!(switch.toggle_state(), Some(ToggleState::On));
        assert_eq!(switch.thumb_offset(), 0.0);
        assert!(switch.animate(1.0 / 60.0));
        assert!(switch.thumb_offset() > 0.0);
        while switch.animate(1.0 / 60.0) {}
        assert_eq!(switch.thumb_offset(), 40.0);
        assert_eq!(switch.track_color().to_argb(), POSITIVE);
    }

    // ===== Paint Tests =====

    #[test]
    fn test_iswitch_paint_structure() {
        let switch = mounted(ISwitch::new(false).enabled(false));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let leaves = canvas.resolved();
        // track, shadow, knob
        assert_eq!(leaves.len(), 3);
        // Track fill sits outside the alpha layer.
        assert!((leaves[0].effective_fill().unwrap().a - 0.38).abs() < 1e-6);
        assert!((leaves[2].effective_fill().unwrap().a - 0.38).abs() < 1e-6);
        assert!(matches!(canvas.commands()[0], DrawCommand::Clip { .. }));
    }

    #[test]
    fn test_iswitch_paint_idempotent() {
        let switch = mounted(ISwitch::new(true));
        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        switch.paint(&mut a);
        switch.paint(&mut b);
        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn test_iswitch_knob_is_white_and_pill() {
        let switch = mounted(ISwitch::new(false));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let leaves = canvas.resolved();
        assert_eq!(leaves[2].effective_fill(), Some(Color::WHITE));
        match leaves[2].command {
            DrawCommand::Rect { radius, .. } => assert_eq!(radius.top_left, 16.5),
            other => panic!("Expected Rect command, got {other:?}"),
        }
        assert_eq!(
            leaves[2].device_bounds().map(|r| r.origin()),
            Some(Point::new(3.5, 3.5))
        );
    }
}
