//! Heart-shaped switch whose thumb travels along the lobes.

use crate::palette::{drive, StateColors, ALPHA_TWEEN, DISABLED_ALPHA};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{
    Animated, AnimationSpec, Canvas, Color, Constraints, CornerRadius, DampingRatio, Easing,
    LayoutResult, Path, Point, Rect, Shadow, Size, Stiffness, Transform2D, TypeId, Widget,
};

/// Fixed drawing size of the heart.
pub const HEART_SIZE: Size = Size::new(56.0, 48.0);
/// Thumb diameter.
pub const THUMB_SIZE: f32 = 24.0;
/// Outline width.
pub const BORDER_WIDTH: f32 = 2.0;
/// Scale applied while pressed.
pub const PRESSED_SCALE: f32 = 0.9;

const THUMB_ELEVATION: f32 = 2.0;

// Thumb waypoints as fractions of the heart size.
const START: (f32, f32) = (0.27, 0.36);
const BOTTOM: (f32, f32) = (0.5, 0.65);
const END: (f32, f32) = (0.73, 0.36);

/// Heart outline scaled to `size`, anchored at the origin.
#[must_use]
pub fn heart_path(size: Size) -> Path {
    let (w, h) = (size.width, size.height);
    let mut path = Path::new();
    path.move_to(w / 2.0, h / 5.0)
        .cubic_to(5.0 * w / 14.0, 0.0, 0.0, h / 15.0, w / 28.0, 2.0 * h / 5.0)
        .cubic_to(w / 14.0, 2.0 * h / 3.0, 3.0 * w / 7.0, 5.0 * h / 6.0, w / 2.0, h)
        .cubic_to(
            4.0 * w / 7.0,
            5.0 * h / 6.0,
            13.0 * w / 14.0,
            2.0 * h / 3.0,
            27.0 * w / 28.0,
            2.0 * h / 5.0,
        )
        .cubic_to(w, h / 15.0, 9.0 * w / 14.0, 0.0, w / 2.0, h / 5.0)
        .close();
    path
}

/// Top-left of the thumb at `progress` (0 = off, 1 = on), in whole pixels.
///
/// The thumb moves from the left lobe down to the tip for the first half,
/// then up into the right lobe.
#[must_use]
pub fn thumb_origin(size: Size, thumb: f32, progress: f32) -> Point {
    let at = |(fx, fy): (f32, f32)| Point::new(size.width * fx, size.height * fy);
    let center = if progress <= 0.5 {
        at(START).lerp(&at(BOTTOM), progress * 2.0)
    } else {
        at(BOTTOM).lerp(&at(END), (progress - 0.5) * 2.0)
    };
    Point::new(center.x - thumb / 2.0, center.y - thumb / 2.0).round()
}

/// A heart that fills in when checked.
#[derive(Debug)]
pub struct HeartSwitch {
    base: SwitchBase,
    fill_colors: StateColors,
    border_colors: StateColors,
    thumb_colors: StateColors,
    enable_scale: bool,
    heart: Rect,
    progress: Animated<f32>,
    fill: Animated<Color>,
    border: Animated<Color>,
    thumb: Animated<Color>,
    alpha: Animated<f32>,
    scale: Animated<f32>,
}

impl HeartSwitch {
    /// Create a switch showing `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let fill_colors = StateColors::new(Color::from_argb(0xFFFF_708F), Color::WHITE);
        let border_colors =
            StateColors::new(Color::from_argb(0xFFFF_4E74), Color::from_argb(0xFFD1_D1D1));
        let thumb_colors = StateColors::new(Color::WHITE, Color::from_argb(0xFFF0_F0F0));
        let color_spec = AnimationSpec::tween(200, Easing::FastOutSlowIn);
        Self {
            base: SwitchBase::new(checked),
            fill_colors,
            border_colors,
            thumb_colors,
            enable_scale: true,
            heart: Rect::from_size(HEART_SIZE),
            progress: Animated::new(
                if checked { 1.0 } else { 0.0 },
                AnimationSpec::tween(300, Easing::FastOutSlowIn),
            ),
            fill: Animated::new(fill_colors.resolve(checked, true), color_spec),
            border: Animated::new(border_colors.resolve(checked, true), color_spec),
            thumb: Animated::new(thumb_colors.resolve(checked, true), color_spec),
            alpha: Animated::new(1.0, AnimationSpec::Tween(ALPHA_TWEEN)),
            scale: Animated::new(
                1.0,
                AnimationSpec::spring(DampingRatio::MEDIUM_BOUNCY, Stiffness::LOW),
            ),
        }
    }

    /// Set the checked fill color.
    #[must_use]
    pub const fn positive_color(mut self, color: Color) -> Self {
        self.fill_colors.checked = color;
        self
    }

    /// Set the unchecked fill color.
    #[must_use]
    pub const fn negative_color(mut self, color: Color) -> Self {
        self.fill_colors.unchecked = color;
        self
    }

    /// Set the checked fill color while disabled.
    #[must_use]
    pub const fn disabled_positive_color(mut self, color: Color) -> Self {
        self.fill_colors.disabled_checked = Some(color);
        self
    }

    /// Set the unchecked fill color while disabled.
    #[must_use]
    pub const fn disabled_negative_color(mut self, color: Color) -> Self {
        self.fill_colors.disabled_unchecked = Some(color);
        self
    }

    /// Set the outline color when checked.
    #[must_use]
    pub const fn checked_border_color(mut self, color: Color) -> Self {
        self.border_colors.checked = color;
        self
    }

    /// Set the outline color when unchecked.
    #[must_use]
    pub const fn unchecked_border_color(mut self, color: Color) -> Self {
        self.border_colors.unchecked = color;
        self
    }

    /// Set the thumb color when checked.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_colors.checked = color;
        self
    }

    /// Set the thumb color when unchecked.
    #[must_use]
    pub const fn unchecked_thumb_color(mut self, color: Color) -> Self {
        self.thumb_colors.unchecked = color;
        self
    }

    /// Enable or disable the press scale effect.
    #[must_use]
    pub const fn enable_scale_animation(mut self, enable: bool) -> Self {
        self.enable_scale = enable;
        self
    }

    /// Current thumb travel, 0 to 1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Current press scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current (animated) fill color.
    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill.value()
    }

    /// Where the heart is drawn inside the bounds.
    #[must_use]
    pub const fn heart_rect(&self) -> Rect {
        self.heart
    }

    /// Thumb rectangle in device space, before the press scale.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        let origin = thumb_origin(HEART_SIZE, THUMB_SIZE, self.progress.value());
        Rect::new(
            self.heart.x + origin.x,
            self.heart.y + origin.y,
            THUMB_SIZE,
            THUMB_SIZE,
        )
    }

    switch_builders!(base);

    fn sync(&mut self) {
        let (checked, enabled, animate) =
            (self.base.checked, self.base.enabled, self.base.mounted);
        drive(&mut self.progress, if checked { 1.0 } else { 0.0 }, animate);
        // Outline and thumb colors follow `checked` only.
        drive(&mut self.fill, self.fill_colors.resolve(checked, enabled), animate);
        drive(&mut self.border, self.border_colors.resolve(checked, true), animate);
        drive(&mut self.thumb, self.thumb_colors.resolve(checked, true), animate);
        let alpha = if enabled { 1.0 } else { DISABLED_ALPHA };
        drive(&mut self.alpha, alpha, animate);
    }

    fn pressed_changed(&mut self) {
        let pressed = self.enable_scale && self.base.toggle.is_pressed();
        self.scale
            .animate_to(if pressed { PRESSED_SCALE } else { 1.0 });
    }
}

impl Widget for HeartSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(HEART_SIZE)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.heart = bounds.centered(HEART_SIZE);
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn animate(&mut self, dt: f64) -> bool {
        let mut running = self.progress.tick(dt);
        running |= self.fill.tick(dt);
        running |= self.border.tick(dt);
        running |= self.thumb.tick(dt);
        running |= self.alpha.tick(dt);
        running |= self.scale.tick(dt);
        running
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let heart = self.heart;
        canvas.push_transform(Transform2D::scale_about(self.scale.value(), heart.center()));
        canvas.push_opacity(self.alpha.value());

        let path = heart_path(HEART_SIZE).transformed(&Transform2D::translate(heart.x, heart.y));
        canvas.fill_path(&path, self.fill.value());
        canvas.stroke_path(&path, self.border.value(), BORDER_WIDTH);

        let thumb = self.thumb_rect();
        let radius = THUMB_SIZE / 2.0;
        canvas.draw_shadow(
            thumb,
            CornerRadius::uniform(radius),
            &Shadow::elevation(THUMB_ELEVATION),
        );
        canvas.fill_circle(thumb.center(), radius, self.thumb.value());

        canvas.pop_opacity();
        canvas.pop_transform();
    }

    switch_widget_common!(base);
}

impl_switch!(HeartSwitch, base);
