//! Switch whose track morphs from a pill to a rounded square.

use crate::palette::{drive, StateColors};
use crate::switch::{impl_switch, switch_builders, switch_widget_common, SwitchBase};
use switchy_core::{
    Animated, AnimationSpec, Canvas, Color, Constraints, CornerRadius, DampingRatio, Easing,
    LayoutResult, Point, Rect, Size, Stiffness, Transform2D, Tween, TypeId, Widget,
};

/// Default track width.
pub const SWITCH_WIDTH: f32 = 80.0;
/// Default track height.
pub const SWITCH_HEIGHT: f32 = 48.0;
/// Corner radius of the fully morphed track.
pub const MORPHED_RADIUS: f32 = 8.0;
/// Track opacity while disabled.
pub const DISABLED_ALPHA: f32 = 0.5;

const THUMB_INSET: f32 = 4.0;
const THUMB_BORDER: f32 = 2.0;
const PULSE_SCALE: f32 = 1.1;
const PRESSED_THUMB_SCALE: f32 = 0.9;

fn bouncy(stiffness: f64) -> AnimationSpec {
    AnimationSpec::spring(DampingRatio::MEDIUM_BOUNCY, stiffness)
}

/// Playful switch: the thumb rolls half a turn while the track squares off.
///
/// Pressing pulses the whole track and squeezes the thumb.
#[derive(Debug)]
pub struct MorphingSwitch {
    base: SwitchBase,
    width: f32,
    height: f32,
    colors: StateColors,
    thumb_color: Color,
    enable_pulse: bool,
    enable_morphing: bool,
    pulse: Animated<f32>,
    morph: Animated<f32>,
    offset: Animated<f32>,
    rotation: Animated<f32>,
    thumb_scale: Animated<f32>,
    background: Animated<Color>,
    alpha: Animated<f32>,
}

impl MorphingSwitch {
    /// Create a switch showing `checked`.
    #[must_use]
    pub fn new(checked: bool) -> Self {
        let colors = StateColors::new(Color::from_argb(0xFF21_96F3), Color::from_argb(0xFFE0_E0E0));
        let on = if checked { 1.0 } else { 0.0 };
        Self {
            base: SwitchBase::new(checked),
            width: SWITCH_WIDTH,
            height: SWITCH_HEIGHT,
            colors,
            thumb_color: Color::WHITE,
            enable_pulse: true,
            enable_morphing: true,
            pulse: Animated::new(1.0, bouncy(Stiffness::LOW)),
            morph: Animated::new(on, bouncy(Stiffness::MEDIUM)),
            offset: Animated::new(0.0, bouncy(Stiffness::MEDIUM)),
            rotation: Animated::new(on * 180.0, bouncy(Stiffness::MEDIUM)),
            thumb_scale: Animated::new(1.0, bouncy(Stiffness::HIGH)),
            background: Animated::new(
                colors.resolve(checked, true),
                AnimationSpec::tween(300, Easing::FastOutSlowIn),
            ),
            alpha: Animated::new(1.0, AnimationSpec::Tween(Tween::new(200))),
        }
    }

    /// Set the track size.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self
    }

    /// Set the checked track color.
    #[must_use]
    pub const fn positive_color(mut self, color: Color) -> Self {
        self.colors.checked = color;
        self
    }

    /// Set the unchecked track color.
    #[must_use]
    pub const fn negative_color(mut self, color: Color) -> Self {
        self.colors.unchecked = color;
        self
    }

    /// Set the checked track color while disabled.
    #[must_use]
    pub const fn disabled_positive_color(mut self, color: Color) -> Self {
        self.colors.disabled_checked = Some(color);
        self
    }

    /// Set the unchecked track color while disabled.
    #[must_use]
    pub const fn disabled_negative_color(mut self, color: Color) -> Self {
        self.colors.disabled_unchecked = Some(color);
        self
    }

    /// Set the thumb color.
    #[must_use]
    pub const fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    /// Enable or disable the press pulse.
    #[must_use]
    pub const fn enable_pulse_animation(mut self, enable: bool) -> Self {
        self.enable_pulse = enable;
        self
    }

    /// Enable or disable the track morph.
    #[must_use]
    pub const fn enable_morphing(mut self, enable: bool) -> Self {
        self.enable_morphing = enable;
        self
    }

    /// Current thumb offset.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.offset.value()
    }

    /// Current thumb rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation.value()
    }

    /// Current track scale.
    #[must_use]
    pub fn pulse(&self) -> f32 {
        self.pulse.value()
    }

    /// Current track corner radius.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        let pill = self.height / 2.0;
        if self.enable_morphing {
            (MORPHED_RADIUS - pill)
                .mul_add(self.morph.value(), pill)
                .max(0.0)
        } else {
            pill
        }
    }

    /// Current (animated) track color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background.value()
    }

    /// Thumb diameter.
    #[must_use]
    pub fn thumb_diameter(&self) -> f32 {
        2.0f32.mul_add(-THUMB_INSET, self.height).max(0.0)
    }

    switch_builders!(base);

    fn sync(&mut self) {
        let (checked, enabled, animate) =
            (self.base.checked, self.base.enabled, self.base.mounted);
        let on = if checked { 1.0 } else { 0.0 };
        // Travel follows the configured width, not the laid-out one. A tighter
        // parent clips the thumb at the track edge.
        let travel = if checked {
            (self.width - self.height).max(0.0)
        } else {
            0.0
        };
        drive(&mut self.morph, on, animate);
        drive(&mut self.offset, travel, animate);
        drive(&mut self.rotation, on * 180.0, animate);
        drive(
            &mut self.background,
            self.colors.resolve(checked, enabled),
            animate,
        );
        drive(&mut self.alpha, if enabled { 1.0 } else { DISABLED_ALPHA }, animate);
    }

    fn pressed_changed(&mut self) {
        let pressed = self.base.toggle.is_pressed();
        let pulse = if pressed && self.enable_pulse {
            PULSE_SCALE
        } else {
            1.0
        };
        self.pulse.animate_to(pulse);
        self.thumb_scale
            .animate_to(if pressed { PRESSED_THUMB_SCALE } else { 1.0 });
    }
}

impl Widget for MorphingSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.width, self.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn animate(&mut self, dt: f64) -> bool {
        let mut running = self.pulse.tick(dt);
        running |= self.morph.tick(dt);
        running |= self.offset.tick(dt);
        running |= self.rotation.tick(dt);
        running |= self.thumb_scale.tick(dt);
        running |= self.background.tick(dt);
        running |= self.alpha.tick(dt);
        running
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        let shape = CornerRadius::uniform(self.corner_radius()).clamped_to(&bounds);
        let background = self.background.value();

        canvas.push_transform(Transform2D::scale_about(self.pulse.value(), bounds.center()));
        canvas.push_clip(bounds, shape);
        canvas.fill_rounded_rect(bounds, shape, background);
        canvas.push_opacity(self.alpha.value());

        let diameter = self.thumb_diameter();
        let thumb = Rect::new(
            bounds.x + self.offset.value() + THUMB_INSET,
            bounds.y + THUMB_INSET,
            diameter,
            diameter,
        );
        let center = thumb.center();
        let radius = diameter / 2.0;
        canvas.push_transform(
            Transform2D::scale_about(self.thumb_scale.value(), center)
                .then(&Transform2D::rotate_about(self.rotation.value(), center)),
        );
        canvas.fill_circle(center, radius, self.thumb_color);
        canvas.stroke_circle(
            center,
            (radius - THUMB_BORDER / 2.0).max(0.0),
            background.with_alpha(0.3),
            THUMB_BORDER,
        );
        let dot = if self.base.checked {
            self.colors.checked.with_alpha(0.7)
        } else {
            self.colors.unchecked.with_alpha(0.3)
        };
        canvas.fill_circle(center, self.height / 6.0, dot);
        canvas.pop_transform();

        if self.base.toggle.is_pressed() {
            canvas.fill_rounded_rect(bounds, shape, Color::WHITE.with_alpha(0.2));
        }

        canvas.pop_opacity();
        canvas.pop_clip();
        canvas.pop_transform();
    }

    switch_widget_common!(base);
}

impl_switch!(MorphingSwitch, base);
