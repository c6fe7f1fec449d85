//! Color and opacity state shared by the switch variants.

use serde::{Deserialize, Serialize};
use switchy_core::{Animated, AnimationSpec, Color, Easing, Tween};

/// Opacity applied to a color for its disabled counterpart.
pub const DISABLED_ALPHA: f32 = 0.38;

/// Material 3 baseline `primaryContainer`.
pub const PRIMARY_CONTAINER: u32 = 0xFFEA_DDFF;

/// Material 3 baseline `onPrimaryContainer`.
pub const ON_PRIMARY_CONTAINER: u32 = 0xFF21_005D;

/// Material 3 baseline `onSurface`, the default tint for custom content.
pub const ON_SURFACE: u32 = 0xFF1D_1B20;

/// `primaryContainer` as a [`Color`].
#[must_use]
pub fn primary_container() -> Color {
    Color::from_argb(PRIMARY_CONTAINER)
}

/// `onPrimaryContainer` as a [`Color`].
#[must_use]
pub fn on_primary_container() -> Color {
    Color::from_argb(ON_PRIMARY_CONTAINER)
}

/// `onSurface` as a [`Color`].
#[must_use]
pub fn on_surface() -> Color {
    Color::from_argb(ON_SURFACE)
}

/// The disabled counterpart of `color`.
#[must_use]
pub fn disabled(color: Color) -> Color {
    color.with_alpha(DISABLED_ALPHA)
}

/// Standard color transition: 150ms, fast-out-slow-in.
pub const COLOR_TWEEN: Tween = Tween::new(150).with_easing(Easing::FastOutSlowIn);

/// Standard opacity transition: 150ms.
pub const ALPHA_TWEEN: Tween = Tween::new(150);

/// Colors for each of the four `checked × enabled` states.
///
/// Disabled colors left unset resolve to the enabled color at
/// [`DISABLED_ALPHA`].
///
/// ```
/// use switchy_core::Color;
/// use switchy_widgets::StateColors;
///
/// let colors = StateColors::new(Color::GREEN, Color::RED);
/// assert_eq!(colors.resolve(true, true), Color::GREEN);
/// assert_eq!(colors.resolve(true, false).a, 0.38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateColors {
    /// Checked and enabled
    pub checked: Color,
    /// Unchecked and enabled
    pub unchecked: Color,
    /// Checked and disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_checked: Option<Color>,
    /// Unchecked and disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_unchecked: Option<Color>,
}

impl StateColors {
    /// Colors with derived disabled variants.
    #[must_use]
    pub const fn new(checked: Color, unchecked: Color) -> Self {
        Self {
            checked,
            unchecked,
            disabled_checked: None,
            disabled_unchecked: None,
        }
    }

    /// Same color whether checked or not.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Override both disabled colors.
    #[must_use]
    pub const fn with_disabled(mut self, checked: Color, unchecked: Color) -> Self {
        self.disabled_checked = Some(checked);
        self.disabled_unchecked = Some(unchecked);
        self
    }

    /// Pick the color for a state.
    #[must_use]
    pub fn resolve(&self, checked: bool, enabled: bool) -> Color {
        match (enabled, checked) {
            (true, true) => self.checked,
            (true, false) => self.unchecked,
            (false, true) => self
                .disabled_checked
                .unwrap_or_else(|| disabled(self.checked)),
            (false, false) => self
                .disabled_unchecked
                .unwrap_or_else(|| disabled(self.unchecked)),
        }
    }
}

/// Move `value` toward `target`, animating only once the widget is mounted.
pub(crate) fn drive<T: switchy_core::Interpolate>(
    value: &mut Animated<T>,
    target: T,
    animate: bool,
) {
    if animate {
        value.animate_to(target);
    } else {
        value.snap_to(target);
    }
}

/// Animated fill color plus the opacity that fades a disabled switch.
#[derive(Debug, Clone)]
pub struct ColorModel {
    color: Animated<Color>,
    alpha: Animated<f32>,
    disabled_alpha: f32,
}

impl ColorModel {
    /// 150ms color tween, 150ms opacity tween, 0.38 disabled opacity.
    #[must_use]
    pub fn new(initial: Color) -> Self {
        Self::with_specs(
            initial,
            AnimationSpec::Tween(COLOR_TWEEN),
            AnimationSpec::Tween(ALPHA_TWEEN),
            DISABLED_ALPHA,
        )
    }

    /// Fully specified model.
    #[must_use]
    pub fn with_specs(
        initial: Color,
        color_spec: AnimationSpec,
        alpha_spec: AnimationSpec,
        disabled_alpha: f32,
    ) -> Self {
        Self {
            color: Animated::new(initial, color_spec),
            alpha: Animated::new(1.0, alpha_spec),
            disabled_alpha,
        }
    }

    /// Retarget color and opacity. Snaps when `animate` is false.
    pub fn update(&mut self, color: Color, enabled: bool, animate: bool) {
        drive(&mut self.color, color, animate);
        let alpha = if enabled { 1.0 } else { self.disabled_alpha };
        drive(&mut self.alpha, alpha, animate);
    }

    /// Current fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color.value()
    }

    /// Current opacity.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    /// Advance both animations.
    pub fn tick(&mut self, dt: f64) -> bool {
        let color = self.color.tick(dt);
        let alpha = self.alpha.tick(dt);
        color || alpha
    }

    /// Whether either value is still moving.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.color.is_running() || self.alpha.is_running()
    }
}
