//! Animation system: easing curves, spring physics and retargetable values.
//!
//! [`Animated`] is the per-widget state holder: the first value it sees is
//! shown immediately, later targets animate from whatever is on screen at
//! that moment (an in-flight animation is retargeted, never queued).

use crate::geometry::Point;
use crate::Color;
use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Material standard curve, cubic-bezier(0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
    /// Material deceleration curve, cubic-bezier(0.0, 0.0, 0.2, 1.0)
    LinearOutSlowIn,
    /// Material acceleration curve, cubic-bezier(0.4, 0.0, 1.0, 1.0)
    FastOutLinearIn,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic-bezier timing curve at `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    let bezier = |a: f64, b: f64, s: f64| {
        let ms = 1.0 - s;
        3.0 * ms * ms * s * a + 3.0 * ms * s * s * b + s * s * s
    };
    let slope = |a: f64, b: f64, s: f64| {
        let ms = 1.0 - s;
        3.0 * ms * ms * a + 6.0 * ms * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton first, bisection when the slope is too flat to trust.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier(x1, x2, s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

// =============================================================================
// SpringConfig - Spring Physics Parameters
// =============================================================================

/// Damping ratio presets.
#[derive(Debug, Clone, Copy)]
pub struct DampingRatio;

impl DampingRatio {
    /// Critically damped, no overshoot
    pub const NO_BOUNCY: f64 = 1.0;
    /// Slight overshoot
    pub const LOW_BOUNCY: f64 = 0.75;
    /// Noticeable bounce
    pub const MEDIUM_BOUNCY: f64 = 0.5;
    /// Very bouncy
    pub const HIGH_BOUNCY: f64 = 0.2;
}

/// Stiffness presets.
#[derive(Debug, Clone, Copy)]
pub struct Stiffness;

impl Stiffness {
    /// Very fast settle
    pub const HIGH: f64 = 10_000.0;
    /// Default for small UI motion
    pub const MEDIUM: f64 = 1_500.0;
    /// Between medium and low
    pub const MEDIUM_LOW: f64 = 400.0;
    /// Slow
    pub const LOW: f64 = 200.0;
    /// Very slow
    pub const VERY_LOW: f64 = 50.0;
}

/// Spring physics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Mass of the object (affects inertia)
    pub mass: f64,
    /// Stiffness of the spring (affects speed)
    pub stiffness: f64,
    /// Damping coefficient (affects bounciness)
    pub damping: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_ratio(DampingRatio::NO_BOUNCY, Stiffness::MEDIUM)
    }
}

impl SpringConfig {
    /// Create custom spring config.
    #[must_use]
    pub const fn custom(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Unit-mass spring from a damping ratio and a stiffness.
    ///
    /// ```
    /// use switchy_core::animation::{DampingRatio, SpringConfig, Stiffness};
    ///
    /// let spring = SpringConfig::from_ratio(DampingRatio::MEDIUM_BOUNCY, Stiffness::LOW);
    /// assert!((spring.damping_ratio() - 0.5).abs() < 1e-9);
    /// assert!(spring.is_underdamped());
    /// ```
    #[must_use]
    pub fn from_ratio(damping_ratio: f64, stiffness: f64) -> Self {
        Self {
            mass: 1.0,
            stiffness,
            damping: damping_ratio * 2.0 * stiffness.sqrt(),
        }
    }

    /// Calculate damping ratio.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.mass * self.stiffness).sqrt())
    }

    /// Undamped angular frequency.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Whether spring is underdamped (will oscillate).
    #[must_use]
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0 - RATIO_EPSILON
    }

    /// Whether spring is critically damped (fastest without oscillation).
    #[must_use]
    pub fn is_critically_damped(&self) -> bool {
        (self.damping_ratio() - 1.0).abs() <= RATIO_EPSILON
    }

    /// Whether spring is overdamped (slow, no oscillation).
    #[must_use]
    pub fn is_overdamped(&self) -> bool {
        self.damping_ratio() > 1.0 + RATIO_EPSILON
    }

    /// Advance one spring-driven component by `dt` seconds.
    ///
    /// Uses the closed-form solution of the damped oscillator, so the result
    /// does not depend on how the elapsed time is split into frames.
    #[must_use]
    pub fn step(&self, value: f64, target: f64, velocity: f64, dt: f64) -> (f64, f64) {
        let x0 = value - target;
        let v0 = velocity;
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        let (x, v) = if self.is_critically_damped() {
            let c = w0.mul_add(x0, v0);
            let decay = (-w0 * dt).exp();
            let x = c.mul_add(dt, x0) * decay;
            let v = (c - w0 * c.mul_add(dt, x0)) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let a = zeta * w0;
            let wd = w0 * zeta.mul_add(-zeta, 1.0).sqrt();
            let b = a.mul_add(x0, v0) / wd;
            let decay = (-a * dt).exp();
            let (sin, cos) = (wd * dt).sin_cos();
            let x = decay * x0.mul_add(cos, b * sin);
            let v = decay * v0.mul_add(cos, (-a).mul_add(b, -x0 * wd) * sin);
            (x, v)
        } else {
            let root = zeta.mul_add(zeta, -1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = r1.mul_add(-x0, v0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1.mul_add(e1, c2 * e2), (r1 * c1).mul_add(e1, r2 * c2 * e2))
        };
        (target + x, v)
    }
}

const RATIO_EPSILON: f64 = 1e-6;

const DEFAULT_PRECISION: f64 = 0.01;

// =============================================================================
// Tween / AnimationSpec
// =============================================================================

/// Fixed-duration eased interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Delay before starting in milliseconds
    pub delay_ms: u32,
    /// Easing curve
    pub easing: Easing,
}

impl Tween {
    /// Tween of `duration_ms` with the standard curve and no delay.
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::FastOutSlowIn,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Total time in seconds including the delay.
    #[must_use]
    pub fn total_secs(&self) -> f64 {
        f64::from(self.duration_ms + self.delay_ms) / 1000.0
    }

    /// Eased progress in [0, 1] after `elapsed` seconds.
    #[must_use]
    pub fn progress(&self, elapsed: f64) -> f64 {
        let active = elapsed - f64::from(self.delay_ms) / 1000.0;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.easing
            .apply(active / (f64::from(self.duration_ms) / 1000.0))
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(300)
    }
}

/// How an [`Animated`] value moves toward a new target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationSpec {
    /// Physically modeled spring
    Spring(SpringConfig),
    /// Fixed-duration eased interpolation
    Tween(Tween),
}

impl AnimationSpec {
    /// Spring from preset ratio and stiffness.
    #[must_use]
    pub fn spring(damping_ratio: f64, stiffness: f64) -> Self {
        Self::Spring(SpringConfig::from_ratio(damping_ratio, stiffness))
    }

    /// Tween with duration and easing.
    #[must_use]
    pub const fn tween(duration_ms: u32, easing: Easing) -> Self {
        Self::Tween(Tween::new(duration_ms).with_easing(easing))
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::Spring(SpringConfig::default())
    }
}

// =============================================================================
// Interpolate / Animated
// =============================================================================

/// Component vector used to animate any [`Interpolate`] type.
pub type AnimationVector = [f64; 4];

/// Types that can be animated component-wise.
pub trait Interpolate: Clone + PartialEq {
    /// Split into up to four animatable components.
    fn to_vector(&self) -> AnimationVector;

    /// Rebuild from components.
    fn from_vector(vector: AnimationVector) -> Self;

    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        let (a, b) = (from.to_vector(), to.to_vector());
        let mut out = [0.0; 4];
        for i in 0..4 {
            out[i] = (b[i] - a[i]).mul_add(t, a[i]);
        }
        Self::from_vector(out)
    }
}

impl Interpolate for f64 {
    fn to_vector(&self) -> AnimationVector {
        [*self, 0.0, 0.0, 0.0]
    }

    fn from_vector(vector: AnimationVector) -> Self {
        vector[0]
    }
}

impl Interpolate for f32 {
    fn to_vector(&self) -> AnimationVector {
        [f64::from(*self), 0.0, 0.0, 0.0]
    }

    fn from_vector(vector: AnimationVector) -> Self {
        vector[0] as Self
    }
}

impl Interpolate for Point {
    fn to_vector(&self) -> AnimationVector {
        [f64::from(self.x), f64::from(self.y), 0.0, 0.0]
    }

    fn from_vector(vector: AnimationVector) -> Self {
        Self::new(vector[0] as f32, vector[1] as f32)
    }
}

impl Interpolate for Color {
    fn to_vector(&self) -> AnimationVector {
        [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            f64::from(self.a),
        ]
    }

    fn from_vector(vector: AnimationVector) -> Self {
        Self::new(
            vector[0] as f32,
            vector[1] as f32,
            vector[2] as f32,
            vector[3] as f32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Idle,
    Tween {
        from: AnimationVector,
        elapsed: f64,
    },
    Spring {
        current: AnimationVector,
        velocity: AnimationVector,
    },
}

/// A value that animates toward its latest target.
///
/// ```
/// use switchy_core::animation::{Animated, AnimationSpec, Easing};
///
/// let mut offset = Animated::new(0.0f32, AnimationSpec::tween(150, Easing::Linear));
/// offset.animate_to(40.0);
/// offset.tick(0.075);
/// assert!((offset.value() - 20.0).abs() < 0.01);
/// offset.tick(1.0);
/// assert_eq!(offset.value(), 40.0);
/// assert!(!offset.is_running());
/// ```
#[derive(Debug, Clone)]
pub struct Animated<T: Interpolate> {
    spec: AnimationSpec,
    value: T,
    target: T,
    motion: Motion,
    precision: f64,
}

impl<T: Interpolate> Animated<T> {
    /// Create at `initial`, shown without animating.
    #[must_use]
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            spec,
            value: initial.clone(),
            target: initial,
            motion: Motion::Idle,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Current (possibly mid-flight) value.
    #[must_use]
    pub fn value(&self) -> T {
        self.value.clone()
    }

    /// Latest target.
    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// Active animation spec.
    #[must_use]
    pub const fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Replace the spec used for subsequent targets.
    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    /// Whether the value is still moving.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.motion != Motion::Idle
    }

    /// Animate from the current value toward `target`.
    ///
    /// Returns `true` if the target changed. A spring keeps its velocity.
    pub fn animate_to(&mut self, target: T) -> bool {
        if target == self.target {
            return false;
        }
        let current = self.value.to_vector();
        self.motion = match (self.spec, self.motion) {
            (AnimationSpec::Spring(_), Motion::Spring { velocity, .. }) => Motion::Spring {
                current,
                velocity,
            },
            (AnimationSpec::Spring(_), _) => Motion::Spring {
                current,
                velocity: [0.0; 4],
            },
            (AnimationSpec::Tween(_), _) => Motion::Tween {
                from: current,
                elapsed: 0.0,
            },
        };
        self.target = target;
        true
    }

    /// Jump to `value` with no animation.
    pub fn snap_to(&mut self, value: T) {
        self.value = value.clone();
        self.target = value;
        self.motion = Motion::Idle;
    }

    /// Advance by `dt` seconds. Returns `true` while still running.
    pub fn tick(&mut self, dt: f64) -> bool {
        let target = self.target.to_vector();
        match (&mut self.motion, self.spec) {
            (Motion::Idle, _) => return false,
            (Motion::Tween { from, elapsed }, AnimationSpec::Tween(tween)) => {
                *elapsed += dt;
                if *elapsed >= tween.total_secs() {
                    self.finish();
                } else {
                    let p = tween.progress(*elapsed);
                    let mut out = [0.0; 4];
                    for i in 0..4 {
                        out[i] = (target[i] - from[i]).mul_add(p, from[i]);
                    }
                    self.value = T::from_vector(out);
                }
            }
            (Motion::Spring { current, velocity }, AnimationSpec::Spring(config)) => {
                let mut settled = true;
                for i in 0..4 {
                    let (x, v) = config.step(current[i], target[i], velocity[i], dt);
                    current[i] = x;
                    velocity[i] = v;
                    settled &= (x - target[i]).abs() < self.precision && v.abs() < self.precision;
                }
                if settled {
                    self.finish();
                } else {
                    self.value = T::from_vector(*current);
                }
            }
            // Spec changed mid-flight: restart toward the same target with the new spec.
            (Motion::Tween { .. } | Motion::Spring { .. }, _) => {
                let target = self.target.clone();
                self.target = self.value.clone();
                self.motion = Motion::Idle;
                self.animate_to(target);
                return self.tick(dt);
            }
        }
        self.is_running()
    }

    fn finish(&mut self) {
        self.value = self.target.clone();
        self.motion = Motion::Idle;
    }
}
