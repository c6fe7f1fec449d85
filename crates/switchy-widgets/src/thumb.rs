//! Thumb travel derived from the measured track.
//!
//! A thumb has exactly two rest positions: `0` when unchecked and
//! `track_width - thumb_width` when checked. The track width is only known
//! after layout, so before that the thumb sits at `0` whatever `checked` says.

use switchy_core::{Animated, AnimationSpec, DampingRatio, Size, Stiffness};
use tracing::trace;

/// Rest offset of the thumb for a state.
///
/// ```
/// use switchy_widgets::thumb::thumb_target;
///
/// assert_eq!(thumb_target(true, 80.0, 40.0), 40.0);
/// assert_eq!(thumb_target(false, 80.0, 40.0), 0.0);
/// assert_eq!(thumb_target(true, 0.0, 40.0), 0.0);
/// ```
#[must_use]
pub fn thumb_target(checked: bool, track_width: f32, thumb_width: f32) -> f32 {
    if checked && track_width > 0.0 {
        (track_width - thumb_width).max(0.0)
    } else {
        0.0
    }
}

/// Spring used for thumb travel unless a variant says otherwise.
#[must_use]
pub fn thumb_spring() -> AnimationSpec {
    AnimationSpec::spring(DampingRatio::NO_BOUNCY, Stiffness::MEDIUM)
}

/// Last size a track was laid out at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackMeasure {
    size: Size,
}

impl TrackMeasure {
    /// Record a layout size. Returns `true` if it changed.
    pub fn record(&mut self, size: Size) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Measured width, `0` before the first layout.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Measured height, `0` before the first layout.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Whether a non-empty width has been recorded.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.size.width > 0.0
    }
}

/// Animated thumb offset.
#[derive(Debug, Clone)]
pub struct ThumbModel {
    offset: Animated<f32>,
    placed: bool,
}

impl Default for ThumbModel {
    fn default() -> Self {
        Self::new(thumb_spring())
    }
}

impl ThumbModel {
    /// Thumb model driven by `spec`.
    #[must_use]
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            offset: Animated::new(0.0, spec),
            placed: false,
        }
    }

    /// Retarget from the current props and measurement.
    ///
    /// The first update with a real track width places the thumb without
    /// animating; later updates animate from wherever the thumb is.
    pub fn update(&mut self, checked: bool, track_width: f32, thumb_width: f32) {
        let target = thumb_target(checked, track_width, thumb_width);
        if !self.placed {
            self.offset.snap_to(target);
            self.placed = track_width > 0.0;
            return;
        }
        let from = self.offset.value();
        if self.offset.animate_to(target) {
            trace!(from, target, checked, "thumb retarget");
        }
    }

    /// Current offset from the start of the track.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// Offset the thumb is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        *self.offset.target()
    }

    /// Whether the thumb has been placed on a measured track.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.placed
    }

    /// Advance the animation.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.offset.tick(dt)
    }

    /// Whether the thumb is moving.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.offset.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use switchy_core::Easing;

    // ===== thumb_target Tests =====

    #[test]
    fn test_target_unmeasured_track() {
        assert_eq!(thumb_target(true, 0.0, 40.0), 0.0);
        assert_eq!(thumb_target(false, 0.0, 40.0), 0.0);
    }

    #[test]
    fn test_target_thumb_wider_than_track() {
        assert_eq!(thumb_target(true, 30.0, 40.0), 0.0);
    }

    // ===== TrackMeasure Tests =====

    #[test]
    fn test_track_measure_record() {
        let mut track = TrackMeasure::default();
        assert!(!track.is_measured());
        assert!(track.record(Size::new(80.0, 40.0)));
        assert!(!track.record(Size::new(80.0, 40.0)));
        assert_eq!(track.width(), 80.0);
        assert_eq!(track.height(), 40.0);
        assert!(track.is_measured());
    }

    // ===== ThumbModel Tests =====

    #[test]
    fn test_thumb_collapsed_before_layout() {
        let mut thumb = ThumbModel::default();
        thumb.update(true, 0.0, 40.0);
        assert_eq!(thumb.offset(), 0.0);
        assert!(!thumb.is_placed());
    }

    #[test]
    fn test_thumb_snaps_on_first_measurement() {
        let mut thumb = ThumbModel::default();
        thumb.update(true, 0.0, 40.0);
        thumb.update(true, 100.0, 40.0);
        assert_eq!(thumb.offset(), 60.0);
        assert!(!thumb.is_running());
    }

    #[test]
    fn test_thumb_animates_after_placement() {
        let mut thumb = ThumbModel::new(AnimationSpec::tween(100, Easing::Linear));
        thumb.update(false, 80.0, 40.0);
        thumb.update(true, 80.0, 40.0);
        assert_eq!(thumb.target(), 40.0);
        thumb.tick(0.05);
        assert!((thumb.offset() - 20.0).abs() < 0.01);
        thumb.tick(0.05);
        assert_eq!(thumb.offset(), 40.0);
    }

    #[test]
    fn test_thumb_follows_track_resize() {
        let mut thumb = ThumbModel::default();
        thumb.update(true, 80.0, 40.0);
        thumb.update(true, 120.0, 40.0);
        assert_eq!(thumb.target(), 80.0);
        while thumb.tick(1.0 / 60.0) {}
        assert_eq!(thumb.offset(), 80.0);
    }

    proptest! {
        #[test]
        fn prop_target_is_one_of_two_detents(checked: bool, width in 1.0f32..2000.0, thumb in 0.0f32..200.0) {
            let target = thumb_target(checked, width, thumb);
            let end = (width - thumb).max(0.0);
            prop_assert!(target == 0.0 || target == end);
            prop_assert_eq!(target == end && end > 0.0, checked && end > 0.0);
        }

        #[test]
        fn prop_settled_thumb_rests_on_detent(checked: bool, width in 80.0f32..600.0) {
            let mut thumb = ThumbModel::default();
            thumb.update(!checked, width, 40.0);
            thumb.update(checked, width, 40.0);
            for _ in 0..600 {
                if !thumb.tick(1.0 / 60.0) {
                    break;
                }
            }
            prop_assert_eq!(thumb.offset(), thumb_target(checked, width, 40.0));
        }
    }
}
