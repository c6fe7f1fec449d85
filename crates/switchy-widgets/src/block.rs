//! Half-width block sliding across a track.

use crate::content::SwitchContent;
use crate::switch::track_size;
use crate::thumb::{ThumbModel, TrackMeasure};
use switchy_core::{
    AnimationSpec, Canvas, Color, Constraints, CornerRadius, Rect, Size, TextStyle,
};

/// Minimum touch height of a button-like control.
pub const MIN_HEIGHT: f32 = 40.0;
/// Default corner radius of the block switches.
pub const CORNER_RADIUS: f32 = 10.0;
/// Track border width.
pub const BORDER_WIDTH: f32 = 1.0;

/// Measured track plus the animated block position.
#[derive(Debug, Clone)]
pub(crate) struct SlidingBlock {
    pub height: f32,
    track: TrackMeasure,
    thumb: ThumbModel,
}

impl Default for SlidingBlock {
    fn default() -> Self {
        Self::new(crate::thumb::thumb_spring())
    }
}

impl SlidingBlock {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            height: MIN_HEIGHT,
            track: TrackMeasure::default(),
            thumb: ThumbModel::new(spec),
        }
    }

    pub fn measure(&self, constraints: Constraints) -> Size {
        track_size(
            constraints,
            Size::new(MIN_HEIGHT * 2.0, MIN_HEIGHT),
            Size::new(MIN_HEIGHT * 2.0, self.height),
        )
    }

    pub fn record(&mut self, bounds: Rect) {
        self.track.record(bounds.size());
    }

    /// Retarget the block: at the far end when `at_end`.
    pub fn update(&mut self, at_end: bool) {
        let width = self.track.width();
        self.thumb.update(at_end, width, width / 2.0);
    }

    pub fn offset(&self) -> f32 {
        self.thumb.offset()
    }

    pub fn block_rect(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x + self.thumb.offset(),
            bounds.y,
            bounds.width / 2.0,
            bounds.height,
        )
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        self.thumb.tick(dt)
    }
}

/// Corner radius clamped to `rect`.
pub(crate) fn radius_for(radius: f32, rect: &Rect) -> CornerRadius {
    CornerRadius::uniform(radius).clamped_to(rect)
}

/// Draw `left` and `right` centered in the two halves of `bounds`.
pub(crate) fn paint_halves(
    canvas: &mut dyn Canvas,
    bounds: Rect,
    left: &SwitchContent,
    right: &SwitchContent,
    tint: Color,
    style: &TextStyle,
) {
    let half = Size::new(bounds.width / 2.0, bounds.height);
    left.paint(canvas, bounds.with_size(half), tint, style);
    right.paint(
        canvas,
        bounds.with_size(half).translate(half.width, 0.0),
        tint,
        style,
    );
}
