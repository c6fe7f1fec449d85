//! Decorative content drawn inside a thumb or on either side of a track.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use switchy_core::{Canvas, Color, Point, Rect, Size, TextStyle};

/// Built-in vector icons, authored on a 24×24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    /// Check mark
    Done,
    /// Cross
    Close,
}

impl Icon {
    /// Default icon size.
    pub const SIZE: f32 = 24.0;

    const STROKE: f32 = 2.0;

    /// Stroke polylines in icon units.
    fn strokes(self) -> &'static [&'static [(f32, f32)]] {
        match self {
            Self::Done => &[&[(4.5, 12.5), (9.0, 17.0), (19.5, 6.5)]],
            Self::Close => &[&[(6.0, 6.0), (18.0, 18.0)], &[(18.0, 6.0), (6.0, 18.0)]],
        }
    }

    /// Polylines scaled into `rect`.
    #[must_use]
    pub fn polylines(self, rect: Rect) -> Vec<Vec<Point>> {
        let sx = rect.width / Self::SIZE;
        let sy = rect.height / Self::SIZE;
        self.strokes()
            .iter()
            .map(|stroke| {
                stroke
                    .iter()
                    .map(|&(x, y)| Point::new(x.mul_add(sx, rect.x), y.mul_add(sy, rect.y)))
                    .collect()
            })
            .collect()
    }

    /// Draw the icon filling `rect`.
    pub fn paint(self, canvas: &mut dyn Canvas, rect: Rect, tint: Color) {
        let width = Self::STROKE * rect.width.min(rect.height) / Self::SIZE;
        for line in self.polylines(rect) {
            canvas.draw_polyline(&line, tint, width);
        }
    }
}

/// Paints caller-supplied content into a rectangle with a suggested tint.
pub type ContentPainter = Arc<dyn Fn(&mut dyn Canvas, Rect, Color) + Send + Sync>;

/// Content slot of a switch.
#[derive(Clone, Default)]
pub enum SwitchContent {
    /// Nothing
    #[default]
    Empty,
    /// A single line of text
    Text(String),
    /// A built-in icon
    Icon(Icon),
    /// Arbitrary drawing with a fixed intrinsic size
    Custom {
        /// Intrinsic size
        size: Size,
        /// Draw callback
        painter: ContentPainter,
    },
}

impl fmt::Debug for SwitchContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Icon(icon) => f.debug_tuple("Icon").field(icon).finish(),
            Self::Custom { size, .. } => f.debug_struct("Custom").field("size", size).finish(),
        }
    }
}

impl PartialEq for SwitchContent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Icon(a), Self::Icon(b)) => a == b,
            (
                Self::Custom { size, painter },
                Self::Custom {
                    size: other_size,
                    painter: other_painter,
                },
            ) => size == other_size && Arc::ptr_eq(painter, other_painter),
            _ => false,
        }
    }
}

impl From<Icon> for SwitchContent {
    fn from(icon: Icon) -> Self {
        Self::Icon(icon)
    }
}

impl From<&str> for SwitchContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SwitchContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl SwitchContent {
    /// Text content.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Custom drawing of a fixed size.
    #[must_use]
    pub fn custom(
        size: Size,
        painter: impl Fn(&mut dyn Canvas, Rect, Color) + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            size,
            painter: Arc::new(painter),
        }
    }

    /// Whether nothing is drawn.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text label, if this is text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Intrinsic size when drawn with `style`.
    #[must_use]
    pub fn intrinsic_size(&self, style: &TextStyle) -> Size {
        match self {
            Self::Empty => Size::ZERO,
            Self::Text(text) => style.measure(text),
            Self::Icon(_) => Size::new(Icon::SIZE, Icon::SIZE),
            Self::Custom { size, .. } => *size,
        }
    }

    /// Draw centered in `area`. Text uses `style` recolored to `tint`.
    pub fn paint(&self, canvas: &mut dyn Canvas, area: Rect, tint: Color, style: &TextStyle) {
        let rect = area.centered(self.intrinsic_size(style));
        match self {
            Self::Empty => {}
            Self::Text(text) => {
                canvas.draw_text(text, rect.origin(), &style.clone().with_color(tint));
            }
            Self::Icon(icon) => icon.paint(canvas, rect, tint),
            Self::Custom { painter, .. } => painter(canvas, rect, tint),
        }
    }
}
