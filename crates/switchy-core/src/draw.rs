//! Draw commands and vector paths.
//!
//! All painting reduces to these primitives. Layer effects (transform, clip,
//! opacity) nest their children so a recorded frame keeps the shape of the
//! widget tree that produced it.

use crate::widget::TextStyle;
use crate::{Color, CornerRadius, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for path rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl StrokeStyle {
    /// Solid stroke with butt caps and miter joins.
    #[must_use]
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Solid stroke with round caps and joins, as used for icon glyphs.
    #[must_use]
    pub fn rounded(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
    /// Square cap extending beyond endpoint
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled corner
    Bevel,
}

/// Box style for rectangles and circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
    /// Shadow (None = no shadow)
    pub shadow: Option<Shadow>,
}

impl BoxStyle {
    /// Create a box with only fill color.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            shadow: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
            shadow: None,
        }
    }

    /// Create a box that only casts a shadow.
    #[must_use]
    pub const fn shadow(shadow: Shadow) -> Self {
        Self {
            fill: None,
            stroke: None,
            shadow: Some(shadow),
        }
    }
}

/// Shadow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// Approximate a material elevation as a soft drop shadow.
    #[must_use]
    pub fn elevation(dp: f32) -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.25),
            offset_x: 0.0,
            offset_y: dp * 0.5,
            blur: dp,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.3),
            offset_x: 0.0,
            offset_y: 2.0,
            blur: 4.0,
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transformation.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Create a rotation transform (radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Scale uniformly around `pivot`.
    #[must_use]
    pub fn scale_about(factor: f32, pivot: Point) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::scale(factor, factor))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    /// Rotate by `degrees` around `pivot`.
    #[must_use]
    pub fn rotate_about(degrees: f32, pivot: Point) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::rotate(degrees.to_radians()))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0].mul_add(b[0], a[2] * b[1]),
                a[1].mul_add(b[0], a[3] * b[1]),
                a[0].mul_add(b[2], a[2] * b[3]),
                a[1].mul_add(b[2], a[3] * b[3]),
                a[0].mul_add(b[4], a[2].mul_add(b[5], a[4])),
                a[1].mul_add(b[4], a[3].mul_add(b[5], a[5])),
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0].mul_add(point.x, m[2].mul_add(point.y, m[4])),
            m[1].mul_add(point.x, m[3].mul_add(point.y, m[5])),
        )
    }
}

/// A single segment instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    /// Start a new sub-path
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Cubic Bézier to `to` with two control points
    CubicTo {
        /// First control point
        c1: Point,
        /// Second control point
        c2: Point,
        /// End point
        to: Point,
    },
    /// Close the current sub-path
    Close,
}

/// Vector path made of lines and cubic Bézier segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

/// Line segments used per cubic when flattening.
const CUBIC_SEGMENTS: usize = 16;

impl Path {
    /// Create an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Begin a new sub-path at `(x, y)`.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.elements.push(PathElement::MoveTo(Point::new(x, y)));
        self
    }

    /// Straight line to `(x, y)`.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.elements.push(PathElement::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier through control points `(x1, y1)`, `(x2, y2)` to `(x3, y3)`.
    #[allow(clippy::too_many_arguments)]
    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        self.elements.push(PathElement::CubicTo {
            c1: Point::new(x1, y1),
            c2: Point::new(x2, y2),
            to: Point::new(x3, y3),
        });
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.elements.push(PathElement::Close);
        self
    }

    /// Path instructions in order.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Check if the path has no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Copy of this path with every point mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|el| match *el {
                PathElement::MoveTo(p) => PathElement::MoveTo(transform.apply(p)),
                PathElement::LineTo(p) => PathElement::LineTo(transform.apply(p)),
                PathElement::CubicTo { c1, c2, to } => PathElement::CubicTo {
                    c1: transform.apply(c1),
                    c2: transform.apply(c2),
                    to: transform.apply(to),
                },
                PathElement::Close => PathElement::Close,
            })
            .collect();
        Self { elements }
    }

    /// Approximate the path with polylines, one per sub-path.
    #[must_use]
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut polylines = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut start = Point::ORIGIN;

        for el in &self.elements {
            match *el {
                PathElement::MoveTo(p) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                    start = p;
                }
                PathElement::LineTo(p) => current.push(p),
                PathElement::CubicTo { c1, c2, to } => {
                    let from = current.last().copied().unwrap_or(start);
                    for i in 1..=CUBIC_SEGMENTS {
                        let t = i as f32 / CUBIC_SEGMENTS as f32;
                        current.push(cubic_point(from, c1, c2, to, t));
                    }
                }
                PathElement::Close => {
                    if current.last() != Some(&start) {
                        current.push(start);
                    }
                }
            }
        }
        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }

    /// Bounding box of the flattened outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let mut points = self.flatten().into_iter().flatten();
        let Some(first) = points.next() else {
            return Rect::default();
        };
        let (mut min, mut max) = (first, first);
        for p in points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Even-odd containment test against the flattened outline.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        for poly in self.flatten() {
            for pair in poly.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if (a.y > point.y) != (b.y > point.y) {
                    let x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                    if point.x < x {
                        inside = !inside;
                    }
                }
            }
        }
        inside
    }
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a polyline
    Path {
        /// Points defining the polyline
        points: Vec<Point>,
        /// Whether the polyline is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Fill and/or stroke a vector path
    Shape {
        /// Outline
        path: Path,
        /// Fill color
        fill: Option<Color>,
        /// Stroke style
        stroke: Option<StrokeStyle>,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Position of the top-left corner of the text box
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Clip children to a (rounded) rectangle
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Clip corner radius
        radius: CornerRadius,
        /// Child commands
        children: Vec<DrawCommand>,
    },

    /// Apply opacity to children
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child commands
        children: Vec<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style,
        }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha,
            children: vec![self],
        }
    }

    /// Wrap with clip bounds.
    #[must_use]
    pub fn with_clip(self, bounds: Rect) -> Self {
        Self::Clip {
            bounds,
            radius: CornerRadius::ZERO,
            children: vec![self],
        }
    }

    /// Whether this command is a layer wrapping other commands.
    #[must_use]
    pub const fn is_layer(&self) -> bool {
        matches!(
            self,
            Self::Group { .. } | Self::Clip { .. } | Self::Opacity { .. }
        )
    }

    /// Flatten layers into leaf commands with their effective alpha and transform.
    #[must_use]
    pub fn resolve(&self) -> Vec<ResolvedCommand<'_>> {
        let mut out = Vec::new();
        self.resolve_into(1.0, Transform2D::IDENTITY, &mut out);
        out
    }

    fn resolve_into<'a>(
        &'a self,
        alpha: f32,
        transform: Transform2D,
        out: &mut Vec<ResolvedCommand<'a>>,
    ) {
        match self {
            Self::Group {
                children,
                transform: t,
            } => {
                let combined = t.then(&transform);
                for child in children {
                    child.resolve_into(alpha, combined, out);
                }
            }
            Self::Clip { children, .. } => {
                for child in children {
                    child.resolve_into(alpha, transform, out);
                }
            }
            Self::Opacity { alpha: a, children } => {
                for child in children {
                    child.resolve_into(alpha * a, transform, out);
                }
            }
            leaf => out.push(ResolvedCommand {
                command: leaf,
                alpha,
                transform,
            }),
        }
    }
}

/// A leaf draw command with the effects of its enclosing layers applied.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedCommand<'a> {
    /// The leaf command
    pub command: &'a DrawCommand,
    /// Product of all enclosing opacity layers
    pub alpha: f32,
    /// Composition of all enclosing transforms
    pub transform: Transform2D,
}

impl ResolvedCommand<'_> {
    /// Fill color as it would reach the screen (layer alpha applied).
    #[must_use]
    pub fn effective_fill(&self) -> Option<Color> {
        let fill = match self.command {
            DrawCommand::Rect { style, .. } | DrawCommand::Circle { style, .. } => style.fill,
            DrawCommand::Shape { fill, .. } => *fill,
            DrawCommand::Text { style, .. } => Some(style.color),
            _ => None,
        };
        fill.map(|c| c.multiply_alpha(self.alpha))
    }

    /// Stroke color as it would reach the screen (layer alpha applied).
    #[must_use]
    pub fn effective_stroke(&self) -> Option<Color> {
        let stroke = match self.command {
            DrawCommand::Rect { style, .. } | DrawCommand::Circle { style, .. } => {
                style.stroke.as_ref()
            }
            DrawCommand::Shape { stroke, .. } => stroke.as_ref(),
            DrawCommand::Path { style, .. } => Some(style),
            _ => None,
        };
        stroke.map(|s| s.color.multiply_alpha(self.alpha))
    }

    /// Device-space bounds of rectangles and circles.
    #[must_use]
    pub fn device_bounds(&self) -> Option<Rect> {
        let local = match self.command {
            DrawCommand::Rect { bounds, .. } => *bounds,
            DrawCommand::Circle { center, radius, .. } => {
                Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
            }
            DrawCommand::Shape { path, .. } => path.bounds(),
            _ => return None,
        };
        let a = self.transform.apply(local.origin());
        let b = self
            .transform
            .apply(Point::new(local.right(), local.bottom()));
        Some(Rect::new(
            a.x.min(b.x),
            a.y.min(b.y),
            (b.x - a.x).abs(),
            (b.y - a.y).abs(),
        ))
    }
}
