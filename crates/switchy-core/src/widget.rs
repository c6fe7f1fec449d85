//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host, with an
//! extra `animate` step once per frame:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self and children within allocated bounds; widgets
//!    that depend on their rendered size capture it here
//! 3. **Animate**: advance in-flight animations by the frame delta
//! 4. **Paint**: generate draw commands for the current animated state
//!
//! # Examples
//!
//! ```
//! use switchy_core::{TypeId, Transform2D, Point};
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//!
//! let moved = Transform2D::translate(10.0, 20.0).apply(Point::ORIGIN);
//! assert_eq!(moved, Point::new(10.0, 20.0));
//! ```

use crate::constraints::Constraints;
use crate::draw::{Path, Shadow, Transform2D};
use crate::event::Event;
use crate::geometry::{CornerRadius, Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types (used for diffing and type selectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId {
    id: std::any::TypeId,
    name: &'static str,
}

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: std::any::TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Unqualified type name, without module path or generics.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Toggle semantics exposed to accessibility and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleState {
    /// Checked
    On,
    /// Unchecked
    Off,
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl ToggleState {
    /// Whether this is the checked state.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Accessibility role of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// Two-state switch
    Switch,
    /// Text label
    Label,
    /// Grid container
    Grid,
    /// Cell within a grid
    GridCell,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Advance animations by `dt` seconds.
    ///
    /// Returns `true` while any animation is still running.
    fn animate(&mut self, dt: f64) -> bool {
        let mut running = false;
        for child in self.children_mut() {
            running |= child.animate(dt);
        }
        running
    }

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Check if this widget is enabled.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Toggle semantics, `None` when the widget is not togglable.
    fn toggle_state(&self) -> Option<ToggleState> {
        None
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend. Layer methods
/// (`push_*`/`pop_*`) must be balanced by the caller.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rounded_rect(rect, CornerRadius::ZERO, color);
    }

    /// Draw a filled rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Draw a stroked rounded rectangle. The stroke is centered on the inset edge.
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color, width: f32);

    /// Draw the shadow a rounded rectangle would cast.
    fn draw_shadow(&mut self, rect: Rect, radius: CornerRadius, shadow: &Shadow);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw a polyline.
    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f32);

    /// Fill a vector path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a vector path.
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32);

    /// Push a rounded clip region.
    fn push_clip(&mut self, rect: Rect, radius: CornerRadius);

    /// Pop the clip region.
    fn pop_clip(&mut self);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);

    /// Push an opacity layer.
    fn push_opacity(&mut self, alpha: f32);

    /// Pop the opacity layer.
    fn pop_opacity(&mut self);
}

/// Text style for rendering.
///
/// ```
/// use switchy_core::{TextStyle, FontWeight};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 14.0);
/// assert_eq!(style.weight, FontWeight::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

impl TextStyle {
    /// Style with a specific color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Approximate size of a single-line run of `text`.
    ///
    /// Uses a fixed average advance of 0.6em and a 1.2em line height; there is
    /// no font backend in this crate.
    #[must_use]
    pub fn measure(&self, text: &str) -> Size {
        let advance = match self.weight {
            FontWeight::Bold => 0.65,
            FontWeight::Normal | FontWeight::Medium => 0.6,
        };
        Size::new(
            text.chars().count() as f32 * self.size * advance,
            self.size * 1.2,
        )
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl Widget for Leaf {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.smallest()
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            LayoutResult { size: b.size() }
        }
        fn paint(&self, _: &mut dyn Canvas) {}
        fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &[]
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut []
        }
    }

    #[test]
    fn test_type_id_short_name() {
        assert_eq!(TypeId::of::<Leaf>().short_name(), "Leaf");
        assert_eq!(TypeId::of::<Vec<u8>>().short_name(), "Vec");
    }

    #[test]
    fn test_widget_defaults() {
        let mut leaf = Leaf;
        assert!(!leaf.animate(0.016));
        assert!(leaf.is_enabled());
        assert!(leaf.toggle_state().is_none());
        assert_eq!(leaf.accessible_role(), AccessibleRole::Generic);
        assert_eq!(leaf.bounds(), Rect::default());
    }

    #[test]
    fn test_toggle_state_from_bool() {
        assert_eq!(ToggleState::from(true), ToggleState::On);
        assert!(!ToggleState::from(false).is_on());
    }

    #[test]
    fn test_text_measure() {
        let style = TextStyle::default();
        let size = style.measure("Yes");
        assert!((size.width - 25.2).abs() < 0.01);
        assert!((size.height - 16.8).abs() < 0.01);
        assert_eq!(style.measure("").width, 0.0);
    }
}
