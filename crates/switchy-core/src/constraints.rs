//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_width).min(self.max_width),
            size.height.max(self.min_height).min(self.max_height),
        )
    }

    /// Raise the minimums to at least `min`, unless the incoming constraints
    /// already pin a size (a parent forcing an exact size wins).
    ///
    /// This mirrors a "default minimum size" modifier: it only applies where
    /// the parent left the dimension unconstrained from below.
    #[must_use]
    pub fn with_default_min(&self, min: Size) -> Self {
        let min_width = if self.min_width > 0.0 {
            self.min_width
        } else {
            min.width.min(self.max_width)
        };
        let min_height = if self.min_height > 0.0 {
            self.min_height
        } else {
            min.height.min(self.max_height)
        };
        Self::new(min_width, self.max_width, min_height, self.max_height)
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Check if width is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Check if height is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Get the smallest size that satisfies these constraints.
    #[must_use]
    pub const fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_tight() {
        let c = Constraints::tight(Size::new(80.0, 40.0));
        assert!(c.is_tight());
        assert_eq!(c.constrain(Size::new(10.0, 10.0)), Size::new(80.0, 40.0));
    }

    #[test]
    fn test_constraints_loose() {
        let c = Constraints::loose(Size::new(100.0, 50.0));
        assert_eq!(c.constrain(Size::new(150.0, 20.0)), Size::new(100.0, 20.0));
        assert_eq!(c.smallest(), Size::ZERO);
    }

    #[test]
    fn test_constraints_unbounded() {
        let c = Constraints::unbounded();
        assert!(!c.has_bounded_width());
        assert!(!c.has_bounded_height());
        assert_eq!(Constraints::default(), c);
    }

    #[test]
    fn test_with_default_min_applies_when_loose() {
        let c = Constraints::loose(Size::new(400.0, 300.0)).with_default_min(Size::new(80.0, 40.0));
        assert_eq!(c.constrain(Size::ZERO), Size::new(80.0, 40.0));
    }

    #[test]
    fn test_with_default_min_respects_tight_parent() {
        let c = Constraints::tight(Size::new(60.0, 30.0)).with_default_min(Size::new(80.0, 40.0));
        assert_eq!(c.constrain(Size::ZERO), Size::new(60.0, 30.0));
    }

    #[test]
    fn test_with_default_min_respects_small_max() {
        let c = Constraints::loose(Size::new(50.0, 20.0)).with_default_min(Size::new(80.0, 40.0));
        assert_eq!(c.constrain(Size::ZERO), Size::new(50.0, 20.0));
    }
}
