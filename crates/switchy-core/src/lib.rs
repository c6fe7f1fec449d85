//! Core types and traits for the switchy toggle widgets.
//!
//! This crate provides the runtime the widgets are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`]
//! - Painting: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Motion: [`Animated`], [`AnimationSpec`], [`Easing`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{
    Animated, AnimationSpec, DampingRatio, Easing, Interpolate, SpringConfig, Stiffness, Tween,
};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{
    BoxStyle, DrawCommand, LineCap, LineJoin, Path, PathElement, ResolvedCommand, Shadow,
    StrokeStyle, Transform2D,
};
pub use event::{Event, Key, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, ToggleState, TypeId, Widget,
};
