#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
//! Testing harness for switchy widgets.
//!
//! ```
//! use switchy_core::{Canvas, Constraints, Event, LayoutResult, Rect, Size, TypeId, Widget};
//! use switchy_test::Harness;
//! # use std::any::Any;
//! # struct Dot;
//! # impl Widget for Dot {
//! #     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//! #     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(10.0, 10.0)) }
//! #     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//! #     fn paint(&self, _: &mut dyn Canvas) {}
//! #     fn event(&mut self, _: &Event) -> Option<Box<dyn Any + Send>> { None }
//! #     fn children(&self) -> &[Box<dyn Widget>] { &[] }
//! #     fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut [] }
//! #     fn test_id(&self) -> Option<&str> { Some("dot") }
//! # }
//!
//! let harness = Harness::new(Dot);
//! harness.assert_exists("#dot").assert_not_toggleable("#dot");
//! ```

mod harness;
mod selector;

pub use harness::{Harness, DEFAULT_VIEWPORT, FRAME, SETTLE_LIMIT};
pub use selector::{Selector, SelectorError, SelectorParser};
