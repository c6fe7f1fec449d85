//! Test harness for switchy widgets.
//!
//! The harness mounts a widget at a viewport, runs the measure and layout
//! passes, and then drives it the way a host would: events are delivered to
//! the widget a selector picks out, and time advances in 60 fps frames.

use crate::selector::{Selector, SelectorError};
use std::any::Any;
use switchy_core::{
    Constraints, Event, Key, MouseButton, Rect, RecordingCanvas, Size, ToggleState, Widget,
};
use tracing::trace;

/// Default viewport, matching a small phone-sized window.
pub const DEFAULT_VIEWPORT: Size = Size::new(400.0, 300.0);

/// Duration of one simulated frame.
pub const FRAME: f64 = 1.0 / 60.0;

/// Upper bound on frames [`Harness::settle`] will run (ten seconds).
pub const SETTLE_LIMIT: usize = 600;

/// Test harness for interacting with a mounted widget.
pub struct Harness<W: Widget> {
    root: W,
    viewport: Size,
    emitted: Vec<Box<dyn Any + Send>>,
}

impl<W: Widget + 'static> Harness<W> {
    /// Mount `root` at the default viewport.
    pub fn new(root: W) -> Self {
        Self::with_viewport(root, DEFAULT_VIEWPORT.width, DEFAULT_VIEWPORT.height)
    }

    /// Mount `root` at a `width` × `height` viewport.
    pub fn with_viewport(root: W, width: f32, height: f32) -> Self {
        let mut harness = Self {
            root,
            viewport: Size::new(width, height),
            emitted: Vec::new(),
        };
        harness.relayout();
        harness
    }

    /// The mounted widget.
    pub const fn root(&self) -> &W {
        &self.root
    }

    /// The mounted widget, mutably. Call [`Harness::relayout`] after changing props.
    pub fn root_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Run measure with loose viewport constraints and lay out at the origin.
    pub fn relayout(&mut self) -> &mut Self {
        let size = self.root.measure(Constraints::loose(self.viewport));
        self.root.layout(Rect::from_size(size));
        self
    }

    // === Event Simulation ===

    /// Click the center of the widget matching `selector`.
    ///
    /// # Panics
    ///
    /// Panics if no widget matches.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        self.try_click(selector)
            .unwrap_or_else(|e| panic!("click failed: {e}"));
        self
    }

    /// Click the center of the widget matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid or nothing matches.
    pub fn try_click(&mut self, selector: &str) -> Result<(), SelectorError> {
        let path = self.resolve(selector)?;
        let center = self.widget_at(&path).bounds().center();
        self.dispatch(
            &path,
            &[
                Event::MouseMove { position: center },
                Event::MouseDown {
                    position: center,
                    button: MouseButton::Left,
                },
                Event::MouseUp {
                    position: center,
                    button: MouseButton::Left,
                },
            ],
        );
        Ok(())
    }

    /// Press the left button over the widget without releasing it.
    ///
    /// # Panics
    ///
    /// Panics if no widget matches.
    pub fn press(&mut self, selector: &str) -> &mut Self {
        let path = self.expect_path(selector);
        let center = self.widget_at(&path).bounds().center();
        self.dispatch(
            &path,
            &[Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            }],
        );
        self
    }

    /// Release the left button over the widget.
    ///
    /// # Panics
    ///
    /// Panics if no widget matches.
    pub fn release(&mut self, selector: &str) -> &mut Self {
        let path = self.expect_path(selector);
        let center = self.widget_at(&path).bounds().center();
        self.dispatch(
            &path,
            &[Event::MouseUp {
                position: center,
                button: MouseButton::Left,
            }],
        );
        self
    }

    /// Focus the widget and press and release `key` on it.
    ///
    /// # Panics
    ///
    /// Panics if no widget matches.
    pub fn press_key(&mut self, selector: &str, key: Key) -> &mut Self {
        let path = self.expect_path(selector);
        self.dispatch(
            &path,
            &[Event::FocusIn, Event::KeyDown { key }, Event::KeyUp { key }],
        );
        self
    }

    /// Deliver an arbitrary event to the widget matching `selector`.
    ///
    /// # Panics
    ///
    /// Panics if no widget matches.
    pub fn send(&mut self, selector: &str, event: Event) -> &mut Self {
        let path = self.expect_path(selector);
        self.dispatch(&path, &[event]);
        self
    }

    // === Time ===

    /// Advance simulated time by `ms`, one frame at a time. Returns whether
    /// anything is still animating.
    pub fn advance(&mut self, ms: u64) -> bool {
        let mut remaining = ms as f64 / 1000.0;
        let mut running = false;
        while remaining > 1e-9 {
            let dt = remaining.min(FRAME);
            running = self.root.animate(dt);
            remaining -= dt;
        }
        running
    }

    /// Advance `n` frames. Returns whether anything is still animating.
    pub fn advance_frames(&mut self, n: usize) -> bool {
        let mut running = false;
        for _ in 0..n {
            running = self.root.animate(FRAME);
        }
        running
    }

    /// Tick until every animation has finished. Returns the frames taken,
    /// capped at [`SETTLE_LIMIT`].
    pub fn settle(&mut self) -> usize {
        for frame in 1..=SETTLE_LIMIT {
            if !self.root.animate(FRAME) {
                return frame;
            }
        }
        SETTLE_LIMIT
    }

    /// Paint the tree into a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Messages ===

    /// Messages returned from event handling since the last call, downcast to `T`.
    pub fn take_messages<T: 'static>(&mut self) -> Vec<T> {
        let (matching, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.emitted)
            .into_iter()
            .partition(|msg| msg.is::<T>());
        self.emitted = rest;
        matching
            .into_iter()
            .filter_map(|msg| msg.downcast::<T>().ok().map(|boxed| *boxed))
            .collect()
    }

    // === Queries ===

    /// First widget matching the selector, depth first.
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find(&self.root, &sel)
    }

    /// All widgets matching the selector, depth first.
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all(&self.root, &sel, &mut results);
        results
    }

    /// Check if a widget exists.
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Laid-out bounds of the matching widget.
    pub fn bounds_of(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(|widget| widget.bounds())
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget was laid out with a non-empty area inside the viewport.
    ///
    /// # Panics
    ///
    /// Panics if the widget is missing, empty or outside the viewport.
    pub fn assert_is_displayed(&self, selector: &str) -> &Self {
        let bounds = self.expect_widget(selector).bounds();
        assert!(
            bounds.width > 0.0 && bounds.height > 0.0,
            "Expected '{selector}' to be displayed but its bounds are {bounds:?}"
        );
        let viewport = Rect::from_size(self.viewport);
        assert!(
            bounds.x < viewport.right()
                && bounds.y < viewport.bottom()
                && bounds.right() > viewport.x
                && bounds.bottom() > viewport.y,
            "Expected '{selector}' to be inside the viewport but its bounds are {bounds:?}"
        );
        self
    }

    /// Assert that a widget reports the `On` toggle state.
    ///
    /// # Panics
    ///
    /// Panics unless the widget is toggleable and on.
    pub fn assert_is_on(&self, selector: &str) -> &Self {
        let state = self.expect_widget(selector).toggle_state();
        assert_eq!(
            state,
            Some(ToggleState::On),
            "Expected '{selector}' to be on"
        );
        self
    }

    /// Assert that a widget reports the `Off` toggle state.
    ///
    /// # Panics
    ///
    /// Panics unless the widget is toggleable and off.
    pub fn assert_is_off(&self, selector: &str) -> &Self {
        let state = self.expect_widget(selector).toggle_state();
        assert_eq!(
            state,
            Some(ToggleState::Off),
            "Expected '{selector}' to be off"
        );
        self
    }

    /// Assert that a widget is enabled.
    ///
    /// # Panics
    ///
    /// Panics if the widget is disabled.
    pub fn assert_is_enabled(&self, selector: &str) -> &Self {
        assert!(
            self.expect_widget(selector).is_enabled(),
            "Expected '{selector}' to be enabled"
        );
        self
    }

    /// Assert that a widget is disabled.
    ///
    /// # Panics
    ///
    /// Panics if the widget is enabled.
    pub fn assert_is_not_enabled(&self, selector: &str) -> &Self {
        assert!(
            !self.expect_widget(selector).is_enabled(),
            "Expected '{selector}' to be disabled"
        );
        self
    }

    /// Assert that a widget exposes no toggle semantics.
    ///
    /// # Panics
    ///
    /// Panics if the widget has a toggle state.
    pub fn assert_not_toggleable(&self, selector: &str) -> &Self {
        let state = self.expect_widget(selector).toggle_state();
        assert!(
            state.is_none(),
            "Expected '{selector}' to have no toggle semantics but it is {state:?}"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn resolve(&self, selector: &str) -> Result<Vec<usize>, SelectorError> {
        let sel = Selector::parse(selector)?;
        find_path(&self.root, &sel).ok_or_else(|| SelectorError::NotFound(selector.to_string()))
    }

    fn expect_path(&self, selector: &str) -> Vec<usize> {
        self.resolve(selector)
            .unwrap_or_else(|e| panic!("Expected widget matching '{selector}': {e}"))
    }

    fn expect_widget(&self, selector: &str) -> &dyn Widget {
        let path = self.expect_path(selector);
        self.widget_at(&path)
    }

    fn widget_at(&self, path: &[usize]) -> &dyn Widget {
        let mut widget: &dyn Widget = &self.root;
        for &index in path {
            widget = widget.children()[index].as_ref();
        }
        widget
    }

    fn dispatch(&mut self, path: &[usize], events: &[Event]) {
        let mut widget: &mut dyn Widget = &mut self.root;
        for &index in path {
            widget = widget.children_mut()[index].as_mut();
        }
        for event in events {
            trace!(?event, depth = path.len(), "harness dispatch");
            if let Some(msg) = widget.event(event) {
                self.emitted.push(msg);
            }
        }
    }
}

impl<W: Widget> std::fmt::Debug for Harness<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("root", &Widget::type_id(&self.root).short_name())
            .field("viewport", &self.viewport)
            .field("pending_messages", &self.emitted.len())
            .finish()
    }
}

fn find<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find(child.as_ref(), selector))
}

fn find_all<'a>(widget: &'a dyn Widget, selector: &Selector, results: &mut Vec<&'a dyn Widget>) {
    if selector.matches(widget) {
        results.push(widget);
    }
    for child in widget.children() {
        find_all(child.as_ref(), selector, results);
    }
}

fn find_path(widget: &dyn Widget, selector: &Selector) -> Option<Vec<usize>> {
    if selector.matches(widget) {
        return Some(Vec::new());
    }
    widget.children().iter().enumerate().find_map(|(i, child)| {
        find_path(child.as_ref(), selector).map(|mut path| {
            path.insert(0, i);
            path
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchy_core::{Canvas, Color, LayoutResult, Point, TypeId};

    // Mock widget that flips on click and counts animation frames
    struct MockSwitch {
        test_id: Option<String>,
        on: bool,
        frames_left: usize,
        bounds: Rect,
        children: Vec<Box<dyn Widget>>,
    }

    impl MockSwitch {
        fn new(id: &str) -> Self {
            Self {
                test_id: Some(id.to_string()),
                on: false,
                frames_left: 0,
                bounds: Rect::default(),
                children: Vec::new(),
            }
        }

        fn with_child(mut self, child: Self) -> Self {
            self.children.push(Box::new(child));
            self
        }
    }

    impl Widget for MockSwitch {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(100.0, 50.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.bounds = b;
            let mut y = b.y;
            for child in &mut self.children {
                child.layout(Rect::new(b.x, y, 80.0, 40.0));
                y += 40.0;
            }
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(self.bounds, Color::WHITE);
        }
        fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
            match event {
                Event::MouseUp { position, .. } if self.bounds.contains_point(position) => {
                    self.on = !self.on;
                    self.frames_left = 3;
                    Some(Box::new(self.on))
                }
                _ => None,
            }
        }
        fn children(&self) -> &[Box<dyn Widget>] {
            &self.children
        }
        fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
            &mut self.children
        }
        fn animate(&mut self, _dt: f64) -> bool {
            self.frames_left = self.frames_left.saturating_sub(1);
            self.frames_left > 0
        }
        fn toggle_state(&self) -> Option<ToggleState> {
            Some(self.on.into())
        }
        fn test_id(&self) -> Option<&str> {
            self.test_id.as_deref()
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    // ===== Mount Tests =====

    #[test]
    fn test_harness_mounts_at_measured_size() {
        let harness = Harness::new(MockSwitch::new("root"));
        assert_eq!(harness.bounds_of("#root"), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
        harness.assert_is_displayed("#root");
    }

    #[test]
    fn test_harness_viewport_limits_size() {
        let harness = Harness::with_viewport(MockSwitch::new("root"), 60.0, 30.0);
        assert_eq!(harness.bounds_of("#root"), Some(Rect::new(0.0, 0.0, 60.0, 30.0)));
    }

    // ===== Interaction Tests =====

    #[test]
    fn test_harness_click_reaches_nested_widget() {
        let root = MockSwitch::new("root").with_child(MockSwitch::new("a")).with_child(MockSwitch::new("b"));
        let mut harness = Harness::new(root);
        harness.click("#b");
        harness.assert_is_on("#b").assert_is_off("#a").assert_is_off("#root");
        assert_eq!(harness.take_messages::<bool>(), vec![true]);
        assert!(harness.take_messages::<bool>().is_empty());
    }

    #[test]
    fn test_harness_try_click_missing() {
        let mut harness = Harness::new(MockSwitch::new("root"));
        assert_eq!(
            harness.try_click("#nope"),
            Err(SelectorError::NotFound("#nope".to_string()))
        );
        assert_eq!(harness.try_click(""), Err(SelectorError::Empty));
    }

    #[test]
    fn test_harness_press_then_release() {
        let mut harness = Harness::new(MockSwitch::new("root"));
        harness.press("#root");
        harness.assert_is_off("#root");
        harness.release("#root");
        harness.assert_is_on("#root");
    }

    #[test]
    fn test_harness_send_raw_event() {
        let mut harness = Harness::new(MockSwitch::new("root"));
        harness.send(
            "#root",
            Event::MouseUp {
                position: Point::new(500.0, 500.0),
                button: MouseButton::Left,
            },
        );
        harness.assert_is_off("#root");
        harness.send(
            "#root",
            Event::MouseUp {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
            },
        );
        harness.assert_is_on("#root");
    }

    // ===== Time Tests =====

    #[test]
    fn test_harness_settle_counts_frames() {
        let mut harness = Harness::new(MockSwitch::new("root"));
        harness.click("#root");
        assert_eq!(harness.settle(), 3);
        assert_eq!(harness.settle(), 1);
    }

    #[test]
    fn test_harness_advance_in_frames() {
        let mut harness = Harness::new(MockSwitch::new("root"));
        harness.click("#root");
        assert!(harness.advance(20));
        assert!(!harness.advance(100));
        assert!(!harness.advance_frames(2));
    }

    // ===== Query Tests =====

    #[test]
    fn test_harness_queries() {
        let root = MockSwitch::new("root").with_child(MockSwitch::new("item")).with_child(MockSwitch::new("item"));
        let harness = Harness::new(root);
        harness.assert_count("#item", 2).assert_count("MockSwitch", 3).assert_exists("#root");
        assert!(!harness.exists("#missing"));
        assert_eq!(harness.bounds_of("#item"), Some(Rect::new(0.0, 0.0, 80.0, 40.0)));
        assert!(harness.query_all("[bad").is_empty());
    }

    #[test]
    fn test_harness_paint() {
        let harness = Harness::new(MockSwitch::new("root"));
        assert_eq!(harness.paint().command_count(), 1);
    }

    #[test]
    #[should_panic(expected = "to be disabled")]
    fn test_harness_assert_not_enabled_fails() {
        Harness::new(MockSwitch::new("root")).assert_is_not_enabled("#root");
    }

    #[test]
    #[should_panic(expected = "no toggle semantics")]
    fn test_harness_assert_not_toggleable_fails() {
        Harness::new(MockSwitch::new("root")).assert_not_toggleable("#root");
    }
}
