//! Deprecated `switch_value` / `on_value_changed` API.
//!
//! The thin constructors forward to the controlled widgets. The two
//! uncontrolled switches keep their own shadow copy of the value, flip it on
//! every click and report it; the value passed at construction is only read
//! once.
#![allow(deprecated)]

use crate::block::{paint_halves, radius_for, SlidingBlock, BORDER_WIDTH, CORNER_RADIUS};
use crate::content::{Icon, SwitchContent};
use crate::palette::{drive, on_primary_container, primary_container};
use crate::switch::SwitchBase;
use crate::{
    ColoredSwitch, CustomISwitch, CustomSwitch, ISwitch, IconISwitch, SquareSwitch, TextSwitch,
};
use std::any::Any;
use switchy_core::{
    AccessibleRole, Animated, AnimationSpec, Canvas, Color, Constraints, Easing, Event,
    LayoutResult, Rect, Size, TextStyle, ToggleState, TypeId, Widget,
};
use tracing::debug;

/// Tween used by the uncontrolled switches for both offset and color.
pub const LEGACY_DURATION_MS: u32 = 333;

/// Pill switch from a value and a change callback.
#[deprecated(since = "0.3.0", note = "use `ISwitch::new(checked).on_checked_change(..)`")]
#[must_use]
pub fn iswitch(
    switch_value: bool,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> ISwitch {
    ISwitch::new(switch_value).on_checked_change(on_value_changed)
}

/// Icon pill switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `IconISwitch::new(checked).on_checked_change(..)`"
)]
#[must_use]
pub fn icon_iswitch(
    switch_value: bool,
    positive_icon: Icon,
    negative_icon: Icon,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> IconISwitch {
    IconISwitch::new(switch_value)
        .positive_icon(positive_icon)
        .negative_icon(negative_icon)
        .on_checked_change(on_value_changed)
}

/// Custom-content pill switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `CustomISwitch::new(checked, ..).on_checked_change(..)`"
)]
#[must_use]
pub fn custom_iswitch(
    switch_value: bool,
    positive: impl Into<SwitchContent>,
    negative: impl Into<SwitchContent>,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> CustomISwitch {
    CustomISwitch::new(switch_value, positive, negative).on_checked_change(on_value_changed)
}

/// Two-tone switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `ColoredSwitch::new(checked).on_checked_change(..)`"
)]
#[must_use]
pub fn colored_switch(
    switch_value: bool,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> ColoredSwitch {
    ColoredSwitch::new(switch_value).on_checked_change(on_value_changed)
}

/// Square switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `SquareSwitch::new(checked).on_checked_change(..)`"
)]
#[must_use]
pub fn square_switch(
    switch_value: bool,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> SquareSwitch {
    SquareSwitch::new(switch_value).on_checked_change(on_value_changed)
}

/// Labeled switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `TextSwitch::new(checked).on_checked_change(..)`"
)]
#[must_use]
pub fn text_switch(
    switch_value: bool,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> TextSwitch {
    TextSwitch::new(switch_value).on_checked_change(on_value_changed)
}

/// Custom-content block switch from a value and a change callback.
#[deprecated(
    since = "0.3.0",
    note = "use `CustomSwitch::new(checked, ..).on_checked_change(..)`"
)]
#[must_use]
pub fn custom_switch(
    switch_value: bool,
    positive: impl Into<SwitchContent>,
    negative: impl Into<SwitchContent>,
    on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
) -> CustomSwitch {
    CustomSwitch::new(switch_value, positive, negative).on_checked_change(on_value_changed)
}

/// Shared core of the uncontrolled block switches.
///
/// Positive content is drawn on the left and the block rests over it while
/// on, so the block slides right when switched off.
#[derive(Debug)]
struct LegacyBlock {
    base: SwitchBase,
    block: SlidingBlock,
    corner_radius: f32,
    border_color: Color,
    positive_color: Color,
    negative_color: Color,
    color: Animated<Color>,
    content_color: Color,
    text_style: TextStyle,
    positive: SwitchContent,
    negative: SwitchContent,
}

impl LegacyBlock {
    fn new(
        switch_value: bool,
        positive: SwitchContent,
        negative: SwitchContent,
        content_color: Color,
        on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
    ) -> Self {
        let mut base = SwitchBase::new(switch_value);
        base.toggle.set_callback(Some(Box::new(on_value_changed)));
        Self {
            base,
            block: SlidingBlock::new(AnimationSpec::tween(
                LEGACY_DURATION_MS,
                Easing::LinearOutSlowIn,
            )),
            corner_radius: CORNER_RADIUS,
            border_color: primary_container(),
            positive_color: primary_container(),
            negative_color: primary_container(),
            color: Animated::new(
                primary_container(),
                AnimationSpec::tween(LEGACY_DURATION_MS, Easing::FastOutSlowIn),
            ),
            content_color,
            text_style: TextStyle::default(),
            positive,
            negative,
        }
    }

    fn sync(&mut self) {
        let on = self.base.checked;
        self.block.update(!on);
        let color = if on {
            self.positive_color
        } else {
            self.negative_color
        };
        drive(&mut self.color, color, self.base.mounted);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let toggled = self
            .base
            .toggle
            .handle(event, self.base.bounds, self.base.checked, true)?;
        self.base.checked = toggled.checked;
        debug!(checked = toggled.checked, "legacy switch flipped");
        self.sync();
        Some(Box::new(toggled))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.base.bounds = bounds;
        self.block.record(bounds);
        self.sync();
        self.base.mounted = true;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn animate(&mut self, dt: f64) -> bool {
        let block = self.block.tick(dt);
        let color = self.color.tick(dt);
        block || color
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let bounds = self.base.bounds;
        let radius = radius_for(self.corner_radius, &bounds);
        canvas.push_clip(bounds, radius);
        let block = self.block.block_rect(bounds);
        canvas.fill_rounded_rect(block, radius_for(self.corner_radius, &block), self.color.value());
        paint_halves(
            canvas,
            bounds,
            &self.positive,
            &self.negative,
            self.content_color,
            &self.text_style,
        );
        canvas.stroke_rounded_rect(bounds, radius, self.border_color, BORDER_WIDTH);
        canvas.pop_clip();
    }
}

/// Builders shared by the two uncontrolled switches.
macro_rules! legacy_builders {
    () => {
        /// Set the track height.
        #[must_use]
        pub fn button_height(mut self, height: f32) -> Self {
            self.inner.block.height = height.max(0.0);
            self
        }

        /// Set the corner radius.
        #[must_use]
        pub fn corner_radius(mut self, radius: f32) -> Self {
            self.inner.corner_radius = radius.max(0.0);
            self
        }

        /// Set the border color.
        #[must_use]
        pub const fn border_color(mut self, color: Color) -> Self {
            self.inner.border_color = color;
            self
        }

        /// Set the test ID.
        #[must_use]
        pub fn test_id(mut self, id: impl Into<String>) -> Self {
            self.inner.base.test_id = Some(id.into());
            self
        }

        /// Set the accessible name.
        #[must_use]
        pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
            self.inner.base.accessible_name = Some(name.into());
            self
        }

        /// The switch's own value.
        #[must_use]
        pub const fn is_on(&self) -> bool {
            self.inner.base.checked
        }

        /// Current block offset.
        #[must_use]
        pub fn block_offset(&self) -> f32 {
            self.inner.block.offset()
        }
    };
}

/// `Widget` forwarding to the inner [`LegacyBlock`].
macro_rules! legacy_widget {
    ($ty:ty) => {
        impl Widget for $ty {
            fn type_id(&self) -> TypeId {
                TypeId::of::<Self>()
            }

            fn measure(&self, constraints: Constraints) -> Size {
                let height = self.inner.block.height;
                constraints
                    .with_default_min(Size::new(height * 2.0, height))
                    .constrain(Size::new(height * 2.0, height))
            }

            fn layout(&mut self, bounds: Rect) -> LayoutResult {
                self.inner.layout(bounds)
            }

            fn paint(&self, canvas: &mut dyn Canvas) {
                self.inner.paint(canvas);
            }

            fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
                self.inner.event(event)
            }

            fn animate(&mut self, dt: f64) -> bool {
                self.inner.animate(dt)
            }

            fn children(&self) -> &[Box<dyn Widget>] {
                &[]
            }

            fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
                &mut []
            }

            fn is_interactive(&self) -> bool {
                true
            }

            fn is_focusable(&self) -> bool {
                true
            }

            fn toggle_state(&self) -> Option<ToggleState> {
                Some(ToggleState::from(self.inner.base.checked))
            }

            fn accessible_name(&self) -> Option<&str> {
                self.inner.base.accessible_name.as_deref()
            }

            fn accessible_role(&self) -> AccessibleRole {
                AccessibleRole::Switch
            }

            fn test_id(&self) -> Option<&str> {
                self.inner.base.test_id.as_deref()
            }

            fn bounds(&self) -> Rect {
                self.inner.base.bounds
            }
        }
    };
}

/// Uncontrolled labeled switch.
#[deprecated(
    since = "0.3.0",
    note = "use `TextSwitch`, which takes `checked` from its owner"
)]
#[derive(Debug)]
pub struct LegacyTextSwitch {
    inner: LegacyBlock,
}

impl LegacyTextSwitch {
    /// Start at `switch_value`; every click flips and reports the value.
    #[must_use]
    pub fn new(
        switch_value: bool,
        on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: LegacyBlock::new(
                switch_value,
                SwitchContent::text("Yes"),
                SwitchContent::text("No"),
                on_primary_container(),
                on_value_changed,
            ),
        }
    }

    /// Set the label for the on side.
    #[must_use]
    pub fn positive_text(mut self, text: impl Into<String>) -> Self {
        self.inner.positive = SwitchContent::text(text);
        self
    }

    /// Set the label for the off side.
    #[must_use]
    pub fn negative_text(mut self, text: impl Into<String>) -> Self {
        self.inner.negative = SwitchContent::text(text);
        self
    }

    /// Set the block color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.inner.positive_color = color;
        self.inner.negative_color = color;
        self.inner.color.snap_to(color);
        self
    }

    /// Set the label color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.inner.content_color = color;
        self
    }

    legacy_builders!();
}

legacy_widget!(LegacyTextSwitch);

/// Uncontrolled switch with caller-supplied content.
#[deprecated(
    since = "0.3.0",
    note = "use `CustomSwitch`, which takes `checked` from its owner"
)]
#[derive(Debug)]
pub struct LegacyCustomSwitch {
    inner: LegacyBlock,
}

impl LegacyCustomSwitch {
    /// Start at `switch_value`; every click flips and reports the value.
    #[must_use]
    pub fn new(
        switch_value: bool,
        positive: impl Into<SwitchContent>,
        negative: impl Into<SwitchContent>,
        on_value_changed: impl FnMut(bool) + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: LegacyBlock::new(
                switch_value,
                positive.into(),
                negative.into(),
                crate::palette::on_surface(),
                on_value_changed,
            ),
        }
    }

    /// Set the block color while on.
    #[must_use]
    pub const fn positive_color(mut self, color: Color) -> Self {
        self.inner.positive_color = color;
        self
    }

    /// Set the block color while off.
    #[must_use]
    pub const fn negative_color(mut self, color: Color) -> Self {
        self.inner.negative_color = color;
        self
    }

    /// Current (animated) block color.
    #[must_use]
    pub fn block_color(&self) -> Color {
        self.inner.color.value()
    }

    legacy_builders!();
}

legacy_widget!(LegacyCustomSwitch);
