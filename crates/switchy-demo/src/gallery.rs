//! The gallery: an adaptive grid of captioned switches, each bound to its
//! own [`SwitchState`].

use crate::config::{ContentConfig, GalleryConfig, GridMetrics, ItemConfig, Variant};
use crate::error::ConfigError;
use std::any::Any;
use switchy::widgets::native::NativeSwitch;
use switchy::{
    AccessibleRole, Bound, Canvas, ColoredSwitch, Constraints, CustomISwitch, CustomSwitch, Event,
    HeartSwitch, ISwitch, Icon, IconISwitch, LayoutResult, MorphingSwitch, Point, Rect, Size,
    SquareSwitch, Switch, SwitchContent, SwitchState, TextStyle, TextSwitch, TypeId, Widget,
};
use tracing::debug;

/// Test id of the gallery root.
pub const GALLERY_ID: &str = "gallery";

/// Bookkeeping for one gallery item.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    /// Test id of the switch
    pub id: String,
    /// Caption above the switch
    pub caption: String,
    /// Which switch variant
    pub variant: Variant,
    /// The item's state, shared with its switch
    pub state: SwitchState,
}

/// A caption stacked over a switch, centered in its cell.
pub struct GalleryCell {
    caption: String,
    style: TextStyle,
    padding: f32,
    children: Vec<Box<dyn Widget>>,
    bounds: Rect,
}

impl GalleryCell {
    /// Cell holding `switch` under `caption`.
    pub fn new(caption: impl Into<String>, switch: Box<dyn Widget>, padding: f32) -> Self {
        Self {
            caption: caption.into(),
            style: TextStyle::default(),
            padding,
            children: vec![switch],
            bounds: Rect::default(),
        }
    }

    fn caption_size(&self) -> Size {
        self.style.measure(&self.caption)
    }
}

impl Widget for GalleryCell {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let inset = self.padding * 2.0;
        let caption = self.caption_size();
        let inner = Constraints::loose(Size::new(
            (constraints.max_width - inset).max(0.0),
            f32::INFINITY,
        ));
        let switch = self
            .children
            .iter()
            .map(|child| child.measure(inner))
            .fold(Size::ZERO, |acc, size| acc.max(&size));
        constraints.constrain(Size::new(
            caption.width.max(switch.width) + inset,
            caption.height + switch.height + inset,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let inner = bounds.inset(self.padding);
        let caption = self.caption_size();
        let below = Rect::new(
            inner.x,
            inner.y + caption.height,
            inner.width,
            (inner.height - caption.height).max(0.0),
        );
        for child in &mut self.children {
            let size = child.measure(Constraints::loose(below.size()));
            let origin = Point::new(below.x + (below.width - size.width) / 2.0, below.y);
            child.layout(Rect::from_origin_size(origin, size));
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let inner = self.bounds.inset(self.padding);
        let caption = self.caption_size();
        canvas.draw_text(
            &self.caption,
            Point::new(inner.x + (inner.width - caption.width) / 2.0, inner.y),
            &self.style,
        );
        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.children
            .iter_mut()
            .find_map(|child| child.event(event))
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.caption)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::GridCell
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Adaptive grid: as many columns as fit at `min_cell_width`, filled row
/// by row. An item whose span does not fit the rest of a row starts the next.
pub struct Gallery {
    metrics: GridMetrics,
    cells: Vec<Box<dyn Widget>>,
    spans: Vec<usize>,
    items: Vec<GalleryItem>,
    bounds: Rect,
    cell_bounds: Vec<Rect>,
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("metrics", &self.metrics)
            .field("items", &self.items)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Gallery {
    /// Empty gallery.
    pub const fn new(metrics: GridMetrics) -> Self {
        Self {
            metrics,
            cells: Vec::new(),
            spans: Vec::new(),
            items: Vec::new(),
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            cell_bounds: Vec::new(),
        }
    }

    /// Build every item of a validated config.
    pub fn from_config(config: &GalleryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut gallery = Self::new(config.grid);
        for (item, id) in config.items.iter().zip(config.item_ids()) {
            gallery.push(item, id)?;
        }
        debug!(items = gallery.items.len(), "gallery built");
        Ok(gallery)
    }

    /// Append one item in its own cell.
    pub fn push(&mut self, item: &ItemConfig, id: String) -> Result<(), ConfigError> {
        let variant = item.variant()?;
        let state = SwitchState::new(item.checked);
        let caption = item.caption_text().to_string();
        let switch = build_switch(variant, item, &id, &state)?;
        self.cells.push(Box::new(GalleryCell::new(
            caption.clone(),
            switch,
            self.metrics.cell_padding,
        )));
        self.spans.push(item.span.max(1));
        self.items.push(GalleryItem {
            id,
            caption,
            variant,
            state,
        });
        Ok(())
    }

    /// Items in display order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Cell rectangles from the last layout.
    pub fn cell_bounds(&self) -> &[Rect] {
        &self.cell_bounds
    }

    /// Column count at a given total width.
    pub fn columns(&self, width: f32) -> usize {
        let m = &self.metrics;
        let available = (width - m.padding * 2.0).max(0.0);
        let fit = ((available + m.spacing) / (m.min_cell_width + m.spacing)).floor();
        (fit as usize).max(1)
    }

    /// Cell rectangles and total content height at `origin` with `width`.
    fn arrange(&self, origin: Point, width: f32) -> (Vec<Rect>, f32) {
        let m = &self.metrics;
        let columns = self.columns(width);
        let available = (width - m.padding * 2.0).max(0.0);
        let column_width =
            ((available - m.spacing * (columns - 1) as f32) / columns as f32).max(0.0);
        let span_width = |span: usize| column_width * span as f32 + m.spacing * (span - 1) as f32;

        // Row-major placement: (row, column, span) per cell.
        let mut placement = Vec::with_capacity(self.cells.len());
        let (mut row, mut col) = (0usize, 0usize);
        for &span in &self.spans {
            let span = span.min(columns);
            if col + span > columns {
                row += 1;
                col = 0;
            }
            placement.push((row, col, span));
            col += span;
        }

        let row_count = placement.last().map_or(0, |&(row, _, _)| row + 1);
        let mut row_heights = vec![0.0f32; row_count];
        for (cell, &(row, _, span)) in self.cells.iter().zip(&placement) {
            let w = span_width(span);
            let size = cell.measure(Constraints::new(w, w, 0.0, f32::INFINITY));
            row_heights[row] = row_heights[row].max(size.height);
        }

        let mut row_tops = Vec::with_capacity(row_count);
        let mut y = origin.y + m.padding;
        for height in &row_heights {
            row_tops.push(y);
            y += height + m.spacing;
        }
        let content_height = if row_count == 0 {
            m.padding * 2.0
        } else {
            y - m.spacing - origin.y + m.padding
        };

        let rects = placement
            .iter()
            .map(|&(row, col, span)| {
                Rect::new(
                    origin.x + m.padding + (column_width + m.spacing) * col as f32,
                    row_tops[row],
                    span_width(span),
                    row_heights[row],
                )
            })
            .collect();
        (rects, content_height)
    }
}

impl Widget for Gallery {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.metrics.min_cell_width + self.metrics.padding * 2.0
        };
        let (_, height) = self.arrange(Point::ORIGIN, width);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let (rects, _) = self.arrange(Point::new(bounds.x, bounds.y), bounds.width);
        for (cell, rect) in self.cells.iter_mut().zip(&rects) {
            cell.layout(*rect);
        }
        self.cell_bounds = rects;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for cell in &self.cells {
            cell.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.cells.iter_mut().find_map(|cell| cell.event(event))
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.cells
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.cells
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Grid
    }

    fn test_id(&self) -> Option<&str> {
        Some(GALLERY_ID)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

fn bind<W: Switch + 'static>(switch: W, state: &SwitchState) -> Box<dyn Widget> {
    Box::new(Bound::new(switch, state.clone()))
}

fn content(slot: Option<&ContentConfig>, fallback: SwitchContent) -> SwitchContent {
    slot.map_or(fallback, SwitchContent::from)
}

fn build_switch(
    variant: Variant,
    item: &ItemConfig,
    id: &str,
    state: &SwitchState,
) -> Result<Box<dyn Widget>, ConfigError> {
    let checked = item.checked;
    macro_rules! props {
        ($switch:expr) => {
            $switch
                .enabled(item.enabled)
                .test_id(id)
                .accessible_name(item.caption_text())
        };
    }
    let positive = || content(item.positive.as_ref(), Icon::Done.into());

    Ok(match variant {
        Variant::TextSwitch => bind(props!(TextSwitch::new(checked)), state),
        Variant::ColoredSwitch => bind(props!(ColoredSwitch::new(checked)), state),
        Variant::ISwitch => bind(props!(ISwitch::new(checked)), state),
        Variant::IconISwitch => bind(props!(IconISwitch::new(checked)), state),
        Variant::CustomISwitch => bind(
            props!(CustomISwitch::new(
                checked,
                positive(),
                content(item.negative.as_ref(), "OFF".into()),
            )),
            state,
        ),
        Variant::HeartSwitch => bind(props!(HeartSwitch::new(checked)), state),
        Variant::CustomSwitch => bind(
            props!(CustomSwitch::new(
                checked,
                positive(),
                content(item.negative.as_ref(), "False".into()),
            )),
            state,
        ),
        Variant::SquareSwitch => bind(props!(SquareSwitch::new(checked)), state),
        Variant::NativeSwitch => bind(
            props!(NativeSwitch::new(checked).with_platform(item.native_platform()?)),
            state,
        ),
        Variant::MorphingSwitch => bind(props!(MorphingSwitch::new(checked)), state),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchy::ToggleState;
    use switchy_test::Harness;

    fn mounted(config: &GalleryConfig) -> Harness<Gallery> {
        let gallery = Gallery::from_config(config).unwrap();
        Harness::with_viewport(gallery, config.viewport.width, config.viewport.height)
    }

    // ===== Grid Placement =====

    #[test]
    fn test_adaptive_column_count() {
        let gallery = Gallery::new(GridMetrics::default());
        // (width - 32 + 16) / 166
        assert_eq!(gallery.columns(100.0), 1);
        assert_eq!(gallery.columns(348.0), 2);
        assert_eq!(gallery.columns(347.0), 1);
        assert_eq!(gallery.columns(400.0), 2);
        assert_eq!(gallery.columns(700.0), 4);
    }

    #[test]
    fn test_showcase_layout_at_phone_width() {
        let h = mounted(&GalleryConfig::default());
        // Two 176px columns between 16px padding.
        let text = h.bounds_of("[aria-label='TextSwitch']").unwrap();
        assert_eq!(text.x, 16.0);
        assert_eq!(text.y, 16.0);
        assert_eq!(text.width, 368.0);

        let colored = h.bounds_of("[aria-label='ColoredSwitch']").unwrap();
        let iswitch = h.bounds_of("[aria-label='ISwitch']").unwrap();
        assert_eq!(colored.x, 16.0);
        assert_eq!(colored.width, 176.0);
        assert_eq!(iswitch.x, 208.0);
        assert_eq!(colored.y, iswitch.y);
        assert_eq!(colored.y, text.bottom() + 16.0);
        assert_eq!(h.root().cell_bounds().len(), 11);
        assert_eq!(h.root().cell_bounds()[2], iswitch);
    }

    #[test]
    fn test_span_wraps_to_next_row() {
        let config = GalleryConfig::from_yaml(
            "items:\n  - { type: ISwitch, caption: a }\n  - { type: TextSwitch, caption: b, span: 2 }\n",
        )
        .unwrap();
        let h = mounted(&config);
        let a = h.bounds_of("[aria-label='a']").unwrap();
        let b = h.bounds_of("[aria-label='b']").unwrap();
        assert_eq!(b.x, 16.0);
        assert!(b.y > a.bottom());
        assert_eq!(b.width, 368.0);
    }

    #[test]
    fn test_span_clamped_to_single_column() {
        let config = GalleryConfig::from_yaml(
            "viewport: { width: 200, height: 400 }\nitems:\n  - { type: TextSwitch, span: 2 }\n",
        )
        .unwrap();
        let h = mounted(&config);
        let cell = h.bounds_of("[role=gridcell]").unwrap();
        assert_eq!(cell.width, 168.0);
    }

    #[test]
    fn test_switch_centered_below_caption() {
        let h = mounted(&GalleryConfig::default());
        let cell = h.query_all("[role=gridcell]")[2].bounds();
        let switch = h.bounds_of("#iswitch").unwrap();
        let caption_height = TextStyle::default().measure("ISwitch").height;
        assert!((switch.center().x - cell.center().x).abs() < 1e-3);
        assert_eq!(switch.y, cell.y + 8.0 + caption_height);
    }

    // ===== Items =====

    #[test]
    fn test_every_item_is_a_switch() {
        let h = mounted(&GalleryConfig::default());
        h.assert_count("[role=switch]", 11)
            .assert_count("[role=gridcell]", 11)
            .assert_exists("#gallery");
        for id in GalleryConfig::default().item_ids() {
            h.assert_is_off(&format!("#{id}"));
        }
    }

    #[test]
    fn test_items_have_independent_state() {
        let mut h = mounted(&GalleryConfig::default());
        h.click("#heart-switch");
        h.assert_is_on("#heart-switch").assert_is_off("#colored-switch");
        let states: Vec<_> = h.root().items().iter().map(|i| i.state.get()).collect();
        assert_eq!(states.iter().filter(|&&on| on).count(), 1);
        assert!(states[5]);
    }

    #[test]
    fn test_checked_and_disabled_items() {
        let config = GalleryConfig::from_yaml(
            "items:\n  - { type: SquareSwitch, checked: true, enabled: false }\n",
        )
        .unwrap();
        let mut h = mounted(&config);
        h.click("#square-switch");
        h.assert_is_on("#square-switch")
            .assert_is_not_enabled("#square-switch");
        assert_eq!(
            h.query("#square-switch").unwrap().toggle_state(),
            Some(ToggleState::On)
        );
    }

    #[test]
    fn test_caption_painted_per_cell() {
        let h = mounted(&GalleryConfig::default());
        let texts: Vec<String> = h
            .paint()
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                switchy::DrawCommand::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"Square Switch".to_string()));
        assert!(texts.contains(&"Native Switch".to_string()));
    }
}
