//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, Path, ResolvedCommand, Shadow, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Layer {
    Transform(Transform2D),
    Clip(Rect, CornerRadius),
    Opacity(f32),
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Layer pushes open a nested command list that is wrapped into a
/// `Group`/`Clip`/`Opacity` command when popped. This is useful for:
/// - Testing (verify what was painted, with effective alpha)
/// - Serialization (dump a frame as JSON)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    stack: Vec<(Layer, Vec<DrawCommand>)>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.stack.clear();
        std::mem::take(&mut self.commands)
    }

    /// Get the number of top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and open layers.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.clear();
    }

    /// Number of layers currently open.
    #[must_use]
    pub fn layer_depth(&self) -> usize {
        self.stack.len()
    }

    /// Every leaf command with its effective alpha and transform, in paint order.
    #[must_use]
    pub fn resolved(&self) -> Vec<ResolvedCommand<'_>> {
        self.commands.iter().flat_map(DrawCommand::resolve).collect()
    }

    /// Add a raw draw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        self.target().push(command);
    }

    fn target(&mut self) -> &mut Vec<DrawCommand> {
        match self.stack.last_mut() {
            Some((_, children)) => children,
            None => &mut self.commands,
        }
    }

    fn open(&mut self, layer: Layer) {
        self.stack.push((layer, Vec::new()));
    }

    fn close(&mut self) {
        let Some((layer, children)) = self.stack.pop() else {
            return;
        };
        let command = match layer {
            Layer::Transform(transform) => DrawCommand::Group {
                children,
                transform,
            },
            Layer::Clip(bounds, radius) => DrawCommand::Clip {
                bounds,
                radius,
                children,
            },
            Layer::Opacity(alpha) => DrawCommand::Opacity { alpha, children },
        };
        self.target().push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.add_command(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color, width: f32) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: BoxStyle::stroke(StrokeStyle::solid(color, width)),
        });
    }

    fn draw_shadow(&mut self, rect: Rect, radius: CornerRadius, shadow: &Shadow) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: BoxStyle::shadow(shadow.clone()),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.add_command(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.add_command(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.add_command(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(StrokeStyle::solid(color, width)),
        });
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        self.add_command(DrawCommand::Path {
            points: points.to_vec(),
            closed: false,
            style: StrokeStyle::rounded(color, width),
        });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.add_command(DrawCommand::Shape {
            path: path.clone(),
            fill: Some(color),
            stroke: None,
        });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        self.add_command(DrawCommand::Shape {
            path: path.clone(),
            fill: None,
            stroke: Some(StrokeStyle::solid(color, width)),
        });
    }

    fn push_clip(&mut self, rect: Rect, radius: CornerRadius) {
        self.open(Layer::Clip(rect, radius));
    }

    fn pop_clip(&mut self) {
        self.close();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.open(Layer::Transform(transform));
    }

    fn pop_transform(&mut self) {
        self.close();
    }

    fn push_opacity(&mut self, alpha: f32) {
        self.open(Layer::Opacity(alpha.clamp(0.0, 1.0)));
    }

    fn pop_opacity(&mut self) {
        self.close();
    }
}
