//! A [`Canvas`] that records draw calls instead of rasterizing them.
//!
//! Used by tests to assert on what a widget painted, and by hosts that ship
//! draw lists to a separate renderer.

use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Rectangle
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Stroked rectangle
    StrokeRect {
        /// Rectangle
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Content
        text: String,
        /// Top-left position
        position: Point,
        /// Style
        style: TextStyle,
    },
    /// Straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Open polyline
    Path {
        /// Points
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Clip pushed
    PushClip(Rect),
    /// Clip popped
    PopClip,
}

/// Canvas that records draw operations as [`DrawCommand`]s.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip stack depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// All text runs in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text runs whose origin lies inside `area`.
    #[must_use]
    pub fn texts_in(&self, area: Rect) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, position, .. } if area.contains_point(position) => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Check whether any text run equals `needle`.
    #[must_use]
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }

    /// Style of the first text run equal to `needle`.
    #[must_use]
    pub fn text_style(&self, needle: &str) -> Option<&TextStyle> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, style, .. } if text == needle => Some(style),
            _ => None,
        })
    }

    /// Filled rectangles with the given color.
    #[must_use]
    pub fn fills_with(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());

        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        canvas.draw_text("Apple", Point::new(2.0, 2.0), &TextStyle::default());
        canvas.draw_text("Banana", Point::new(2.0, 40.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 3);
        assert_eq!(canvas.texts(), vec!["Apple", "Banana"]);
        assert!(canvas.has_text("Banana"));
        assert!(!canvas.has_text("Cherry"));
        assert_eq!(
            canvas.texts_in(Rect::new(0.0, 0.0, 100.0, 32.0)),
            vec!["Apple"]
        );
        assert_eq!(canvas.fills_with(Color::WHITE).len(), 1);
    }

    #[test]
    fn test_recording_canvas_clip_depth() {
        let mut canvas = RecordingCanvas::new();
        canvas.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0));
        canvas.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(canvas.clip_depth(), 2);
        canvas.pop_clip();
        canvas.pop_clip();
        canvas.pop_clip();
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_recording_canvas_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(1.0, 1.0), Color::BLACK, 1.0);
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }
}
