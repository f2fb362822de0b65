//! Rendering capability traits and recording implementations.
//!
//! The engine never talks to a GPU or a font library directly. Instead it
//! draws through three narrow traits the host application implements:
//!
//! | Trait | Used for |
//! |-------|----------|
//! | [`Canvas2D`] | Filled quads: the base ball and its glow footprint |
//! | [`TextRenderer`] | Positioned strings: the drifting overlay label |
//! | [`Inspectable`] | The tooltip widget populated on a pointer hit |
//!
//! The recording implementations in this module satisfy the same
//! contracts while capturing every call, which makes them useful both in
//! tests and for headless runs that want to count or export draw calls.

use glam::{Vec2, Vec3};

/// Sink for filled quads.
pub trait Canvas2D {
    /// Draw an axis-aligned filled quad with its top-left corner at
    /// `position`.
    fn fill_quad(&mut self, position: Vec2, extent: Vec2, colour: Vec3, alpha: f32);
}

/// Sink for positioned text.
pub trait TextRenderer {
    /// Draw a single line of text at `position`.
    fn draw_text(&mut self, position: Vec2, text: &str, colour: Vec3, alpha: f32);
}

/// A tooltip-like widget that can be filled in on a pointer hit.
pub trait Inspectable {
    /// Replace the widget's content with an ordered list of lines.
    fn set_text(&mut self, lines: Vec<String>);
    /// Move the widget to a screen position.
    fn set_position(&mut self, position: Vec2);
    /// Tint the widget.
    fn set_colour(&mut self, colour: Vec3);
}

/// One captured [`Canvas2D::fill_quad`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCall {
    pub position: Vec2,
    pub extent: Vec2,
    pub colour: Vec3,
    pub alpha: f32,
}

/// A [`Canvas2D`] that records every quad instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Captured calls, in draw order.
    pub quads: Vec<QuadCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all captured calls.
    pub fn clear(&mut self) {
        self.quads.clear();
    }
}

impl Canvas2D for RecordingCanvas {
    fn fill_quad(&mut self, position: Vec2, extent: Vec2, colour: Vec3, alpha: f32) {
        self.quads.push(QuadCall {
            position,
            extent,
            colour,
            alpha,
        });
    }
}

/// One captured [`TextRenderer::draw_text`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCall {
    pub position: Vec2,
    pub text: String,
    pub colour: Vec3,
    pub alpha: f32,
}

/// A [`TextRenderer`] that records every line instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingText {
    /// Captured calls, in draw order.
    pub calls: Vec<TextCall>,
}

impl RecordingText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all captured calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl TextRenderer for RecordingText {
    fn draw_text(&mut self, position: Vec2, text: &str, colour: Vec3, alpha: f32) {
        self.calls.push(TextCall {
            position,
            text: text.to_owned(),
            colour,
            alpha,
        });
    }
}

/// An [`Inspectable`] that stores whatever it is told.
#[derive(Debug, Default)]
pub struct RecordingTooltip {
    pub lines: Vec<String>,
    pub position: Vec2,
    pub colour: Vec3,
}

impl RecordingTooltip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inspectable for RecordingTooltip {
    fn set_text(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_colour(&mut self, colour: Vec3) {
        self.colour = colour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_captures_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_quad(Vec2::ZERO, Vec2::ONE, Vec3::ONE, 1.0);
        canvas.fill_quad(Vec2::X, Vec2::ONE, Vec3::ZERO, 0.5);

        assert_eq!(canvas.quads.len(), 2);
        assert_eq!(canvas.quads[1].position, Vec2::X);
        assert_eq!(canvas.quads[1].alpha, 0.5);

        canvas.clear();
        assert!(canvas.quads.is_empty());
    }

    #[test]
    fn test_recording_text_owns_strings() {
        let mut text = RecordingText::new();
        let line = String::from("Response: 500");
        text.draw_text(Vec2::ZERO, &line, Vec3::ONE, 1.0);
        drop(line);
        assert_eq!(text.calls[0].text, "Response: 500");
    }
}
