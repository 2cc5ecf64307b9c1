//! The drawing surface the interpreter issues commands to.

use crate::color::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A synchronous sink for line drawing.
///
/// Commands must be applied in the order received; later strokes paint over earlier ones.
pub trait DrawTarget {
    /// Sets the stroke color for subsequent lines.
    fn set_line_color(&mut self, color: Color);

    /// Strokes a segment in the current line color.
    fn draw_line(&mut self, from: Vec2, to: Vec2);

    /// Canvas width. Only scene layout needs it; the interpreter never asks.
    fn width(&self) -> f32;

    /// Canvas height.
    fn height(&self) -> f32;
}

/// A single recorded drawing call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetColor(Color),
    Line { from: Vec2, to: Vec2 },
}

/// A [`DrawTarget`] that keeps every command it receives.
///
/// Useful for tests and for handing a finished structure to a rasterizer later.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommandRecorder {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// An empty recorder for a canvas of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Line segments in draw order, each paired with the color active when it was drawn.
    pub fn lines(&self) -> Vec<(Vec2, Vec2, Option<Color>)> {
        let mut color = None;
        let mut lines = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::SetColor(c) => color = Some(c),
                DrawCommand::Line { from, to } => lines.push((from, to, color)),
            }
        }
        lines
    }

    /// Number of recorded commands, color changes included.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops every recorded command, keeping the canvas size.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for CommandRecorder {
    fn set_line_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}
