//! Turtle state and operations for 2D interpretation.

use crate::color::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Saved whole on `[` and restored whole on `]`; each stack slot owns an independent
/// copy, so sibling branches never observe each other's changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: Vec2,

    /// Current heading in degrees. 0 points along +X; positive angles turn
    /// counter-clockwise.
    pub heading: f32,

    /// Length of the next stroke.
    pub length: f32,

    /// Stroke color, or `None` until a color symbol has been read.
    pub color: Option<Color>,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 90.0,
            length: 1.0,
            color: None,
        }
    }
}

impl TurtleState {
    /// Unit vector of the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }

    /// The point one stroke length ahead of the turtle.
    pub fn ahead(&self) -> Vec2 {
        self.position + self.direction() * self.length
    }

    /// Rotates by `degrees`; positive turns counter-clockwise.
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees;
    }
}

/// Operations that can be bound to a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Stroke forward by the active length (`F`).
    Draw,
    /// Advance without drawing.
    Move,
    /// Turn by the grammar angle times the sign (`+` is `1.0`, `-` is `-1.0`).
    Turn(f32),
    /// Save the turtle state and enter a shorter branch (`[`).
    Push,
    /// Restore the most recently saved state (`]`).
    Pop,
    /// Look the symbol up in the grammar's color table (digits by default).
    SetColor,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn heading_zero_points_along_x() {
        let t = TurtleState {
            heading: 0.0,
            length: 2.0,
            ..Default::default()
        };
        assert!(approx(t.ahead(), Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn positive_turn_is_counter_clockwise() {
        let mut t = TurtleState {
            heading: 0.0,
            ..Default::default()
        };
        t.turn(90.0);
        assert!(approx(t.direction(), Vec2::Y));
        t.turn(-180.0);
        assert!(approx(t.direction(), Vec2::NEG_Y));
    }
}
