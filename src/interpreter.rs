//! Interpreter that walks an expanded L-System string and issues draw commands.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`RenderConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::render_full_structure`] with a [`Grammar`] and its expansion.

use crate::canvas::DrawTarget;
use crate::color::Color;
use crate::error::RenderError;
use crate::grammar::Grammar;
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec2;
use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for one render call.
///
/// Missing fields fall back to [`RenderConfig::default`] when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Where the turtle starts.
    pub origin: Vec2,
    /// Initial heading in degrees (0 = +X, counter-clockwise positive). Default: 90 (up).
    pub initial_heading: f32,
    /// Stroke length at branch depth 0.
    pub base_length: f32,
    /// Each `[` divides the stroke length by this factor until the matching `]`.
    /// `1.0` keeps lengths constant.
    pub reduction: f32,
    /// Maximum number of nested saved states.
    pub max_stack_depth: usize,
    /// Stroke color used while no color symbol is in effect.
    pub default_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            initial_heading: 90.0,
            base_length: 10.0,
            reduction: 1.0,
            max_stack_depth: 1024,
            default_color: Color::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_heading(mut self, degrees: f32) -> Self {
        self.initial_heading = degrees;
        self
    }

    pub fn with_length(mut self, base_length: f32) -> Self {
        self.base_length = base_length;
        self
    }

    pub fn with_reduction(mut self, reduction: f32) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Checks that the walk is well defined.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.origin.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "origin {} is not finite",
                self.origin
            )));
        }
        if !self.initial_heading.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "initial heading {} is not finite",
                self.initial_heading
            )));
        }
        if !(self.base_length.is_finite() && self.base_length > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "base length {} must be positive",
                self.base_length
            )));
        }
        if !(self.reduction.is_finite() && self.reduction > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "reduction {} must be positive",
                self.reduction
            )));
        }
        Ok(())
    }

    /// Stroke length at branch depth `depth`: `base_length / reduction^depth`.
    ///
    /// A reduction below 1 grows strokes with depth and overflows to infinity once
    /// nesting is deep enough; the walk reports that as an error.
    pub fn length_at_depth(&self, depth: usize) -> f32 {
        let exponent = i32::try_from(depth).unwrap_or(i32::MAX);
        self.base_length / self.reduction.powi(exponent)
    }

    fn initial_state(&self) -> TurtleState {
        TurtleState {
            position: self.origin,
            heading: self.initial_heading,
            length: self.base_length,
            color: None,
        }
    }
}

/// Outcome of a completed walk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    /// Number of line segments drawn.
    pub segments: usize,
    /// Deepest branch nesting reached.
    pub max_depth: usize,
    /// Turtle state after the last symbol.
    pub final_state: TurtleState,
}

/// Interprets L-System output as 2D turtle graphics.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: RenderConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    ///
    /// With an empty map only color keys have an effect; register operations with
    /// [`set_op`](Self::set_op) or [`populate_standard_symbols`](Self::populate_standard_symbols).
    pub fn new(config: RenderConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Creates an interpreter with the standard symbols already registered.
    pub fn standard(config: RenderConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any earlier binding.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional mappings: `F` draws, `+`/`-` turn, `[`/`]` push and pop.
    ///
    /// Digits need no registration; they resolve to [`TurtleOp::SetColor`] on their own.
    /// Marker symbols such as the `S` leading the preset axioms stay unbound and act as
    /// no-ops; grammar authors have not assigned them a meaning.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Draw),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];
        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// The configuration every render call starts from.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolves the operation for `symbol`.
    ///
    /// Explicit bindings win; otherwise digits and keys of the grammar's color table are
    /// color symbols, and everything else is ignored.
    pub fn op_for(&self, grammar: &Grammar, symbol: char) -> TurtleOp {
        if let Some(op) = self.op_map.get(&symbol) {
            return *op;
        }
        if symbol.is_ascii_digit() || grammar.color(symbol).is_some() {
            TurtleOp::SetColor
        } else {
            TurtleOp::Ignore
        }
    }

    /// Walks `symbols` left to right and issues every draw command to `target`.
    ///
    /// The turtle starts at the configured origin and heading with the base stroke length
    /// and no color. Turns use `grammar`'s angle and color symbols its color table. Every
    /// line is drawn in the active color, or in `default_color` while none is set, and
    /// `set_line_color` is issued whenever that differs from the last color sent.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the full turtle state (position, heading, length, color) and divides the
    /// stroke length by the reduction factor, so depth `d` strokes measure
    /// `base_length / reduction^d`. `]` restores the saved state.
    ///
    /// # Errors
    ///
    /// A `]` with nothing to restore returns [`RenderError::StackUnderflow`] and a `[` past
    /// `max_stack_depth` returns [`RenderError::StackOverflow`]. A `[` whose stroke length
    /// would no longer be finite returns [`RenderError::InvalidConfig`]. The walk stops there;
    /// commands already issued are not withdrawn. An unknown color key is only logged.
    pub fn render_full_structure<T: DrawTarget + ?Sized>(
        &self,
        grammar: &Grammar,
        symbols: &str,
        target: &mut T,
    ) -> Result<RenderSummary, RenderError> {
        self.config.validate()?;

        let mut turtle = self.config.initial_state();
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut issued_color: Option<Color> = None;
        let mut segments = 0;
        let mut max_depth = 0;

        for (position, symbol) in symbols.chars().enumerate() {
            match self.op_for(grammar, symbol) {
                TurtleOp::Draw => {
                    let end = turtle.ahead();
                    let color = turtle.color.unwrap_or(self.config.default_color);
                    if issued_color != Some(color) {
                        target.set_line_color(color);
                        issued_color = Some(color);
                    }
                    target.draw_line(turtle.position, end);
                    turtle.position = end;
                    segments += 1;
                }
                TurtleOp::Move => turtle.position = turtle.ahead(),
                TurtleOp::Turn(sign) => turtle.turn(grammar.angle() * sign),
                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        return Err(RenderError::StackOverflow {
                            limit: self.config.max_stack_depth,
                            position,
                        });
                    }
                    let length = self.config.length_at_depth(stack.len() + 1);
                    if !length.is_finite() {
                        return Err(RenderError::InvalidConfig(format!(
                            "stroke length {length} at depth {} (index {position}) is not finite",
                            stack.len() + 1
                        )));
                    }
                    stack.push(turtle);
                    max_depth = max_depth.max(stack.len());
                    turtle.length = length;
                }
                TurtleOp::Pop => {
                    turtle = stack
                        .pop()
                        .ok_or(RenderError::StackUnderflow { position })?;
                }
                TurtleOp::SetColor => match grammar.color(symbol) {
                    Some(color) => turtle.color = Some(color),
                    None => warn!(
                        "no color bound to `{symbol}` at index {position}; keeping current color"
                    ),
                },
                TurtleOp::Ignore => {}
            }
        }

        if !stack.is_empty() {
            debug!("walk ended with {} unclosed branches", stack.len());
        }
        debug!("rendered {segments} segments, max depth {max_depth}");

        Ok(RenderSummary {
            segments,
            max_depth,
            final_state: turtle,
        })
    }

    /// Expands `grammar` with `rng` and renders the result.
    pub fn render_system<R: Rng + ?Sized, T: DrawTarget + ?Sized>(
        &self,
        grammar: &Grammar,
        rng: &mut R,
        target: &mut T,
    ) -> Result<RenderSummary, RenderError> {
        let symbols = grammar.expand(rng);
        self.render_full_structure(grammar, &symbols, target)
    }
}
