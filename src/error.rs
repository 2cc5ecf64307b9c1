//! Error types for grammar construction, weighted sampling and turtle rendering.

use thiserror::Error;

/// Errors raised while building a [`Grammar`](crate::Grammar).
///
/// A grammar that fails validation never exists; every variant here is reported by
/// [`GrammarBuilder::build`](crate::GrammarBuilder::build).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GrammarError {
    /// The axiom is empty and no rule introduces any symbol.
    #[error("grammar has an empty alphabet")]
    EmptyAlphabet,

    /// A predecessor was registered with an empty list of alternatives.
    #[error("rule for `{0}` has no alternatives")]
    NoAlternatives(char),

    /// An alternative carries a negative or non-finite weight.
    #[error("rule for `{symbol}` has invalid weight {weight}")]
    InvalidWeight { symbol: char, weight: f32 },

    /// Every alternative of a predecessor has weight zero.
    #[error("rule for `{0}` has only zero-weight alternatives")]
    ZeroWeights(char),

    /// The weights of a predecessor's alternatives sum past the largest finite value.
    #[error("weights of rule for `{0}` overflow when summed")]
    WeightOverflow(char),

    /// The turn angle is NaN or infinite.
    #[error("turn angle {0} is not finite")]
    InvalidAngle(f32),

    /// A color key collides with a structural symbol (`[`, `]`, `+`, `-`).
    #[error("`{0}` is a structural symbol and cannot be a color key")]
    InvalidColorKey(char),
}

/// Errors raised while building a [`WeightedChoice`](crate::WeightedChoice).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SamplerError {
    #[error("no outcomes to choose from")]
    Empty,

    #[error("weight {0} is negative or not finite")]
    InvalidWeight(f32),

    #[error("all weights are zero")]
    AllZero,

    #[error("weights overflow when summed")]
    Overflow,

    /// The weights passed validation but could not form a distribution (e.g. the sum overflows).
    #[error("weights rejected by distribution: {0}")]
    Distribution(String),
}

/// Errors that abort a render walk.
///
/// Draw commands issued before the error remain on the target.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RenderError {
    /// A `]` was met with no saved state to restore.
    #[error("stack underflow: unmatched pop at symbol index {position}")]
    StackUnderflow { position: usize },

    /// A `[` would exceed the configured maximum stack depth.
    #[error("stack overflow: depth limit {limit} exceeded at symbol index {position}")]
    StackOverflow { limit: usize, position: usize },

    /// The render configuration cannot produce a well-defined walk.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
}
