//! # lindenmayer-turtle
//!
//! Stochastic L-System expansion paired with a 2D turtle interpreter.
//!
//! A [`Grammar`] rewrites its axiom for a fixed number of generations, choosing between
//! weighted alternatives with a caller-supplied random source. A [`TurtleInterpreter`]
//! then walks the expanded string and issues line and color commands to any
//! [`DrawTarget`], leaving rasterization to the host.
//!
//! ```
//! use lindenmayer_turtle::{CommandRecorder, Grammar, RenderConfig, TurtleInterpreter};
//!
//! let grammar = Grammar::builder("F")
//!     .angle(25.0)
//!     .deterministic_rule('F', "F[+F]F")
//!     .generations(2)
//!     .build()
//!     .unwrap();
//! let interpreter = TurtleInterpreter::standard(RenderConfig::default().with_reduction(1.5));
//! let mut canvas = CommandRecorder::new(500.0, 500.0);
//! let summary = interpreter
//!     .render_full_structure(&grammar, &grammar.expand_seeded(7), &mut canvas)
//!     .unwrap();
//! assert_eq!(summary.segments, 9);
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod presets;
pub mod sampler;
pub mod turtle;

pub use canvas::*;
pub use color::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use sampler::*;
pub use turtle::*;
