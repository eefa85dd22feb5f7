//! # Sortviz
//!
//! A step-by-step terminal visualizer for classic sorting algorithms.
//!
//! Every algorithm is a resumable [`StepEmitter`]: each call does a bounded
//! amount of work on a borrowed array and reports which indices to
//! highlight. A [`Playback`] driver advances the running emitter once per
//! frame, and a [`Session`] maps key presses to algorithm selection, reset
//! and quit.
//!
//! ## Core Concepts
//!
//! - **Resumable emitters**: explicit loop and task-stack state, no threads
//!   or coroutines
//! - **Render adapter**: frames go through [`RenderAdapter`]; the terminal
//!   [`BarCanvas`] is one implementation
//! - **Actor model**: isolated threads for input, frame ticks and terminal
//!   output
//! - **Diffed output**: only changed cells are written to the terminal
//!
//! ## Example
//!
//! ```rust
//! use sortviz::{Algorithm, Role, Steps};
//!
//! let mut values = vec![5, 3, 8, 1];
//! let emitter = Algorithm::Bubble.emitter(values.len());
//! let steps: Vec<_> = Steps::new(emitter, &mut values).collect();
//!
//! assert_eq!(values, [1, 3, 5, 8]);
//! assert_eq!(steps[0].role_at(0), Role::CompareLow);
//! assert_eq!(steps.last().unwrap().fill(), Role::Sorted);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod data;
pub mod layout;
pub mod playback;
pub mod render;
pub mod session;
pub mod sort;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, Tick, TickerActor};
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use config::{ConfigError, VisualizerConfig};
pub use data::ArrayGenerator;
pub use layout::Rect;
pub use playback::{Frame, Playback, PlaybackState, Status};
pub use render::{BarCanvas, Palette, RenderAdapter};
pub use session::{Control, Intent, Session};
pub use sort::{Algorithm, Height, Role, Step, StepEmitter, Steps};
