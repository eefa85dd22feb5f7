//! Actor Model: Message-passing concurrency for the terminal front end.
//!
//! Each concern runs on its own thread and talks over crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards to main loop
//! - **Ticker Actor**: Emits one tick per animation frame
//! - **Render Actor**: Receives frames, diffs and flushes
//! - **Main Loop**: Owns the session; applies input and advances playback
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐        Tick         │  Main Loop   │
//! │Ticker Thread │ ─────────────────▶  │  (Session)   │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀───────────────── │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod messages;
mod input;
mod ticker;
mod renderer;
mod engine;

pub use messages::{InputEvent, KeyCode, KeyModifiers, RenderCommand};
pub use input::InputActor;
pub use ticker::{Tick, TickerActor};
pub use renderer::{RenderStats, RendererActor};
pub use engine::{Engine, EngineConfig};
