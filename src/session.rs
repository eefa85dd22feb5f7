//! Session controller: owns the array buffer and mediates user intents.

use crate::actor::{KeyCode, KeyModifiers};
use crate::config::VisualizerConfig;
use crate::data::ArrayGenerator;
use crate::playback::{Frame, Playback};
use crate::render::RenderAdapter;
use crate::sort::{Algorithm, Height};
use tracing::debug;

/// A decoded keyboard command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Leave the program.
    Quit,
    /// Regenerate the array and cancel any run.
    Reset,
    /// Start an algorithm (ignored while one is running).
    Select(Algorithm),
}

impl Intent {
    /// Decode a key press. Unbound keys yield `None`.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        match code {
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('c') if modifiers.control => Some(Self::Quit),
            KeyCode::Char('r' | 'R') => Some(Self::Reset),
            KeyCode::Char(c) => Algorithm::from_key(c).map(Self::Select),
            _ => None,
        }
    }
}

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Exit the main loop.
    Quit,
}

/// Process-wide visualizer state.
#[derive(Debug)]
pub struct Session {
    values: Vec<Height>,
    generator: ArrayGenerator,
    playback: Playback,
    frames: u64,
}

impl Session {
    /// Start a session with a freshly generated array and nothing running.
    pub fn new(config: &VisualizerConfig) -> Self {
        let mut generator =
            ArrayGenerator::new(config.min_height..=config.max_height, config.seed);
        let values = generator.generate(config.bar_count);
        Self::with_generator(values, generator)
    }

    /// Start a session over a known array. Resets still draw from `config`.
    pub fn from_values(config: &VisualizerConfig, values: Vec<Height>) -> Self {
        let generator = ArrayGenerator::new(config.min_height..=config.max_height, config.seed);
        Self::with_generator(values, generator)
    }

    fn with_generator(values: Vec<Height>, generator: ArrayGenerator) -> Self {
        Self {
            values,
            generator,
            playback: Playback::new(),
            frames: 0,
        }
    }

    /// The array buffer.
    pub fn values(&self) -> &[Height] {
        &self.values
    }

    /// The playback driver.
    pub const fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Frames ticked so far.
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Apply an intent.
    pub fn handle(&mut self, intent: Intent) -> Control {
        match intent {
            Intent::Quit => return Control::Quit,
            Intent::Reset => self.reset(),
            Intent::Select(algorithm) => {
                self.playback.select(algorithm, self.values.len());
            }
        }
        Control::Continue
    }

    /// Cancel any run and regenerate the array at the same length.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.generator.refill(&mut self.values);
        debug!(len = self.values.len(), "array regenerated");
    }

    /// Advance one frame. At most one emitter step is taken.
    pub fn tick(&mut self) -> Frame {
        self.frames += 1;
        self.playback.tick(&mut self.values)
    }

    /// Hand a frame to a render adapter.
    pub fn render<R: RenderAdapter + ?Sized>(&self, frame: &Frame, adapter: &mut R) {
        adapter.draw(&self.values, frame.step.as_ref());
        adapter.show_status(&frame.status.to_string());
    }
}
