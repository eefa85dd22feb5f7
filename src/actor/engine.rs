//! Engine: Main coordinator that ties the terminal actors together.
//!
//! The engine puts the terminal into raw mode, spawns the input and render
//! threads, and owns the buffer the application draws each frame into.
//! Dropping it restores the terminal.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::buffer::Buffer;
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// The terminal engine.
pub struct Engine {
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Render command sender.
    render_tx: Sender<RenderCommand>,
    input_actor: Option<InputActor>,
    renderer_actor: Option<RendererActor>,
    /// Application buffer, drawn into each frame.
    buffer: Buffer,
    /// Whether the first frame has been sent.
    presented: bool,
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen,
    /// thread spawn).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        // A zero-sized terminal still gets a drawable buffer.
        let (width, height) = (width.max(1), height.max(1));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (render_tx, render_rx) = bounded::<RenderCommand>(16);

        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
        let renderer_actor = RendererActor::spawn(render_rx, width, height)?;
        info!(width, height, "terminal engine started");

        Ok(Self {
            config,
            input_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            buffer: Buffer::new(width, height),
            presented: false,
            running: true,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get a mutable reference to the buffer.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Get the input receiver for event-driven loops.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Handle a resize event. The next frame is drawn in full.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width.max(1), height.max(1));
        debug!(width, height, "resize");
        self.buffer.resize(width, height);
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
    }

    /// Send the buffer to the render thread.
    pub fn present(&mut self) {
        let frame = Box::new(self.buffer.clone());
        let command = if self.presented {
            RenderCommand::Update(frame)
        } else {
            self.presented = true;
            RenderCommand::FullRedraw(frame)
        };
        let _ = self.render_tx.send(command);
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        info!("terminal restored");
    }
}
