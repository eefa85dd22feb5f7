//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! This actor owns stdout and the visible buffer. Each frame it receives
//! is diffed against what is on screen and flushed in a single write.

use super::messages::RenderCommand;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total cells changed across all diffed frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Smoothed render time in microseconds.
    pub avg_render_us: u64,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// Double-buffered frame writer.
pub(crate) struct Renderer<W: Write> {
    /// What the terminal currently shows.
    current: Buffer,
    /// Diff state for cursor/color tracking.
    diff_state: DiffState,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    writer: W,
    stats: RenderStats,
    /// Whether the next frame must be drawn in full.
    needs_full_redraw: bool,
}

impl<W: Write> Renderer<W> {
    pub(crate) fn new(writer: W, width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            writer,
            stats: RenderStats::default(),
            needs_full_redraw: true,
        }
    }

    pub(crate) const fn stats(&self) -> RenderStats {
        self.stats
    }

    #[cfg(test)]
    pub(crate) const fn writer(&self) -> &W {
        &self.writer
    }

    /// Force the next frame to be drawn without diffing.
    pub(crate) const fn mark_full_dirty(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Resize the visible buffer. The next frame is drawn in full.
    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.mark_full_dirty();
    }

    /// Put `next` on screen.
    ///
    /// A frame whose size does not match the visible buffer (one drawn
    /// before a resize landed) is drawn in full.
    pub(crate) fn render(&mut self, next: &Buffer) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        if next.width() != self.current.width() || next.height() != self.current.height() {
            self.current.resize(next.width(), next.height());
            self.needs_full_redraw = true;
        }

        if self.needs_full_redraw {
            render_full(next, &mut self.output);
            self.needs_full_redraw = false;
            self.diff_state.reset();
        } else {
            let result = render_diff(&self.current, next, &mut self.output, &mut self.diff_state);
            self.stats.cells_changed += result.cells_changed as u64;
        }

        if !self.output.is_empty() {
            self.writer.write_all(&self.output)?;
            self.writer.flush()?;
        }

        self.current.copy_from(next);

        let elapsed = start.elapsed();
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_render_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        if self.stats.avg_render_us == 0 {
            self.stats.avg_render_us = self.stats.last_render_us;
        } else {
            self.stats.avg_render_us =
                (self.stats.avg_render_us * 15 + self.stats.last_render_us) / 16;
        }

        Ok(())
    }
}

impl RendererActor {
    /// Spawn the renderer actor thread, writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the thread.
    pub fn spawn(receiver: Receiver<RenderCommand>, width: u16, height: u16) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("sortviz-render".to_string())
            .spawn(move || {
                let renderer = Renderer::new(io::stdout(), width, height);
                match Self::run_loop(renderer, &receiver, &shutdown_clone) {
                    Ok(stats) => debug!(?stats, "render thread finished"),
                    Err(e) => error!("render thread error: {e}"),
                }
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the render thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main render loop. Returns the final statistics.
    fn run_loop<W: Write>(
        mut renderer: Renderer<W>,
        receiver: &Receiver<RenderCommand>,
        shutdown: &AtomicBool,
    ) -> io::Result<RenderStats> {
        while !shutdown.load(Ordering::Relaxed) {
            match receiver.recv_timeout(Duration::from_millis(16)) {
                Ok(RenderCommand::FullRedraw(buffer)) => {
                    renderer.mark_full_dirty();
                    renderer.render(&buffer)?;
                }
                Ok(RenderCommand::Update(buffer)) => renderer.render(&buffer)?,
                Ok(RenderCommand::Resize { width, height }) => renderer.resize(width, height),
                Ok(RenderCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
        Ok(renderer.stats())
    }
}

impl Drop for RendererActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
