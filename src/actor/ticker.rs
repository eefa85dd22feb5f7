//! Ticker Actor: Dedicated thread for frame pacing.
//!
//! One tick is one animation frame. The playback driver advances the
//! running emitter once per tick, so the tick rate is the animation speed.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest single sleep, so shutdown is noticed promptly.
const MAX_SLEEP: Duration = Duration::from_millis(1);

/// A frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Fixed-rate schedule. Falling behind skips frames instead of bursting.
#[derive(Debug, Clone)]
struct Pacer {
    start: Instant,
    interval: Duration,
    next_due: Instant,
    frame: u64,
}

impl Pacer {
    fn new(start: Instant, interval: Duration) -> Self {
        Self {
            start,
            interval,
            next_due: start + interval,
            frame: 0,
        }
    }

    /// The tick due at `now`, or how long to wait for it.
    fn poll(&mut self, now: Instant) -> Result<Tick, Duration> {
        if now < self.next_due {
            return Err(self.next_due - now);
        }
        let tick = Tick {
            frame: self.frame,
            elapsed: now - self.start,
        };
        self.frame += 1;
        self.next_due += self.interval;
        if self.next_due < now {
            self.next_due = now + self.interval;
        }
        Ok(tick)
    }
}

/// Ticker actor that generates frame ticks.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker firing every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Late ticks are dropped, never queued.
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("sortviz-ticker".to_string())
            .spawn(move || {
                let pacer = Pacer::new(Instant::now(), interval);
                Self::run_loop(pacer, &tick_tx, &shutdown_clone);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Spawn a ticker firing `fps` times per second.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is 0.
    pub fn at_fps(fps: u32) -> io::Result<Self> {
        assert!(fps > 0, "frame rate must be non-zero");
        Self::spawn(Duration::from_secs(1) / fps)
    }

    /// Get a reference to the tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(mut pacer: Pacer, tick_tx: &Sender<Tick>, shutdown: &AtomicBool) {
        while !shutdown.load(Ordering::Relaxed) {
            match pacer.poll(Instant::now()) {
                Ok(tick) => {
                    let _ = tick_tx.try_send(tick);
                }
                Err(wait) => thread::sleep(wait.min(MAX_SLEEP)),
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_pacer_waits_for_first_interval() {
        let start = Instant::now();
        let mut pacer = Pacer::new(start, 10 * MS);

        assert_eq!(pacer.poll(start), Err(10 * MS));
        assert_eq!(pacer.poll(start + 4 * MS), Err(6 * MS));

        let tick = pacer.poll(start + 10 * MS).unwrap();
        assert_eq!(tick.frame, 0);
        assert_eq!(tick.elapsed, 10 * MS);
        assert_eq!(pacer.poll(start + 12 * MS), Err(8 * MS));
    }

    #[test]
    fn test_pacer_skips_when_behind() {
        let start = Instant::now();
        let mut pacer = Pacer::new(start, 10 * MS);

        // Stalled for several intervals: one tick, then a full interval.
        let late = start + 55 * MS;
        assert_eq!(pacer.poll(late).unwrap().frame, 0);
        assert_eq!(pacer.poll(late), Err(10 * MS));
        assert_eq!(pacer.poll(late + 10 * MS).unwrap().frame, 1);
    }

    #[test]
    fn test_ticker_delivers_ticks() {
        let ticker = TickerActor::at_fps(100).unwrap();

        let first = ticker.receiver().recv_timeout(200 * MS).unwrap();
        assert_eq!(first.frame, 0);
        let second = ticker.receiver().recv_timeout(200 * MS).unwrap();
        assert!(second.frame > first.frame);

        ticker.join();
    }

    #[test]
    #[should_panic]
    fn test_zero_fps_panics() {
        let _ = TickerActor::at_fps(0);
    }
}
