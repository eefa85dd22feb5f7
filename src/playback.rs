//! Playback driver: advances the active emitter exactly once per frame.
//!
//! ```text
//!            select                 tick → Step
//!   ┌──────┐ ─────────▶ ┌─────────┐ ◀─────┐
//!   │ Idle │            │ Running │ ──────┘
//!   └──────┘ ◀──┐       └─────────┘
//!      ▲        │ tick       │ tick → Done
//!      │ reset  │       ┌───────────┐
//!      └────────┴────── │ Completed │
//!                       └───────────┘
//! ```
//!
//! `Completed` lasts for a single frame: it carries the completion banner,
//! and the next tick renders as `Idle`.

use crate::sort::{Algorithm, Height, Step, StepEmitter};
use std::fmt;
use tracing::{debug, info};

/// Status line shown when no algorithm is running.
pub const HINT: &str = "1:Bubble  2:Insertion  3:Selection  4:Quick  5:Merge  R:Reset  ESC:Quit";

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No run.
    Idle,
    /// A run is active and not yet exhausted.
    Running,
    /// The run finished on the last tick.
    Completed,
}

/// Status line content for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Command hint, nothing running.
    Hint,
    /// A run is in progress.
    InProgress(Algorithm),
    /// A run just finished.
    Completed(Algorithm),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint => f.write_str(HINT),
            Self::InProgress(algorithm) => write!(f, "{algorithm} in progress..."),
            Self::Completed(algorithm) => write!(f, "{algorithm} completed!"),
        }
    }
}

/// What to render for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Per-index highlight. `None` on idle frames.
    pub step: Option<Step>,
    /// Status line.
    pub status: Status,
}

impl Frame {
    /// An idle frame: no highlight, command hint.
    pub const IDLE: Self = Self {
        step: None,
        status: Status::Hint,
    };
}

/// An active algorithm run.
pub struct Run {
    algorithm: Algorithm,
    emitter: Box<dyn StepEmitter>,
    steps: u64,
}

impl Run {
    /// Start a run of `algorithm` over a buffer of `len` values.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        Self {
            algorithm,
            emitter: algorithm.emitter(len),
            steps: 0,
        }
    }

    /// The algorithm being run.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Steps emitted so far.
    pub const fn steps(&self) -> u64 {
        self.steps
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("algorithm", &self.algorithm)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// The frame-by-frame state machine.
#[derive(Debug)]
pub struct Playback {
    run: Option<Run>,
    state: PlaybackState,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    /// Create an idle driver.
    pub const fn new() -> Self {
        Self {
            run: None,
            state: PlaybackState::Idle,
        }
    }

    /// Current state.
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The active run, if any.
    pub const fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    /// Check whether a run is active.
    pub const fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Start `algorithm` over a buffer of `len` values.
    ///
    /// Returns `false`, leaving the active run untouched, if one is already
    /// running.
    pub fn select(&mut self, algorithm: Algorithm, len: usize) -> bool {
        if let Some(run) = &self.run {
            debug!(requested = %algorithm, running = %run.algorithm, "selection ignored");
            return false;
        }
        info!(%algorithm, len, "run started");
        self.run = Some(Run::new(algorithm, len));
        self.state = PlaybackState::Running;
        true
    }

    /// Discard any active run and return to idle.
    pub fn reset(&mut self) {
        if let Some(run) = self.run.take() {
            debug!(algorithm = %run.algorithm, steps = run.steps, "run cancelled");
        }
        self.state = PlaybackState::Idle;
    }

    /// Advance the active run by one step and describe the frame to draw.
    pub fn tick(&mut self, values: &mut [Height]) -> Frame {
        let Some(run) = self.run.as_mut() else {
            self.state = PlaybackState::Idle;
            return Frame::IDLE;
        };

        if let Some(step) = run.emitter.advance(values) {
            run.steps += 1;
            self.state = PlaybackState::Running;
            return Frame {
                step: Some(step),
                status: Status::InProgress(run.algorithm),
            };
        }

        let algorithm = run.algorithm;
        info!(%algorithm, steps = run.steps, "run completed");
        self.run = None;
        self.state = PlaybackState::Completed;
        Frame {
            step: Some(Step::sorted()),
            status: Status::Completed(algorithm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Role;

    #[test]
    fn test_idle_tick() {
        let mut playback = Playback::new();
        let mut values = vec![3, 1, 2];

        assert_eq!(playback.tick(&mut values), Frame::IDLE);
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_run_to_completion() {
        let mut playback = Playback::new();
        let mut values = vec![5, 3, 8, 1];

        assert!(playback.select(Algorithm::Bubble, values.len()));
        assert_eq!(playback.state(), PlaybackState::Running);

        // Six comparisons plus four trailing steps.
        for _ in 0..10 {
            let frame = playback.tick(&mut values);
            assert_eq!(frame.status, Status::InProgress(Algorithm::Bubble));
            assert_eq!(playback.state(), PlaybackState::Running);
        }
        assert_eq!(playback.run().map(Run::steps), Some(10));

        let frame = playback.tick(&mut values);
        assert_eq!(frame.status, Status::Completed(Algorithm::Bubble));
        assert_eq!(frame.step.map(|s| s.role_at(0)), Some(Role::Sorted));
        assert_eq!(playback.state(), PlaybackState::Completed);
        assert!(!playback.is_running());
        assert_eq!(values, vec![1, 3, 5, 8]);

        assert_eq!(playback.tick(&mut values), Frame::IDLE);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_select_while_running_is_ignored() {
        let mut playback = Playback::new();
        let mut values = vec![4, 3, 2, 1];

        assert!(playback.select(Algorithm::Selection, 4));
        playback.tick(&mut values);
        let steps_before = playback.run().map(Run::steps);

        assert!(!playback.select(Algorithm::Merge, 4));
        assert_eq!(playback.state(), PlaybackState::Running);
        assert_eq!(playback.run().map(Run::algorithm), Some(Algorithm::Selection));
        assert_eq!(playback.run().map(Run::steps), steps_before);
    }

    #[test]
    fn test_select_after_completion() {
        let mut playback = Playback::new();
        let mut values = vec![1];

        playback.select(Algorithm::Merge, 1);
        let frame = playback.tick(&mut values);
        assert_eq!(frame.status, Status::Completed(Algorithm::Merge));

        assert!(playback.select(Algorithm::Quick, 1));
    }

    #[test]
    fn test_reset_discards_run() {
        let mut playback = Playback::new();
        let mut values = vec![2, 1, 3];

        playback.select(Algorithm::Insertion, 3);
        playback.tick(&mut values);
        playback.reset();

        assert_eq!(playback.state(), PlaybackState::Idle);
        assert!(playback.run().is_none());
        assert_eq!(playback.tick(&mut values), Frame::IDLE);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Hint.to_string(), HINT);
        assert_eq!(
            Status::InProgress(Algorithm::Quick).to_string(),
            "Quick Sort in progress..."
        );
        assert_eq!(
            Status::Completed(Algorithm::Insertion).to_string(),
            "Insertion Sort completed!"
        );
    }
}
