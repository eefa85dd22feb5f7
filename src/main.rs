//! Terminal front end: wires the session to the terminal engine.

use anyhow::{Context, Result};
use crossbeam_channel::select;
use sortviz::{
    BarCanvas, Control, Engine, InputEvent, Intent, Palette, Session, TickerActor,
    VisualizerConfig,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "sortviz.log";

fn main() -> Result<()> {
    let log_path = std::env::temp_dir().join(LOG_FILE);
    if let Err(e) = init_tracing_to_file(&log_path) {
        eprintln!("logging disabled: {e:#}");
    }

    let config = VisualizerConfig::default();
    config.validate().context("invalid visualizer configuration")?;
    info!(?config, log = %log_path.display(), "starting");

    run(&config)
}

fn run(config: &VisualizerConfig) -> Result<()> {
    let mut session = Session::new(config);
    let palette = Palette::default();

    let mut engine = Engine::new().context("failed to set up the terminal")?;
    let ticker = TickerActor::at_fps(config.target_fps)
        .context("failed to start the frame ticker")?;
    let input = engine.input_receiver().clone();

    while engine.is_running() {
        select! {
            recv(input) -> event => match event {
                Ok(InputEvent::Key { code, modifiers }) => {
                    let control = Intent::from_key(code, modifiers)
                        .map_or(Control::Continue, |intent| session.handle(intent));
                    if control == Control::Quit {
                        engine.stop();
                    }
                }
                Ok(InputEvent::Resize { width, height }) => engine.handle_resize(width, height),
                Ok(InputEvent::Error(e)) => warn!("input error: {e}"),
                Ok(InputEvent::Shutdown) | Err(_) => engine.stop(),
            },
            recv(ticker.receiver()) -> tick => {
                if tick.is_ok() {
                    let frame = session.tick();
                    let mut canvas =
                        BarCanvas::new(engine.buffer_mut(), &palette, config.max_height);
                    session.render(&frame, &mut canvas);
                    engine.present();
                } else {
                    engine.stop();
                }
            },
        }
    }

    info!(frames = session.frame_count(), "exiting");
    ticker.join();
    drop(engine);
    Ok(())
}

/// Send logs to a file; the terminal itself is the UI.
fn init_tracing_to_file(log_path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
