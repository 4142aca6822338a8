//! Trade of Life entry point
//!
//! Sets up the terminal and runs the game loop.

use std::io::{BufWriter, Stdout, Write, stdout};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::{execute, terminal};

use trade_of_life::audio::AudioManager;
use trade_of_life::consts::{LOG_FILE, SETTINGS_FILE};
use trade_of_life::platform::{self, FrameClock, InputState, logging};
use trade_of_life::renderer::TerminalRenderer;
use trade_of_life::{Engine, FileStore, HighScoreStore, Settings};

type Out = BufWriter<Stdout>;

fn main() -> Result<()> {
    // Without a log file the game still runs, just unlogged
    let _ = logging::init(Path::new(LOG_FILE));

    let settings = Settings::load(SETTINGS_FILE);
    let store = FileStore::new(settings.high_score_file.clone());
    log::info!("High score file: {}", store.path().display());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Starting with seed {seed}");

    let mut engine = Engine::new(settings.game.clone(), seed, store);
    let mut audio = if settings.muted {
        AudioManager::silent()
    } else {
        AudioManager::new(settings.effective_volume())
    };

    let mut out = BufWriter::new(stdout());
    let keyboard_enhanced =
        platform::terminal::enter(&mut out).context("failed to set up terminal")?;

    let result = run(&mut out, &mut engine, &mut audio, &settings);

    // Always restore the terminal, even if the loop failed
    let restored = platform::terminal::leave(&mut out, keyboard_enhanced);
    result?;
    restored.context("failed to restore terminal")?;

    log::info!("Exiting with high score {}", engine.store().load());
    Ok(())
}

fn run(
    out: &mut Out,
    engine: &mut Engine<FileStore>,
    audio: &mut AudioManager,
    settings: &Settings,
) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let mut renderer = TerminalRenderer::new(cols, rows);
    let mut input = InputState::new();
    let mut clock = FrameClock::new(settings.target_fps);

    loop {
        let dt = clock.start_frame();

        input.begin_frame();
        input.poll().context("failed to read terminal input")?;
        if input.quit_requested() {
            return Ok(());
        }
        if let Some((cols, rows)) = input.resized() {
            renderer.resize(cols, rows);
            execute!(out, terminal::Clear(terminal::ClearType::All))?;
        }

        let events = engine.tick_input(&input.tick_input(), dt);
        for event in &events {
            log::debug!("{event:?}");
        }
        audio.play_events(&events);

        renderer
            .draw(&engine.snapshot(), out)
            .context("failed to draw frame")?;
        out.flush()?;

        clock.finish_frame();
    }
}
