//! Trade of Life - a single-screen catch-the-falling-items arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, difficulty, collisions, game state)
//! - `highscores`: Persisted single-integer high score
//! - `config`: Immutable gameplay tuning
//! - `settings`: Player preferences for the terminal front end
//! - `renderer`: Terminal rendering of simulation snapshots
//! - `platform`: Keyboard polling and frame pacing
//! - `audio`: Catch sound cues

pub mod audio;
pub mod config;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{DifficultyCurve, GameConfig};
pub use highscores::{FileStore, HighScoreStore, MemoryStore};
pub use settings::Settings;
pub use sim::{Engine, GameEvent, GamePhase, Snapshot, TickInput};

/// Game-wide constants that are not part of the tunable configuration
pub mod consts {
    /// Reference tick rate; per-tick speeds and the health drain are expressed at this rate
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Largest elapsed time fed to a single tick (prevents huge jumps after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Default persistence locations, relative to the working directory
    pub const HIGH_SCORE_FILE: &str = "high_score.json";
    pub const SETTINGS_FILE: &str = "settings.json";
    pub const LOG_FILE: &str = "trade-of-life.log";
}
