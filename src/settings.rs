//! Front-end settings and preferences
//!
//! Read from a JSON file next to the game; anything missing falls back to
//! defaults, and an unreadable file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{HIGH_SCORE_FILE, REFERENCE_FPS};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Persistence ===
    /// Where the high score lives
    pub high_score_file: PathBuf,

    // === Audio ===
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Display ===
    /// Frame rate the terminal loop aims for
    pub target_fps: f32,

    /// Gameplay tuning handed to the engine
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_file: PathBuf::from(HIGH_SCORE_FILE),
            sfx_volume: 0.5,
            muted: false,
            target_fps: REFERENCE_FPS,
            game: GameConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if it is absent or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Effective volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sfx_volume }
    }

    /// Clamp values a hand-edited file could push out of range
    fn sanitized(mut self) -> Self {
        self.sfx_volume = if self.sfx_volume.is_finite() {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            Self::default().sfx_volume
        };
        if !(self.target_fps.is_finite() && self.target_fps >= 1.0) {
            self.target_fps = REFERENCE_FPS;
        }
        self.target_fps = self.target_fps.min(240.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trade_of_life_settings_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = scratch_file("partial.json", r#"{"muted": true, "game": {"player_speed": 9.0}}"#);
        let settings = Settings::load(&path);
        assert!(settings.muted);
        assert_eq!(settings.effective_volume(), 0.0);
        assert_eq!(settings.game.player_speed, 9.0);
        assert_eq!(settings.game.default_width, 150);
        assert_eq!(settings.high_score_file, PathBuf::from(HIGH_SCORE_FILE));
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch_file("broken.json", "{ muted: yes");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let path = scratch_file("wild.json", r#"{"sfx_volume": 7.5, "target_fps": 0.0}"#);
        let settings = Settings::load(&path);
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.target_fps, REFERENCE_FPS);
    }
}
