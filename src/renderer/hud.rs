//! HUD and overlay layout
//!
//! Pure functions from a snapshot to what should be on screen, in world
//! (pixel) coordinates. The terminal renderer only scales and draws.

use glam::Vec2;

use super::canvas::Rgb;
use crate::sim::{GamePhase, Snapshot};

pub const BACKGROUND: Rgb = Rgb(20, 22, 30);
pub const PLAYER: Rgb = Rgb(120, 180, 255);
pub const TEXT: Rgb = Rgb::WHITE;
pub const HIGHLIGHT: Rgb = Rgb(0, 255, 120);

pub const BAR_EMPTY: Rgb = Rgb(60, 60, 60);
pub const BAR_FILL: Rgb = Rgb(200, 60, 60);
/// Health bar position and size (pixels)
pub const BAR_POS: Vec2 = Vec2::new(20.0, 20.0);
pub const BAR_SIZE: Vec2 = Vec2::new(200.0, 20.0);

/// Width of the filled part of the health bar
pub fn health_bar_fill(health: f32, max_health: f32, bar_width: f32) -> f32 {
    if max_health <= 0.0 {
        return 0.0;
    }
    (health / max_health).clamp(0.0, 1.0) * bar_width
}

pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

/// A line of text in world coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Anchor point; centered lines are centered on it horizontally
    pub pos: Vec2,
    pub centered: bool,
    pub color: Rgb,
    /// Title-sized text
    pub large: bool,
}

impl TextLine {
    fn centered(text: impl Into<String>, pos: Vec2) -> Self {
        Self {
            text: text.into(),
            pos,
            centered: true,
            color: TEXT,
            large: false,
        }
    }
}

/// Phase-dependent prompts drawn over the playfield
pub fn overlay_lines(snapshot: &Snapshot<'_>) -> Vec<TextLine> {
    let config = snapshot.config;
    let center = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);

    match snapshot.phase {
        GamePhase::Playing => Vec::new(),
        GamePhase::Waiting => vec![TextLine::centered("Press SPACEBAR to Start", center)],
        GamePhase::Paused => vec![TextLine::centered(
            "Paused - Press SPACEBAR to Resume",
            center,
        )],
        GamePhase::GameOver => {
            let score = snapshot.player.score;
            let (high_score, new_record) = match snapshot.last_round {
                Some(summary) => (summary.high_score, summary.new_high_score),
                None => (snapshot.high_score, score > 0 && score >= snapshot.high_score),
            };

            let mut lines = Vec::with_capacity(5);
            lines.push(TextLine {
                large: true,
                ..TextLine::centered("Game Over", center - Vec2::new(0.0, 60.0))
            });
            lines.push(TextLine::centered(format!("Final Score: {score}"), center));
            lines.push(TextLine {
                color: if score >= high_score { HIGHLIGHT } else { TEXT },
                ..TextLine::centered(
                    format!("High Score: {high_score}"),
                    center + Vec2::new(0.0, 40.0),
                )
            });
            if new_record {
                lines.push(TextLine::centered(
                    "New High Score!",
                    center + Vec2::new(0.0, 80.0),
                ));
            }
            lines.push(TextLine::centered(
                "Press SPACEBAR to Restart or ESC to Quit",
                center + Vec2::new(0.0, 120.0),
            ));
            lines
        }
    }
}

/// Score readout in the top-right corner
pub fn score_line(snapshot: &Snapshot<'_>) -> TextLine {
    TextLine {
        text: score_text(snapshot.player.score),
        pos: Vec2::new(snapshot.config.screen_width - 180.0, 18.0),
        centered: false,
        color: TEXT,
        large: false,
    }
}
