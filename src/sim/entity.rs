//! Player platform and falling items

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge, or that have zero
    /// area, never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Anything that occupies a rectangle on screen
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

/// Item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Heals, scores, and shrinks the platform
    Good,
    /// Damages and widens the platform
    Bad,
}

impl ItemKind {
    /// Display color (RGB)
    pub fn color(self) -> [u8; 3] {
        match self {
            ItemKind::Good => [0, 255, 120],
            ItemKind::Bad => [255, 60, 60],
        }
    }
}

/// Result of resizing the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    Resized,
    /// The platform shrank to nothing; health has been forced to zero
    Fatal,
}

/// The player's platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Width in pixels, always within `[0, max_width]`
    pub width: u32,
    pub height: f32,
    /// Always within `[0, max_health]`
    pub health: f32,
    pub score: u64,
}

impl Player {
    /// Fresh platform, horizontally centered, resting `platform_bottom_margin` above the floor
    pub fn new(config: &GameConfig) -> Self {
        let width = config.default_width.min(config.max_width);
        Self {
            pos: Vec2::new(
                config.screen_width / 2.0 - width as f32 / 2.0,
                config.platform_top(),
            ),
            width,
            height: config.platform_height,
            health: config.max_health,
            score: 0,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width as f32 / 2.0
    }

    /// Shift horizontally by the configured speed; holding both directions cancels out
    pub fn move_by(&mut self, left: bool, right: bool, dt: f32, config: &GameConfig) {
        let direction = match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        let dx = direction * config.player_speed * config.tick_scale(dt);
        let max_x = (config.screen_width - self.width as f32).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }

    /// Grow (positive) or shrink (negative) the platform around its current center.
    ///
    /// A result of zero width destroys the platform: health drops to zero and
    /// `ResizeOutcome::Fatal` is returned.
    pub fn resize(&mut self, delta: i32, config: &GameConfig) -> ResizeOutcome {
        let center = self.center_x();
        let new_width = (self.width as i64 + delta as i64).clamp(0, config.max_width as i64) as u32;

        self.width = new_width;
        self.pos.x = center - new_width as f32 / 2.0;

        if new_width == 0 {
            self.health = 0.0;
            ResizeOutcome::Fatal
        } else {
            ResizeOutcome::Resized
        }
    }

    /// Add (or with a negative amount, remove) health, clamped to `[0, max_health]`
    pub fn adjust_health(&mut self, amount: f32, config: &GameConfig) {
        self.health = (self.health + amount).clamp(0.0, config.max_health);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width as f32, self.height))
    }
}

/// A falling item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    /// Center of the item
    pub pos: Vec2,
    /// Pixels per reference tick
    pub speed: f32,
    /// Edge length in pixels
    pub size: u32,
}

impl Item {
    /// Fall for `dt` seconds. Returns `true` once the item's top edge has left the screen.
    pub fn advance(&mut self, dt: f32, config: &GameConfig) -> bool {
        self.pos.y += self.speed * config.tick_scale(dt);
        self.top() > config.screen_height
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size as f32 / 2.0
    }
}

impl Bounds for Item {
    fn bounds(&self) -> Rect {
        let edge = self.size as f32;
        Rect::from_center(self.pos, Vec2::splat(edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REFERENCE_FPS;

    const TICK: f32 = 1.0 / REFERENCE_FPS;

    fn item_at(x: f32, y: f32, size: u32) -> Item {
        Item {
            id: 1,
            kind: ItemKind::Good,
            pos: Vec2::new(x, y),
            speed: 4.0,
            size,
        }
    }

    #[test]
    fn test_player_starts_centered() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        assert_eq!(player.width, 150);
        assert!((player.center_x() - 400.0).abs() < 1e-4);
        assert_eq!(player.health, 100.0);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_move_clamps_to_screen() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);

        for _ in 0..200 {
            player.move_by(true, false, TICK, &config);
        }
        assert_eq!(player.pos.x, 0.0);

        for _ in 0..200 {
            player.move_by(false, true, TICK, &config);
        }
        assert!((player.pos.x - 650.0).abs() < 1e-3);
    }

    #[test]
    fn test_move_both_directions_cancel() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let before = player.pos.x;
        player.move_by(true, true, TICK, &config);
        assert_eq!(player.pos.x, before);
    }

    #[test]
    fn test_move_scales_with_dt() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let before = player.pos.x;
        player.move_by(false, true, 2.0 * TICK, &config);
        assert!((player.pos.x - before - 14.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_keeps_center() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.pos.x = 100.0;
        let center = player.center_x();

        assert_eq!(player.resize(-10, &config), ResizeOutcome::Resized);
        assert_eq!(player.width, 140);
        assert!((player.center_x() - center).abs() < 1e-4);
    }

    #[test]
    fn test_resize_clamps_at_max() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert_eq!(player.resize(1000, &config), ResizeOutcome::Resized);
        assert_eq!(player.width, 300);
    }

    #[test]
    fn test_resize_to_zero_is_fatal() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert_eq!(player.resize(-140, &config), ResizeOutcome::Resized);
        assert_eq!(player.health, 100.0);

        assert_eq!(player.resize(-10, &config), ResizeOutcome::Fatal);
        assert_eq!(player.width, 0);
        assert_eq!(player.health, 0.0);
    }

    #[test]
    fn test_resize_past_zero_clamps_and_is_fatal() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert_eq!(player.resize(-500, &config), ResizeOutcome::Fatal);
        assert_eq!(player.width, 0);
    }

    #[test]
    fn test_adjust_health_clamps() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.adjust_health(5.0, &config);
        assert_eq!(player.health, 100.0);
        player.adjust_health(-250.0, &config);
        assert_eq!(player.health, 0.0);
        assert!(player.is_dead());
    }

    #[test]
    fn test_item_expires_past_bottom() {
        let config = GameConfig::default();
        let mut item = item_at(100.0, 580.0, 30);
        // top = 565 + 4 = 569
        assert!(!item.advance(TICK, &config));
        item.pos.y = 614.0;
        // top = 599 + 4 = 603
        assert!(item.advance(TICK, &config));
    }

    #[test]
    fn test_zero_width_player_never_overlaps() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.resize(-150, &config);
        let item = item_at(player.center_x(), player.pos.y + 5.0, 30);
        assert!(!player.bounds().overlaps(&item.bounds()));
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        let inside = Rect::new(Vec2::new(9.0, 9.0), Vec2::splat(10.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }
}
