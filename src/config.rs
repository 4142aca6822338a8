//! Gameplay tuning
//!
//! Every number that shapes a round lives here. The engine takes a
//! `GameConfig` by value at construction and never mutates it, so tests can
//! build variants (tiny spawn intervals, narrow screens) without touching
//! globals.

use serde::{Deserialize, Serialize};

use crate::consts::{REFERENCE_FPS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// How item parameters scale with score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    /// Fall speed at score 0 (pixels/tick)
    pub base_fall_speed: f32,
    /// Fall speed grows by one for every `fall_speed_step` points
    pub fall_speed_step: u64,
    /// Ticks between spawns at score 0
    pub spawn_base: u32,
    /// Floor on the spawn interval
    pub min_spawn_interval: u32,
    /// Spawn interval shrinks by one tick for every `spawn_interval_step` points
    pub spawn_interval_step: u64,
    /// Item edge length at score 0 (pixels)
    pub base_item_size: u32,
    /// Floor on the item size
    pub min_item_size: u32,
    /// Item size shrinks by one pixel for every `item_size_step` points
    pub item_size_step: u64,
    /// Probability that a spawned item is good at score 0
    pub good_chance_base: f32,
    /// Floor on the good-item probability
    pub good_chance_floor: f32,
    /// Score over which the good chance drops by 1.0
    pub good_chance_span: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            base_fall_speed: 4.0,
            fall_speed_step: 50,
            spawn_base: 50,
            min_spawn_interval: 15,
            spawn_interval_step: 20,
            base_item_size: 30,
            min_item_size: 15,
            item_size_step: 100,
            good_chance_base: 0.7,
            good_chance_floor: 0.4,
            good_chance_span: 500.0,
        }
    }
}

/// Immutable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield size (pixels)
    pub screen_width: f32,
    pub screen_height: f32,
    /// Tick rate at which per-tick speeds are expressed
    pub reference_fps: f32,

    // === Player ===
    pub max_health: f32,
    /// Health lost per reference tick
    pub hp_drain_rate: f32,
    /// Horizontal movement per reference tick (pixels)
    pub player_speed: f32,
    pub default_width: u32,
    pub max_width: u32,
    pub platform_height: f32,
    /// Gap between the platform's bottom edge and the bottom of the screen
    pub platform_bottom_margin: f32,

    // === Catch effects ===
    pub good_heal: f32,
    pub good_score: u64,
    pub good_shrink: i32,
    pub bad_damage: f32,
    pub bad_grow: i32,

    // === Spawning ===
    /// Items never spawn closer than this to either side wall
    pub spawn_margin: f32,
    pub difficulty: DifficultyCurve,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            reference_fps: REFERENCE_FPS,

            max_health: 100.0,
            hp_drain_rate: 0.5 / 10.0,
            player_speed: 7.0,
            default_width: 150,
            max_width: 300,
            platform_height: 20.0,
            platform_bottom_margin: 50.0,

            good_heal: 5.0,
            good_score: 10,
            good_shrink: 10,
            bad_damage: 5.0,
            bad_grow: 10,

            spawn_margin: 20.0,
            difficulty: DifficultyCurve::default(),
        }
    }
}

impl GameConfig {
    /// Top edge of the platform
    pub fn platform_top(&self) -> f32 {
        self.screen_height - self.platform_bottom_margin - self.platform_height
    }

    /// Horizontal spawn range `[lo, hi]` for item centers
    pub fn spawn_range(&self) -> (f32, f32) {
        let lo = self.spawn_margin.min(self.screen_width / 2.0);
        let hi = (self.screen_width - self.spawn_margin).max(lo);
        (lo, hi)
    }

    /// Scale factor converting a per-reference-tick quantity to `dt` seconds
    pub fn tick_scale(&self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            dt * self.reference_fps
        } else {
            0.0
        }
    }
}
