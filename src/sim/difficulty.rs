//! Difficulty curve
//!
//! Pure functions of the current score. Items fall faster, spawn more often,
//! shrink, and turn bad more often as the score climbs.

use crate::config::DifficultyCurve;

/// Item parameters for a given score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub fall_speed: f32,
    pub spawn_interval_ticks: u32,
    pub item_size: u32,
    pub good_chance: f32,
}

impl Difficulty {
    pub fn at(score: u64, curve: &DifficultyCurve) -> Self {
        Self {
            fall_speed: fall_speed(score, curve),
            spawn_interval_ticks: spawn_interval_ticks(score, curve),
            item_size: item_size(score, curve),
            good_chance: good_chance(score, curve),
        }
    }
}

/// `base + score / step` pixels per tick
pub fn fall_speed(score: u64, curve: &DifficultyCurve) -> f32 {
    curve.base_fall_speed + (score / curve.fall_speed_step.max(1)) as f32
}

/// `max(min, base - score / step)` ticks
pub fn spawn_interval_ticks(score: u64, curve: &DifficultyCurve) -> u32 {
    let shrink = score / curve.spawn_interval_step.max(1);
    let interval = (curve.spawn_base as u64).saturating_sub(shrink) as u32;
    interval.max(curve.min_spawn_interval).max(1)
}

/// `max(min, base - score / step)` pixels
pub fn item_size(score: u64, curve: &DifficultyCurve) -> u32 {
    let shrink = score / curve.item_size_step.max(1);
    let size = (curve.base_item_size as u64).saturating_sub(shrink) as u32;
    size.max(curve.min_item_size)
}

/// `max(floor, base - score / span)`, kept inside `[0, 1]`
pub fn good_chance(score: u64, curve: &DifficultyCurve) -> f32 {
    let drop = if curve.good_chance_span > 0.0 {
        score as f32 / curve.good_chance_span
    } else {
        0.0
    };
    (curve.good_chance_base - drop)
        .max(curve.good_chance_floor)
        .clamp(0.0, 1.0)
}
