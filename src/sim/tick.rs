//! Per-frame simulation step
//!
//! Advances the game state by one tick: toggle handling first, then (only
//! while playing) movement, health drain, spawning, falling, and catches.

use glam::Vec2;
use rand::Rng;

use super::collision::colliding_items;
use super::difficulty::Difficulty;
use super::entity::{Item, ItemKind, ResizeOutcome};
use super::state::{GameOverSummary, GamePhase, GameState};
use crate::highscores::HighScoreStore;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held left
    pub move_left: bool,
    /// Held right
    pub move_right: bool,
    /// Toggle button went down since the previous tick (edge, not level)
    pub toggle: bool,
}

/// Things that happened during a tick, for sound and display
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    ItemSpawned { id: u32, kind: ItemKind },
    ItemCaught { id: u32, kind: ItemKind },
    /// The platform was shrunk to nothing
    PlatformDestroyed,
    GameOver(GameOverSummary),
}

/// Advance the game by `dt` seconds
pub fn tick<S: HighScoreStore + ?Sized>(
    state: &mut GameState,
    store: &mut S,
    input: &TickInput,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.toggle {
        toggle(state, store, &mut events);
    }

    if state.phase == GamePhase::Playing {
        update_playing(state, store, input, dt, &mut events);
    }

    events
}

/// Apply one press of the toggle button
fn toggle<S: HighScoreStore + ?Sized>(
    state: &mut GameState,
    store: &mut S,
    events: &mut Vec<GameEvent>,
) {
    let from = state.phase;
    let to = from.toggled();

    if from == GamePhase::GameOver {
        state.reset_round();
        state.high_score = store.load().max(state.high_score);
        log::info!("Restarting, high score {}", state.high_score);
    }

    state.phase = to;
    log::info!("Phase {:?} -> {:?}", from, to);
    events.push(GameEvent::PhaseChanged { from, to });
}

fn update_playing<S: HighScoreStore + ?Sized>(
    state: &mut GameState,
    store: &mut S,
    input: &TickInput,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let scale = state.config.tick_scale(dt);

    // Movement
    state
        .player
        .move_by(input.move_left, input.move_right, dt, &state.config);

    // Health drain (time based, not tick based)
    let drain = state.config.hp_drain_rate * scale;
    state.player.adjust_health(-drain, &state.config);

    // Spawning
    let difficulty = Difficulty::at(state.player.score, &state.config.difficulty);
    let first_new_id = state.peek_entity_id();
    state.spawn_counter += 1;
    if state.spawn_counter >= difficulty.spawn_interval_ticks {
        state.spawn_counter = 0;
        let item = spawn_item(state, &difficulty);
        log::debug!("Spawned {:?} item {} at x={}", item.kind, item.id, item.pos.x);
        events.push(GameEvent::ItemSpawned {
            id: item.id,
            kind: item.kind,
        });
        state.items.push(item);
    }

    // Falling
    let config = &state.config;
    state.items.retain_mut(|item| !item.advance(dt, config));

    // Catches: the whole collision set is gathered before any effect applies
    let hits = colliding_items(&state.player, &state.items, first_new_id);
    if !hits.is_empty() {
        let mut caught = Vec::with_capacity(hits.len());
        state.items.retain(|item| {
            if hits.contains(&item.id) {
                caught.push((item.id, item.kind));
                false
            } else {
                true
            }
        });

        for (id, kind) in caught {
            if state.phase != GamePhase::Playing {
                break;
            }
            events.push(GameEvent::ItemCaught { id, kind });
            if apply_catch(state, kind) == ResizeOutcome::Fatal {
                log::info!("Platform destroyed at score {}", state.player.score);
                events.push(GameEvent::PlatformDestroyed);
                end_round(state, store, events);
            }
        }
    }

    if state.phase == GamePhase::Playing && state.player.is_dead() {
        log::info!("Health depleted at score {}", state.player.score);
        end_round(state, store, events);
    }
}

/// Create one item at the top of the screen with a random column and kind
fn spawn_item(state: &mut GameState, difficulty: &Difficulty) -> Item {
    let (lo, hi) = state.config.spawn_range();
    let x = state.rng.random_range(lo.round() as i32..=hi.round() as i32) as f32;
    let kind = if state.rng.random_bool(difficulty.good_chance as f64) {
        ItemKind::Good
    } else {
        ItemKind::Bad
    };

    Item {
        id: state.next_entity_id(),
        kind,
        pos: Vec2::new(x, 0.0),
        speed: difficulty.fall_speed,
        size: difficulty.item_size,
    }
}

/// Health, score and size effects of catching one item
fn apply_catch(state: &mut GameState, kind: ItemKind) -> ResizeOutcome {
    let config = &state.config;
    let player = &mut state.player;
    match kind {
        ItemKind::Good => {
            player.adjust_health(config.good_heal, config);
            player.score += config.good_score;
            player.resize(-config.good_shrink, config)
        }
        ItemKind::Bad => {
            player.adjust_health(-config.bad_damage, config);
            player.resize(config.bad_grow, config)
        }
    }
}

/// Finish the round and record the score
fn end_round<S: HighScoreStore + ?Sized>(
    state: &mut GameState,
    store: &mut S,
    events: &mut Vec<GameEvent>,
) {
    let score = state.player.score;
    let prior = state.high_score;
    let high_score = store.save(score).max(prior);

    let summary = GameOverSummary {
        final_score: score,
        high_score,
        new_high_score: score > 0 && score >= prior,
    };
    state.high_score = high_score;
    state.last_round = Some(summary);

    let from = state.phase;
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over: score {}, high score {}{} (seed {})",
        score,
        high_score,
        if summary.new_high_score { " (new)" } else { "" },
        state.seed
    );
    events.push(GameEvent::PhaseChanged {
        from,
        to: GamePhase::GameOver,
    });
    events.push(GameEvent::GameOver(summary));
}
