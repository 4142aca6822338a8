//! Simulation engine boundary
//!
//! Owns the game state and the high score store. The front end feeds it
//! elapsed time and button state once per frame and reads back a snapshot.

use super::entity::{Item, Player};
use super::state::{GameOverSummary, GamePhase, GameState};
use super::tick::{GameEvent, TickInput, tick};
use crate::config::GameConfig;
use crate::highscores::HighScoreStore;

/// Read-only view of the game after a tick
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub player: &'a Player,
    /// Visible items, in spawn order
    pub items: &'a [Item],
    pub high_score: u64,
    /// Present while in `GamePhase::GameOver`
    pub last_round: Option<GameOverSummary>,
    pub config: &'a GameConfig,
}

/// The simulation engine
pub struct Engine<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Engine<S> {
    /// Start in `GamePhase::Waiting` with the stored high score loaded
    pub fn new(config: GameConfig, seed: u64, store: S) -> Self {
        let high_score = store.load();
        log::info!("Engine ready (seed {}, high score {})", seed, high_score);
        Self {
            state: GameState::new(config, seed, high_score),
            store,
        }
    }

    /// Advance one frame
    pub fn tick(
        &mut self,
        elapsed_seconds: f32,
        move_left: bool,
        move_right: bool,
        toggle_pressed: bool,
    ) -> Vec<GameEvent> {
        let input = TickInput {
            move_left,
            move_right,
            toggle: toggle_pressed,
        };
        self.tick_input(&input, elapsed_seconds)
    }

    /// Advance one frame from a prepared input
    pub fn tick_input(&mut self, input: &TickInput, elapsed_seconds: f32) -> Vec<GameEvent> {
        tick(&mut self.state, &mut self.store, input, elapsed_seconds)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.state.phase,
            player: &self.state.player,
            items: &self.state.items,
            high_score: self.state.high_score,
            last_round: self.state.last_round,
            config: &self.state.config,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    /// Direct state access, for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
