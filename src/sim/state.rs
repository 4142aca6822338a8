//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Item, Player};
use crate::config::GameConfig;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title prompt, nothing moves
    Waiting,
    /// Active gameplay
    Playing,
    /// Frozen mid-round
    Paused,
    /// Round ended; the next toggle starts a fresh one
    GameOver,
}

impl GamePhase {
    /// Phase reached by pressing the toggle button
    pub fn toggled(self) -> GamePhase {
        match self {
            GamePhase::Waiting => GamePhase::Playing,
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::Playing,
        }
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub final_score: u64,
    /// High score after this round was recorded
    pub high_score: u64,
    /// The round matched or beat the previous record (and scored something)
    pub new_high_score: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed, logged with every result so a round can be replayed
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Falling items, in spawn order
    pub items: Vec<Item>,
    /// Ticks since the last spawn
    pub spawn_counter: u32,
    /// Best score known to the store
    pub high_score: u64,
    /// Set when the latest round ended, cleared on restart
    pub last_round: Option<GameOverSummary>,
    next_id: u32,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64, high_score: u64) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Waiting,
            player,
            items: Vec::new(),
            spawn_counter: 0,
            high_score,
            last_round: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next spawned item will receive
    pub fn peek_entity_id(&self) -> u32 {
        self.next_id
    }

    /// Fresh platform, no items, counters zeroed. The RNG stream continues.
    pub fn reset_round(&mut self) {
        self.player = Player::new(&self.config);
        self.items.clear();
        self.spawn_counter = 0;
        self.last_round = None;
    }
}
