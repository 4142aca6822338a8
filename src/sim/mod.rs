//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Time-based rates scaled by the reference tick rate
//! - No rendering, audio or terminal dependencies
//! - The only I/O is the high score store, at round end and on restart

pub mod collision;
pub mod difficulty;
pub mod engine;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::colliding_items;
pub use difficulty::Difficulty;
pub use engine::{Engine, Snapshot};
pub use entity::{Bounds, Item, ItemKind, Player, Rect, ResizeOutcome};
pub use state::{GameOverSummary, GamePhase, GameState};
pub use tick::{GameEvent, TickInput, tick};
