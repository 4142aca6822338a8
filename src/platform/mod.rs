//! Platform layer
//!
//! Handles terminal-specific concerns for the front end:
//! - Keyboard polling and held-key tracking
//! - Frame pacing
//! - Raw mode and alternate screen setup/teardown
//! - Logging to a file while the UI owns the terminal

pub mod clock;
pub mod input;
pub mod logging;
pub mod terminal;

pub use clock::{FrameClock, clamp_dt};
pub use input::InputState;
