//! Letter Rain - a falling-letters typing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, falling, matching, game phases)
//! - `session`: Host-owned session that feeds input and forwards events to a renderer
//! - `input`: Key press queue shared between the host and the session
//! - `tuning`: Data-driven game balance
//! - `web`: wasm-bindgen wrapper for a browser renderer (wasm32 only)

pub mod input;
pub mod session;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::{Renderer, Session};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play-field width in world units
    pub const FIELD_WIDTH: f32 = 1000.0;
    /// A letter whose y exceeds this ends the run
    pub const BOTTOM_BOUNDARY: f32 = 600.0;

    /// Horizontal spawn range (inclusive)
    pub const SPAWN_X_MIN: i32 = 50;
    pub const SPAWN_X_MAX: i32 = 950;
    /// Vertical spawn range (inclusive), above the visible top
    pub const SPAWN_Y_MIN: i32 = -200;
    pub const SPAWN_Y_MAX: i32 = -100;

    /// Fall speed before the first ramp check (units per tick)
    pub const BASE_FALL_SPEED: f32 = 0.1;
    /// Fall speed floor while score is below the first threshold
    pub const START_FALL_SPEED: f32 = 0.5;
    /// Fall speed added at every threshold
    pub const FALL_SPEED_STEP: f32 = 0.1;
    /// Score distance between speed ramps (also the first threshold)
    pub const SPEED_THRESHOLD_STEP: u32 = 5;

    /// Every this many points adds one letter to a spawn batch
    pub const SCORE_PER_EXTRA_LETTER: u32 = 5;
    /// Batch size clamp (letters, before pairing)
    pub const MIN_BATCH_LETTERS: u32 = 2;
    pub const MAX_BATCH_LETTERS: u32 = 8;
    /// Batches spawned the moment play starts
    pub const INITIAL_BATCHES: u32 = 3;
    /// Game time between spawn batches
    pub const SPAWN_INTERVAL_MS: u32 = 1000;

    /// Reaching this score wins the run
    pub const WIN_SCORE: u32 = 50;
    pub const MATCH_REWARD: u32 = 1;
    pub const MISS_PENALTY: u32 = 2;

    /// Host frame duration used by the native runner (~60 Hz)
    pub const FRAME_MS: u32 = 16;
}
