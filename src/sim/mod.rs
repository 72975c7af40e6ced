//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Renderer notifications go out as `GameEvent`s, never direct calls

pub mod autoplay;
pub mod difficulty;
pub mod letter;
pub mod matching;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autoplay::Autoplayer;
pub use letter::LetterEntity;
pub use matching::{MatchOutcome, resolve_key};
pub use spawn::{batch_glyphs, batch_size, spawn_batch};
pub use state::{GameEvent, GamePhase, GameResult, GameState};
pub use tick::{KeyOutcome, end_game, press_key, request_restart, start_game, tick};
