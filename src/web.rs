//! Browser bindings
//!
//! The JS side owns the canvas/DOM and keeps its own sprites keyed by letter
//! id. Each `tick` returns the events since the last call as a JSON array.

use wasm_bindgen::prelude::*;

use crate::input::{InputQueue, KeyPress};
use crate::sim::{self, GameState};
use crate::tuning::Tuning;

/// Key names longer than one character ("Shift", "Enter") are not letters
const NON_LETTER: char = '\0';

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Letter Rain starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: InputQueue,
}

#[wasm_bindgen]
impl WebGame {
    /// New idle game. A zero seed picks one from the clock.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebGame {
        let seed = if seed == 0.0 { js_sys::Date::now() } else { seed };
        let seed = seed as u64;
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            state: GameState::new(seed),
            input: InputQueue::new(),
        }
    }

    /// New idle game with tuning overrides given as JSON
    pub fn with_tuning(seed: f64, tuning_json: &str) -> Result<WebGame, JsError> {
        let tuning =
            Tuning::from_json(tuning_json).map_err(|e| JsError::new(&format!("{e:#}")))?;
        let mut game = WebGame::new(seed);
        game.state = GameState::with_tuning(game.state.seed, tuning)
            .map_err(|e| JsError::new(&format!("{e:#}")))?;
        Ok(game)
    }

    /// `KeyboardEvent.key` of a keydown
    pub fn key_down(&mut self, key: &str) {
        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => NON_LETTER,
        };
        self.input.push(KeyPress {
            key,
            session: self.state.session,
        });
    }

    /// Restart button. Returns false unless the run had ended.
    pub fn restart(&mut self) -> bool {
        let restarted = sim::request_restart(&mut self.state);
        if restarted {
            self.input.clear();
        }
        restarted
    }

    /// Handle queued keys, advance one frame and return the events as JSON
    pub fn tick(&mut self, dt_ms: u32) -> String {
        for key in self.input.drain_session(self.state.session) {
            sim::press_key(&mut self.state, key);
        }
        sim::tick(&mut self.state, dt_ms);
        let events = self.state.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Failed to encode events: {}", e);
            "[]".to_string()
        })
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn field_width(&self) -> f32 {
        self.state.tuning.field_width
    }

    pub fn field_height(&self) -> f32 {
        self.state.tuning.bottom_boundary
    }

    /// Full state as JSON (debug overlay)
    pub fn snapshot(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|e| {
            log::warn!("Failed to encode snapshot: {}", e);
            String::new()
        })
    }
}
