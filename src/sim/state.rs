//! Game state and core simulation types
//!
//! Everything a session needs to continue deterministically lives here; a
//! serialized `GameState` resumes exactly where it left off.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::letter::LetterEntity;
use crate::tuning::Tuning;

/// How a run ended. Gameplay is identical; only the message differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Won,
    Lost,
}

impl GameResult {
    /// Text shown on the end screen
    pub fn message(&self) -> &'static str {
        match self {
            GameResult::Won => "You Win!",
            GameResult::Lost => "Game Over!",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first key press
    Idle,
    /// Spawning, falling and matching are active
    Playing,
    /// Run is over; only a restart leaves this phase
    Ended(GameResult),
}

/// Notifications for the renderer, in the order they happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Started,
    Spawned { id: u32, glyph: char, x: f32, y: f32 },
    Moved { id: u32, y: f32 },
    Despawned { id: u32 },
    ScoreChanged { score: u32 },
    Ended { result: GameResult },
    /// Back to Idle after a restart
    Reset,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this session was created from
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Incremented on every restart; stale input is filtered by it
    pub session: u32,
    pub phase: GamePhase,
    pub score: u32,
    /// Units per tick for every live letter
    pub fall_speed: f32,
    /// Next score multiple at which `fall_speed` ramps up
    pub speed_threshold: u32,
    /// Live letters (insertion order carries no meaning)
    pub letters: Vec<LetterEntity>,
    /// Game time accumulated toward the next spawn batch
    pub spawn_elapsed_ms: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub tuning: Tuning,
    /// Pending renderer notifications
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new idle session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::fresh(seed, Tuning::default())
    }

    /// Create a new idle session, rejecting tuning the simulation cannot run
    pub fn with_tuning(seed: u64, tuning: Tuning) -> anyhow::Result<Self> {
        tuning.validate()?;
        Ok(Self::fresh(seed, tuning))
    }

    fn fresh(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            session: 0,
            phase: GamePhase::Idle,
            score: 0,
            fall_speed: tuning.base_fall_speed,
            speed_threshold: tuning.speed_threshold_step,
            letters: Vec::new(),
            spawn_elapsed_ms: 0,
            time_ticks: 0,
            tuning,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::Ended(result) => Some(result),
            _ => None,
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Live letters showing `glyph`
    pub fn live_with_glyph(&self, glyph: char) -> impl Iterator<Item = &LetterEntity> {
        self.letters
            .iter()
            .filter(move |l| l.alive && l.glyph() == glyph)
    }

    /// Kill and remove every letter, announcing each removal
    pub fn despawn_all(&mut self) {
        for letter in std::mem::take(&mut self.letters) {
            self.events.push(GameEvent::Despawned { id: letter.id });
        }
    }

    /// Drop dead letters from the live set
    pub fn compact(&mut self) {
        self.letters.retain(|l| l.alive);
    }

    /// Replace this session with a fresh idle one.
    ///
    /// The new seed comes from the current RNG so a run of sessions stays
    /// reproducible from the first seed. Pending events survive the swap.
    pub fn reset(&mut self) {
        self.despawn_all();
        let seed = self.rng.next_u64();
        let mut fresh = Self::fresh(seed, self.tuning.clone());
        fresh.session = self.session.wrapping_add(1);
        fresh.events = std::mem::take(&mut self.events);
        *self = fresh;
    }
}
