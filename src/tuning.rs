//! Game balance tuning
//!
//! Every gameplay constant lives here so a run can be rebalanced from a JSON
//! file without touching the simulation. Missing fields fall back to
//! [`crate::consts`].

use std::path::Path;

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play-field ===
    /// Width of the play-field (x range the renderer should show)
    pub field_width: f32,
    /// Letters falling past this y end the run
    pub bottom_boundary: f32,

    // === Spawning ===
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,
    /// Score points per extra letter in a batch
    pub score_per_extra_letter: u32,
    pub min_batch_letters: u32,
    pub max_batch_letters: u32,
    /// Batches spawned on start
    pub initial_batches: u32,
    pub spawn_interval_ms: u32,

    // === Difficulty ===
    pub base_fall_speed: f32,
    pub start_fall_speed: f32,
    pub fall_speed_step: f32,
    pub speed_threshold_step: u32,

    // === Scoring ===
    pub win_score: u32,
    pub match_reward: u32,
    pub miss_penalty: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            bottom_boundary: BOTTOM_BOUNDARY,

            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: SPAWN_X_MAX,
            spawn_y_min: SPAWN_Y_MIN,
            spawn_y_max: SPAWN_Y_MAX,
            score_per_extra_letter: SCORE_PER_EXTRA_LETTER,
            min_batch_letters: MIN_BATCH_LETTERS,
            max_batch_letters: MAX_BATCH_LETTERS,
            initial_batches: INITIAL_BATCHES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            base_fall_speed: BASE_FALL_SPEED,
            start_fall_speed: START_FALL_SPEED,
            fall_speed_step: FALL_SPEED_STEP,
            speed_threshold_step: SPEED_THRESHOLD_STEP,

            win_score: WIN_SCORE,
            match_reward: MATCH_REWARD,
            miss_penalty: MISS_PENALTY,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tuning: Self = serde_json::from_str(json).context("invalid tuning JSON")?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {}", path.display()))?;
        let tuning =
            Self::from_json(&json).with_context(|| format!("in tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.bottom_boundary > 0.0, "bottom_boundary must be positive");
        ensure!(
            self.spawn_x_min <= self.spawn_x_max,
            "spawn_x_min ({}) exceeds spawn_x_max ({})",
            self.spawn_x_min,
            self.spawn_x_max
        );
        ensure!(
            self.spawn_y_min <= self.spawn_y_max,
            "spawn_y_min ({}) exceeds spawn_y_max ({})",
            self.spawn_y_min,
            self.spawn_y_max
        );
        // A batch below two letters would hold no pair.
        ensure!(self.min_batch_letters >= 2, "min_batch_letters must be at least 2");
        ensure!(
            self.min_batch_letters <= self.max_batch_letters,
            "min_batch_letters exceeds max_batch_letters"
        );
        ensure!(self.score_per_extra_letter > 0, "score_per_extra_letter must be positive");
        ensure!(self.spawn_interval_ms > 0, "spawn_interval_ms must be positive");
        ensure!(self.speed_threshold_step > 0, "speed_threshold_step must be positive");
        ensure!(
            self.base_fall_speed >= 0.0 && self.fall_speed_step >= 0.0,
            "fall speeds must not be negative"
        );
        ensure!(self.win_score > 0, "win_score must be positive");
        Ok(())
    }
}
