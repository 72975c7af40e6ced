//! Letter spawning
//!
//! Every batch is built from pairs of the same glyph, so whatever lands on the
//! field can always be cleared.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::letter::LetterEntity;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Letters in the next batch for the given score (always even)
pub fn batch_size(score: u32, tuning: &Tuning) -> u32 {
    let base = tuning.min_batch_letters + score / tuning.score_per_extra_letter;
    let clamped = base.clamp(tuning.min_batch_letters, tuning.max_batch_letters);
    (clamped / 2) * 2
}

/// Random A-Z glyph
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}

/// Shuffled glyphs for one batch: `size / 2` random glyphs, each twice
pub fn batch_glyphs<R: Rng + ?Sized>(rng: &mut R, size: u32) -> Vec<char> {
    let mut glyphs = Vec::with_capacity(size as usize);
    for _ in 0..size / 2 {
        let glyph = random_glyph(rng);
        glyphs.push(glyph);
        glyphs.push(glyph);
    }
    glyphs.shuffle(rng);
    glyphs
}

/// Spawn one batch above the top of the field. Returns the new letter IDs.
pub fn spawn_batch(state: &mut GameState) -> Vec<u32> {
    let size = batch_size(state.score, &state.tuning);
    let glyphs = batch_glyphs(&mut state.rng, size);

    let mut ids = Vec::with_capacity(glyphs.len());
    for glyph in glyphs {
        let x = state
            .rng
            .random_range(state.tuning.spawn_x_min..=state.tuning.spawn_x_max) as f32;
        let y = state
            .rng
            .random_range(state.tuning.spawn_y_min..=state.tuning.spawn_y_max) as f32;
        let id = state.next_entity_id();
        state.letters.push(LetterEntity::new(id, glyph, Vec2::new(x, y)));
        state.emit(GameEvent::Spawned { id, glyph, x, y });
        ids.push(id);
    }

    log::debug!("Spawned batch of {} at score {}", ids.len(), state.score);
    ids
}

/// Advance the spawn cadence by `dt_ms`, spawning a batch per elapsed interval
pub fn advance_cadence(state: &mut GameState, dt_ms: u32) -> u32 {
    let interval = state.tuning.spawn_interval_ms;
    state.spawn_elapsed_ms = state.spawn_elapsed_ms.saturating_add(dt_ms);

    let mut batches = 0;
    while state.spawn_elapsed_ms >= interval {
        state.spawn_elapsed_ms -= interval;
        spawn_batch(state);
        batches += 1;
    }
    batches
}
