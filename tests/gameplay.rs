//! Whole-game behavior through the public simulation API

use std::collections::HashMap;

use glam::Vec2;
use proptest::prelude::*;

use letter_rain::consts::FRAME_MS;
use letter_rain::sim::autoplay::most_urgent_pair;
use letter_rain::sim::{
    GameEvent, GamePhase, GameResult, GameState, KeyOutcome, LetterEntity, MatchOutcome,
    batch_glyphs, batch_size, press_key, request_restart, resolve_key, spawn_batch, tick,
};
use letter_rain::Tuning;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    assert_eq!(press_key(&mut state, ' '), KeyOutcome::Started);
    state
}

/// A glyph with no live letter on the field
fn absent_glyph(state: &GameState) -> char {
    ('A'..='Z')
        .find(|g| state.live_with_glyph(*g).next().is_none())
        .expect("field never holds all 26 glyphs in these tests")
}

/// Drop a fresh pair on the field and return its glyph
fn add_pair(state: &mut GameState) -> char {
    let glyph = absent_glyph(state);
    for x in [100.0, 200.0] {
        let id = state.next_entity_id();
        state.letters.push(LetterEntity::new(id, glyph, Vec2::new(x, 0.0)));
    }
    glyph
}

#[test]
fn test_opening_scenario() {
    let mut state = started(11);
    tick(&mut state, FRAME_MS);
    assert!((state.fall_speed - 0.5).abs() < 1e-6);

    let nothing = absent_glyph(&state);
    press_key(&mut state, nothing);
    assert_eq!(state.score, 0);

    for expected in 1..=2 {
        let glyph = add_pair(&mut state);
        press_key(&mut state, glyph);
        assert_eq!(state.score, expected);
        tick(&mut state, FRAME_MS);
        assert!((state.fall_speed - 0.5).abs() < 1e-6);
    }

    for _ in 0..3 {
        let glyph = add_pair(&mut state);
        press_key(&mut state, glyph);
    }
    assert_eq!(state.score, 5);
    tick(&mut state, FRAME_MS);
    assert!((state.fall_speed - 0.6).abs() < 1e-6);
    assert_eq!(state.speed_threshold, 10);
}

#[test]
fn test_win_scenario() {
    let mut state = started(12);
    state.score = 48;

    let glyph = add_pair(&mut state);
    press_key(&mut state, glyph);
    assert_eq!(state.score, 49);
    assert_eq!(state.phase, GamePhase::Playing);

    let glyph = add_pair(&mut state);
    let spare = add_pair(&mut state);
    press_key(&mut state, glyph);
    assert_eq!(state.score, 50);
    assert_eq!(state.phase, GamePhase::Ended(GameResult::Won));
    assert!(state.letters.is_empty());

    // Input after the winning press is not processed
    assert_eq!(press_key(&mut state, spare), KeyOutcome::Ignored);
    assert_eq!(state.score, 50);
}

#[test]
fn test_any_letter_past_bottom_loses() {
    let mut state = started(13);
    // Others are still far above the field
    let id = state.next_entity_id();
    state.letters.push(LetterEntity::new(id, 'Q', Vec2::new(10.0, 650.0)));
    tick(&mut state, FRAME_MS);
    assert_eq!(state.result(), Some(GameResult::Lost));
}

#[test]
fn test_restart_resets_everything() {
    let mut state = started(14);
    for _ in 0..500 {
        tick(&mut state, FRAME_MS);
    }
    state.score = 7;
    state.fall_speed = 0.9;
    state.speed_threshold = 15;
    letter_rain::sim::end_game(&mut state, GameResult::Lost);

    assert!(request_restart(&mut state));
    assert_eq!(state.score, 0);
    assert_eq!(state.fall_speed, Tuning::default().base_fall_speed);
    assert_eq!(state.speed_threshold, 5);
    assert!(state.letters.is_empty());
    assert_eq!(state.phase, GamePhase::Idle);
    assert_eq!(state.time_ticks, 0);
}

#[test]
fn test_restored_state_continues_identically() {
    let mut original = started(15);
    for _ in 0..200 {
        tick(&mut original, FRAME_MS);
    }
    let json = serde_json::to_string(&original).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();

    for state in [&mut original, &mut restored] {
        for i in 0..400 {
            if i % 25 == 0 {
                if let Some(glyph) = most_urgent_pair(state) {
                    press_key(state, glyph);
                }
            }
            tick(state, FRAME_MS);
        }
    }

    assert_eq!(original.score, restored.score);
    assert_eq!(original.letters, restored.letters);
    assert_eq!(original.phase, restored.phase);
}

#[test]
fn test_lost_run_announces_every_removal() {
    let mut state = started(16);
    let mut spawned = Vec::new();
    let mut despawned = Vec::new();
    while state.is_playing() {
        tick(&mut state, FRAME_MS);
        for event in state.drain_events() {
            match event {
                GameEvent::Spawned { id, .. } => spawned.push(id),
                GameEvent::Despawned { id } => despawned.push(id),
                _ => {}
            }
        }
    }
    assert!(spawned.len() >= 6);
    spawned.sort_unstable();
    despawned.sort_unstable();
    assert_eq!(spawned, despawned);
}

proptest! {
    #[test]
    fn prop_penalty_floors_at_zero(score in 0u32..200) {
        let mut state = started(1);
        state.letters.clear();
        state.score = score;
        let outcome = resolve_key(&mut state, 'M');
        prop_assert_eq!(outcome, Some(MatchOutcome::Missed { glyph: 'M' }));
        prop_assert_eq!(state.score, score.saturating_sub(2));
    }

    #[test]
    fn prop_batches_are_paired(seed in any::<u64>(), score in 0u32..60) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let size = batch_size(score, &tuning);
        let glyphs = batch_glyphs(&mut rng, size);
        prop_assert_eq!(glyphs.len() % 2, 0);
        prop_assert!((2..=8).contains(&glyphs.len()));

        let mut counts: HashMap<char, usize> = HashMap::new();
        for g in glyphs {
            *counts.entry(g).or_default() += 1;
        }
        prop_assert!(counts.values().all(|c| c % 2 == 0));
    }

    #[test]
    fn prop_spawned_batch_is_paired(seed in any::<u64>(), score in 0u32..60) {
        let mut state = GameState::new(seed);
        state.score = score;
        spawn_batch(&mut state);
        let mut counts: HashMap<char, usize> = HashMap::new();
        for event in state.drain_events() {
            if let GameEvent::Spawned { glyph, .. } = event {
                *counts.entry(glyph).or_default() += 1;
            }
        }
        prop_assert!(counts.values().all(|c| c % 2 == 0));
    }

    #[test]
    fn prop_group_clears_for_one_point(n in 2usize..7, score in 0u32..40) {
        let mut state = started(2);
        state.letters.clear();
        state.score = score;
        for i in 0..n {
            let id = state.next_entity_id();
            state.letters.push(LetterEntity::new(id, 'K', Vec2::new(i as f32, 0.0)));
        }
        let id = state.next_entity_id();
        state.letters.push(LetterEntity::new(id, 'J', Vec2::ZERO));

        let outcome = resolve_key(&mut state, 'K');
        prop_assert_eq!(outcome, Some(MatchOutcome::Cleared { glyph: 'K', count: n }));
        prop_assert_eq!(state.score, score + 1);
        prop_assert_eq!(state.letters.len(), 1);
    }

    #[test]
    fn prop_fall_speed_never_decreases(seed in any::<u64>(), ops in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut state = started(seed);
        let mut last = state.fall_speed;
        for op in ops {
            match op {
                0..=159 => tick(&mut state, FRAME_MS),
                160..=229 => {
                    if let Some(glyph) = most_urgent_pair(&state) {
                        press_key(&mut state, glyph);
                    }
                }
                _ => {
                    press_key(&mut state, char::from(b'A' + op % 26));
                }
            }
            if !state.is_playing() {
                break;
            }
            prop_assert!(state.fall_speed >= last);
            last = state.fall_speed;
        }
    }
}
