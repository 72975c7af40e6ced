//! Session state machine and the per-tick update
//!
//! Idle --(any key)--> Playing --(letter past bottom)--> Ended(Lost)
//!                             --(win score reached)--> Ended(Won)
//! Ended --(restart)--> Idle
//!
//! Every other combination of phase and input is a no-op.

use super::difficulty::update_fall_speed;
use super::matching::{MatchOutcome, resolve_key};
use super::spawn::{advance_cadence, spawn_batch};
use super::state::{GameEvent, GamePhase, GameResult, GameState};

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The press started the run (it is not matched)
    Started,
    Matched(MatchOutcome),
    /// Ended phase: nothing listens for keys
    Ignored,
}

/// Handle one key press to completion
pub fn press_key(state: &mut GameState, key: char) -> KeyOutcome {
    match state.phase {
        GamePhase::Idle => {
            start_game(state);
            KeyOutcome::Started
        }
        GamePhase::Playing => match resolve_key(state, key) {
            Some(outcome) => KeyOutcome::Matched(outcome),
            None => KeyOutcome::Ignored,
        },
        GamePhase::Ended(_) => KeyOutcome::Ignored,
    }
}

/// Leave Idle: fresh score and speed, initial batches, cadence armed
pub fn start_game(state: &mut GameState) {
    if state.phase != GamePhase::Idle {
        return;
    }

    state.phase = GamePhase::Playing;
    state.score = 0;
    state.fall_speed = state.tuning.base_fall_speed;
    state.speed_threshold = state.tuning.speed_threshold_step;
    state.spawn_elapsed_ms = 0;
    state.emit(GameEvent::Started);
    state.emit(GameEvent::ScoreChanged { score: 0 });

    for _ in 0..state.tuning.initial_batches {
        spawn_batch(state);
    }
    log::info!(
        "Session {} started (seed {}), {} letters on the field",
        state.session,
        state.seed,
        state.letters.len()
    );
}

/// Enter Ended: clear the field and announce the result
pub fn end_game(state: &mut GameState, result: GameResult) {
    if !state.is_playing() {
        return;
    }
    state.phase = GamePhase::Ended(result);
    state.despawn_all();
    state.emit(GameEvent::Ended { result });
    log::info!(
        "Session {} ended: {} (score {}, {} ticks)",
        state.session,
        result.message(),
        state.score,
        state.time_ticks
    );
}

/// Ended -> Idle with a wholesale reset. Returns false (and changes nothing)
/// from any other phase.
pub fn request_restart(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Ended(_) => {
            state.reset();
            state.emit(GameEvent::Reset);
            log::info!("Restarted into session {}", state.session);
            true
        }
        phase => {
            log::debug!("Restart ignored in {:?}", phase);
            false
        }
    }
}

/// Advance the game by one host frame of `dt_ms` game time
pub fn tick(state: &mut GameState, dt_ms: u32) {
    // Nothing moves or spawns outside of play
    if !state.is_playing() {
        return;
    }

    state.time_ticks += 1;

    advance_cadence(state, dt_ms);

    let speed = state.fall_speed;
    let boundary = state.tuning.bottom_boundary;
    let mut fell_out = None;
    for letter in state.letters.iter_mut().filter(|l| l.alive) {
        letter.fall(speed);
        state.events.push(GameEvent::Moved {
            id: letter.id,
            y: letter.pos.y,
        });
        if fell_out.is_none() && letter.is_below(boundary) {
            fell_out = Some(letter.id);
        }
    }

    if let Some(id) = fell_out {
        log::debug!("Letter {} reached the bottom", id);
        end_game(state, GameResult::Lost);
        return;
    }

    update_fall_speed(state);
}
