//! Key press matching and scoring

use super::state::{GameEvent, GameResult, GameState};
use super::tick::end_game;

/// What a key press did while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `count` letters showing `glyph` were cleared
    Cleared { glyph: char, count: usize },
    /// Fewer than two letters matched; the score took the penalty
    Missed { glyph: char },
}

/// Resolve one key press against the live letters.
///
/// Returns `None` when not playing. Every live letter with the pressed glyph
/// goes at once, so a group of three or four clears for a single reward.
pub fn resolve_key(state: &mut GameState, key: char) -> Option<MatchOutcome> {
    if !state.is_playing() {
        return None;
    }
    let glyph = key.to_ascii_uppercase();

    let matched: Vec<u32> = state.live_with_glyph(glyph).map(|l| l.id).collect();

    if matched.len() < 2 {
        state.score = state.score.saturating_sub(state.tuning.miss_penalty);
        state.emit(GameEvent::ScoreChanged { score: state.score });
        log::debug!("Miss on {:?}, score {}", glyph, state.score);
        return Some(MatchOutcome::Missed { glyph });
    }

    state.score += state.tuning.match_reward;
    state.emit(GameEvent::ScoreChanged { score: state.score });

    for letter in state.letters.iter_mut().filter(|l| matched.contains(&l.id)) {
        letter.alive = false;
    }
    state.compact();
    for id in &matched {
        state.emit(GameEvent::Despawned { id: *id });
    }
    log::debug!(
        "Cleared {} x {:?}, score {}",
        matched.len(),
        glyph,
        state.score
    );

    if state.score >= state.tuning.win_score {
        end_game(state, GameResult::Won);
    }

    Some(MatchOutcome::Cleared {
        glyph,
        count: matched.len(),
    })
}
