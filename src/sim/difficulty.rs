//! Fall speed progression

use super::state::GameState;

/// Ratchet `fall_speed` from the current score. Called once per playing tick.
///
/// Below the first threshold the speed is held at the start speed. From there
/// every exact multiple of `speed_threshold` adds one step and moves the
/// threshold on. Neither value ever goes back down, even after penalties.
pub fn update_fall_speed(state: &mut GameState) {
    let tuning = &state.tuning;

    if state.score < tuning.speed_threshold_step {
        state.fall_speed = state.fall_speed.max(tuning.start_fall_speed);
    }

    if state.score >= tuning.speed_threshold_step && state.score % state.speed_threshold == 0 {
        state.fall_speed += tuning.fall_speed_step;
        state.speed_threshold += tuning.speed_threshold_step;
        log::debug!(
            "Fall speed {:.1} at score {}, next ramp at {}",
            state.fall_speed,
            state.score,
            state.speed_threshold
        );
    }
}
