//! Idle/demo mode - a bot that plays by reading the game state

use std::collections::HashMap;

use super::state::{GamePhase, GameState};

/// Key the bot presses to leave Idle
pub const START_KEY: char = ' ';

/// Picks keys for the demo player.
///
/// The bot waits `reaction_ticks` between presses and always goes for the
/// glyph group whose lowest letter is closest to the bottom.
#[derive(Debug, Clone)]
pub struct Autoplayer {
    reaction_ticks: u32,
    cooldown: u32,
}

impl Autoplayer {
    pub fn new(reaction_ticks: u32) -> Self {
        Self {
            reaction_ticks,
            cooldown: reaction_ticks,
        }
    }

    /// Called once per host frame; returns the key to press, if any
    pub fn next_key(&mut self, state: &GameState) -> Option<char> {
        match state.phase {
            GamePhase::Idle => {
                self.cooldown = self.reaction_ticks;
                Some(START_KEY)
            }
            GamePhase::Ended(_) => None,
            GamePhase::Playing => {
                if self.cooldown > 0 {
                    self.cooldown -= 1;
                    return None;
                }
                let key = most_urgent_pair(state)?;
                self.cooldown = self.reaction_ticks;
                Some(key)
            }
        }
    }
}

/// Glyph with at least two live letters whose lowest one has fallen furthest
pub fn most_urgent_pair(state: &GameState) -> Option<char> {
    let mut groups: HashMap<char, (usize, f32)> = HashMap::new();
    for letter in state.letters.iter().filter(|l| l.alive) {
        let entry = groups.entry(letter.glyph()).or_insert((0, f32::MIN));
        entry.0 += 1;
        entry.1 = entry.1.max(letter.pos.y);
    }

    groups
        .into_iter()
        .filter(|(_, (count, _))| *count >= 2)
        .max_by(|(ga, (_, ya)), (gb, (_, yb))| {
            ya.partial_cmp(yb)
                .unwrap_or(std::cmp::Ordering::Equal)
                // Stable pick between equally low groups
                .then_with(|| gb.cmp(ga))
        })
        .map(|(glyph, _)| glyph)
}
