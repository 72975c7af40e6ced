//! Falling letter entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A letter falling down the play-field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterEntity {
    /// Identity within a session (renderer handles are keyed by it)
    pub id: u32,
    glyph: char,
    /// `x` is fixed at spawn, `y` grows as the letter falls
    pub pos: Vec2,
    /// Cleared once matched or the run ends
    pub alive: bool,
}

impl LetterEntity {
    pub fn new(id: u32, glyph: char, pos: Vec2) -> Self {
        Self {
            id,
            glyph,
            pos,
            alive: true,
        }
    }

    /// The glyph this letter shows. Fixed for the entity's lifetime.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Move down by one tick's worth of fall
    pub fn fall(&mut self, speed: f32) {
        self.pos.y += speed;
    }

    /// True once the letter has dropped past the bottom boundary
    pub fn is_below(&self, boundary: f32) -> bool {
        self.pos.y > boundary
    }
}
