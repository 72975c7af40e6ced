//! Host-facing game session
//!
//! A `Session` is the one object a host constructs per game window. It owns
//! the simulation state, queues key presses between frames and replays every
//! `GameEvent` onto a [`Renderer`], keeping whatever handles the renderer
//! hands back.

use std::collections::HashMap;

use crate::input::{InputQueue, KeyPress};
use crate::sim::{self, GameEvent, GameResult, GameState};
use crate::tuning::Tuning;

/// Presentation side of the game. The core only says where letters are, when
/// they exist and when they go away.
pub trait Renderer {
    /// Opaque per-letter handle (a sprite, a DOM node, an index...)
    type Handle;

    fn on_start(&mut self);
    fn on_spawn(&mut self, glyph: char, x: f32, y: f32) -> Self::Handle;
    fn on_tick(&mut self, handle: &Self::Handle, y: f32);
    fn on_despawn(&mut self, handle: Self::Handle);
    fn on_score_changed(&mut self, score: u32);
    fn on_game_ended(&mut self, result: GameResult);
    /// Back to the start screen after a restart
    fn on_reset(&mut self) {}
}

pub struct Session<R: Renderer> {
    state: GameState,
    input: InputQueue,
    handles: HashMap<u32, R::Handle>,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Fails when `tuning` does not validate
    pub fn new(seed: u64, tuning: Tuning, renderer: R) -> anyhow::Result<Self> {
        Ok(Self {
            state: GameState::with_tuning(seed, tuning)?,
            input: InputQueue::new(),
            handles: HashMap::new(),
            renderer,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Queue a key press for the next `update`
    pub fn key_press(&mut self, key: char) {
        self.input.push(KeyPress {
            key,
            session: self.state.session,
        });
    }

    /// Restart an ended run. Pending input from the old run is dropped before
    /// the fresh session is armed.
    pub fn request_restart(&mut self) -> bool {
        let restarted = sim::request_restart(&mut self.state);
        if restarted {
            self.input.clear();
        }
        self.dispatch_events();
        restarted
    }

    /// Handle queued key presses in order, then advance one frame
    pub fn update(&mut self, dt_ms: u32) {
        for key in self.input.drain_session(self.state.session) {
            sim::press_key(&mut self.state, key);
        }
        sim::tick(&mut self.state, dt_ms);
        self.dispatch_events();
    }

    /// Number of letters the renderer currently holds handles for
    pub fn live_handles(&self) -> usize {
        self.handles.len()
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => self.renderer.on_start(),
                GameEvent::Spawned { id, glyph, x, y } => {
                    let handle = self.renderer.on_spawn(glyph, x, y);
                    self.handles.insert(id, handle);
                }
                GameEvent::Moved { id, y } => {
                    if let Some(handle) = self.handles.get(&id) {
                        self.renderer.on_tick(handle, y);
                    }
                }
                GameEvent::Despawned { id } => {
                    if let Some(handle) = self.handles.remove(&id) {
                        self.renderer.on_despawn(handle);
                    }
                }
                GameEvent::ScoreChanged { score } => self.renderer.on_score_changed(score),
                GameEvent::Ended { result } => self.renderer.on_game_ended(result),
                GameEvent::Reset => {
                    for (_, handle) in self.handles.drain() {
                        self.renderer.on_despawn(handle);
                    }
                    self.renderer.on_reset();
                }
            }
        }
    }
}
