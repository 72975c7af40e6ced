//! Key press queue
//!
//! The host pushes key presses as they arrive; the session drains them between
//! ticks so every press runs to completion before the next one.

/// A key press, stamped with the session it was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub session: u32,
}

/// A queue of key presses.
#[derive(Debug, Default)]
pub struct InputQueue {
    presses: Vec<KeyPress>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            presses: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, press: KeyPress) {
        self.presses.push(press);
    }

    /// Drain pending presses made in `session`, in arrival order. Presses
    /// stamped with any other session are dropped.
    pub fn drain_session(&mut self, session: u32) -> Vec<char> {
        let mut keys = Vec::with_capacity(self.presses.len());
        for press in self.presses.drain(..) {
            if press.session != session {
                log::debug!(
                    "Dropping key {:?} from stale session {}",
                    press.key,
                    press.session
                );
                continue;
            }
            keys.push(press.key);
        }
        keys
    }

    /// Drop everything pending (used when a session is torn down).
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }
}
