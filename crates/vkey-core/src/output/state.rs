// Vkey Held Key State
// Keys the emitter has pressed but not yet released, in press order

use crate::{Action, Key};
use indexmap::IndexSet;

/// Tracks keys currently held down on the virtual device
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: IndexSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event that reached the device
    pub fn apply(&mut self, key: Key, action: Action) {
        match action {
            Action::Press => {
                self.held.insert(key);
            }
            Action::Release => {
                // keep press order for the remaining keys
                self.held.shift_remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Held keys, oldest press first
    pub fn to_vec(&self) -> Vec<Key> {
        self.held.iter().copied().collect()
    }
}
