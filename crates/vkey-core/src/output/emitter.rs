// Vkey Event Emitter
// Realizes keys, combos and typed text as ordered press/release/sync events

use std::time::Duration;

use super::event::InputEventRecord;
use super::sink::{EventSink, OutputError};
use super::state::HeldKeys;
use crate::text::CharKey;
use crate::{Action, Key, KeyCombo, Modifier};

/// Drives an [`EventSink`] with complete, synchronized key actions.
///
/// Each public operation ends with a SYN_REPORT so the receiving input
/// subsystem handles the whole action as one batch. A write failure aborts the
/// operation immediately; keys pressed before the failure are not released
/// and can be inspected with [`Emitter::held_keys`].
///
/// Key state only counts as delivered once the batch's sync succeeds. Sinks
/// may buffer records until the sync, so every key pressed in a batch that
/// was never synced is reported as possibly held.
pub struct Emitter<S: EventSink> {
    sink: S,
    held: HeldKeys,
    unsynced: Vec<(Key, Action)>,
    char_delay: Duration,
}

impl<S: EventSink> Emitter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            held: HeldKeys::new(),
            unsynced: Vec::new(),
            char_delay: Duration::ZERO,
        }
    }

    /// Pause between typed characters. When non-zero, every character is
    /// synchronized on its own before the pause.
    pub fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Keys that may still be down on the device, oldest first.
    ///
    /// Covers keys held as of the last successful sync plus every key pressed
    /// since then, even if its release was written too.
    pub fn held_keys(&self) -> Vec<Key> {
        let mut keys = self.held.to_vec();
        for &(key, action) in &self.unsynced {
            if action.is_pressed() && !self.held.is_held(key) && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Close the underlying sink
    pub fn close(self) -> Result<(), OutputError> {
        let held = self.held_keys();
        if !held.is_empty() {
            log::warn!("closing with keys still held: {:?}", held);
        }
        self.sink.close()
    }

    fn write_key_event(&mut self, key: Key, action: Action) -> Result<(), OutputError> {
        log::trace!("key event {} {}", key, action);
        self.sink.write(&InputEventRecord::key(key, action))?;
        self.unsynced.push((key, action));
        Ok(())
    }

    fn sync(&mut self) -> Result<(), OutputError> {
        self.sink.write(&InputEventRecord::sync())?;
        for (key, action) in self.unsynced.drain(..) {
            self.held.apply(key, action);
        }
        Ok(())
    }

    fn tap_key(&mut self, key: Key) -> Result<(), OutputError> {
        self.write_key_event(key, Action::Press)?;
        self.write_key_event(key, Action::Release)
    }

    /// Press and release a single key
    pub fn press_and_release(&mut self, key: Key) -> Result<(), OutputError> {
        log::debug!("press_and_release {}", key);
        self.tap_key(key)?;
        self.sync()
    }

    /// Press modifiers in order, tap the key, release modifiers in reverse
    pub fn send_combo(&mut self, modifiers: &[Modifier], key: Key) -> Result<(), OutputError> {
        log::debug!("send_combo modifiers={:?} key={}", modifiers, key);
        for modifier in modifiers {
            self.write_key_event(modifier.key(), Action::Press)?;
        }

        self.tap_key(key)?;

        for modifier in modifiers.iter().rev() {
            self.write_key_event(modifier.key(), Action::Release)?;
        }
        self.sync()
    }

    /// Send a parsed combo; plain keys go through [`Emitter::press_and_release`]
    pub fn send(&mut self, combo: &KeyCombo) -> Result<(), OutputError> {
        if combo.is_plain() {
            self.press_and_release(combo.key())
        } else {
            self.send_combo(combo.modifiers(), combo.key())
        }
    }

    /// Type a token stream, holding Shift only around the characters that
    /// need it. Returns the number of characters typed.
    pub fn type_text<I>(&mut self, tokens: I) -> Result<usize, OutputError>
    where
        I: IntoIterator<Item = CharKey>,
    {
        let shift = Modifier::Shift.key();
        let mut typed = 0;

        for token in tokens {
            if token.shift {
                self.write_key_event(shift, Action::Press)?;
            }
            self.tap_key(token.key)?;
            if token.shift {
                self.write_key_event(shift, Action::Release)?;
            }
            typed += 1;

            if !self.char_delay.is_zero() {
                self.sync()?;
                std::thread::sleep(self.char_delay);
            }
        }

        if self.char_delay.is_zero() {
            self.sync()?;
        }
        log::debug!("type_text typed {} characters", typed);
        Ok(typed)
    }
}
