// Vkey Combo Type
// Represents a key combination: ordered modifiers plus one main key

use std::fmt;
use std::str::FromStr;

use crate::config::{parse_combo_string, ComboParseError};
use crate::modifier::{Modifier, ModifierSet};
use crate::Key;

/// A parsed key combination.
///
/// Modifiers keep the order they were written in; the emitter presses them in
/// that order and releases them in reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    modifiers: ModifierSet,
    key: Key,
}

impl KeyCombo {
    /// Create a new combo from modifiers and a key
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>, key: Key) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            key,
        }
    }

    /// A combo with no modifiers
    pub fn plain(key: Key) -> Self {
        Self {
            modifiers: ModifierSet::new(),
            key,
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// True when no modifier is involved
    pub fn is_plain(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier)?;
        }
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeyCombo {
    type Err = ComboParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_combo_string(s)
    }
}
