// Vkey Modifier Set
// Represents keyboard combo modifiers (Ctrl, Alt, Shift, Meta)

use smallvec::SmallVec;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::Key;

/// Ordered modifiers of a combo, in the order they were written
pub type ModifierSet = SmallVec<[Modifier; 4]>;

/// A key held while another key is struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    /// Names accepted for this modifier in combo strings
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Modifier::Ctrl => &["ctrl", "control"],
            Modifier::Alt => &["alt"],
            Modifier::Shift => &["shift"],
            Modifier::Meta => &["win", "meta", "super"],
        }
    }

    /// The physical key pressed for this modifier (always the left variant)
    pub const fn key(self) -> Key {
        match self {
            Modifier::Ctrl => Key::LEFT_CTRL,
            Modifier::Alt => Key::LEFT_ALT,
            Modifier::Shift => Key::LEFT_SHIFT,
            Modifier::Meta => Key::LEFT_META,
        }
    }

    /// Get modifier by alias (case-insensitive, surrounding whitespace ignored)
    pub fn from_alias(alias: &str) -> Option<Modifier> {
        let alias = alias.trim();
        Modifier::iter().find(|m| m.aliases().iter().any(|a| a.eq_ignore_ascii_case(alias)))
    }

    /// Every modifier, in display order
    pub fn all() -> impl Iterator<Item = Modifier> {
        Modifier::iter()
    }
}
