// Vkey Core Library
// Key combination parsing and event emission for a virtual keyboard

pub mod action;
pub mod combo;
pub mod config;
pub mod key;
pub mod modifier;
pub mod output;
pub mod settings;
pub mod text;

pub use action::Action;
pub use combo::KeyCombo;
pub use config::{parse_combo_string, ComboParseError};
pub use key::{ascii_to_key, key_from_name, key_name, Key, KeyEntry};
pub use modifier::{Modifier, ModifierSet};
pub use output::{Emitter, EventSink, InputEventRecord, OutputError, RecordingSink};
pub use settings::{Settings, SettingsError};
pub use text::{requires_shift, tokenize, CharKey, Tokens};

#[cfg(feature = "uinput")]
pub use output::UInputSink;
