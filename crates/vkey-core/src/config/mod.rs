// Vkey Config API
// Combo parsing for the `key` command

pub mod combo_parser;

pub use combo_parser::{parse_combo_string, ComboParseError};
