use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Supported keys: (constant, code, canonical name, aliases).
/// Codes follow Linux input-event-codes.h.
const KEYS: &[(&str, u16, &str, &[&str])] = &[
    ("ESC", 1, "esc", &["escape"]),
    ("KEY_1", 2, "1", &[]),
    ("KEY_2", 3, "2", &[]),
    ("KEY_3", 4, "3", &[]),
    ("KEY_4", 5, "4", &[]),
    ("KEY_5", 6, "5", &[]),
    ("KEY_6", 7, "6", &[]),
    ("KEY_7", 8, "7", &[]),
    ("KEY_8", 9, "8", &[]),
    ("KEY_9", 10, "9", &[]),
    ("KEY_0", 11, "0", &[]),
    ("MINUS", 12, "minus", &["-"]),
    ("EQUAL", 13, "equal", &["="]),
    ("BACKSPACE", 14, "backspace", &[]),
    ("TAB", 15, "tab", &[]),
    ("Q", 16, "q", &[]),
    ("W", 17, "w", &[]),
    ("E", 18, "e", &[]),
    ("R", 19, "r", &[]),
    ("T", 20, "t", &[]),
    ("Y", 21, "y", &[]),
    ("U", 22, "u", &[]),
    ("I", 23, "i", &[]),
    ("O", 24, "o", &[]),
    ("P", 25, "p", &[]),
    ("LEFT_BRACE", 26, "leftbrace", &["["]),
    ("RIGHT_BRACE", 27, "rightbrace", &["]"]),
    ("ENTER", 28, "enter", &["return"]),
    ("LEFT_CTRL", 29, "ctrl", &["control", "leftctrl"]),
    ("A", 30, "a", &[]),
    ("S", 31, "s", &[]),
    ("D", 32, "d", &[]),
    ("F", 33, "f", &[]),
    ("G", 34, "g", &[]),
    ("H", 35, "h", &[]),
    ("J", 36, "j", &[]),
    ("K", 37, "k", &[]),
    ("L", 38, "l", &[]),
    ("SEMICOLON", 39, "semicolon", &[";"]),
    ("APOSTROPHE", 40, "apostrophe", &["'"]),
    ("GRAVE", 41, "grave", &["`"]),
    ("LEFT_SHIFT", 42, "shift", &["leftshift"]),
    ("BACKSLASH", 43, "backslash", &["\\"]),
    ("Z", 44, "z", &[]),
    ("X", 45, "x", &[]),
    ("C", 46, "c", &[]),
    ("V", 47, "v", &[]),
    ("B", 48, "b", &[]),
    ("N", 49, "n", &[]),
    ("M", 50, "m", &[]),
    ("COMMA", 51, "comma", &[","]),
    ("DOT", 52, "dot", &[".", "period"]),
    ("SLASH", 53, "slash", &["/"]),
    ("RIGHT_SHIFT", 54, "rightshift", &[]),
    ("KP_ASTERISK", 55, "kpasterisk", &["*"]),
    ("LEFT_ALT", 56, "alt", &["leftalt"]),
    ("SPACE", 57, "space", &[]),
    ("CAPSLOCK", 58, "capslock", &[]),
    ("F1", 59, "f1", &[]),
    ("F2", 60, "f2", &[]),
    ("F3", 61, "f3", &[]),
    ("F4", 62, "f4", &[]),
    ("F5", 63, "f5", &[]),
    ("F6", 64, "f6", &[]),
    ("F7", 65, "f7", &[]),
    ("F8", 66, "f8", &[]),
    ("F9", 67, "f9", &[]),
    ("F10", 68, "f10", &[]),
    ("NUMLOCK", 69, "numlock", &[]),
    ("SCROLLLOCK", 70, "scrolllock", &[]),
    ("KP7", 71, "kp7", &[]),
    ("KP8", 72, "kp8", &[]),
    ("KP9", 73, "kp9", &[]),
    ("KP_MINUS", 74, "kpminus", &[]),
    ("KP4", 75, "kp4", &[]),
    ("KP5", 76, "kp5", &[]),
    ("KP6", 77, "kp6", &[]),
    ("KP_PLUS", 78, "kpplus", &[]),
    ("KP1", 79, "kp1", &[]),
    ("KP2", 80, "kp2", &[]),
    ("KP3", 81, "kp3", &[]),
    ("KP0", 82, "kp0", &[]),
    ("KP_DOT", 83, "kpdot", &[]),
    ("F11", 87, "f11", &[]),
    ("F12", 88, "f12", &[]),
    ("KP_ENTER", 96, "kpenter", &[]),
    ("RIGHT_CTRL", 97, "rightctrl", &[]),
    ("KP_SLASH", 98, "kpslash", &[]),
    ("SYSRQ", 99, "sysrq", &["printscreen", "print"]),
    ("RIGHT_ALT", 100, "rightalt", &["altgr"]),
    ("HOME", 102, "home", &[]),
    ("UP", 103, "up", &[]),
    ("PAGE_UP", 104, "pageup", &["pgup"]),
    ("LEFT", 105, "left", &[]),
    ("RIGHT", 106, "right", &[]),
    ("END", 107, "end", &[]),
    ("DOWN", 108, "down", &[]),
    ("PAGE_DOWN", 109, "pagedown", &["pgdn"]),
    ("INSERT", 110, "insert", &["ins"]),
    ("DELETE", 111, "delete", &["del"]),
    ("MUTE", 113, "mute", &[]),
    ("VOLUME_DOWN", 114, "volumedown", &[]),
    ("VOLUME_UP", 115, "volumeup", &[]),
    ("PAUSE", 119, "pause", &[]),
    ("LEFT_META", 125, "meta", &["win", "super", "leftmeta"]),
    ("RIGHT_META", 126, "rightmeta", &[]),
    ("COMPOSE", 127, "compose", &[]),
    ("MENU", 139, "menu", &[]),
    ("NEXT_SONG", 163, "nextsong", &[]),
    ("PLAY_PAUSE", 164, "playpause", &[]),
    ("PREVIOUS_SONG", 165, "previoussong", &[]),
    ("STOP_CD", 166, "stopcd", &[]),
    ("F13", 183, "f13", &[]),
    ("F14", 184, "f14", &[]),
    ("F15", 185, "f15", &[]),
    ("F16", 186, "f16", &[]),
    ("F17", 187, "f17", &[]),
    ("F18", 188, "f18", &[]),
    ("F19", 189, "f19", &[]),
    ("F20", 190, "f20", &[]),
    ("F21", 191, "f21", &[]),
    ("F22", 192, "f22", &[]),
    ("F23", 193, "f23", &[]),
    ("F24", 194, "f24", &[]),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("key_codes.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Generate the Key newtype wrapper
    writeln!(
        f,
        r#"
/// Represents a single supported keyboard key.
///
/// This is a newtype wrapper around u16 for type safety. Values can only be
/// obtained from the static key table, so every `Key` has a canonical name.
/// The numeric values match Linux input-event-codes.h definitions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(u16);

impl Key {{
    /// Get the raw numeric code value
    pub const fn code(self) -> u16 {{
        self.0
    }}

    /// Get the canonical name of this key
    pub fn name(self) -> &'static str {{
        key_name(self)
    }}

    /// Look up a key by its raw code, if it is in the table
    pub fn from_code(code: u16) -> Option<Key> {{
        KEY_TABLE
            .iter()
            .find(|entry| entry.key.0 == code)
            .map(|entry| entry.key)
    }}
}}

impl From<Key> for u16 {{
    fn from(key: Key) -> Self {{
        key.0
    }}
}}

impl fmt::Debug for Key {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "Key({{}}={{}})", self.name(), self.0)
    }}
}}

impl fmt::Display for Key {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{{}}", self.name())
    }}
}}

impl FromStr for Key {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        key_from_name(s).ok_or_else(|| format!("Unknown key: {{}}", s))
    }}
}}
"#
    )
    .unwrap();

    writeln!(f, "impl Key {{").unwrap();
    for (constant, code, _, _) in KEYS {
        writeln!(f, "    pub const {}: Key = Key({});", constant, code).unwrap();
    }
    writeln!(f, "}}").unwrap();

    writeln!(f, "static KEY_TABLE: &[KeyEntry] = &[").unwrap();
    for (constant, _, name, aliases) in KEYS {
        writeln!(
            f,
            "    KeyEntry {{ name: {:?}, aliases: &{:?}, key: Key::{} }},",
            name, aliases, constant
        )
        .unwrap();
    }
    writeln!(f, "];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
