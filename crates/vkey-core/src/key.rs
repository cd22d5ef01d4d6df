// Vkey Key Type
// Static key table: canonical names, aliases and character mappings

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// One row of the static key table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    /// Canonical lowercase name, returned by reverse lookups
    pub name: &'static str,
    /// Additional names that resolve to the same key
    pub aliases: &'static [&'static str],
    pub key: Key,
}

include!(concat!(env!("OUT_DIR"), "/key_codes.rs"));

fn name_index() -> &'static IndexMap<&'static str, Key> {
    static NAME_TO_KEY: OnceLock<IndexMap<&'static str, Key>> = OnceLock::new();
    NAME_TO_KEY.get_or_init(|| {
        let mut map = IndexMap::new();
        for entry in KEY_TABLE {
            map.insert(entry.name, entry.key);
            for alias in entry.aliases {
                map.insert(*alias, entry.key);
            }
        }
        map
    })
}

/// All table rows in declaration order
pub fn entries() -> &'static [KeyEntry] {
    KEY_TABLE
}

/// Every supported key, once each
pub fn all_keys() -> impl Iterator<Item = Key> {
    KEY_TABLE.iter().map(|entry| entry.key)
}

/// Canonical name for a key
pub fn key_name(key: Key) -> &'static str {
    KEY_TABLE
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.name)
        .unwrap_or("unknown")
}

/// Try to resolve a key name or alias (case-insensitive)
pub fn key_from_name(name: &str) -> Option<Key> {
    let index = name_index();
    index
        .get(name)
        .or_else(|| index.get(name.to_ascii_lowercase().as_str()))
        .copied()
}

/// Map a single character to the physical key that produces it.
///
/// Shifted symbols resolve to their unshifted key (`'_'` and `'-'` are both
/// MINUS); whether Shift is needed is decided by [`crate::text::requires_shift`].
pub fn ascii_to_key(c: char) -> Option<Key> {
    if c.is_ascii_alphabetic() {
        let mut buf = [0u8; 4];
        return key_from_name(c.to_ascii_lowercase().encode_utf8(&mut buf));
    }

    match c {
        '1' | '!' => Some(Key::KEY_1),
        '2' | '@' => Some(Key::KEY_2),
        '3' | '#' => Some(Key::KEY_3),
        '4' | '$' => Some(Key::KEY_4),
        '5' | '%' => Some(Key::KEY_5),
        '6' | '^' => Some(Key::KEY_6),
        '7' | '&' => Some(Key::KEY_7),
        '8' | '*' => Some(Key::KEY_8),
        '9' | '(' => Some(Key::KEY_9),
        '0' | ')' => Some(Key::KEY_0),
        '-' | '_' => Some(Key::MINUS),
        '=' | '+' => Some(Key::EQUAL),
        '[' | '{' => Some(Key::LEFT_BRACE),
        ']' | '}' => Some(Key::RIGHT_BRACE),
        '\\' | '|' => Some(Key::BACKSLASH),
        ';' | ':' => Some(Key::SEMICOLON),
        '\'' | '"' => Some(Key::APOSTROPHE),
        '`' | '~' => Some(Key::GRAVE),
        ',' | '<' => Some(Key::COMMA),
        '.' | '>' => Some(Key::DOT),
        '/' | '?' => Some(Key::SLASH),
        ' ' => Some(Key::SPACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("a"), Some(Key::A));
        assert_eq!(key_from_name("A"), Some(Key::A));
        assert_eq!(key_from_name("ENTER"), Some(Key::ENTER));
        assert_eq!(key_from_name("1"), Some(Key::KEY_1));
        assert_eq!(key_from_name("0"), Some(Key::KEY_0));
        assert_eq!(key_from_name("printscreen"), Some(Key::SYSRQ));
        assert_eq!(key_from_name("pause"), Some(Key::PAUSE));
        assert_eq!(key_from_name("notakey"), None);
    }

    #[test]
    fn test_aliases_resolve_to_same_key() {
        assert_eq!(key_from_name("control"), key_from_name("ctrl"));
        assert_eq!(key_from_name("escape"), Some(Key::ESC));
        assert_eq!(key_from_name("del"), Some(Key::DELETE));
        for alias in ["win", "meta", "super", "Super"] {
            assert_eq!(key_from_name(alias), Some(Key::LEFT_META), "{alias}");
        }
    }

    #[test]
    fn test_codes_match_input_event_codes() {
        assert_eq!(Key::ESC.code(), 1);
        assert_eq!(Key::KEY_1.code(), 2);
        assert_eq!(Key::KEY_9.code(), 10);
        assert_eq!(Key::KEY_0.code(), 11);
        assert_eq!(Key::LEFT_CTRL.code(), 29);
        assert_eq!(Key::A.code(), 30);
        assert_eq!(Key::F4.code(), 62);
        assert_eq!(Key::DELETE.code(), 111);
        assert_eq!(Key::LEFT_META.code(), 125);
    }

    #[test]
    fn test_lookup_is_total_and_case_insensitive_for_table_names() {
        for entry in entries() {
            for name in std::iter::once(&entry.name).chain(entry.aliases) {
                assert_eq!(key_from_name(name), Some(entry.key), "{name}");
                assert_eq!(
                    key_from_name(&name.to_uppercase()),
                    Some(entry.key),
                    "{name} uppercased"
                );
            }
        }
    }

    #[test]
    fn test_reverse_lookup_is_non_empty() {
        for key in all_keys() {
            assert!(!key_name(key).is_empty());
            assert_eq!(key_from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn test_canonical_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for entry in entries() {
            assert!(seen.insert(entry.key), "duplicate key {:?}", entry.key);
        }
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::A.to_string(), "a");
        assert_eq!(Key::LEFT_CTRL.to_string(), "ctrl");
        assert_eq!(format!("{:?}", Key::ENTER), "Key(enter=28)");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code(28), Some(Key::ENTER));
        assert_eq!(Key::from_code(0), None);
        assert_eq!(Key::from_code(84), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("F4".parse::<Key>(), Ok(Key::F4));
        assert!("hyper".parse::<Key>().is_err());
    }

    #[test]
    fn test_ascii_letters_ignore_case() {
        assert_eq!(ascii_to_key('a'), Some(Key::A));
        assert_eq!(ascii_to_key('A'), Some(Key::A));
        assert_eq!(ascii_to_key('z'), Some(Key::Z));
    }

    #[test]
    fn test_ascii_digits() {
        let expected = [
            ('1', Key::KEY_1),
            ('2', Key::KEY_2),
            ('3', Key::KEY_3),
            ('4', Key::KEY_4),
            ('5', Key::KEY_5),
            ('6', Key::KEY_6),
            ('7', Key::KEY_7),
            ('8', Key::KEY_8),
            ('9', Key::KEY_9),
            ('0', Key::KEY_0),
        ];
        for (c, key) in expected {
            assert_eq!(ascii_to_key(c), Some(key), "{c}");
        }
    }

    #[test]
    fn test_ascii_symbols_share_physical_key() {
        assert_eq!(ascii_to_key('-'), Some(Key::MINUS));
        assert_eq!(ascii_to_key('_'), Some(Key::MINUS));
        assert_eq!(ascii_to_key('!'), Some(Key::KEY_1));
        assert_eq!(ascii_to_key(')'), Some(Key::KEY_0));
        assert_eq!(ascii_to_key('?'), Some(Key::SLASH));
        assert_eq!(ascii_to_key(' '), Some(Key::SPACE));
    }

    #[test]
    fn test_ascii_unknown() {
        assert_eq!(ascii_to_key('\u{7}'), None);
        assert_eq!(ascii_to_key('\n'), None);
        assert_eq!(ascii_to_key('\t'), None);
        assert_eq!(ascii_to_key('é'), None);
        assert_eq!(ascii_to_key('€'), None);
    }
}
