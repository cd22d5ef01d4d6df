// Vkey Text Tokenizer
// Turns free text into (key, needs-shift) pairs for a US layout

use std::str::Chars;

use crate::key::ascii_to_key;
use crate::Key;

/// Physical key for one character, plus whether Shift must be held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharKey {
    pub key: Key,
    pub shift: bool,
}

impl CharKey {
    /// Resolve a single character; `None` if no key produces it
    pub fn from_char(c: char) -> Option<Self> {
        ascii_to_key(c).map(|key| CharKey {
            key,
            shift: requires_shift(c),
        })
    }
}

/// Whether typing `c` needs Shift on a US keyboard layout
pub fn requires_shift(c: char) -> bool {
    c.is_ascii_uppercase()
        || matches!(
            c,
            '!' | '@'
                | '#'
                | '$'
                | '%'
                | '^'
                | '&'
                | '*'
                | '('
                | ')'
                | '_'
                | '+'
                | '{'
                | '}'
                | '|'
                | ':'
                | '"'
                | '~'
                | '<'
                | '>'
                | '?'
                | '`'
        )
}

/// Lazy iterator over the typeable characters of a string.
///
/// Characters without a key are skipped and counted.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Chars<'a>,
    skipped: usize,
}

impl Tokens<'_> {
    /// Number of characters skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl Iterator for Tokens<'_> {
    type Item = CharKey;

    fn next(&mut self) -> Option<CharKey> {
        for c in self.chars.by_ref() {
            match CharKey::from_char(c) {
                Some(token) => return Some(token),
                None => {
                    log::debug!("skipping untypeable character {:?}", c);
                    self.skipped += 1;
                }
            }
        }
        None
    }
}

/// Tokenize `text` in order
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars(),
        skipped: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mixed_case_and_symbol() {
        let tokens: Vec<CharKey> = tokenize("Hi!").collect();
        assert_eq!(
            tokens,
            vec![
                CharKey { key: Key::H, shift: true },
                CharKey { key: Key::I, shift: false },
                CharKey { key: Key::KEY_1, shift: true },
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_unmapped() {
        let mut tokens = tokenize("a\u{7}b€c");
        let collected: Vec<Key> = tokens.by_ref().map(|t| t.key).collect();
        assert_eq!(collected, vec![Key::A, Key::B, Key::C]);
        assert_eq!(tokens.skipped(), 2);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_tokenize_space_but_not_control_whitespace() {
        let mut tokens = tokenize("a b\n\tc");
        let keys: Vec<Key> = tokens.by_ref().map(|t| t.key).collect();
        assert_eq!(keys, vec![Key::A, Key::SPACE, Key::B, Key::C]);
        assert_eq!(tokens.skipped(), 2);
    }

    #[test]
    fn test_requires_shift() {
        for c in "ABZ!@#$%^&*()_+{}|:\"~<>?`".chars() {
            assert!(requires_shift(c), "{c:?} should need shift");
        }
        for c in "abz0123456789-=[]\\;',./ ".chars() {
            assert!(!requires_shift(c), "{c:?} should not need shift");
        }
    }

    #[test]
    fn test_shifted_symbols_share_unshifted_key() {
        assert_eq!(CharKey::from_char('_'), Some(CharKey { key: Key::MINUS, shift: true }));
        assert_eq!(CharKey::from_char('-'), Some(CharKey { key: Key::MINUS, shift: false }));
        assert_eq!(CharKey::from_char('~'), Some(CharKey { key: Key::GRAVE, shift: true }));
        assert_eq!(CharKey::from_char('`'), Some(CharKey { key: Key::GRAVE, shift: true }));
    }
}
