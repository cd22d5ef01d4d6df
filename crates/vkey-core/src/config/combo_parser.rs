// Vkey Combo String Parser
// Parses combo strings like "ctrl+shift+esc" into structured components

use crate::key::{ascii_to_key, key_from_name};
use crate::modifier::{Modifier, ModifierSet};
use crate::{Key, KeyCombo};

/// Errors that can occur during combo parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComboParseError {
    /// Empty input string
    #[error("key combination cannot be empty")]
    EmptyInput,

    /// Key name or character not recognized
    #[error("unknown key: '{0}'")]
    UnknownKey(String),

    /// A modifier used without a main key (e.g. "ctrl")
    #[error("'{0}' is a modifier key, use it like '{0}+enter'")]
    BareModifier(String),

    /// Ctrl+Alt+Delete in any order or spelling
    #[error("SECURITY BLOCKED: Ctrl+Alt+Del combination is not allowed")]
    SecurityBlocked,
}

/// Parse a combo string like "ctrl+alt+t" into modifiers and key
///
/// The input is lowercased and split on `+`; each part is trimmed. The last
/// part is the main key. Every part, including the last, that names a
/// modifier is added to the modifier list in order.
///
/// # Examples
/// ```
/// use vkey_core::config::parse_combo_string;
/// use vkey_core::{Key, Modifier};
/// let combo = parse_combo_string("ctrl+enter").unwrap();
/// assert_eq!(combo.modifiers(), &[Modifier::Ctrl]);
/// assert_eq!(combo.key(), Key::ENTER);
/// ```
pub fn parse_combo_string(exp: &str) -> Result<KeyCombo, ComboParseError> {
    let lowered = exp.to_lowercase();
    if lowered.trim().is_empty() {
        return Err(ComboParseError::EmptyInput);
    }

    let parts: Vec<&str> = lowered.split('+').map(str::trim).collect();

    if is_blocked_combination(&parts) {
        log::warn!("refusing to send blocked combination '{}'", exp);
        return Err(ComboParseError::SecurityBlocked);
    }

    let Some((&key_str, leading)) = parts.split_last() else {
        return Err(ComboParseError::EmptyInput);
    };

    if leading.is_empty() && Modifier::from_alias(key_str).is_some() {
        return Err(ComboParseError::BareModifier(key_str.to_string()));
    }

    let modifiers: ModifierSet = parts
        .iter()
        .filter_map(|part| Modifier::from_alias(part))
        .collect();

    for part in leading {
        if Modifier::from_alias(part).is_none() {
            log::warn!("ignoring '{}' in '{}': not a modifier", part, exp);
        }
    }

    let key = resolve_key(key_str).ok_or_else(|| ComboParseError::UnknownKey(key_str.to_string()))?;

    Ok(KeyCombo::new(modifiers, key))
}

/// Name lookup first, then single-character lookup
fn resolve_key(token: &str) -> Option<Key> {
    key_from_name(token).or_else(|| {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ascii_to_key(c),
            _ => None,
        }
    })
}

/// Ctrl, Alt and Delete all present, regardless of order or extra parts
fn is_blocked_combination(parts: &[&str]) -> bool {
    let has_ctrl = parts
        .iter()
        .any(|p| Modifier::from_alias(p) == Some(Modifier::Ctrl));
    let has_alt = parts
        .iter()
        .any(|p| Modifier::from_alias(p) == Some(Modifier::Alt));
    let has_delete = parts.iter().any(|p| key_from_name(p) == Some(Key::DELETE));
    has_ctrl && has_alt && has_delete
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let parsed = parse_combo_string("a").unwrap();
        assert!(parsed.modifiers().is_empty());
        assert_eq!(parsed.key(), Key::A);
    }

    #[test]
    fn test_parse_single_modifier() {
        let parsed = parse_combo_string("ctrl+enter").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Ctrl]);
        assert_eq!(parsed.key(), Key::ENTER);
    }

    #[test]
    fn test_parse_alt_f4() {
        let parsed = parse_combo_string("alt+f4").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Alt]);
        assert_eq!(parsed.key(), Key::F4);
    }

    #[test]
    fn test_parse_multiple_modifiers_in_order() {
        let parsed = parse_combo_string("shift+ctrl+esc").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Shift, Modifier::Ctrl]);
        assert_eq!(parsed.key(), Key::ESC);
    }

    #[test]
    fn test_parse_all_modifiers() {
        let parsed = parse_combo_string("ctrl+shift+alt+super+a").unwrap();
        assert_eq!(parsed.modifiers().len(), 4);
    }

    #[test]
    fn test_parse_case_and_whitespace() {
        let parsed = parse_combo_string(" Ctrl + Shift + T ").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(parsed.key(), Key::T);
    }

    #[test]
    fn test_parse_duplicate_modifiers_kept() {
        let parsed = parse_combo_string("ctrl+control+c").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Ctrl, Modifier::Ctrl]);
    }

    #[test]
    fn test_parse_modifier_as_main_key() {
        // Trailing modifier is both a modifier and the main key
        let parsed = parse_combo_string("ctrl+shift").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(parsed.key(), Key::LEFT_SHIFT);
    }

    #[test]
    fn test_parse_bare_modifier() {
        for bare in ["ctrl", "control", "alt", "shift", "win", "meta", "super", "CTRL"] {
            let result = parse_combo_string(bare);
            assert!(
                matches!(result, Err(ComboParseError::BareModifier(_))),
                "{bare}: {result:?}"
            );
        }
    }

    #[test]
    fn test_bare_modifier_message_names_the_key() {
        let err = parse_combo_string("ctrl").unwrap_err();
        assert_eq!(err, ComboParseError::BareModifier("ctrl".to_string()));
        assert!(err.to_string().contains("ctrl+enter"));
    }

    #[test]
    fn test_parse_security_blocked() {
        for combo in [
            "ctrl+alt+del",
            "ctrl+alt+delete",
            "alt+ctrl+del",
            "delete+alt+control",
            "CTRL+ALT+DEL",
            "shift+ctrl+alt+del",
            "ctrl + alt + del",
        ] {
            assert_eq!(
                parse_combo_string(combo),
                Err(ComboParseError::SecurityBlocked),
                "{combo}"
            );
        }
    }

    #[test]
    fn test_partial_blocked_combination_is_allowed() {
        assert!(parse_combo_string("ctrl+del").is_ok());
        assert!(parse_combo_string("alt+delete").is_ok());
        assert!(parse_combo_string("ctrl+alt+t").is_ok());
    }

    #[test]
    fn test_parse_empty_string() {
        assert_eq!(parse_combo_string(""), Err(ComboParseError::EmptyInput));
        assert_eq!(parse_combo_string("   "), Err(ComboParseError::EmptyInput));
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            parse_combo_string("ctrl+notarealkey"),
            Err(ComboParseError::UnknownKey("notarealkey".to_string()))
        );
    }

    #[test]
    fn test_parse_trailing_plus() {
        assert_eq!(
            parse_combo_string("ctrl+"),
            Err(ComboParseError::UnknownKey(String::new()))
        );
    }

    #[test]
    fn test_parse_character_fallback() {
        let parsed = parse_combo_string("shift+!").unwrap();
        assert_eq!(parsed.modifiers(), &[Modifier::Shift]);
        assert_eq!(parsed.key(), Key::KEY_1);

        let parsed = parse_combo_string("ctrl+_").unwrap();
        assert_eq!(parsed.key(), Key::MINUS);
    }

    #[test]
    fn test_parse_ignores_non_modifier_prefix() {
        let parsed = parse_combo_string("a+b").unwrap();
        assert!(parsed.modifiers().is_empty());
        assert_eq!(parsed.key(), Key::B);
    }

    #[test]
    fn test_parse_special_keys() {
        let cases = [
            ("tab", Key::TAB),
            ("escape", Key::ESC),
            ("pagedown", Key::PAGE_DOWN),
            ("f12", Key::F12),
            ("printscreen", Key::SYSRQ),
            ("space", Key::SPACE),
        ];
        for (combo, key) in cases {
            assert_eq!(parse_combo_string(combo).unwrap().key(), key, "{combo}");
        }
    }
}
