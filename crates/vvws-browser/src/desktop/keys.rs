//! Key names accepted in shortcut strings.
//!
//! The vocabulary is lowercase and backend-neutral (`ctrl`, `alt`, `pagedown`,
//! `f5`, `1`); each backend translates a [`Key`] into its own syntax.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    /// Windows key on Windows/Linux, Command on macOS
    Super,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Modifier(Modifier),
    Tab,
    Enter,
    Escape,
    Space,
    PageUp,
    PageDown,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Delete,
    Insert,
    F(u8),
    Char(char),
}

impl Key {
    /// Parse one lowercase token of a shortcut string
    pub fn parse(token: &str) -> Option<Self> {
        let key = match token {
            "ctrl" | "control" => Key::Modifier(Modifier::Ctrl),
            "alt" | "option" | "altleft" | "altright" => Key::Modifier(Modifier::Alt),
            "shift" | "shiftleft" | "shiftright" => Key::Modifier(Modifier::Shift),
            "win" | "super" | "command" | "cmd" | "meta" | "winleft" | "winright" => {
                Key::Modifier(Modifier::Super)
            }
            "tab" => Key::Tab,
            "enter" | "return" => Key::Enter,
            "esc" | "escape" => Key::Escape,
            "space" => Key::Space,
            "pageup" | "pgup" => Key::PageUp,
            "pagedown" | "pgdn" => Key::PageDown,
            "home" => Key::Home,
            "end" => Key::End,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "insert" => Key::Insert,
            _ => return Self::parse_function(token).or_else(|| Self::parse_char(token)),
        };
        Some(key)
    }

    fn parse_function(token: &str) -> Option<Self> {
        let n: u8 = token.strip_prefix('f')?.parse().ok()?;
        (1..=24).contains(&n).then_some(Key::F(n))
    }

    fn parse_char(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_graphic() => Some(Key::Char(c)),
            _ => None,
        }
    }
}

/// Parse every token, failing on the first unknown name
pub fn parse_keys(tokens: &[String], backend: &'static str) -> Result<Vec<Key>> {
    tokens
        .iter()
        .map(|token| {
            Key::parse(token).ok_or_else(|| Error::UnsupportedKey {
                key: token.clone(),
                backend,
            })
        })
        .collect()
}

/// A chord split into its held modifiers and the single key they apply to.
#[derive(Debug, PartialEq, Eq)]
pub struct Chord {
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

/// Split keys for backends that can only send "modifiers + one key"
pub fn split_chord(keys: &[Key], backend: &'static str) -> Result<Chord> {
    let mut modifiers = Vec::new();
    let mut rest = Vec::new();
    for key in keys {
        match key {
            Key::Modifier(m) => modifiers.push(*m),
            other => rest.push(*other),
        }
    }

    match rest.as_slice() {
        [key] => Ok(Chord {
            modifiers,
            key: *key,
        }),
        _ => Err(Error::UnsupportedKey {
            key: format!("{} non-modifier keys in one chord", rest.len()),
            backend,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(Key::parse("command"), Some(Key::Modifier(Modifier::Super)));
        assert_eq!(Key::parse("option"), Some(Key::Modifier(Modifier::Alt)));
        assert_eq!(Key::parse("pgdn"), Some(Key::PageDown));
        assert_eq!(Key::parse("f12"), Some(Key::F(12)));
        assert_eq!(Key::parse("1"), Some(Key::Char('1')));
        assert_eq!(Key::parse("f"), Some(Key::Char('f')));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Key::parse("f99"), None);
        assert_eq!(Key::parse("hyper"), None);

        let tokens = vec!["ctrl".to_string(), "nope".to_string()];
        let err = parse_keys(&tokens, "test").unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }

    #[test]
    fn test_split_chord() {
        let keys = [Key::Modifier(Modifier::Ctrl), Key::Modifier(Modifier::Alt), Key::Char('1')];
        let chord = split_chord(&keys, "test").unwrap();

        assert_eq!(chord.modifiers, [Modifier::Ctrl, Modifier::Alt]);
        assert_eq!(chord.key, Key::Char('1'));
    }

    #[test]
    fn test_split_chord_needs_exactly_one_key() {
        assert!(split_chord(&[Key::Modifier(Modifier::Ctrl)], "test").is_err());
        assert!(split_chord(&[Key::Char('a'), Key::Char('b')], "test").is_err());
    }
}
