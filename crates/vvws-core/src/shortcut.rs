use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A keyboard shortcut such as `ctrl+alt+1`.
///
/// Tokens are trimmed and lowercased when parsed. A shortcut with a single
/// token is sent as one key press, anything longer as a chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    keys: Vec<String>,
}

impl Shortcut {
    /// Parse a `+`-separated shortcut string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidShortcut(
                input.to_string(),
                "shortcut is empty".to_string(),
            ));
        }

        let keys: Vec<String> = trimmed
            .split('+')
            .map(|key| key.trim().to_lowercase())
            .collect();

        if keys.iter().any(|key| key.is_empty()) {
            return Err(Error::InvalidShortcut(
                input.to_string(),
                "contains an empty key between '+' separators".to_string(),
            ));
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// True when the shortcut is a single key rather than a chord
    pub fn is_single_key(&self) -> bool {
        self.keys.len() == 1
    }
}

impl FromStr for Shortcut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chord_normalizes_case_and_spacing() {
        let shortcut = Shortcut::parse("  Ctrl + ALT+1 ").unwrap();
        assert_eq!(shortcut.keys(), ["ctrl", "alt", "1"]);
        assert_eq!(shortcut.to_string(), "ctrl+alt+1");
        assert!(!shortcut.is_single_key());
    }

    #[test]
    fn test_parse_single_key() {
        let shortcut: Shortcut = "F5".parse().unwrap();
        assert!(shortcut.is_single_key());
        assert_eq!(shortcut.keys(), ["f5"]);
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Shortcut::parse("").is_err());
        assert!(Shortcut::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_dangling_separator() {
        let err = Shortcut::parse("ctrl+").unwrap_err();
        assert!(err.to_string().contains("empty key"));
    }
}
