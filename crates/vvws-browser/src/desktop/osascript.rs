use super::keys::{Chord, Key, Modifier, parse_keys, split_chord};
use super::tool::run_checked;
use super::{Activation, Desktop, Window};
use crate::{Error, Result};

const TOOL: &str = "osascript";
const APP_NAME: &str = "Vivaldi";

const LIST_WINDOWS: &str = r#"set out to ""
tell application "System Events"
    repeat with p in (every process whose name contains "Vivaldi")
        repeat with w in (every window of p)
            set out to out & (name of w) & tab & (value of attribute "AXMinimized" of w) & linefeed
        end repeat
    end repeat
end tell
return out"#;

/// macOS backend driven through AppleScript and System Events
#[derive(Debug, Default)]
pub struct Osascript;

impl Osascript {
    fn script(&self, script: &str, action: &str) -> Result<String> {
        run_checked(TOOL, &["-e", script], action)
    }

    fn send(&self, keys: &[String]) -> Result<()> {
        let script = keystroke_script(keys)?;
        self.script(&script, "Sending shortcut")?;
        Ok(())
    }
}

impl Desktop for Osascript {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn windows(&self) -> Result<Vec<Window>> {
        let out = self.script(LIST_WINDOWS, "Listing windows")?;
        Ok(parse_window_list(&out))
    }

    fn supports(&self, activation: Activation) -> bool {
        !matches!(activation, Activation::Click)
    }

    fn activate(&self, window: &Window, activation: Activation) -> Result<()> {
        let script = match activation {
            Activation::Restore => format!(
                r#"tell application "System Events" to set value of attribute "AXMinimized" of (first window of (first process whose name contains "{}") whose name is "{}") to false"#,
                APP_NAME,
                escape(&window.title)
            ),
            Activation::Activate => format!(r#"tell application "{}" to activate"#, APP_NAME),
            Activation::Focus => format!(
                r#"tell application "System Events" to set frontmost of (first process whose name contains "{}") to true"#,
                APP_NAME
            ),
            Activation::Click => {
                return Err(Error::ExternalAction {
                    action: "Clicking window".to_string(),
                    reason: "not supported by osascript".to_string(),
                });
            }
        };
        self.script(&script, "Activating window")?;
        Ok(())
    }

    fn press(&self, key: &str) -> Result<()> {
        self.send(&[key.to_string()])
    }

    fn hotkey(&self, keys: &[String]) -> Result<()> {
        self.send(keys)
    }
}

fn parse_window_list(out: &str) -> Vec<Window> {
    out.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            let (title, minimized) = match line.rsplit_once('\t') {
                Some((title, state)) => (title, state.trim().parse::<bool>().ok()),
                None => (line, None),
            };
            Window {
                id: i.to_string(),
                title: title.to_string(),
                minimized,
            }
        })
        .collect()
}

/// System Events script that types the chord
fn keystroke_script(keys: &[String]) -> Result<String> {
    let keys = parse_keys(keys, TOOL)?;
    let Chord { modifiers, key } = split_chord(&keys, TOOL)?;

    let action = match key {
        Key::Char(c) => format!("keystroke \"{}\"", escape(&c.to_string())),
        Key::Space => "keystroke space".to_string(),
        other => format!("key code {}", key_code(other)?),
    };

    let using = if modifiers.is_empty() {
        String::new()
    } else {
        let held: Vec<&str> = modifiers
            .iter()
            .map(|m| match m {
                Modifier::Ctrl => "control down",
                Modifier::Alt => "option down",
                Modifier::Shift => "shift down",
                Modifier::Super => "command down",
            })
            .collect();
        format!(" using {{{}}}", held.join(", "))
    };

    Ok(format!(
        r#"tell application "System Events" to {}{}"#,
        action, using
    ))
}

/// macOS virtual key code for non-character keys
fn key_code(key: Key) -> Result<u16> {
    let code = match key {
        Key::Tab => 48,
        Key::Enter => 36,
        Key::Escape => 53,
        Key::Space => 49,
        Key::PageUp => 116,
        Key::PageDown => 121,
        Key::Home => 115,
        Key::End => 119,
        Key::Up => 126,
        Key::Down => 125,
        Key::Left => 123,
        Key::Right => 124,
        Key::Backspace => 51,
        Key::Delete => 117,
        Key::F(n) => match n {
            1 => 122,
            2 => 120,
            3 => 99,
            4 => 118,
            5 => 96,
            6 => 97,
            7 => 98,
            8 => 100,
            9 => 101,
            10 => 109,
            11 => 103,
            12 => 111,
            _ => return Err(unsupported(key)),
        },
        Key::Insert | Key::Modifier(_) | Key::Char(_) => return Err(unsupported(key)),
    };
    Ok(code)
}

fn unsupported(key: Key) -> Error {
    Error::UnsupportedKey {
        key: format!("{:?}", key).to_lowercase(),
        backend: TOOL,
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shortcut: &str) -> Vec<String> {
        shortcut.split('+').map(str::to_string).collect()
    }

    #[test]
    fn test_keystroke_with_modifiers() {
        assert_eq!(
            keystroke_script(&keys("ctrl+alt+1")).unwrap(),
            r#"tell application "System Events" to keystroke "1" using {control down, option down}"#
        );
    }

    #[test]
    fn test_named_key_uses_key_code() {
        assert_eq!(
            keystroke_script(&keys("ctrl+tab")).unwrap(),
            r#"tell application "System Events" to key code 48 using {control down}"#
        );
        assert_eq!(
            keystroke_script(&keys("f5")).unwrap(),
            r#"tell application "System Events" to key code 96"#
        );
    }

    #[test]
    fn test_command_maps_to_command_down() {
        let script = keystroke_script(&keys("command+shift+k")).unwrap();
        assert!(script.ends_with("using {command down, shift down}"));
    }

    #[test]
    fn test_modifier_only_chord_is_rejected() {
        assert!(keystroke_script(&keys("ctrl+alt")).is_err());
        assert!(keystroke_script(&keys("f20")).is_err());
    }

    #[test]
    fn test_parse_window_list() {
        let windows = parse_window_list("Vivaldi - Start Page\tfalse\nDownloads\ttrue\n\n");

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].title, "Vivaldi - Start Page");
        assert_eq!(windows[0].minimized, Some(false));
        assert_eq!(windows[1].minimized, Some(true));
    }
}
