use super::keys::{Chord, Key, Modifier, parse_keys, split_chord};
use super::tool::run_checked;
use super::{Activation, Desktop, Window};
use crate::{Error, Result};

const TOOL: &str = "powershell";

const LIST_WINDOWS: &str = "Get-Process | Where-Object { $_.MainWindowTitle -like '*Vivaldi*' } | \
     ForEach-Object { \"$($_.Id)`t$($_.MainWindowTitle)\" }";

/// Windows backend using `WScript.Shell` through PowerShell
#[derive(Debug, Default)]
pub struct PowerShell;

impl PowerShell {
    fn command(&self, script: &str, action: &str) -> Result<String> {
        run_checked(
            TOOL,
            &["-NoProfile", "-NonInteractive", "-Command", script],
            action,
        )
    }

    fn send(&self, keys: &[String]) -> Result<()> {
        let sequence = send_keys_sequence(keys)?;
        let script = format!(
            "(New-Object -ComObject WScript.Shell).SendKeys('{}')",
            sequence.replace('\'', "''")
        );
        self.command(&script, "Sending shortcut")?;
        Ok(())
    }
}

impl Desktop for PowerShell {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn windows(&self) -> Result<Vec<Window>> {
        let out = self.command(LIST_WINDOWS, "Listing windows")?;
        Ok(parse_process_list(&out))
    }

    fn supports(&self, activation: Activation) -> bool {
        matches!(activation, Activation::Activate)
    }

    fn activate(&self, window: &Window, activation: Activation) -> Result<()> {
        if activation != Activation::Activate {
            return Err(Error::ExternalAction {
                action: format!("{:?} window", activation),
                reason: "not supported by powershell".to_string(),
            });
        }

        let pid: u32 = window.id.parse().map_err(|_| Error::ExternalAction {
            action: "Activating window".to_string(),
            reason: format!("'{}' is not a process id", window.id),
        })?;
        let out = self.command(
            &format!("(New-Object -ComObject WScript.Shell).AppActivate({})", pid),
            "Activating window",
        )?;

        if out.trim().eq_ignore_ascii_case("false") {
            return Err(Error::ExternalAction {
                action: "Activating window".to_string(),
                reason: format!("AppActivate refused process {}", pid),
            });
        }
        Ok(())
    }

    fn press(&self, key: &str) -> Result<()> {
        self.send(&[key.to_string()])
    }

    fn hotkey(&self, keys: &[String]) -> Result<()> {
        self.send(keys)
    }
}

/// `pid<TAB>title` lines into windows; lines without a tab are ignored
fn parse_process_list(out: &str) -> Vec<Window> {
    out.lines()
        .filter_map(|line| line.trim_end().split_once('\t'))
        .map(|(pid, title)| Window {
            id: pid.trim().to_string(),
            title: title.to_string(),
            minimized: None,
        })
        .collect()
}

/// SendKeys notation, e.g. `^%1` for ctrl+alt+1
fn send_keys_sequence(keys: &[String]) -> Result<String> {
    let keys = parse_keys(keys, TOOL)?;
    let Chord { modifiers, key } = split_chord(&keys, TOOL)?;

    let mut sequence = String::new();
    for modifier in modifiers {
        sequence.push_str(match modifier {
            Modifier::Ctrl => "^",
            Modifier::Alt => "%",
            Modifier::Shift => "+",
            Modifier::Super => {
                return Err(Error::UnsupportedKey {
                    key: "win".to_string(),
                    backend: TOOL,
                });
            }
        });
    }
    sequence.push_str(&send_keys_token(key)?);
    Ok(sequence)
}

fn send_keys_token(key: Key) -> Result<String> {
    let token = match key {
        Key::Tab => "{TAB}",
        Key::Enter => "{ENTER}",
        Key::Escape => "{ESC}",
        Key::Space => " ",
        Key::PageUp => "{PGUP}",
        Key::PageDown => "{PGDN}",
        Key::Home => "{HOME}",
        Key::End => "{END}",
        Key::Up => "{UP}",
        Key::Down => "{DOWN}",
        Key::Left => "{LEFT}",
        Key::Right => "{RIGHT}",
        Key::Backspace => "{BACKSPACE}",
        Key::Delete => "{DELETE}",
        Key::Insert => "{INSERT}",
        Key::F(n) if n <= 16 => return Ok(format!("{{F{}}}", n)),
        Key::Char(c) if "+^%~(){}[]".contains(c) => return Ok(format!("{{{}}}", c)),
        Key::Char(c) => return Ok(c.to_string()),
        Key::F(_) | Key::Modifier(_) => {
            return Err(Error::UnsupportedKey {
                key: format!("{:?}", key).to_lowercase(),
                backend: TOOL,
            });
        }
    };
    Ok(token.to_string())
}
