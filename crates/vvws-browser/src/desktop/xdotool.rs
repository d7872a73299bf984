use super::keys::{Key, Modifier, parse_keys};
use super::tool::{run, run_checked};
use super::{Activation, Desktop, Window};
use crate::{Error, Result};

const TOOL: &str = "xdotool";
const TITLE_PATTERN: &str = "[Vv]ivaldi";

/// X11 backend driven through the `xdotool` command
#[derive(Debug, Default)]
pub struct Xdotool;

impl Xdotool {
    /// Window ids matching the title pattern; xdotool exits 1 when none match
    fn search(&self, only_visible: bool) -> Result<Vec<String>> {
        let mut args = vec!["search"];
        if only_visible {
            args.push("--onlyvisible");
        }
        args.extend(["--name", TITLE_PATTERN]);

        let output = run(TOOL, &args)?;
        Ok(parse_window_ids(&String::from_utf8_lossy(&output.stdout)))
    }

    fn window_center(&self, id: &str) -> Result<(u32, u32)> {
        let out = run_checked(TOOL, &["getwindowgeometry", "--shell", id], "Reading window geometry")?;
        let field = |name: &str| {
            out.lines()
                .find_map(|line| line.strip_prefix(name)?.strip_prefix('='))
                .and_then(|value| value.trim().parse::<u32>().ok())
        };

        match (field("WIDTH"), field("HEIGHT")) {
            (Some(width), Some(height)) => Ok((width / 2, height / 2)),
            _ => Err(Error::ExternalAction {
                action: "Reading window geometry".to_string(),
                reason: format!("unexpected output: {}", out.trim()),
            }),
        }
    }

    fn send_combo(&self, keys: &[String]) -> Result<()> {
        let combo = key_combo(keys)?;
        run_checked(TOOL, &["key", "--clearmodifiers", &combo], "Sending shortcut")?;
        Ok(())
    }
}

impl Desktop for Xdotool {
    fn name(&self) -> &'static str {
        TOOL
    }

    fn windows(&self) -> Result<Vec<Window>> {
        let visible = self.search(true)?;
        let ids = self.search(false)?;

        Ok(collect_windows(ids, &visible, |id| {
            run_checked(TOOL, &["getwindowname", id], "Reading window title")
        }))
    }

    fn supports(&self, _activation: Activation) -> bool {
        true
    }

    fn activate(&self, window: &Window, activation: Activation) -> Result<()> {
        let id = window.id.as_str();
        match activation {
            Activation::Restore => {
                run_checked(TOOL, &["windowmap", id], "Restoring window")?;
            }
            Activation::Activate => {
                run_checked(TOOL, &["windowactivate", "--sync", id], "Activating window")?;
            }
            Activation::Focus => {
                run_checked(TOOL, &["windowfocus", "--sync", id], "Focusing window")?;
            }
            Activation::Click => {
                let (x, y) = self.window_center(id)?;
                let (x, y) = (x.to_string(), y.to_string());
                run_checked(
                    TOOL,
                    &["mousemove", "--window", id, &x, &y, "click", "1"],
                    "Clicking window",
                )?;
            }
        }
        Ok(())
    }

    fn press(&self, key: &str) -> Result<()> {
        self.send_combo(&[key.to_string()])
    }

    fn hotkey(&self, keys: &[String]) -> Result<()> {
        self.send_combo(keys)
    }
}

fn parse_window_ids(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pair each id with its title; ids missing from `visible` are minimized.
///
/// A window whose title cannot be read (it may have closed since the search)
/// is left out.
fn collect_windows<F>(ids: Vec<String>, visible: &[String], title_of: F) -> Vec<Window>
where
    F: Fn(&str) -> Result<String>,
{
    ids.into_iter()
        .filter_map(|id| match title_of(&id) {
            Ok(title) => {
                let minimized = Some(!visible.contains(&id));
                Some(Window {
                    id,
                    title: title.trim().to_string(),
                    minimized,
                })
            }
            Err(e) => {
                tracing::debug!("Skipping window {}: {}", id, e);
                None
            }
        })
        .collect()
}

/// `ctrl+alt+1` style argument for `xdotool key`
fn key_combo(keys: &[String]) -> Result<String> {
    Ok(parse_keys(keys, TOOL)?
        .into_iter()
        .map(keysym)
        .collect::<Result<Vec<_>>>()?
        .join("+"))
}

/// X keysym name for a key
fn keysym(key: Key) -> Result<String> {
    let name = match key {
        Key::Modifier(Modifier::Ctrl) => "ctrl",
        Key::Modifier(Modifier::Alt) => "alt",
        Key::Modifier(Modifier::Shift) => "shift",
        Key::Modifier(Modifier::Super) => "super",
        Key::Tab => "Tab",
        Key::Enter => "Return",
        Key::Escape => "Escape",
        Key::Space => "space",
        Key::PageUp => "Prior",
        Key::PageDown => "Next",
        Key::Home => "Home",
        Key::End => "End",
        Key::Up => "Up",
        Key::Down => "Down",
        Key::Left => "Left",
        Key::Right => "Right",
        Key::Backspace => "BackSpace",
        Key::Delete => "Delete",
        Key::Insert => "Insert",
        Key::F(n) => return Ok(format!("F{}", n)),
        Key::Char(c) if c.is_ascii_alphanumeric() => return Ok(c.to_string()),
        Key::Char(c) => punctuation_keysym(c).ok_or_else(|| Error::UnsupportedKey {
            key: c.to_string(),
            backend: TOOL,
        })?,
    };
    Ok(name.to_string())
}

fn punctuation_keysym(c: char) -> Option<&'static str> {
    let name = match c {
        '-' => "minus",
        '=' => "equal",
        ',' => "comma",
        '.' => "period",
        '/' => "slash",
        ';' => "semicolon",
        '\'' => "apostrophe",
        '[' => "bracketleft",
        ']' => "bracketright",
        '\\' => "backslash",
        '`' => "grave",
        _ => return None,
    };
    Some(name)
}
