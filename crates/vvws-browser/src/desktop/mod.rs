//! Window activation and keystroke injection.
//!
//! [`Desktop`] is the only way the rest of the crate touches the GUI. The
//! native backends shell out to the stock automation tool of each OS:
//! `xdotool` on Linux/X11, `osascript` on macOS and `powershell` on Windows.

mod keys;
mod osascript;
mod powershell;
mod tool;
mod xdotool;

pub use osascript::Osascript;
pub use powershell::PowerShell;
pub use xdotool::Xdotool;

use crate::Result;
use vvws_core::{OsFamily, Shortcut};

/// A top-level window reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Backend-specific handle (X11 window id, process id, ...)
    pub id: String,
    pub title: String,
    /// `None` when the backend cannot tell
    pub minimized: Option<bool>,
}

/// Ways a backend may be able to bring a window to the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Un-minimize the window
    Restore,
    Activate,
    Focus,
    /// Synthetic click inside the window
    Click,
}

/// GUI automation capability.
pub trait Desktop {
    /// Short backend name for messages
    fn name(&self) -> &'static str;

    /// Enumerate windows that might belong to Vivaldi
    fn windows(&self) -> Result<Vec<Window>>;

    fn supports(&self, activation: Activation) -> bool;

    fn activate(&self, window: &Window, activation: Activation) -> Result<()>;

    /// Press and release a single key
    fn press(&self, key: &str) -> Result<()>;

    /// Press `keys` in order, then release them in reverse
    fn hotkey(&self, keys: &[String]) -> Result<()>;
}

/// The backend for `family`
pub fn native(family: OsFamily) -> Box<dyn Desktop> {
    match family {
        OsFamily::Windows => Box::new(PowerShell),
        OsFamily::MacOs => Box::new(Osascript),
        OsFamily::Other => Box::new(Xdotool),
    }
}

/// Send a shortcut as a single key press or a chord
pub fn send_shortcut(desktop: &dyn Desktop, shortcut: &Shortcut) -> Result<()> {
    tracing::debug!("Sending shortcut via {}: {:?}", desktop.name(), shortcut.keys());
    match shortcut.keys() {
        [key] => desktop.press(key),
        keys => desktop.hotkey(keys),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Desktop for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn windows(&self) -> Result<Vec<Window>> {
            Ok(Vec::new())
        }

        fn supports(&self, _: Activation) -> bool {
            false
        }

        fn activate(&self, _: &Window, _: Activation) -> Result<()> {
            Ok(())
        }

        fn press(&self, key: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("press {}", key));
            Ok(())
        }

        fn hotkey(&self, keys: &[String]) -> Result<()> {
            self.calls.borrow_mut().push(format!("hotkey {}", keys.join(" ")));
            Ok(())
        }
    }

    #[test]
    fn test_single_key_uses_press() {
        let desktop = Recorder::default();
        send_shortcut(&desktop, &Shortcut::parse("F5").unwrap()).unwrap();

        assert_eq!(*desktop.calls.borrow(), ["press f5"]);
    }

    #[test]
    fn test_chord_uses_hotkey() {
        let desktop = Recorder::default();
        send_shortcut(&desktop, &Shortcut::parse("ctrl+alt+1").unwrap()).unwrap();

        assert_eq!(*desktop.calls.borrow(), ["hotkey ctrl alt 1"]);
    }

    #[test]
    fn test_native_backend_per_family() {
        assert_eq!(native(OsFamily::Other).name(), "xdotool");
        assert_eq!(native(OsFamily::MacOs).name(), "osascript");
        assert_eq!(native(OsFamily::Windows).name(), "powershell");
    }
}
