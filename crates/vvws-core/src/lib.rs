pub mod config;
pub mod error;
pub mod platform;
pub mod shortcut;

pub use config::{LauncherConfig, ShortcutMap};
pub use error::{Error, Result};
pub use platform::{ExecutableSource, OsFamily, PlatformProfile};
pub use shortcut::Shortcut;
