//! Everything that touches Vivaldi itself: finding and launching it, reading
//! its profile, and driving its window.

pub mod automator;
pub mod desktop;
mod error;
mod launcher;
mod prefs;
mod profile;
mod vivaldi_finder;

pub use automator::{Automator, LaunchReport, Timing};
pub use desktop::Desktop;
pub use error::{Error, Result};
pub use launcher::{Launch, VivaldiLauncher};
pub use prefs::{PREFERENCES_FILE, get_workspaces_from_prefs, parse_workspace_names};
pub use profile::find_profile_path;
pub use vivaldi_finder::VivaldiFinder;
