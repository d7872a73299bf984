pub mod completion;
pub mod config;
pub mod launch;
pub mod list;
pub mod setup_info;

use std::path::{Path, PathBuf};
use vvws_core::PlatformProfile;

/// Resolve the Vivaldi profile directory, preferring an explicit override.
///
/// Returns `None` (after logging why) when no usable directory is found.
pub fn resolve_profile(profile_dir: Option<&Path>, platform: &PlatformProfile) -> Option<PathBuf> {
    match profile_dir {
        Some(dir) if dir.is_dir() => Some(dir.to_path_buf()),
        Some(dir) => {
            tracing::warn!("Profile directory '{}' does not exist", dir.display());
            None
        }
        None => match vvws_browser::find_profile_path(platform) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        },
    }
}

/// Workspace names declared in Preferences, or `None` if they could not be read
pub fn read_prefs_names(profile: &Path) -> Option<Vec<String>> {
    match vvws_browser::get_workspaces_from_prefs(profile) {
        Ok(names) => Some(names),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    }
}
