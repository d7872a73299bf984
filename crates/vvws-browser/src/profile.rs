use crate::{Error, Result};
use std::path::PathBuf;
use vvws_core::platform::DEFAULT_PROFILE_DIR;
use vvws_core::{OsFamily, PlatformProfile};

/// Find Vivaldi's default profile directory.
///
/// Returns `<base>/Default` when it exists. Outside Windows, a base directory
/// without a `Default` profile is returned as-is with a warning, since some
/// installs keep `Preferences` directly under it. Multi-profile setups are not
/// enumerated.
pub fn find_profile_path(platform: &PlatformProfile) -> Result<PathBuf> {
    let base = platform.profile_base();
    let path = base.join(DEFAULT_PROFILE_DIR);

    if path.is_dir() {
        tracing::debug!("Using Vivaldi profile at {}", path.display());
        return Ok(path);
    }

    if base.is_dir() && platform.family != OsFamily::Windows {
        tracing::warn!(
            "Default profile dir not found at '{}'. Using base: '{}'. Check profile name.",
            path.display(),
            base.display()
        );
        return Ok(base);
    }

    if base.is_dir() {
        Err(Error::ProfileNotFound(path))
    } else {
        Err(Error::ProfileNotFound(base))
    }
}
