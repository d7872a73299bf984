use crate::{Error, Result};
use std::path::{Path, PathBuf};
use vvws_core::{ExecutableSource, OsFamily, PlatformProfile};

/// Locates the Vivaldi binary on the system
pub struct VivaldiFinder {
    custom_path: Option<PathBuf>,
    platform: PlatformProfile,
}

impl VivaldiFinder {
    /// Create a new VivaldiFinder with optional custom path
    pub fn new(custom_path: Option<PathBuf>, platform: PlatformProfile) -> Self {
        Self {
            custom_path,
            platform,
        }
    }

    /// Find Vivaldi, checking the custom path first, then platform defaults
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return validate_executable(path)
                .map_err(|_| Error::ExecutableNotFound(path.display().to_string()));
        }

        let sources = self.platform.executable_sources();
        for source in &sources {
            if let Some(path) = self.resolve(source) {
                tracing::debug!("Found Vivaldi at {}", path.display());
                return Ok(path);
            }
        }

        Err(Error::ExecutableNotFound(
            sources
                .iter()
                .map(describe_source)
                .collect::<Vec<_>>()
                .join(", "),
        ))
    }

    fn resolve(&self, source: &ExecutableSource) -> Option<PathBuf> {
        match source {
            ExecutableSource::Known(path) => {
                tracing::debug!("Checking {}", path.display());
                validate_executable(path).ok()
            }
            ExecutableSource::OnPath(name) => {
                tracing::debug!("Looking up '{}' on PATH", name);
                let path = which::which(name).ok()?;
                if self.platform.family == OsFamily::Windows && !is_vivaldi_exe(&path) {
                    tracing::debug!("Ignoring {}: not vivaldi.exe", path.display());
                    return None;
                }
                validate_executable(&path).ok()
            }
        }
    }
}

fn describe_source(source: &ExecutableSource) -> String {
    match source {
        ExecutableSource::Known(path) => path.display().to_string(),
        ExecutableSource::OnPath(name) => format!("'{}' on PATH", name),
    }
}

fn is_vivaldi_exe(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("vivaldi.exe"))
}

/// Validate that a path exists and is executable
fn validate_executable(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::ExecutableNotFound(path.display().to_string()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = std::fs::metadata(path)?;
        if metadata.permissions().mode() & 0o111 == 0 {
            tracing::debug!("{} exists but is not executable", path.display());
            return Err(Error::ExecutableNotFound(path.display().to_string()));
        }
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_executable(path: &Path) {
        std::fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_vivaldi_finder_finds_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vivaldi");
        make_executable(&path);

        let finder = VivaldiFinder::new(Some(path.clone()), PlatformProfile::default());

        assert_eq!(finder.find().unwrap(), path);
    }

    #[test]
    fn test_vivaldi_finder_fails_when_custom_path_missing() {
        let finder = VivaldiFinder::new(
            Some(PathBuf::from("/nonexistent/vivaldi")),
            PlatformProfile::default(),
        );

        let err = finder.find().unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("/nonexistent/vivaldi"));
    }

    #[cfg(unix)]
    #[test]
    fn test_vivaldi_finder_rejects_non_executable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vivaldi");
        std::fs::write(&path, "not a program").unwrap();

        let finder = VivaldiFinder::new(Some(path), PlatformProfile::default());

        assert!(finder.find().is_err());
    }

    #[test]
    fn test_vivaldi_finder_uses_env_based_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("Vivaldi").join("Application");
        std::fs::create_dir_all(&app_dir).unwrap();
        let exe = app_dir.join("vivaldi.exe");
        make_executable(&exe);

        let platform = PlatformProfile {
            family: OsFamily::Windows,
            program_files_x86: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let finder = VivaldiFinder::new(None, platform);

        // PATH lookup comes first; it only wins if a real Vivaldi is installed
        if which::which("vivaldi").is_err() {
            assert_eq!(finder.find().unwrap(), exe);
        }
    }

    #[test]
    fn test_is_vivaldi_exe() {
        assert!(is_vivaldi_exe(Path::new("C:/Vivaldi/Application/Vivaldi.EXE")));
        assert!(!is_vivaldi_exe(Path::new("/usr/bin/vivaldi")));
    }
}
