//! Per-OS knowledge: where the config lives, where Vivaldi keeps its profile
//! and where its executable is usually installed.
//!
//! Everything OS-specific is resolved from a [`PlatformProfile`] snapshot taken
//! once at startup, so the rest of the code never branches on the OS itself.

use std::env;
use std::path::PathBuf;

/// Directory name used under the per-user config location.
pub const APP_DIR_NAME: &str = "vivaldi-workspace-cli";

/// File name of the shortcut map inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Name of the profile directory Vivaldi creates for the first profile.
pub const DEFAULT_PROFILE_DIR: &str = "Default";

/// Desktop operating system family.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OsFamily {
    Windows,
    MacOs,
    /// Linux and any other Unix with an XDG-style layout
    #[default]
    Other,
}

impl OsFamily {
    /// The family this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else {
            OsFamily::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Other => "Linux",
        }
    }
}

/// A place where the Vivaldi executable might be found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutableSource {
    /// A fixed install location
    Known(PathBuf),
    /// A program name resolved through `PATH`
    OnPath(&'static str),
}

/// Snapshot of the environment values the path heuristics depend on.
#[derive(Clone, Debug, Default)]
pub struct PlatformProfile {
    pub family: OsFamily,
    pub home: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
    pub local_app_data: Option<PathBuf>,
    pub program_files: Option<PathBuf>,
    pub program_files_x86: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
}

impl PlatformProfile {
    /// Capture the current process environment
    pub fn detect() -> Self {
        let profile = Self {
            family: OsFamily::current(),
            home: dirs::home_dir(),
            app_data: env_path("APPDATA").or_else(dirs::config_dir),
            local_app_data: env_path("LOCALAPPDATA").or_else(dirs::data_local_dir),
            program_files: env_path("ProgramFiles"),
            program_files_x86: env_path("ProgramFiles(x86)"),
            xdg_config_home: env_path("XDG_CONFIG_HOME"),
        };
        tracing::debug!(
            "Detected platform {} (home: {:?})",
            profile.family.as_str(),
            profile.home
        );
        profile
    }

    fn home(&self) -> PathBuf {
        self.home.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Per-user directory holding this tool's config file
    pub fn config_dir(&self) -> PathBuf {
        let base = match self.family {
            OsFamily::Windows => self.app_data.clone().unwrap_or_else(|| self.home()),
            OsFamily::MacOs => self.home().join("Library").join("Application Support"),
            OsFamily::Other => self
                .xdg_config_home
                .clone()
                .unwrap_or_else(|| self.home().join(".config")),
        };
        base.join(APP_DIR_NAME)
    }

    /// Default location of the config file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE_NAME)
    }

    /// Directory containing Vivaldi's profiles
    pub fn profile_base(&self) -> PathBuf {
        match self.family {
            OsFamily::Windows => self
                .local_app_data
                .clone()
                .unwrap_or_else(|| self.home())
                .join("Vivaldi")
                .join("User Data"),
            OsFamily::MacOs => self
                .home()
                .join("Library")
                .join("Application Support")
                .join("Vivaldi"),
            OsFamily::Other => self.home().join(".config").join("vivaldi"),
        }
    }

    /// Candidate executable locations, in the order they should be tried
    pub fn executable_sources(&self) -> Vec<ExecutableSource> {
        match self.family {
            OsFamily::Windows => {
                let mut sources = vec![ExecutableSource::OnPath("vivaldi")];
                let install_roots = [
                    &self.local_app_data,
                    &self.program_files,
                    &self.program_files_x86,
                ];
                sources.extend(install_roots.into_iter().flatten().map(|root| {
                    ExecutableSource::Known(
                        root.join("Vivaldi").join("Application").join("vivaldi.exe"),
                    )
                }));
                sources
            }
            OsFamily::MacOs => {
                let bundle_exe = |apps: PathBuf| {
                    apps.join("Vivaldi.app")
                        .join("Contents")
                        .join("MacOS")
                        .join("Vivaldi")
                };
                let mut sources = vec![ExecutableSource::Known(bundle_exe(PathBuf::from(
                    "/Applications",
                )))];
                if let Some(home) = &self.home {
                    sources.push(ExecutableSource::Known(bundle_exe(home.join("Applications"))));
                }
                sources.push(ExecutableSource::OnPath("vivaldi"));
                sources
            }
            OsFamily::Other => vec![
                ExecutableSource::Known(PathBuf::from("/usr/bin/vivaldi-stable")),
                ExecutableSource::Known(PathBuf::from("/usr/bin/vivaldi")),
                ExecutableSource::Known(PathBuf::from("/snap/bin/vivaldi")),
                ExecutableSource::Known(PathBuf::from("/opt/vivaldi/vivaldi")),
                ExecutableSource::OnPath("vivaldi"),
                ExecutableSource::OnPath("vivaldi-stable"),
            ],
        }
    }

    /// Shortcut Vivaldi binds to "next tab" out of the box
    pub fn next_tab_shortcut(&self) -> &'static str {
        "ctrl+tab"
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
