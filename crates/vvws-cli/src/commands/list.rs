use crate::OutputFormat;
use anyhow::Result;
use console::style;
use serde::Serialize;
use std::path::{Path, PathBuf};
use vvws_core::PlatformProfile;
use vvws_core::config::load_config;

use super::{read_prefs_names, resolve_profile};

/// How a configured workspace compares with Vivaldi's own list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Ok,
    NameMismatch,
    PrefsUnchecked,
}

impl EntryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Ok => "[OK]",
            EntryStatus::NameMismatch => "[Name Mismatch?]",
            EntryStatus::PrefsUnchecked => "[Prefs unchecked]",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListedWorkspace {
    pub name: String,
    pub shortcut: String,
    pub status: EntryStatus,
}

/// Everything `list` reports
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceListing {
    pub config_path: PathBuf,
    pub profile_path: Option<PathBuf>,
    /// `None` when Preferences could not be read
    pub prefs_workspaces: Option<Vec<String>>,
    pub config_error: Option<String>,
    pub mapped: Vec<ListedWorkspace>,
}

/// Gather config and Preferences data; never fails
pub fn build_listing(
    config_path: &Path,
    profile_dir: Option<&Path>,
    platform: &PlatformProfile,
) -> WorkspaceListing {
    let profile_path = resolve_profile(profile_dir, platform);
    let prefs_workspaces = profile_path.as_deref().and_then(read_prefs_names);

    let (config_error, mapped) = match load_config(config_path) {
        Ok(config) => {
            let mapped = config
                .shortcuts
                .iter()
                .map(|(name, shortcut)| ListedWorkspace {
                    name: name.to_string(),
                    shortcut: shortcut.to_string(),
                    status: match &prefs_workspaces {
                        None => EntryStatus::PrefsUnchecked,
                        Some(names) if names.iter().any(|n| n == name) => EntryStatus::Ok,
                        Some(_) => EntryStatus::NameMismatch,
                    },
                })
                .collect();
            (None, mapped)
        }
        Err(e) => (Some(e.to_string()), Vec::new()),
    };

    WorkspaceListing {
        config_path: config_path.to_path_buf(),
        profile_path,
        prefs_workspaces,
        config_error,
        mapped,
    }
}

pub fn execute(
    config_path: &Path,
    profile_dir: Option<&Path>,
    format: OutputFormat,
    platform: &PlatformProfile,
) -> Result<()> {
    tracing::debug!("Listing workspaces as {}", format.as_str());
    let listing = build_listing(config_path, profile_dir, platform);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Pretty => print!("{}", format_pretty(&listing)),
    }

    Ok(())
}

fn format_pretty(listing: &WorkspaceListing) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{}\n",
        style("Workspaces found in Vivaldi Preferences:").bold()
    ));
    match (&listing.profile_path, &listing.prefs_workspaces) {
        (None, _) => output.push_str("  (Could not find profile path to check Preferences)\n"),
        (Some(_), None) => output.push_str("  (Error reading Preferences)\n"),
        (Some(_), Some(names)) if names.is_empty() => output.push_str("  (None found)\n"),
        (Some(_), Some(names)) => {
            for name in names {
                output.push_str(&format!("  - {}\n", name));
            }
        }
    }

    output.push_str(&format!(
        "\n{}\n",
        style("Workspaces mapped in config file:").bold()
    ));
    if let Some(error) = &listing.config_error {
        output.push_str(&format!("  (Error loading config file: {})\n", error));
    } else if listing.mapped.is_empty() {
        output.push_str(&format!(
            "  (None defined in '{}')\n",
            listing.config_path.display()
        ));
    } else {
        for entry in &listing.mapped {
            let label = match entry.status {
                EntryStatus::Ok => style(entry.status.label()).green(),
                EntryStatus::NameMismatch => style(entry.status.label()).yellow(),
                EntryStatus::PrefsUnchecked => style(entry.status.label()).dim(),
            };
            output.push_str(&format!(
                "  - '{}' -> Shortcut: '{}' {}\n",
                entry.name, entry.shortcut, label
            ));
        }
    }

    output.push_str(
        "\nNOTE: Ensure names in config match Preferences & shortcuts are set in Vivaldi.\n",
    );
    output
}
