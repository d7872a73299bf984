use anyhow::{Result, bail};
use console::style;
use std::path::Path;
use vvws_core::PlatformProfile;
use vvws_core::config::init_config;

use super::{read_prefs_names, resolve_profile};

/// Create a sample config, seeded with the workspaces Vivaldi knows about
pub fn init(
    config_path: &Path,
    force: bool,
    profile_dir: Option<&Path>,
    platform: &PlatformProfile,
) -> Result<()> {
    println!("Initializing configuration...");

    if config_path.exists() {
        if !force {
            bail!(
                "Config file already exists at '{}'. Use --force to overwrite.",
                config_path.display()
            );
        }
        tracing::warn!("Overwriting existing config file {}", config_path.display());
    }

    let workspace_names = resolve_profile(profile_dir, platform)
        .as_deref()
        .and_then(read_prefs_names)
        .unwrap_or_default();
    if workspace_names.is_empty() {
        println!("No workspaces found in Vivaldi Preferences; writing example entries.");
    } else {
        println!(
            "Found {} workspace(s) in Vivaldi Preferences: {}",
            workspace_names.len(),
            workspace_names.join(", ")
        );
    }

    init_config(config_path, &workspace_names, force)?;

    println!(
        "\n{} {}",
        style("Sample config file created:").green().bold(),
        config_path.display()
    );
    println!(
        "{} Edit it and replace the placeholder shortcuts with the ACTUAL shortcuts",
        style("IMPORTANT:").yellow().bold()
    );
    println!("(lowercase, '+'-separated) you assigned in Vivaldi settings!");

    Ok(())
}

/// Print the resolved config path
pub fn path(config_path: &Path) -> Result<()> {
    println!("Configuration file path: {}", config_path.display());
    Ok(())
}
