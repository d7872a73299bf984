use anyhow::{Result, bail};
use console::style;
use std::path::{Path, PathBuf};
use vvws_browser::{Automator, LaunchReport, Timing, VivaldiFinder, VivaldiLauncher, desktop};
use vvws_core::config::load_config;
use vvws_core::{PlatformProfile, Shortcut};

pub fn execute(
    workspace: &str,
    config_path: &Path,
    vivaldi_path: Option<PathBuf>,
    platform: &PlatformProfile,
) -> Result<()> {
    println!("Attempting to launch workspace: {}", workspace);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e @ vvws_core::Error::ConfigNotFound(_)) => {
            bail!("{}\nPlease run 'vvws config init' to create a sample.", e)
        }
        Err(e) => return Err(e.into()),
    };

    let next_tab = match config.next_tab_shortcut.clone() {
        Some(shortcut) => shortcut,
        None => Shortcut::parse(platform.next_tab_shortcut())?,
    };

    let desktop = desktop::native(platform.family);
    let launcher = VivaldiLauncher::new();
    let automator = Automator::new(
        VivaldiFinder::new(vivaldi_path, platform.clone()),
        &launcher,
        desktop.as_ref(),
        Timing::from_config(&config),
        next_tab,
    );

    let report = automator.launch_workspace(workspace, &config.shortcuts)?;

    println!("\n--- Process Summary ---");
    for (ok, line) in summary_lines(&report) {
        let tag = if ok {
            style("[OK]").green()
        } else {
            style("[FAIL]").red()
        };
        println!("{} {}", tag, line);
    }

    if !report.succeeded() {
        bail!("Switch may not have completed successfully");
    }

    println!("\nVivaldi should now be in the correct workspace and focused on a non-trigger tab.");
    Ok(())
}

/// Summary lines as (succeeded, text) pairs
pub fn summary_lines(report: &LaunchReport) -> Vec<(bool, String)> {
    let mut lines = Vec::new();

    if report.switched {
        lines.push((
            true,
            format!("Sent shortcut to switch to '{}'.", report.workspace),
        ));
    } else {
        lines.push((
            false,
            format!("Failed to send shortcut for '{}'.", report.workspace),
        ));
    }

    if report.next_tab {
        lines.push((true, "Sent 'Next Tab' shortcut.".to_string()));
    } else if report.switched {
        lines.push((false, "Failed to send 'Next Tab' shortcut.".to_string()));
    }

    if let Some(reason) = &report.failure {
        lines.push((false, reason.clone()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(switched: bool, next_tab: bool) -> LaunchReport {
        LaunchReport {
            workspace: "Work".to_string(),
            activated: true,
            switched,
            next_tab,
            failure: None,
        }
    }

    #[test]
    fn test_summary_for_success() {
        let lines = summary_lines(&report(true, true));

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(ok, _)| *ok));
    }

    #[test]
    fn test_summary_for_failed_switch_omits_next_tab_line() {
        let lines = summary_lines(&report(false, false));

        assert_eq!(lines, [(false, "Failed to send shortcut for 'Work'.".to_string())]);
    }

    #[test]
    fn test_summary_for_failed_next_tab() {
        let lines = summary_lines(&report(true, false));

        assert_eq!(lines[1], (false, "Failed to send 'Next Tab' shortcut.".to_string()));
    }
}
