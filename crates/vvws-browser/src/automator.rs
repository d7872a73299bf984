//! Launch Vivaldi and switch it to a workspace.
//!
//! The steps run strictly in order and every external action is tried once:
//! look up the shortcut, find the executable, spawn it, wait, try to bring the
//! window forward, send the workspace shortcut and, only if that worked, send
//! the next-tab shortcut.

use crate::desktop::{self, Activation, Desktop, Window};
use crate::launcher::Launch;
use crate::{Error, Result, VivaldiFinder};
use std::thread;
use std::time::Duration;
use vvws_core::{LauncherConfig, Shortcut, ShortcutMap};

pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(2500);
pub const DEFAULT_SWITCH_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_RESTORE_DELAY: Duration = Duration::from_millis(100);

/// Fixed waits between automation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// After spawning Vivaldi, before touching its window
    pub launch_delay: Duration,
    /// Between the workspace shortcut and the next-tab shortcut
    pub switch_delay: Duration,
    /// After an activation attempt
    pub settle_delay: Duration,
    /// Between un-minimizing and activating a window
    pub restore_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            launch_delay: DEFAULT_LAUNCH_DELAY,
            switch_delay: DEFAULT_SWITCH_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
            restore_delay: DEFAULT_RESTORE_DELAY,
        }
    }
}

impl Timing {
    /// No waiting at all
    pub fn immediate() -> Self {
        Self {
            launch_delay: Duration::ZERO,
            switch_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            restore_delay: Duration::ZERO,
        }
    }

    /// Defaults overridden by the optional values of the config file
    pub fn from_config(config: &LauncherConfig) -> Self {
        let defaults = Self::default();
        Self {
            launch_delay: config
                .launch_delay_ms
                .map_or(defaults.launch_delay, Duration::from_millis),
            switch_delay: config
                .switch_delay_ms
                .map_or(defaults.switch_delay, Duration::from_millis),
            ..defaults
        }
    }
}

/// What happened once Vivaldi was running
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub workspace: String,
    pub activated: bool,
    pub switched: bool,
    pub next_tab: bool,
    /// Error message of the failed shortcut send, if any
    pub failure: Option<String>,
}

impl LaunchReport {
    pub fn succeeded(&self) -> bool {
        self.switched && self.next_tab
    }
}

pub struct Automator<'a> {
    finder: VivaldiFinder,
    launcher: &'a dyn Launch,
    desktop: &'a dyn Desktop,
    timing: Timing,
    next_tab: Shortcut,
}

impl<'a> Automator<'a> {
    pub fn new(
        finder: VivaldiFinder,
        launcher: &'a dyn Launch,
        desktop: &'a dyn Desktop,
        timing: Timing,
        next_tab: Shortcut,
    ) -> Self {
        Self {
            finder,
            launcher,
            desktop,
            timing,
            next_tab,
        }
    }

    /// Launch Vivaldi and switch to `workspace`.
    ///
    /// Returns an error if nothing could be sent (unknown workspace, no
    /// executable, spawn failure). Once Vivaldi is running the outcome is a
    /// [`LaunchReport`], successful or not.
    pub fn launch_workspace(&self, workspace: &str, shortcuts: &ShortcutMap) -> Result<LaunchReport> {
        let shortcut = shortcuts
            .get(workspace)
            .ok_or_else(|| vvws_core::Error::MissingMapping(workspace.to_string()))?;

        let executable = self.finder.find()?;
        tracing::info!("Found Vivaldi at {}", executable.display());

        self.launcher.launch(&executable)?;
        tracing::info!(
            "Waiting {:.1}s for Vivaldi to open a window...",
            self.timing.launch_delay.as_secs_f64()
        );
        pause(self.timing.launch_delay);

        let mut report = LaunchReport {
            workspace: workspace.to_string(),
            ..Default::default()
        };

        report.activated = match self.activate_window() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to activate Vivaldi window ({}). Shortcuts might go to the wrong place.",
                    e
                );
                false
            }
        };

        tracing::info!("Sending workspace shortcut {}", shortcut);
        if let Err(e) = desktop::send_shortcut(self.desktop, shortcut) {
            tracing::error!("Failed to send shortcut '{}': {}", shortcut, e);
            report.failure = Some(e.to_string());
            return Ok(report);
        }
        report.switched = true;

        pause(self.timing.switch_delay);

        tracing::info!("Sending next tab shortcut {}", self.next_tab);
        match desktop::send_shortcut(self.desktop, &self.next_tab) {
            Ok(()) => report.next_tab = true,
            Err(e) => {
                tracing::error!("Failed to send shortcut '{}': {}", self.next_tab, e);
                report.failure = Some(e.to_string());
            }
        }

        Ok(report)
    }

    /// Bring a Vivaldi window to the front, best effort
    fn activate_window(&self) -> Result<()> {
        let windows = self.desktop.windows()?;
        let window = pick_window(&windows).ok_or_else(|| Error::ExternalAction {
            action: "Finding Vivaldi window".to_string(),
            reason: "no window title contains 'Vivaldi'".to_string(),
        })?;
        tracing::debug!("Found potential Vivaldi window: '{}'", window.title);

        if window.minimized == Some(true) && self.desktop.supports(Activation::Restore) {
            self.desktop.activate(window, Activation::Restore)?;
            pause(self.timing.restore_delay);
        }

        let method = [Activation::Activate, Activation::Focus, Activation::Click]
            .into_iter()
            .find(|method| self.desktop.supports(*method))
            .ok_or_else(|| Error::ExternalAction {
                action: "Activating window".to_string(),
                reason: format!("{} offers no activation method", self.desktop.name()),
            })?;

        let result = self.desktop.activate(window, method);
        pause(self.timing.settle_delay);
        result
    }
}

/// First non-minimized window whose title mentions Vivaldi, else the first match
pub fn pick_window(windows: &[Window]) -> Option<&Window> {
    let mut matches = windows
        .iter()
        .filter(|w| w.title.to_lowercase().contains("vivaldi"));
    let first = matches.clone().next();
    matches.find(|w| w.minimized == Some(false)).or(first)
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
