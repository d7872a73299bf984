//! The user-editable config file mapping workspace names to shortcuts.
//!
//! The file is JSON with one concession: any line whose first non-blank
//! characters are `//` is dropped before parsing, so users can annotate it.
//!
//! ```text
//! // my shortcuts
//! {
//!     "workspace_shortcuts": { "Work": "ctrl+alt+1" },
//!     "launch_delay_ms": 4000
//! }
//! ```

use crate::{Error, Result, Shortcut};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const SHORTCUTS_KEY: &str = "workspace_shortcuts";

/// Workspace names mapped to their shortcuts, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutMap {
    entries: Vec<(String, Shortcut)>,
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the shortcut for `name`
    pub fn insert(&mut self, name: impl Into<String>, shortcut: Shortcut) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = shortcut,
            None => self.entries.push((name, shortcut)),
        }
    }

    /// Look up a workspace by its exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&Shortcut> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, shortcut)| shortcut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Shortcut)> {
        self.entries
            .iter()
            .map(|(name, shortcut)| (name.as_str(), shortcut))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything read from the config file.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub shortcuts: ShortcutMap,
    pub launch_delay_ms: Option<u64>,
    pub switch_delay_ms: Option<u64>,
    pub next_tab_shortcut: Option<Shortcut>,
}

/// Load and validate the config file at `path`.
///
/// Entries with an unusable shortcut are skipped with a warning; the rest are
/// still returned.
pub fn load_config(path: &Path) -> Result<LauncherConfig> {
    tracing::debug!("Reading config file from: {}", path.display());

    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;

    tracing::debug!(
        "Loaded {} workspace shortcut(s) from {}",
        config.shortcuts.len(),
        path.display()
    );

    Ok(config)
}

/// Parse config text; `origin` is only used in messages
pub fn parse_config(content: &str, origin: &Path) -> Result<LauncherConfig> {
    let json = strip_comment_lines(content);
    let data: Value = serde_json::from_str(&json).map_err(|source| Error::InvalidJson {
        path: origin.to_path_buf(),
        source,
    })?;

    let raw_shortcuts = data
        .get(SHORTCUTS_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::InvalidFormat {
            path: origin.to_path_buf(),
            reason: format!("missing or invalid '{}' object", SHORTCUTS_KEY),
        })?;

    let shortcuts = collect_shortcuts(raw_shortcuts);

    Ok(LauncherConfig {
        shortcuts,
        launch_delay_ms: optional_millis(&data, "launch_delay_ms"),
        switch_delay_ms: optional_millis(&data, "switch_delay_ms"),
        next_tab_shortcut: optional_shortcut(&data, "next_tab_shortcut"),
    })
}

fn strip_comment_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_shortcuts(raw: &Map<String, Value>) -> ShortcutMap {
    let mut shortcuts = ShortcutMap::new();
    let mut skipped = 0;

    for (name, value) in raw {
        let parsed = match value.as_str() {
            Some(text) => Shortcut::parse(text),
            None => Err(Error::InvalidShortcut(
                value.to_string(),
                "expected a string".to_string(),
            )),
        };

        match parsed {
            Ok(shortcut) => shortcuts.insert(name.clone(), shortcut),
            Err(e) => {
                tracing::warn!("Skipping workspace '{}': {}", name, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "{} config entr{} skipped; please correct the config file",
            skipped,
            if skipped == 1 { "y was" } else { "ies were" }
        );
    }

    shortcuts
}

fn optional_millis(data: &Value, key: &str) -> Option<u64> {
    let value = data.get(key)?;
    let millis = value.as_u64();
    if millis.is_none() {
        tracing::warn!("Ignoring '{}': expected a non-negative integer, got {}", key, value);
    }
    millis
}

fn optional_shortcut(data: &Value, key: &str) -> Option<Shortcut> {
    let value = data.get(key)?;
    match value.as_str().map(Shortcut::parse) {
        Some(Ok(shortcut)) => Some(shortcut),
        Some(Err(e)) => {
            tracing::warn!("Ignoring '{}': {}", key, e);
            None
        }
        None => {
            tracing::warn!("Ignoring '{}': expected a string, got {}", key, value);
            None
        }
    }
}

/// Write a starter config to `path`.
///
/// Without `force` an existing file is left untouched and
/// [`Error::AlreadyExists`] is returned. `workspace_names` become entries with
/// placeholder shortcuts `ctrl+alt+1`, `ctrl+alt+2`, ... in the given order.
pub fn init_config(path: &Path, workspace_names: &[String], force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tracing::debug!("Creating config directory: {}", dir.display());
        fs::create_dir_all(dir)?;
    }

    fs::write(path, render_template(workspace_names))?;
    tracing::info!("Wrote sample config to {}", path.display());

    Ok(())
}

/// Render the starter config text
pub fn render_template(workspace_names: &[String]) -> String {
    let entries: Vec<(String, String)> = if workspace_names.is_empty() {
        vec![
            ("Example Workspace 1".to_string(), "ctrl+alt+1".to_string()),
            ("Example Workspace 2".to_string(), "ctrl+alt+2".to_string()),
        ]
    } else {
        workspace_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), format!("ctrl+alt+{}", i + 1)))
            .collect()
    };

    let lines: Vec<String> = entries
        .iter()
        .map(|(name, shortcut)| {
            format!(
                "        {}: {}",
                Value::String(name.clone()),
                Value::String(shortcut.clone())
            )
        })
        .collect();

    let mut out = String::new();
    out.push_str("// Map Vivaldi workspace names (case-sensitive) to keyboard shortcuts.\n");
    out.push_str("// Use '+' to separate keys, e.g. \"ctrl+alt+1\" or \"command+shift+k\".\n");
    out.push_str("// Key names are lowercase: ctrl, alt, shift, win, command, tab, pagedown, f1, a, 1 ...\n");
    out.push_str("// The shortcuts below are placeholders: replace them with the ones assigned in\n");
    out.push_str("// Vivaldi Settings > Keyboard > Window > Switch to Workspace.\n");
    out.push_str("{\n");
    out.push_str(&format!("    \"{}\": {{\n", SHORTCUTS_KEY));
    out.push_str(&lines.join(",\n"));
    out.push_str("\n    }\n}\n");
    out
}
