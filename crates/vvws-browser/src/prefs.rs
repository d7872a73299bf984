//! Best-effort reader for workspace names declared in Vivaldi's `Preferences`.
//!
//! Vivaldi rewrites this file while running and it is not always strict JSON,
//! so stray control characters and trailing commas are cleaned up first.

use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

pub const PREFERENCES_FILE: &str = "Preferences";

lazy_static! {
    static ref TRAILING_COMMA: Regex = Regex::new(r",\s*([\}\]])").unwrap();
    // Control, format, private-use and unassigned code points, whitespace excepted
    static ref NON_PRINTABLE: Regex =
        Regex::new(r"[[\p{Cc}\p{Cf}\p{Co}\p{Cn}]&&[^\s]]").unwrap();
}

/// Read the workspace names from `<profile_dir>/Preferences`
pub fn get_workspaces_from_prefs(profile_dir: &Path) -> Result<Vec<String>> {
    let prefs_file = profile_dir.join(PREFERENCES_FILE);
    if profile_dir.as_os_str().is_empty() || !prefs_file.is_file() {
        return Err(Error::PreferencesNotFound(prefs_file));
    }

    tracing::debug!("Reading Preferences from {}", prefs_file.display());
    let bytes = std::fs::read(&prefs_file)?;
    let names = parse_workspace_names(&String::from_utf8_lossy(&bytes))?;

    tracing::debug!("Found {} workspace(s) in Preferences", names.len());
    Ok(names)
}

/// Extract `vivaldi.workspaces.list[*].name` from Preferences text
pub fn parse_workspace_names(content: &str) -> Result<Vec<String>> {
    let cleaned = NON_PRINTABLE.replace_all(content, "");
    let cleaned = TRAILING_COMMA.replace_all(&cleaned, "$1");

    let prefs: Value = serde_json::from_str(&cleaned)?;

    let list = match prefs.pointer("/vivaldi/workspaces/list") {
        Some(list) => list,
        None => return Ok(Vec::new()),
    };

    let Some(workspaces) = list.as_array() else {
        tracing::warn!("Workspace data in Preferences is not a list");
        return Ok(Vec::new());
    };

    Ok(workspaces
        .iter()
        .filter_map(|ws| ws.get("name").and_then(Value::as_str))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PREFS: &str = r#"{
        "vivaldi": {
            "workspaces": {
                "list": [
                    {"id": 1, "name": "Work"},
                    {"id": 2, "name": ""},
                    {"id": 3},
                    {"id": 4, "name": "Home"}
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_workspace_names_skips_empty_names() {
        assert_eq!(parse_workspace_names(PREFS).unwrap(), ["Work", "Home"]);
    }

    #[test]
    fn test_trailing_commas_are_tolerated() {
        let with_commas = r#"{"vivaldi": {"workspaces": {"list": [
            {"name": "Work",},
            {"name": "Home"},
        ],},}}"#;

        assert_eq!(
            parse_workspace_names(with_commas).unwrap(),
            parse_workspace_names(PREFS).unwrap()
        );
    }

    #[test]
    fn test_control_characters_are_stripped() {
        let noisy = "{\"vivaldi\": {\u{0}\"workspaces\": {\"list\": [{\"name\": \"Work\u{7}\"}]}}}";

        assert_eq!(parse_workspace_names(noisy).unwrap(), ["Work"]);
    }

    #[test]
    fn test_format_characters_are_stripped() {
        let with_bom = "\u{feff}{\"vivaldi\": {\"workspaces\": {\"list\": [{\"name\": \"Work\"}]}}}";
        assert_eq!(parse_workspace_names(with_bom).unwrap(), ["Work"]);

        let zero_width = "{\"vivaldi\":\u{200b} {\"workspaces\": {\"list\": [{\"name\": \"Wo\u{200b}rk\"}]}}}";
        assert_eq!(parse_workspace_names(zero_width).unwrap(), ["Work"]);
    }

    #[test]
    fn test_whitespace_survives_cleanup() {
        let content = "{\"vivaldi\":\r\n\t{\"workspaces\": {\"list\": [{\"name\": \"Deep\u{a0}Work\"}]}}}";
        assert_eq!(parse_workspace_names(content).unwrap(), ["Deep\u{a0}Work"]);
    }

    #[test]
    fn test_missing_path_yields_empty_list() {
        assert!(parse_workspace_names(r#"{"vivaldi": {}}"#).unwrap().is_empty());
        assert!(parse_workspace_names("{}").unwrap().is_empty());
    }

    #[test]
    fn test_non_list_yields_empty_list() {
        let content = r#"{"vivaldi": {"workspaces": {"list": {"name": "Work"}}}}"#;
        assert!(parse_workspace_names(content).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            parse_workspace_names("{\"vivaldi\": "),
            Err(Error::InvalidPreferences(_))
        ));
    }

    #[test]
    fn test_reads_preferences_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), PREFS).unwrap();

        let names = get_workspaces_from_prefs(dir.path()).unwrap();

        assert_eq!(names, ["Work", "Home"]);
    }

    #[test]
    fn test_missing_preferences_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            get_workspaces_from_prefs(dir.path()),
            Err(Error::PreferencesNotFound(_))
        ));
        assert!(get_workspaces_from_prefs(Path::new("")).is_err());
    }
}
