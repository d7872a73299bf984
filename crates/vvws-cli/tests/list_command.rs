use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_vvws_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("vvws")
}

struct Fixture {
    _dir: tempfile::TempDir,
    config: PathBuf,
    profile: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();

    let config = dir.path().join("config.json");
    fs::write(
        &config,
        "// mapped workspaces\n{\"workspace_shortcuts\": {\"Work\": \"Ctrl+Alt+1\", \"Play\": \"ctrl+alt+2\", \"Broken\": \"\"}}\n",
    )
    .unwrap();

    let profile = dir.path().join("Default");
    fs::create_dir_all(&profile).unwrap();
    fs::write(
        profile.join("Preferences"),
        r#"{"vivaldi": {"workspaces": {"list": [{"name": "Work"}, {"name": "Reading"},]}}}"#,
    )
    .unwrap();

    Fixture {
        _dir: dir,
        config,
        profile,
    }
}

#[test]
fn test_list_command_help() {
    let mut cmd = Command::new(get_vvws_bin());
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "List workspaces found in Vivaldi Preferences",
        ))
        .stdout(predicate::str::contains("--profile-dir"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_list_cross_checks_config_with_preferences() {
    let f = fixture();

    let mut cmd = Command::new(get_vvws_bin());
    cmd.arg("list")
        .arg("--config")
        .arg(&f.config)
        .arg("--profile-dir")
        .arg(&f.profile);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- Reading"))
        .stdout(predicate::str::contains("'Work' -> Shortcut: 'ctrl+alt+1'"))
        .stdout(predicate::str::contains("[OK]"))
        .stdout(predicate::str::contains("[Name Mismatch?]"))
        .stdout(predicate::str::contains("Broken").not())
        .stderr(predicate::str::contains("Skipping workspace 'Broken'"));
}

#[test]
fn test_list_without_profile_marks_prefs_unchecked() {
    let f = fixture();

    let mut cmd = Command::new(get_vvws_bin());
    cmd.arg("list")
        .arg("--config")
        .arg(&f.config)
        .arg("--profile-dir")
        .arg("/nonexistent/vivaldi-profile");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not find profile path to check Preferences",
        ))
        .stdout(predicate::str::contains("[Prefs unchecked]"));
}

#[test]
fn test_list_succeeds_without_config() {
    let f = fixture();

    let mut cmd = Command::new(get_vvws_bin());
    cmd.arg("list")
        .arg("--config")
        .arg(f.profile.join("missing.json"))
        .arg("--profile-dir")
        .arg(&f.profile);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Error loading config file"));
}

#[test]
fn test_list_json_output() {
    let f = fixture();

    let mut cmd = Command::new(get_vvws_bin());
    cmd.arg("list")
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&f.config)
        .arg("--profile-dir")
        .arg(&f.profile);

    let output = cmd.assert().success().get_output().stdout.clone();
    let listing: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(listing["prefs_workspaces"], serde_json::json!(["Work", "Reading"]));
    assert_eq!(listing["mapped"][0]["name"], "Work");
    assert_eq!(listing["mapped"][0]["status"], "ok");
    assert_eq!(listing["mapped"][1]["status"], "name_mismatch");
    assert_eq!(listing["mapped"].as_array().unwrap().len(), 2);
}
