use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Vivaldi executable not found. Checked: {0}. Use --vivaldi-path to specify location.")]
    ExecutableNotFound(String),

    #[error("Vivaldi profile directory not found at '{}'", .0.display())]
    ProfileNotFound(PathBuf),

    #[error("Preferences file not found at '{}'", .0.display())]
    PreferencesNotFound(PathBuf),

    #[error("Could not decode Preferences JSON: {0}. Is Vivaldi still writing it?")]
    InvalidPreferences(#[from] serde_json::Error),

    #[error("Failed to launch Vivaldi: {0}")]
    Launch(String),

    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: &'static str, reason: String },

    #[error("{action} failed: {reason}")]
    ExternalAction { action: String, reason: String },

    #[error("Key '{key}' is not supported by {backend}")]
    UnsupportedKey { key: String, backend: &'static str },

    #[error(transparent)]
    Core(#[from] vvws_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
