use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file not found at '{}'", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config file '{}' contains invalid JSON: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file '{}' is invalid: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Config file already exists at '{}'", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid shortcut '{0}': {1}")]
    InvalidShortcut(String, String),

    #[error("Shortcut for workspace '{0}' not found in config file")]
    MissingMapping(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
