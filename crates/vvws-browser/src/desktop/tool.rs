use crate::{Error, Result};
use std::io::ErrorKind;
use std::process::{Command, Output};

/// Run a helper program and capture its output.
///
/// Only failing to start the program is an error here; the exit status is left
/// to the caller.
pub fn run(tool: &'static str, args: &[&str]) -> Result<Output> {
    tracing::debug!("Running {} {:?}", tool, args);

    Command::new(tool).args(args).output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::ToolUnavailable {
                tool,
                reason: "not found on PATH".to_string(),
            }
        } else {
            Error::ToolUnavailable {
                tool,
                reason: e.to_string(),
            }
        }
    })
}

/// Run a helper program and return its stdout, failing on a non-zero exit
pub fn run_checked(tool: &'static str, args: &[&str], action: &str) -> Result<String> {
    let output = run(tool, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            format!("{} exited with {}", tool, output.status)
        } else {
            stderr
        };
        return Err(Error::ExternalAction {
            action: action.to_string(),
            reason,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
