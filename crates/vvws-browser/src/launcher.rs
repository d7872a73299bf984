use crate::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Starts the browser process.
pub trait Launch {
    /// Spawn `executable` and return its process id without waiting on it
    fn launch(&self, executable: &Path) -> Result<u32>;
}

/// Spawns Vivaldi detached from this process
#[derive(Debug, Default)]
pub struct VivaldiLauncher;

impl VivaldiLauncher {
    pub fn new() -> Self {
        Self
    }

    fn build_command(&self, executable: &Path) -> Command {
        let mut command = Command::new(executable);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Launch for VivaldiLauncher {
    fn launch(&self, executable: &Path) -> Result<u32> {
        let child = self
            .build_command(executable)
            .spawn()
            .map_err(|e| Error::Launch(format!("{}: {}", executable.display(), e)))?;

        // Not waited on; Vivaldi outlives this process.
        let pid = child.id();
        tracing::info!("Vivaldi process started (pid {})", pid);
        Ok(pid)
    }
}
