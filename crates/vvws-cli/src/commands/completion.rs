use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Write the completion script for `shell` to stdout
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    let mut stdout = io::stdout().lock();
    generate(shell, cmd, bin_name, &mut stdout);
    stdout.flush()?;
    Ok(())
}
