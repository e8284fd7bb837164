//! Container engines the tool can inspect.
//!
//! Every engine shells out to its CLI and parses the Docker-compatible JSON that
//! `container inspect` and `image inspect` print. A failing inspection is a plain
//! `Err` and callers decide whether it is fatal.

pub mod cli;
pub mod engine;

pub use cli::CliEngine;
pub use engine::Engine;

use anyhow::{anyhow, Context, Result};
use log::trace;
use std::process::Command;

/// Runs `binary args...` and returns its stdout
pub(crate) fn run_command(binary: &str, args: &[&str]) -> Result<String> {
    trace!("Running {} {:?}", binary, args);
    let output = Command::new(binary)
        .args(args)
        .output()
        .context(format!("Failed to execute {} command: {:?}", binary, args))?;

    if !output.status.success() {
        let error = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("{} command failed: {}", binary, error.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Fails unless `binary version` can talk to its daemon
pub(crate) fn ensure_reachable(binary: &str) -> Result<()> {
    run_command(binary, &["version"]).with_context(|| {
        format!(
            "Failed to reach the {} engine. Is {} installed and running?",
            binary, binary
        )
    })?;
    Ok(())
}
