//! Common utilities for integration tests

use anyhow::{anyhow, Result};
use std::process::Command;

/// Small image used to start throwaway containers
#[allow(dead_code)]
pub const TEST_IMAGE: &str = "alpine:latest";

/// Container that definitely doesn't exist
#[allow(dead_code)]
pub const NONEXISTENT_CONTAINER: &str = "this-container-definitely-does-not-exist";

/// A detached container removed again on drop
#[allow(dead_code)]
pub struct ScratchContainer {
    binary: &'static str,
    pub name: String,
}

#[allow(dead_code)]
impl ScratchContainer {
    /// Runs `binary run -d --name <name> <extra args> alpine sleep 300`
    pub fn start(binary: &'static str, name: &str, extra_args: &[&str]) -> Result<Self> {
        let output = Command::new(binary)
            .args(["run", "-d", "--name", name])
            .args(extra_args)
            .args([TEST_IMAGE, "sleep", "300"])
            .output()?;

        if !output.status.success() {
            return Err(anyhow!(
                "Failed to start container {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            ));
        }

        Ok(Self {
            binary,
            name: name.to_string(),
        })
    }
}

impl Drop for ScratchContainer {
    fn drop(&mut self) {
        let _ = Command::new(self.binary)
            .args(["rm", "-f", &self.name])
            .output();
    }
}
