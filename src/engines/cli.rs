use anyhow::{Context, Result};

use super::{ensure_reachable, run_command, Engine};
use crate::records::{self, ContainerRecord, ImageRecord};

/// An engine driven through a Docker-compatible CLI (`docker`, `nerdctl`, `podman`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliEngine {
    binary: &'static str,
}

impl CliEngine {
    /// Fails unless `binary` is installed and can reach its daemon
    pub fn connect(binary: &'static str) -> Result<Self> {
        ensure_reachable(binary)?;
        Ok(Self { binary })
    }

    pub fn docker() -> Result<Self> {
        Self::connect("docker")
    }

    pub fn nerdctl() -> Result<Self> {
        Self::connect("nerdctl")
    }

    pub fn podman() -> Result<Self> {
        Self::connect("podman")
    }
}

impl Engine for CliEngine {
    fn name(&self) -> &str {
        self.binary
    }

    fn inspect_container(&self, id: &str) -> Result<ContainerRecord> {
        let output = run_command(self.binary, &["container", "inspect", id])
            .with_context(|| format!("Failed to inspect container '{}'", id))?;
        records::parse_container_inspect(&output)
    }

    fn inspect_image(&self, reference: &str) -> Result<ImageRecord> {
        let output = run_command(self.binary, &["image", "inspect", reference])
            .with_context(|| format!("Failed to inspect image '{}'", reference))?;
        records::parse_image_inspect(&output)
    }
}
