//! The generated compose document and its YAML writer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::mapper::ServiceEntry;

pub const DEFAULT_COMPOSE_VERSION: &str = "3.6";
pub const DEFAULT_OUTPUT_FILE: &str = "docker-compose.yml";

/// Top-level compose file. Services are keyed by container display name and
/// serialized in name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeDocument {
    pub version: String,
    pub services: BTreeMap<String, ServiceEntry>,
}

impl Default for ComposeDocument {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSE_VERSION)
    }
}

impl ComposeDocument {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            services: BTreeMap::new(),
        }
    }

    /// Adds a service, replacing any previous one with the same name
    pub fn insert(&mut self, name: &str, entry: ServiceEntry) -> Option<ServiceEntry> {
        self.services.insert(name.to_string(), entry)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize compose document")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write compose file {}", path.display()))
    }
}
