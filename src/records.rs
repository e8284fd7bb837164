//! Inspection records as returned by a Docker-compatible engine.
//!
//! These mirror the subset of `docker container inspect` / `docker image inspect`
//! output the mapper needs. The engine serializes absent lists as `null`, so every
//! list is an `Option` on the wire and exposed as a slice through accessors.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A running container, as described by the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "Id")]
    pub id: String,
    /// Display name, usually with a leading `/`
    #[serde(rename = "Name")]
    pub name: String,
    /// Raw image reference, typically a content digest (`sha256:...`)
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(default, rename = "Config")]
    pub config: ContainerConfig,
    #[serde(default, rename = "HostConfig")]
    pub host_config: HostConfig,
    #[serde(default, rename = "Mounts")]
    pub mounts: Option<Vec<Mount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    #[serde(default, rename = "Cmd")]
    pub cmd: Option<Vec<String>>,
    #[serde(default, rename = "Env")]
    pub env: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, rename = "Links")]
    pub links: Option<Vec<String>>,
    /// Keyed by `<port>/<proto>`. The engine writes these keys sorted, which a
    /// `BTreeMap` reproduces.
    #[serde(default, rename = "PortBindings")]
    pub port_bindings: Option<BTreeMap<String, Option<Vec<PortBinding>>>>,
    #[serde(default, rename = "RestartPolicy")]
    pub restart_policy: Option<RestartPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortBinding {
    #[serde(default, rename = "HostIp")]
    pub host_ip: String,
    #[serde(default, rename = "HostPort")]
    pub host_port: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestartPolicy {
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "MaximumRetryCount")]
    pub maximum_retry_count: i64,
}

impl RestartPolicy {
    /// True for the engine's "no restart" policy, spelled `no` by Docker and
    /// `none` by some front-ends. An empty name means the same thing.
    pub fn is_none(&self) -> bool {
        matches!(self.name.as_str(), "" | "no" | "none")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    #[serde(default, rename = "Source")]
    pub source: String,
    #[serde(default, rename = "Destination")]
    pub destination: String,
    #[serde(default, rename = "RW")]
    pub rw: bool,
}

/// The image a container was created from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "RepoTags")]
    pub repo_tags: Option<Vec<String>>,
    #[serde(default, rename = "Config")]
    pub config: ContainerConfig,
}

impl ContainerRecord {
    pub fn command(&self) -> &[String] {
        self.config.cmd.as_deref().unwrap_or_default()
    }

    pub fn env(&self) -> &[String] {
        self.config.env.as_deref().unwrap_or_default()
    }

    pub fn mounts(&self) -> &[Mount] {
        self.mounts.as_deref().unwrap_or_default()
    }

    pub fn links(&self) -> &[String] {
        self.host_config.links.as_deref().unwrap_or_default()
    }

    /// Port bindings as `(container port spec, host bindings)` in engine order
    pub fn port_bindings(&self) -> impl Iterator<Item = (&str, &[PortBinding])> {
        self.host_config
            .port_bindings
            .iter()
            .flatten()
            .map(|(port, bindings)| (port.as_str(), bindings.as_deref().unwrap_or_default()))
    }
}

impl ImageRecord {
    pub fn tags(&self) -> &[String] {
        self.repo_tags.as_deref().unwrap_or_default()
    }

    pub fn command(&self) -> &[String] {
        self.config.cmd.as_deref().unwrap_or_default()
    }

    pub fn env(&self) -> &[String] {
        self.config.env.as_deref().unwrap_or_default()
    }
}

/// Parses the JSON array printed by `<engine> container inspect <id>`
pub fn parse_container_inspect(json: &str) -> Result<ContainerRecord> {
    first_record(json).context("Failed to parse container inspection output")
}

/// Parses the JSON array printed by `<engine> image inspect <ref>`
pub fn parse_image_inspect(json: &str) -> Result<ImageRecord> {
    first_record(json).context("Failed to parse image inspection output")
}

fn first_record<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    let records: Vec<T> = serde_json::from_str(json)?;
    records
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("Engine returned an empty inspection result"))
}
