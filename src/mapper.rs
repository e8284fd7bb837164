//! Container record → compose service mapping.
//!
//! [`map_container`] is the whole decision logic and is a pure function: the same
//! container, image and [`NameIndex`] always give the same [`ServiceEntry`].
//! [`RecordMapper`] adds the image lookup on top of it.
//!
//! Reconciliation against the image only happens when the image could be
//! inspected. Without an image record the container's command and environment are
//! emitted as they are, and the raw image reference (usually a digest) is kept.

use serde::{Deserialize, Serialize};

use crate::engines::Engine;
use crate::notifier::Notifier;
use crate::records::{ContainerRecord, ImageRecord, Mount, PortBinding};
use crate::resolver::{canonical_name, NameIndex};

/// Tag the engine reports for dangling images
const UNTAGGED: &str = "<none>:<none>";

/// One service of the generated compose file. Empty fields are left out of the
/// serialized document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub restart: String,
}

/// Which repository tag names the image when it has several
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSelection {
    /// First tag in engine order
    #[default]
    First,
    /// Lexicographically smallest tag, stable across runs
    Sorted,
}

/// Picks the image name for the service, falling back to the raw reference
pub fn resolve_image(raw: &str, image: Option<&ImageRecord>, selection: TagSelection) -> String {
    let mut tags = image
        .map(|image| image.tags())
        .unwrap_or_default()
        .iter()
        .filter(|tag| tag.as_str() != UNTAGGED);

    let tag = match selection {
        TagSelection::First => tags.next(),
        TagSelection::Sorted => tags.min(),
    };

    tag.cloned().unwrap_or_else(|| raw.to_string())
}

/// The container command, or nothing when the image default already implies it
pub fn reconcile_command(container: &ContainerRecord, image: Option<&ImageRecord>) -> Vec<String> {
    match image {
        Some(image) if image.command() == container.command() => Vec::new(),
        _ => container.command().to_vec(),
    }
}

/// Environment entries the container adds on top of its image, in container order
pub fn reconcile_environment(
    container: &ContainerRecord,
    image: Option<&ImageRecord>,
) -> Vec<String> {
    match image {
        Some(image) => container
            .env()
            .iter()
            .filter(|entry| !image.env().contains(*entry))
            .cloned()
            .collect(),
        None => container.env().to_vec(),
    }
}

pub fn format_volume(mount: &Mount) -> String {
    let suffix = if mount.rw { "" } else { ":r" };
    format!("{}:{}{}", mount.source, mount.destination, suffix)
}

/// `hostIP:hostPort:containerPort`, without the host IP when it is empty or the
/// wildcard address. `port_spec` is the engine key, e.g. `80/tcp`.
pub fn format_port(port_spec: &str, binding: &PortBinding) -> String {
    let container_port = port_spec.split('/').next().unwrap_or(port_spec);
    match binding.host_ip.as_str() {
        "" | "0.0.0.0" => format!("{}:{}", binding.host_port, container_port),
        host_ip => format!("{}:{}:{}", host_ip, binding.host_port, container_port),
    }
}

/// Turns an engine link (`/db:/web/database`) into `db:database`
pub fn normalize_link(link: &str) -> (String, String) {
    let (target, alias) = link.split_once(':').unwrap_or((link, link));
    let target = canonical_name(target);
    let alias = canonical_name(alias);
    (target.to_string(), format!("{}:{}", target, alias))
}

/// Splits links into those pointing at containers of this run and the rest
pub fn classify_links(links: &[String], index: &NameIndex) -> (Vec<String>, Vec<String>) {
    let mut internal = Vec::new();
    let mut external = Vec::new();

    for link in links {
        let (target, formatted) = normalize_link(link);
        if index.contains(&target) {
            internal.push(formatted);
        } else {
            external.push(formatted);
        }
    }

    (internal, external)
}

pub fn restart_policy(container: &ContainerRecord) -> String {
    match &container.host_config.restart_policy {
        Some(policy) if !policy.is_none() => policy.name.clone(),
        _ => String::new(),
    }
}

/// Maps one container into a service entry
pub fn map_container(
    container: &ContainerRecord,
    image: Option<&ImageRecord>,
    index: &NameIndex,
    selection: TagSelection,
) -> ServiceEntry {
    let (links, external_links) = classify_links(container.links(), index);

    ServiceEntry {
        image: resolve_image(&container.image, image, selection),
        volumes: container.mounts().iter().map(format_volume).collect(),
        ports: container
            .port_bindings()
            .flat_map(|(port, bindings)| bindings.iter().map(move |b| format_port(port, b)))
            .collect(),
        command: reconcile_command(container, image),
        links,
        external_links,
        environment: reconcile_environment(container, image),
        restart: restart_policy(container),
    }
}

/// Looks up each container's image on the engine before mapping it
pub struct RecordMapper<'a, E: Engine> {
    engine: &'a E,
    notifier: &'a Notifier,
    selection: TagSelection,
}

impl<'a, E: Engine> RecordMapper<'a, E> {
    pub fn new(engine: &'a E, notifier: &'a Notifier, selection: TagSelection) -> Self {
        Self {
            engine,
            notifier,
            selection,
        }
    }

    pub fn map(&self, container: &ContainerRecord, index: &NameIndex) -> ServiceEntry {
        let image = match self.engine.inspect_image(&container.image) {
            Ok(image) => Some(image),
            Err(e) => {
                self.notifier.warn(&format!(
                    "Failed to inspect image '{}' of container '{}', keeping its full environment: {:#}",
                    container.image,
                    canonical_name(&container.name),
                    e
                ));
                None
            }
        };

        let entry = map_container(container, image.as_ref(), index, self.selection);
        self.notifier.trace(&format!(
            "Mapped '{}': {:?}",
            canonical_name(&container.name),
            entry
        ));
        entry
    }
}
