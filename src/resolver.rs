//! Resolves the containers named on the command line.
//!
//! [`ContainerResolver::resolve`] inspects every requested identifier and returns one
//! [`Resolution`] per identifier, so a missing container never aborts the run.
//! [`NameIndex`] is built from the resolved containers only and is what the mapper
//! consults to tell internal links from external ones.

use indicatif::ProgressBar;
use std::collections::HashMap;

use crate::engines::Engine;
use crate::notifier::Notifier;
use crate::records::ContainerRecord;

/// Outcome of inspecting one requested identifier
#[derive(Debug)]
pub enum Resolution {
    Resolved(ContainerRecord),
    Failed { identifier: String, reason: String },
}

impl Resolution {
    pub fn record(&self) -> Option<&ContainerRecord> {
        match self {
            Resolution::Resolved(record) => Some(record),
            Resolution::Failed { .. } => None,
        }
    }
}

/// Strips any path-like prefix, keeping the trailing non-empty segment.
/// `/web` becomes `web`, `/web/database` becomes `database`.
pub fn canonical_name(raw: &str) -> &str {
    raw.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(raw)
}

/// Display name → container id, for the containers processed in this run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ContainerRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(canonical_name(&record.name), &record.id);
        }
        index
    }

    pub fn from_resolutions(resolutions: &[Resolution]) -> Self {
        Self::from_records(resolutions.iter().filter_map(Resolution::record))
    }

    pub fn insert(&mut self, name: &str, id: &str) {
        self.names.insert(name.to_string(), id.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub struct ContainerResolver<'a, E: Engine> {
    engine: &'a E,
    notifier: &'a Notifier,
}

impl<'a, E: Engine> ContainerResolver<'a, E> {
    pub fn new(engine: &'a E, notifier: &'a Notifier) -> Self {
        Self { engine, notifier }
    }

    /// Inspects every identifier in order. Failures are logged and recorded,
    /// never returned as an error.
    pub fn resolve<S: AsRef<str>>(&self, identifiers: &[S]) -> Vec<Resolution> {
        self.resolve_with_progress(identifiers, None)
    }

    /// Like [`ContainerResolver::resolve`], ticking `progress` once per identifier
    /// as soon as it has been inspected
    pub fn resolve_with_progress<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        progress: Option<&ProgressBar>,
    ) -> Vec<Resolution> {
        identifiers
            .iter()
            .map(|identifier| {
                let resolution = self.resolve_one(identifier.as_ref());
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                resolution
            })
            .collect()
    }

    fn resolve_one(&self, identifier: &str) -> Resolution {
        self.notifier.info(&format!(
            "Inspecting container '{}' with {}...",
            identifier,
            self.engine.name()
        ));

        match self.engine.inspect_container(identifier) {
            Ok(record) => {
                self.notifier.debug(&format!(
                    "Resolved '{}' to {} ({})",
                    identifier,
                    canonical_name(&record.name),
                    record.id
                ));
                Resolution::Resolved(record)
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                self.notifier.warn(&format!(
                    "Failed to inspect container '{}': {}",
                    identifier, reason
                ));
                Resolution::Failed {
                    identifier: identifier.to_string(),
                    reason,
                }
            }
        }
    }
}
