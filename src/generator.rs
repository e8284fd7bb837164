//! End-to-end "running containers → compose document" pipeline.
//!
//! This module provides [`ComposeGenerator`], which:
//! - inspects every requested container through a concrete [`crate::engines::Engine`],
//! - builds the [`NameIndex`] from the containers that could be inspected,
//! - maps each of them into a [`crate::mapper::ServiceEntry`],
//! - and collects the entries into a [`ComposeDocument`].
//!
//! Containers that cannot be inspected are left out and listed in the
//! [`GenerationReport`]; they never fail the run.

use crate::compose::{ComposeDocument, DEFAULT_COMPOSE_VERSION};
use crate::engines::Engine;
use crate::mapper::{RecordMapper, TagSelection};
use crate::notifier::Notifier;
use crate::resolver::{canonical_name, ContainerResolver, NameIndex, Resolution};

/// Knobs that change the generated document
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Value of the top-level `version` field
    pub compose_version: String,
    pub tag_selection: TagSelection,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            compose_version: DEFAULT_COMPOSE_VERSION.to_string(),
            tag_selection: TagSelection::default(),
        }
    }
}

/// A container that was requested but could not be inspected
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedContainer {
    pub identifier: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct GenerationReport {
    pub document: ComposeDocument,
    pub skipped: Vec<SkippedContainer>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Turns a set of containers into a compose document for a concrete [`Engine`].
///
/// The generator holds no state between runs beyond the engine handle, the
/// notifier and its options; reuse it to generate several documents.
pub struct ComposeGenerator<E: Engine> {
    engine: E,
    notifier: Notifier,
    options: GeneratorOptions,
}

impl<E: Engine> ComposeGenerator<E> {
    pub fn new(engine: E, notifier: Notifier, options: GeneratorOptions) -> Self {
        Self {
            engine,
            notifier,
            options,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Inspects `identifiers` and maps them into a compose document.
    ///
    /// Containers are processed one at a time in the order given. Each one is
    /// stored under its display name, so naming the same container twice (by name
    /// and by id, say) yields a single service.
    ///
    /// Inspection failures never abort the run: a container that cannot be inspected
    /// ends up in [`GenerationReport::skipped`], and an image that cannot be
    /// inspected only disables reconciliation for that service.
    pub fn generate<S: AsRef<str>>(&self, identifiers: &[S]) -> GenerationReport {
        self.notifier.info(&format!(
            "Generating compose document for {} container(s) with {}",
            identifiers.len(),
            self.engine.name()
        ));

        let progress_bar = self
            .notifier
            .create_progress_bar(identifiers.len() as u64, "containers inspected");

        let resolver = ContainerResolver::new(&self.engine, &self.notifier);
        let resolutions = resolver.resolve_with_progress(identifiers, progress_bar.as_ref());
        let index = NameIndex::from_resolutions(&resolutions);
        self.notifier.debug(&format!(
            "{} of {} container(s) resolved",
            index.len(),
            identifiers.len()
        ));

        let mapper = RecordMapper::new(&self.engine, &self.notifier, self.options.tag_selection);
        let mut document = ComposeDocument::new(&self.options.compose_version);
        let mut skipped = Vec::new();

        for resolution in resolutions {
            match resolution {
                Resolution::Resolved(record) => {
                    let name = canonical_name(&record.name);
                    self.notifier.info(&format!("Mapping service '{}'...", name));
                    let entry = mapper.map(&record, &index);
                    if document.insert(name, entry).is_some() {
                        self.notifier
                            .debug(&format!("Service '{}' was requested more than once", name));
                    }
                }
                Resolution::Failed { identifier, reason } => {
                    skipped.push(SkippedContainer { identifier, reason });
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }
        self.notifier.finish();

        GenerationReport { document, skipped }
    }
}
