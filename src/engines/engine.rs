use anyhow::Result;

use crate::records::{ContainerRecord, ImageRecord};

/// Read-only view of a container engine
pub trait Engine {
    /// Returns the name of the engine for log messages
    fn name(&self) -> &str;

    /// Inspects a running (or stopped) container by id or name
    fn inspect_container(&self, id: &str) -> Result<ContainerRecord>;

    /// Inspects an image by id, digest or tag
    fn inspect_image(&self, reference: &str) -> Result<ImageRecord>;
}
