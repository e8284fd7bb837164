pub mod compose;
pub mod engines;
pub mod generator;
pub mod mapper;
pub mod notifier;
pub mod records;
pub mod resolver;

// Re-exports for easy access
pub use compose::ComposeDocument;
pub use engines::{CliEngine, Engine};
pub use generator::{ComposeGenerator, GenerationReport, GeneratorOptions};
pub use mapper::{map_container, RecordMapper, ServiceEntry, TagSelection};
pub use notifier::Notifier;
pub use records::{ContainerRecord, ImageRecord};
pub use resolver::{ContainerResolver, NameIndex, Resolution};
