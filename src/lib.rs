pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{GoogleLinkExporter, IcsExporter, JsonExporter, TextExporter};
pub use config::{CliConfig, ExportFormat, ServiceCatalog};
pub use core::{Period, RotationConfig, Service, TransitionInstructions};
pub use domain::ports::{Exporter, ServiceLookup};
pub use utils::error::{Result, RotationError};
