pub mod catalog;
pub mod cli;

pub use catalog::ServiceCatalog;
pub use cli::{CliConfig, ExportFormat};
