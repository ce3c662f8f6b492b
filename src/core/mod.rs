pub mod planner;
pub mod transitions;

pub use crate::domain::model::{Period, RotationConfig, Service, TransitionInstructions};
pub use crate::domain::ports::{Exporter, ServiceLookup};
pub use crate::utils::error::Result;
