use crate::domain::model::{Period, Service, TransitionInstructions};
use crate::utils::error::Result;

/// Read-only lookup from service id to catalog entry. The planner never
/// owns the catalog; the caller injects whatever implementation it has.
pub trait ServiceLookup {
    fn service(&self, id: &str) -> Option<Service>;

    /// All known entries, in a stable order.
    fn services(&self) -> Vec<Service>;
}

/// Turns a finished plan into one exportable artifact (a URL, a calendar
/// file body, a text rendering). Formatting concern only; implementations
/// must not re-plan.
pub trait Exporter {
    fn export(&self, periods: &[Period], instructions: &[TransitionInstructions])
        -> Result<String>;
}
