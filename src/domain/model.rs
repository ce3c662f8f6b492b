use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the service catalog. The id is the stable key; the name
/// is what users see in previews and calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Account page where the subscription can be cancelled. Only used by
    /// the export adapters, never by planning logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationConfig {
    /// How many services are active in each period.
    pub services_per_period: usize,
    /// Day of month each period nominally starts on (1-31). Clamped to
    /// the target month's last day when it does not exist.
    pub anchor_day: u32,
    /// Number of periods to generate.
    pub period_count: usize,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            services_per_period: 1,
            anchor_day: 25,
            period_count: 12,
        }
    }
}

/// One unit of the rotation schedule: a start date and the services
/// active until the next period begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Period {
    pub index: usize,
    pub start_date: NaiveDate,
    pub services: Vec<Service>,
}

impl Period {
    pub fn service_names(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Cancel / sign-up / keep recommendation for one period, derived by
/// diffing it against the previous period. Services are compared by id;
/// the entries carried here keep their display names for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionInstructions {
    pub to_cancel: Vec<Service>,
    pub to_sign_up: Vec<Service>,
    pub to_keep: Vec<Service>,
}

impl TransitionInstructions {
    pub fn is_empty(&self) -> bool {
        self.to_cancel.is_empty() && self.to_sign_up.is_empty() && self.to_keep.is_empty()
    }
}
