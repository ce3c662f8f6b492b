use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::model::RotationConfig;
use crate::utils::validation::{
    validate_distinct_ids, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use crate::utils::error::{Result, RotationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain-text schedule on stdout
    Text,
    /// Google Calendar deep-link URL on stdout
    Google,
    /// iCalendar file (Apple Calendar / Outlook import)
    Ics,
    /// Plan and instructions as JSON on stdout
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stream-rotation")]
#[command(about = "Plan a monthly streaming-service rotation and export it as calendar events")]
pub struct CliConfig {
    /// Service ids to rotate through, in rotation order
    #[arg(long, value_delimiter = ',')]
    pub services: Vec<String>,

    /// How many services to keep active each month
    #[arg(long, default_value = "1")]
    pub services_per_month: usize,

    /// Day of month the rotation switches on (1-31)
    #[arg(long, default_value = "25")]
    pub rotation_day: u32,

    /// Number of months to plan
    #[arg(long, default_value = "12")]
    pub months: usize,

    /// Override the reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Export format
    #[arg(long, value_enum, default_value = "text")]
    pub export: ExportFormat,

    /// Output file for the ics export
    #[arg(long, default_value = "streaming-rotation.ics")]
    pub output: String,

    /// TOML file replacing the built-in service catalog
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print the service catalog and exit
    #[arg(long)]
    pub list_services: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig {
            services_per_period: self.services_per_month,
            anchor_day: self.rotation_day,
            period_count: self.months,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.services.len() < 2 {
            return Err(RotationError::InvalidSelection {
                count: self.services.len(),
            });
        }
        validate_distinct_ids("services", &self.services)?;
        validate_positive_number("services-per-month", self.services_per_month, 1)?;
        validate_range("rotation-day", self.rotation_day, 1, 31)?;
        validate_positive_number("months", self.months, 1)?;
        validate_non_empty_string("output", &self.output)?;
        Ok(())
    }
}
