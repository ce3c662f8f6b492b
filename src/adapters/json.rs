use serde::Serialize;

use crate::domain::model::{Period, TransitionInstructions};
use crate::domain::ports::Exporter;
use crate::utils::error::Result;

/// Serializes the plan and its instructions as one JSON document, for
/// piping into other tools.
#[derive(Debug, Default)]
pub struct JsonExporter;

#[derive(Serialize)]
struct PlanDocument<'a> {
    periods: &'a [Period],
    instructions: &'a [TransitionInstructions],
}

impl Exporter for JsonExporter {
    fn export(
        &self,
        periods: &[Period],
        instructions: &[TransitionInstructions],
    ) -> Result<String> {
        let doc = PlanDocument {
            periods,
            instructions,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::ServiceCatalog;
    use crate::core::{planner, transitions};
    use crate::domain::model::RotationConfig;
    use chrono::NaiveDate;

    #[test]
    fn test_json_round_trip() {
        let catalog = ServiceCatalog::builtin();
        let config = RotationConfig {
            services_per_period: 1,
            anchor_day: 25,
            period_count: 2,
        };
        let selection = vec!["netflix".to_string(), "disney".to_string()];
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let periods = planner::plan(&selection, &catalog, &config, today).unwrap();
        let instructions = transitions::annotate(&periods).unwrap();

        let json = JsonExporter.export(&periods, &instructions).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["periods"].as_array().unwrap().len(), 2);
        assert_eq!(value["periods"][0]["start_date"], "2024-02-25");
        assert_eq!(value["instructions"][1]["to_cancel"][0]["name"], "Netflix");
    }
}
