use crate::domain::model::{Period, Service, TransitionInstructions};
use crate::domain::ports::Exporter;
use crate::utils::error::Result;

/// Renders the plan as the human-readable schedule the calendar exports
/// embed: one block per period, month heading first, then the transition
/// lines.
#[derive(Debug, Default)]
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export(
        &self,
        periods: &[Period],
        instructions: &[TransitionInstructions],
    ) -> Result<String> {
        Ok(schedule_text(periods, instructions, "\n"))
    }
}

pub fn schedule_text(
    periods: &[Period],
    instructions: &[TransitionInstructions],
    line_sep: &str,
) -> String {
    let blocks: Vec<String> = periods
        .iter()
        .zip(instructions)
        .map(|(period, instr)| {
            let mut lines = vec![format!(
                "{}: {}",
                period.start_date.format("%B %Y"),
                period.service_names().join(", ")
            )];
            lines.extend(instruction_lines(instr));
            lines.join(line_sep)
        })
        .collect();
    blocks.join(&format!("{line_sep}{line_sep}"))
}

pub fn instruction_lines(instructions: &TransitionInstructions) -> Vec<String> {
    let mut lines = Vec::new();
    if !instructions.to_cancel.is_empty() {
        lines.push(format!("Cancel: {}", join_names(&instructions.to_cancel)));
    }
    if !instructions.to_sign_up.is_empty() {
        lines.push(format!("Sign up: {}", join_names(&instructions.to_sign_up)));
    }
    if !instructions.to_keep.is_empty() {
        lines.push(format!("Keep: {}", join_names(&instructions.to_keep)));
    }
    lines
}

/// "Name: url" lines for every distinct service in the plan, in first
/// appearance order. Services without a known account page are skipped.
pub fn cancellation_links(periods: &[Period], line_sep: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut links = Vec::new();
    for service in periods.iter().flat_map(|p| &p.services) {
        if !seen.insert(service.id.as_str()) {
            continue;
        }
        if let Some(url) = &service.account_url {
            links.push(format!("{}: {}", service.name, url));
        }
    }
    links.join(line_sep)
}

fn join_names(services: &[Service]) -> String {
    services
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::ServiceCatalog;
    use crate::core::{planner, transitions};
    use crate::domain::model::RotationConfig;
    use chrono::NaiveDate;

    fn sample_plan() -> (Vec<Period>, Vec<TransitionInstructions>) {
        let catalog = ServiceCatalog::builtin();
        let config = RotationConfig {
            services_per_period: 1,
            anchor_day: 25,
            period_count: 3,
        };
        let selection = vec!["netflix".to_string(), "disney".to_string()];
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let periods = planner::plan(&selection, &catalog, &config, today).unwrap();
        let instructions = transitions::annotate(&periods).unwrap();
        (periods, instructions)
    }

    #[test]
    fn test_schedule_text_blocks() {
        let (periods, instructions) = sample_plan();
        let text = schedule_text(&periods, &instructions, "\n");

        assert!(text.starts_with("February 2024: Netflix\nSign up: Netflix"));
        assert!(text.contains("March 2024: Disney+\nCancel: Netflix\nSign up: Disney+"));
        // blocks are separated by a blank line
        assert!(text.contains("Sign up: Netflix\n\nMarch 2024"));
    }

    #[test]
    fn test_cancellation_links_dedup() {
        let (periods, _) = sample_plan();
        let links = cancellation_links(&periods, "\n");

        // netflix appears in periods 0 and 2 but is listed once
        assert_eq!(links.matches("Netflix:").count(), 1);
        assert!(links.contains("Disney+: https://www.disneyplus.com/account"));
    }
}
