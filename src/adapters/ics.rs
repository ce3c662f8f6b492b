use std::path::Path;

use chrono::NaiveDateTime;

use crate::adapters::google::{compact_utc, next_day};
use crate::adapters::text::{cancellation_links, instruction_lines, schedule_text};
use crate::domain::model::{Period, TransitionInstructions};
use crate::domain::ports::Exporter;
use crate::utils::error::{Result, RotationError};

const PRODID: &str = "-//Streaming Rotation//Streaming Rotation//EN";
const EVENT_TITLE: &str = "Streaming Rotation";

/// Serializes the plan as an iCalendar file: one all-day VEVENT per
/// period, importable by Apple Calendar and Outlook.
///
/// `generated_at` becomes the DTSTAMP of every event; passing it in keeps
/// the output byte-identical across runs with the same inputs.
#[derive(Debug)]
pub struct IcsExporter {
    generated_at: NaiveDateTime,
}

impl IcsExporter {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    pub fn write_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        periods: &[Period],
        instructions: &[TransitionInstructions],
    ) -> Result<()> {
        let body = self.export(periods, instructions)?;
        std::fs::write(path, body)?;
        Ok(())
    }
}

impl Exporter for IcsExporter {
    fn export(
        &self,
        periods: &[Period],
        instructions: &[TransitionInstructions],
    ) -> Result<String> {
        if periods.is_empty() {
            return Err(RotationError::EmptyPlan);
        }

        let dtstamp = format!("{}Z", self.generated_at.format("%Y%m%dT%H%M%S"));
        let schedule = schedule_text(periods, instructions, "\n");
        let links = cancellation_links(periods, "\n");

        let mut ics = String::from("BEGIN:VCALENDAR\r\n");
        ics.push_str("VERSION:2.0\r\n");
        ics.push_str(&format!("PRODID:{}\r\n", PRODID));
        ics.push_str("CALSCALE:GREGORIAN\r\n");
        ics.push_str("METHOD:PUBLISH\r\n");

        for (period, instr) in periods.iter().zip(instructions) {
            let start = compact_utc(period.start_date);
            let end = compact_utc(next_day(period.start_date)?);
            let ids: Vec<&str> = period.services.iter().map(|s| s.id.as_str()).collect();
            let uid = format!("streaming-rotation-{}-{}@stream-rotation", ids.join("-"), start);

            let this_month = instruction_lines(instr).join("\n");
            let description = format!(
                "This month:\n{}\n\nMonthly schedule:\n{}\n\nCancellation links:\n{}",
                this_month, schedule, links
            );

            ics.push_str("BEGIN:VEVENT\r\n");
            ics.push_str(&format!("UID:{}\r\n", uid));
            ics.push_str(&format!("DTSTAMP:{}\r\n", dtstamp));
            ics.push_str(&format!("DTSTART:{}\r\n", start));
            ics.push_str(&format!("DTEND:{}\r\n", end));
            ics.push_str(&format!("SUMMARY:{}\r\n", escape_text(EVENT_TITLE)));
            ics.push_str(&format!("DESCRIPTION:{}\r\n", escape_text(&description)));
            ics.push_str("STATUS:CONFIRMED\r\n");
            ics.push_str("TRANSP:OPAQUE\r\n");
            ics.push_str("END:VEVENT\r\n");
        }

        ics.push_str("END:VCALENDAR\r\n");
        Ok(ics)
    }
}

/// RFC 5545 TEXT escaping: backslash, semicolon, comma, and literal
/// newlines.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
