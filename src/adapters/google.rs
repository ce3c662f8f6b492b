use chrono::{Datelike, NaiveDate};
use url::Url;

use crate::adapters::text::{cancellation_links, schedule_text};
use crate::domain::model::{Period, TransitionInstructions};
use crate::domain::ports::Exporter;
use crate::utils::error::{Result, RotationError};

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const EVENT_TITLE: &str = "Streaming Rotation";

/// Builds the Google Calendar deep link: a single event on the first
/// period's start date, recurring monthly on the anchor day, with the
/// whole schedule embedded in the event description.
#[derive(Debug)]
pub struct GoogleLinkExporter {
    anchor_day: u32,
}

impl GoogleLinkExporter {
    pub fn new(anchor_day: u32) -> Self {
        Self { anchor_day }
    }
}

impl Exporter for GoogleLinkExporter {
    fn export(
        &self,
        periods: &[Period],
        instructions: &[TransitionInstructions],
    ) -> Result<String> {
        let first = periods.first().ok_or(RotationError::EmptyPlan)?;
        let start = first.start_date;
        let end = next_day(start)?;

        let description = format!(
            "Monthly schedule:\n{}\n\nCancellation links:\n{}\n\nRotate your streaming services to keep costs down.",
            schedule_text(periods, instructions, "\n"),
            cancellation_links(periods, "\n"),
        );

        let mut link = Url::parse(RENDER_URL)?;
        link.query_pairs_mut()
            .append_pair("action", "TEMPLATE")
            .append_pair("text", EVENT_TITLE)
            .append_pair(
                "dates",
                &format!("{}/{}", compact_utc(start), compact_utc(end)),
            )
            .append_pair("details", &description)
            .append_pair(
                "recur",
                &format!(
                    "RRULE:FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY={}",
                    self.anchor_day
                ),
            );

        Ok(link.into())
    }
}

/// 20240225T000000Z, midnight at the period boundary.
pub fn compact_utc(date: NaiveDate) -> String {
    format!("{}T000000Z", date.format("%Y%m%d"))
}

pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt().ok_or(RotationError::DateOutOfRange {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}
