use chrono::NaiveDate;
use stream_rotation::core::{planner, transitions};
use stream_rotation::{
    Exporter, GoogleLinkExporter, IcsExporter, JsonExporter, Period, RotationConfig,
    ServiceCatalog, TextExporter, TransitionInstructions,
};
use tempfile::TempDir;
use url::Url;

fn sample_plan() -> (Vec<Period>, Vec<TransitionInstructions>) {
    let catalog = ServiceCatalog::builtin();
    let config = RotationConfig {
        services_per_period: 1,
        anchor_day: 25,
        period_count: 12,
    };
    let selection = vec![
        "netflix".to_string(),
        "disney".to_string(),
        "max".to_string(),
    ];
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let periods = planner::plan(&selection, &catalog, &config, today).unwrap();
    let instructions = transitions::annotate(&periods).unwrap();
    (periods, instructions)
}

#[test]
fn test_text_export_covers_every_period() {
    let (periods, instructions) = sample_plan();
    let text = TextExporter.export(&periods, &instructions).unwrap();

    assert!(text.contains("February 2024: Netflix"));
    assert!(text.contains("March 2024: Disney+"));
    assert!(text.contains("April 2024: Max"));
    assert!(text.contains("January 2025: Max"));
    assert!(text.contains("Sign up: Netflix"));
    assert!(text.contains("Cancel: Netflix"));
}

#[test]
fn test_google_link_parses_and_carries_rrule() {
    let (periods, instructions) = sample_plan();
    let link = GoogleLinkExporter::new(25)
        .export(&periods, &instructions)
        .unwrap();

    let url = Url::parse(&link).unwrap();
    assert_eq!(url.host_str(), Some("calendar.google.com"));

    let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs["dates"], "20240225T000000Z/20240226T000000Z");
    assert_eq!(pairs["recur"], "RRULE:FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=25");
    assert!(pairs["details"].contains("Monthly schedule:"));
    assert!(pairs["details"].contains("Netflix: https://www.netflix.com/youraccount"));
}

#[test]
fn test_ics_file_has_one_event_per_period() {
    let (periods, instructions) = sample_plan();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rotation.ics");

    let stamp = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    IcsExporter::new(stamp)
        .write_to_file(&path, &periods, &instructions)
        .unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert_eq!(body.matches("BEGIN:VEVENT").count(), 12);
    assert_eq!(body.matches("END:VEVENT").count(), 12);
    assert!(body.contains("PRODID:-//Streaming Rotation//Streaming Rotation//EN"));
    assert!(body.contains("DTSTAMP:20240115T093000Z"));
    // every event spans exactly one day
    assert!(body.contains("DTSTART:20240225T000000Z"));
    assert!(body.contains("DTEND:20240226T000000Z"));
}

#[test]
fn test_ics_is_deterministic_for_fixed_stamp() {
    let (periods, instructions) = sample_plan();
    let stamp = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let a = IcsExporter::new(stamp).export(&periods, &instructions).unwrap();
    let b = IcsExporter::new(stamp).export(&periods, &instructions).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_json_export_structure() {
    let (periods, instructions) = sample_plan();
    let json = JsonExporter.export(&periods, &instructions).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["periods"].as_array().unwrap().len(), 12);
    assert_eq!(value["instructions"].as_array().unwrap().len(), 12);
    assert_eq!(value["periods"][0]["services"][0]["id"], "netflix");
    assert_eq!(value["instructions"][0]["to_cancel"].as_array().unwrap().len(), 0);
}
