use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;

pub const INVALID_DATE: &str = "Invalid Date";

pub fn display(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%B %-d, %Y").to_string()
}

pub fn format(date: &DateTime<Utc>, pattern: Option<&str>) -> String {
    match pattern {
        None => display(date),
        Some("YYYY") => date.with_timezone(&Local).format("%Y").to_string(),
        // The only calendar read taken in UTC, so it is stable across machines.
        Some("YYYY-MM-DD") => date.format("%Y-%m-%d").to_string(),
        Some(_) => date.with_timezone(&Local).format("%-m/%-d/%Y").to_string(),
    }
}

pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_timestamp_text(text),
        Value::Number(number) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive.and_time(NaiveTime::MIN)))
}
